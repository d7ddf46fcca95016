use std::ops::{Add, Index, IndexMut};

use bit_set::BitSet;
use const_for::const_for;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;

use crate::cube::{cubie::*, layout::*, turn::*, *};

/// The orientation-invariant identities of the 20 cubies, in grid order.
pub type StateIdentity = [Identity; NUM_CUBIES];

// ===== Stickers =====

/// Shorthand to keep the sticker table readable
const fn at(
	layer: usize,
	row: usize,
	col: usize,
	face: Face,
	index: usize,
) -> (Position, Face, usize) {
	(Position::new(layer, row, col), face, index)
}

/// Which layout sticker ends up on which slot of which cubie.
/// Each entry is (position, slot, index into that face's line).
/// Centers are missing, they belong to the pivots.
#[rustfmt::skip]
const STICKERS: [(Position, Face, usize); 48] = {
	use Face::*;
	[
		// front layer
		at(0, 0, 0, Front, 0), at(0, 0, 0, Top, 6), at(0, 0, 0, Left, 2),
		at(0, 0, 1, Front, 1), at(0, 0, 1, Top, 7),
		at(0, 0, 2, Front, 2), at(0, 0, 2, Top, 8), at(0, 0, 2, Right, 0),
		at(0, 1, 0, Front, 3), at(0, 1, 0, Left, 5),
		at(0, 1, 2, Front, 5), at(0, 1, 2, Right, 3),
		at(0, 2, 0, Front, 6), at(0, 2, 0, Left, 8), at(0, 2, 0, Bottom, 0),
		at(0, 2, 1, Front, 7), at(0, 2, 1, Bottom, 1),
		at(0, 2, 2, Front, 8), at(0, 2, 2, Right, 6), at(0, 2, 2, Bottom, 2),
		// middle layer (edges only)
		at(1, 0, 0, Top, 3), at(1, 0, 0, Left, 1),
		at(1, 0, 2, Top, 5), at(1, 0, 2, Right, 1),
		at(1, 2, 0, Left, 7), at(1, 2, 0, Bottom, 3),
		at(1, 2, 2, Right, 7), at(1, 2, 2, Bottom, 5),
		// opposite layer, its face is read upside down
		at(2, 0, 0, Opposite, 6), at(2, 0, 0, Top, 0), at(2, 0, 0, Left, 0),
		at(2, 0, 1, Opposite, 7), at(2, 0, 1, Top, 1),
		at(2, 0, 2, Opposite, 8), at(2, 0, 2, Top, 2), at(2, 0, 2, Right, 2),
		at(2, 1, 0, Opposite, 3), at(2, 1, 0, Left, 3),
		at(2, 1, 2, Opposite, 5), at(2, 1, 2, Right, 5),
		at(2, 2, 0, Opposite, 0), at(2, 2, 0, Left, 6), at(2, 2, 0, Bottom, 6),
		at(2, 2, 1, Opposite, 1), at(2, 2, 1, Bottom, 7),
		at(2, 2, 2, Opposite, 2), at(2, 2, 2, Right, 8), at(2, 2, 2, Bottom, 8),
	]
};

// ===== Rings =====

const RING_LEN: usize = 8;

/// The 8 outer places of a 3x3 slice in cyclic order, as plane coordinates.
/// A quarter turn shifts the pieces 2 places along this ring.
const PLANE_RING: [(usize, usize); RING_LEN] = [
	(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0),
];

/// The ring of grid positions turned by the given move.
///
/// top/bottom: the plane is (layer, col) at a fixed row
/// left/right: the plane is (layer, row) at a fixed col
/// front/back: the plane is (row, col) at a fixed layer
const fn ring(mv: Move) -> [Position; RING_LEN] {
	let mut out = [Position::new(0, 0, 0); RING_LEN];
	let s = mv.slice();

	const_for!(i in 0..RING_LEN => {
		let (a, b) = PLANE_RING[i];
		out[i] = match mv.axis() {
			Axis::TopBottom => Position::new(a, s, b),
			Axis::LeftRight => Position::new(a, b, s),
			Axis::FrontBack => Position::new(s, a, b),
		};
	});

	out
}

const fn generate_rings() -> [[Position; RING_LEN]; NUM_MOVES] {
	let mut out = [[Position::new(0, 0, 0); RING_LEN]; NUM_MOVES];

	const_for!(i in 0..NUM_MOVES => {
		out[i] = ring(ALL_MOVES[i]);
	});

	out
}

/// The rings, indexed by move
const RINGS: [[Position; RING_LEN]; NUM_MOVES] = generate_rings();

// ===== Score =====

/// A distance estimate in moves, kept exactly in units of 1/16 move.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Score(u32);

impl Score {
	/// A quarter turn moves 8 cubies by 2 grid steps each,
	/// so the manhattan sum drops by at most 16 per move.
	pub const SCALE: u32 = 2 * 8;

	pub const ZERO: Score = Score(0);

	pub const fn from_moves(moves: usize) -> Self {
		Score(moves as u32 * Self::SCALE)
	}

	/// From a sum of manhattan distances
	pub const fn from_manhattan(sum: u32) -> Self {
		Score(sum)
	}

	/// The raw value in 1/16 moves
	pub const fn units(self) -> u32 {
		self.0
	}

	pub fn as_moves(self) -> f64 {
		self.0 as f64 / Self::SCALE as f64
	}
}

impl Add for Score {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Score(self.0 + rhs.0)
	}
}

impl std::fmt::Display for Score {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.as_moves())
	}
}

// ===== Grid =====

/// The 3x3x3 arrangement of pieces, indexed by Position.
/// It's Copy: a copy never shares a cubie with its source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid([[[Piece; CUBE_DIM]; CUBE_DIM]; CUBE_DIM]);

impl Index<Position> for Grid {
	type Output = Piece;

	fn index(&self, pos: Position) -> &Piece {
		&self.0[pos.layer][pos.row][pos.col]
	}
}

impl IndexMut<Position> for Grid {
	fn index_mut(&mut self, pos: Position) -> &mut Piece {
		&mut self.0[pos.layer][pos.row][pos.col]
	}
}

impl Grid {
	/// Build the grid from the sticker colors.
	/// sticker(face, index) is the color at the given index of the face's layout line.
	fn assemble<F>(sticker: F) -> Self
	where
		F: Fn(Face, usize) -> Option<Color>,
	{
		let mut labels = [[[[None; NUM_SIDES]; CUBE_DIM]; CUBE_DIM]; CUBE_DIM];
		for (pos, face, index) in STICKERS {
			labels[pos.layer][pos.row][pos.col][face as usize] = sticker(face, index);
		}

		let mut grid = Grid([[[Piece::Pivot(None); CUBE_DIM]; CUBE_DIM]; CUBE_DIM]);
		for pos in Position::iter() {
			grid[pos] = if pos.is_pivot() {
				Piece::Pivot(pos.pivot_face().map(Face::pivot_color))
			} else {
				Piece::Cubie(Cubie::new(labels[pos.layer][pos.row][pos.col]))
			};
		}

		grid
	}

	pub fn solved() -> Self {
		Self::assemble(|face, _| Some(face.pivot_color()))
	}

	/// All cubies with their positions, in grid order (pivots are skipped)
	pub fn cubies(&self) -> impl Iterator<Item = (Position, &Cubie)> + '_ {
		Position::iter().filter_map(move |pos| self[pos].cubie().map(|c| (pos, c)))
	}

	fn identity(&self) -> StateIdentity {
		let mut out = [Identity::default(); NUM_CUBIES];
		for (slot, (_, cubie)) in out.iter_mut().zip(self.cubies()) {
			*slot = cubie.identity();
		}
		out
	}

	/// Sum of the manhattan distances of every cubie to its place on a solved cube
	fn manhattan_sum(&self) -> u32 {
		self.cubies()
			.filter_map(|(pos, cubie)| {
				goal_position(cubie.identity()).map(|goal| goal.manhattan(pos))
			})
			.sum::<usize>() as u32
	}

	/// Turn one slice: shift the 8 ring pieces and reorient each of them.
	fn turn(&mut self, mv: Move) {
		let ring = &RINGS[mv as usize];
		let shift = mv.ring_shift();
		let twist = mv.twist();
		let before = *self;

		for (i, pos) in ring.iter().enumerate() {
			let mut piece = before[ring[(i + shift) % RING_LEN]];
			piece.twist(twist);
			self[*pos] = piece;
		}
	}

	/// Every cubie must exist on a solved cube, and exist only once.
	fn check(&self) -> Result<(), CubeError> {
		let mut seen = BitSet::with_capacity(NUM_IDENTITIES);

		for (position, cubie) in self.cubies() {
			let identity = cubie.identity();
			if goal_position(identity).is_none() {
				return Err(CubeError::Malformed { position, identity });
			}
			if !seen.insert(identity.bits() as usize) {
				return Err(CubeError::Duplicate { position, identity });
			}
		}

		Ok(())
	}
}

lazy_static! {
	/// Where each piece sits on a solved cube, indexed by identity bits
	static ref GOAL_POSITIONS: [Option<Position>; NUM_IDENTITIES] = {
		let mut out = [None; NUM_IDENTITIES];
		for (pos, cubie) in Grid::solved().cubies() {
			out[cubie.identity().bits() as usize] = Some(pos);
		}
		out
	};

	static ref SOLVED_IDENTITY: StateIdentity = Grid::solved().identity();
}

/// The position of the piece on a solved cube.
/// None if no such piece exists.
pub fn goal_position(identity: Identity) -> Option<Position> {
	GOAL_POSITIONS[identity.bits() as usize]
}

// ===== Cube State =====

/// A cube configuration as seen by the search.
///
/// Two states are equal (and hash the same) if every position holds a piece
/// with the same colors. The orientation of the pieces is not considered,
/// compare the grids for that.
#[derive(Clone, Debug)]
pub struct CubeState {
	grid: Grid,
	identity: StateIdentity,
	heuristic: Score,
	previous_move: Option<Move>,
}

impl PartialEq for CubeState {
	fn eq(&self, other: &Self) -> bool {
		self.identity == other.identity
	}
}

impl Eq for CubeState {}

impl std::hash::Hash for CubeState {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.identity.hash(state);
	}
}

impl Default for CubeState {
	/// Creates a *solved* cube!
	fn default() -> Self {
		Self::solved()
	}
}

impl CubeState {
	fn from_grid(grid: Grid) -> Self {
		Self {
			identity: grid.identity(),
			heuristic: Score::from_manhattan(grid.manhattan_sum()),
			grid,
			previous_move: None,
		}
	}

	pub fn solved() -> Self {
		Self::from_grid(Grid::solved())
	}

	/// Build the cube described by a layout.
	/// Fails if a symbol isn't a color, a center doesn't match the held orientation
	/// or the pieces can't form a cube.
	pub fn from_layout(layout: &Layout) -> Result<Self, CubeError> {
		let mut colors = [[None; CUBE_AREA]; NUM_SIDES];

		for face in Face::iter() {
			for (index, symbol) in layout.face(face).iter().copied().enumerate() {
				let color = Color::from_symbol(symbol)
					.ok_or(CubeError::UnknownColor { symbol, face, index })?;
				colors[face as usize][index] = Some(color);
			}

			let expected = face.pivot_color();
			match colors[face as usize][CENTER] {
				Some(found) if found != expected => {
					return Err(CubeError::WrongCenter { face, expected, found });
				}
				_ => {}
			}
		}

		let grid = Grid::assemble(|face, index| colors[face as usize][index]);
		grid.check()?;

		Ok(Self::from_grid(grid))
	}

	/// The layout describing this cube, the inverse of from_layout
	pub fn to_layout(&self) -> Layout {
		let mut layout = Layout::solved();

		for (pos, face, index) in STICKERS {
			let symbol = self.grid[pos]
				.cubie()
				.and_then(|c| c.face(face))
				.map_or('?', Color::symbol);
			layout.set_symbol(face, index, symbol);
		}

		layout
	}

	pub fn grid(&self) -> &Grid {
		&self.grid
	}

	pub fn identity(&self) -> &StateIdentity {
		&self.identity
	}

	/// The admissible distance estimate: the manhattan sum halved, then divided by 8
	pub fn heuristic(&self) -> Score {
		self.heuristic
	}

	/// The move which created this state, None if it wasn't created by a move
	pub fn previous_move(&self) -> Option<Move> {
		self.previous_move
	}

	pub fn is_solved(&self) -> bool {
		self.identity == *SOLVED_IDENTITY
	}

	/// Check that every piece exists on a solved cube exactly once
	pub fn check_solvability(&self) -> Result<(), CubeError> {
		self.grid.check()
	}

	/// The state after applying the move, this state is left untouched
	pub fn successor(&self, mv: Move) -> Self {
		let mut next = self.clone();
		next.apply_move(mv);
		next
	}

	/// All twelve successors, in the order of ALL_MOVES
	pub fn successors(&self) -> Vec<Self> {
		ALL_MOVES.iter().map(|mv| self.successor(*mv)).collect()
	}
}

impl RubiksCube for CubeState {
	fn apply_move(&mut self, mv: Move) {
		self.grid.turn(mv);
		self.identity = self.grid.identity();
		self.heuristic = Score::from_manhattan(self.grid.manhattan_sum());
		self.previous_move = Some(mv);
	}
}

impl TryFrom<&Layout> for CubeState {
	type Error = CubeError;

	fn try_from(layout: &Layout) -> Result<Self, Self::Error> {
		Self::from_layout(layout)
	}
}

impl From<&CubeState> for Layout {
	fn from(state: &CubeState) -> Self {
		state.to_layout()
	}
}

// ===== Tests =====

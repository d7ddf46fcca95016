pub mod cubie;
pub mod layout;
pub mod state;
pub mod turn;

use const_for::const_for;
use cubie::Identity;
use strum::EnumCount;
use turn::*;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of stickers per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = Face::COUNT;

/// The number of movable pieces: 8 corners and 12 edges
pub const NUM_CUBIES: usize = 20;

/// The six sticker colors.
/// The order is also the bit order of a cubie's identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum Color {
	Red,
	Green,
	Orange,
	Blue,
	Yellow,
	White,
}

impl Color {
	/// The single character used for this color in a layout.
	pub const fn symbol(self) -> char {
		match self {
			Color::Red => 'R',
			Color::Green => 'G',
			Color::Orange => 'O',
			Color::Blue => 'B',
			Color::Yellow => 'Y',
			Color::White => 'W',
		}
	}

	/// Parse a layout symbol. Returns None for anything but the six colors.
	pub const fn from_symbol(symbol: char) -> Option<Self> {
		let res = match symbol {
			'R' => Color::Red,
			'G' => Color::Green,
			'O' => Color::Orange,
			'B' => Color::Blue,
			'Y' => Color::Yellow,
			'W' => Color::White,
			_ => return None,
		};

		Some(res)
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

/// The six directional face slots of a cubie (and the six sides of the cube).
/// The order matches the order of the lines in a layout file.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
#[repr(usize)]
pub enum Face {
	Front,
	Top,
	Opposite,
	Bottom,
	Left,
	Right,
}

impl Face {
	/// The color of the pivot on this side.
	/// The cube is always held with red in front and green on top.
	pub const fn pivot_color(self) -> Color {
		match self {
			Face::Front => Color::Red,
			Face::Top => Color::Green,
			Face::Opposite => Color::Orange,
			Face::Bottom => Color::Blue,
			Face::Left => Color::Yellow,
			Face::Right => Color::White,
		}
	}
}

/// A place in the 3x3x3 grid.
///
/// layer: 0 is the front, 2 the opposite side
/// row: 0 is the top, 2 the bottom
/// col: 0 is the left, 2 the right
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
	pub layer: usize,
	pub row: usize,
	pub col: usize,
}

impl Position {
	pub const fn new(layer: usize, row: usize, col: usize) -> Self {
		Self { layer, row, col }
	}

	/// All 27 positions, layer by layer, row by row.
	pub fn iter() -> impl Iterator<Item = Position> {
		(0..CUBE_DIM).flat_map(|layer| {
			(0..CUBE_DIM).flat_map(move |row| {
				(0..CUBE_DIM).map(move |col| Position::new(layer, row, col))
			})
		})
	}

	/// Whether a pivot (face center or core) sits here.
	/// Those are the positions with at most one coordinate off the middle.
	pub const fn is_pivot(self) -> bool {
		let coords = [self.layer, self.row, self.col];
		let mut count = 0;
		const_for!(i in 0..3 => {
			if coords[i] == 1 {
				count += 1;
			}
		});
		count >= 2
	}

	/// The side whose center is at this position, None for the core and non-pivots.
	pub const fn pivot_face(self) -> Option<Face> {
		if !self.is_pivot() {
			return None;
		}

		match (self.layer, self.row, self.col) {
			(0, _, _) => Some(Face::Front),
			(2, _, _) => Some(Face::Opposite),
			(_, 0, _) => Some(Face::Top),
			(_, 2, _) => Some(Face::Bottom),
			(_, _, 0) => Some(Face::Left),
			(_, _, 2) => Some(Face::Right),
			_ => None,
		}
	}

	/// Manhattan distance in grid-index space.
	pub const fn manhattan(self, other: Position) -> usize {
		self.layer.abs_diff(other.layer)
			+ self.row.abs_diff(other.row)
			+ self.col.abs_diff(other.col)
	}
}

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "(layer {}, row {}, column {})", self.layer, self.row, self.col)
	}
}

/// All the ways a cube configuration can be impossible.
/// Reported before any search starts.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CubeError {
	#[error("Unknown color symbol '{symbol}' on the {face} face (sticker {index})")]
	UnknownColor { symbol: char, face: Face, index: usize },
	#[error("The piece at {position} has the colors \"{identity}\", which no piece of a cube has")]
	Malformed { position: Position, identity: Identity },
	#[error("The piece with the colors \"{identity}\" appears twice (again at {position})")]
	Duplicate { position: Position, identity: Identity },
	#[error("The {face} face has a {found} center, the cube must be held with {expected} there")]
	WrongCenter { face: Face, expected: Color, found: Color },
}

/// The RubiksCube trait.
pub trait RubiksCube {
	fn apply_move(&mut self, mv: Move);

	/// Apply the given sequence of moves.
	fn apply_moves<I>(&mut self, moves: I)
	where
		I: IntoIterator<Item = Move>,
	{
		for mv in moves {
			self.apply_move(mv);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	/// There are exactly seven pivots: six centers and the core
	fn pivot_positions() {
		let pivots: Vec<_> = Position::iter().filter(|p| p.is_pivot()).collect();
		assert_eq!(pivots.len(), 7);
		assert_eq!(Position::iter().count() - pivots.len(), NUM_CUBIES);

		let faces: Vec<_> = pivots.iter().filter_map(|p| p.pivot_face()).collect();
		assert_eq!(faces.len(), NUM_SIDES);
		for face in Face::iter() {
			assert!(faces.contains(&face), "No pivot for the {} face", face);
		}
		assert_eq!(Position::new(1, 1, 1).pivot_face(), None);
	}

	#[test]
	/// Every color survives the trip through its symbol
	fn color_symbols() {
		for color in Color::iter() {
			assert_eq!(Color::from_symbol(color.symbol()), Some(color));
		}
		assert_eq!(Color::from_symbol('X'), None);
		assert_eq!(Color::from_symbol('r'), None);
	}

	#[test]
	fn manhattan_distance() {
		let a = Position::new(0, 0, 0);
		let b = Position::new(2, 1, 2);
		assert_eq!(a.manhattan(b), 5);
		assert_eq!(b.manhattan(a), 5);
		assert_eq!(a.manhattan(a), 0);
	}
}

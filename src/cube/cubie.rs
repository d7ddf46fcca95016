use strum::{EnumCount, IntoEnumIterator};

use crate::cube::*;

/// The colors on a piece, regardless of which slot holds which color.
/// Bit i is set if the i-th color (see Color) is on the piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug)]
pub struct Identity(u8);

/// Number of distinct identities a 6 bit set can take.
pub const NUM_IDENTITIES: usize = 1 << Color::COUNT;

impl Identity {
	pub fn from_colors<I>(colors: I) -> Self
	where
		I: IntoIterator<Item = Color>,
	{
		Self(colors.into_iter().fold(0, |m, c| m | 1 << c as u8))
	}

	pub const fn bits(self) -> u8 {
		self.0
	}

	/// Number of distinct colors
	pub const fn len(self) -> u32 {
		self.0.count_ones()
	}

	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub const fn contains(self, color: Color) -> bool {
		self.0 & (1 << color as u8) != 0
	}

	pub fn colors(self) -> impl Iterator<Item = Color> {
		Color::iter().filter(move |c| self.contains(*c))
	}
}

impl std::fmt::Display for Identity {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for color in self.colors() {
			write!(f, "{}", color)?;
		}
		Ok(())
	}
}

/// A reorientation of a single cubie: a quarter rotation around one of the three axes.
///
/// The name tells where the label of the first slot goes.
/// Each one moves the labels of 4 slots in a cycle, the 2 slots on the axis stay.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
pub enum Twist {
	/// Clockwise around the top-bottom axis (seen from the top)
	RightToFront,
	FrontToRight,
	/// Upwards around the left-right axis
	FrontToTop,
	TopToFront,
	/// Clockwise around the front-back axis (seen from the front)
	LeftToTop,
	TopToLeft,
}

impl Twist {
	/// The slot cycle [a, b, c, d]: the label on a moves to b, b to c, c to d and d to a.
	#[rustfmt::skip]
	pub const fn cycle(self) -> [Face; 4] {
		use Face::*;
		match self {
			Twist::RightToFront => [Right, Front, Left, Opposite],
			Twist::FrontToRight => [Opposite, Left, Front, Right],
			Twist::FrontToTop   => [Front, Top, Opposite, Bottom],
			Twist::TopToFront   => [Bottom, Opposite, Top, Front],
			Twist::LeftToTop    => [Left, Top, Right, Bottom],
			Twist::TopToLeft    => [Bottom, Right, Top, Left],
		}
	}

	pub const fn inverse(self) -> Self {
		match self {
			Twist::RightToFront => Twist::FrontToRight,
			Twist::FrontToRight => Twist::RightToFront,
			Twist::FrontToTop => Twist::TopToFront,
			Twist::TopToFront => Twist::FrontToTop,
			Twist::LeftToTop => Twist::TopToLeft,
			Twist::TopToLeft => Twist::LeftToTop,
		}
	}
}

/// A corner or edge piece.
/// Holds one optional color per face slot, indexed by Face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cubie {
	faces: [Option<Color>; NUM_SIDES],
	identity: Identity,
}

impl Cubie {
	pub fn new(faces: [Option<Color>; NUM_SIDES]) -> Self {
		let identity = Identity::from_colors(faces.iter().flatten().copied());
		Self { faces, identity }
	}

	/// Create a cubie from (slot, color) pairs, all other slots are empty.
	pub fn with_faces(labels: &[(Face, Color)]) -> Self {
		let mut faces = [None; NUM_SIDES];
		for (face, color) in labels {
			faces[*face as usize] = Some(*color);
		}
		Self::new(faces)
	}

	/// The color on the given slot
	pub const fn face(&self, face: Face) -> Option<Color> {
		self.faces[face as usize]
	}

	pub const fn faces(&self) -> &[Option<Color>; NUM_SIDES] {
		&self.faces
	}

	/// The orientation-invariant identity.
	/// A twist only moves labels around, so it never changes.
	pub const fn identity(&self) -> Identity {
		self.identity
	}

	/// Number of labeled slots
	pub fn num_labels(&self) -> usize {
		self.faces.iter().flatten().count()
	}

	pub fn is_corner(&self) -> bool {
		self.num_labels() == 3
	}

	pub fn is_edge(&self) -> bool {
		self.num_labels() == 2
	}

	pub fn twist(&mut self, twist: Twist) {
		let [a, b, c, d] = twist.cycle().map(|f| f as usize);
		let last = self.faces[d];
		self.faces[d] = self.faces[c];
		self.faces[c] = self.faces[b];
		self.faces[b] = self.faces[a];
		self.faces[a] = last;
	}
}

/// Whatever sits at a grid position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Piece {
	Cubie(Cubie),
	/// A face center, or the colorless core
	Pivot(Option<Color>),
}

impl Piece {
	pub const fn cubie(&self) -> Option<&Cubie> {
		match self {
			Piece::Cubie(c) => Some(c),
			Piece::Pivot(_) => None,
		}
	}

	/// Pivots are single colored and never reoriented.
	pub fn twist(&mut self, twist: Twist) {
		if let Piece::Cubie(c) = self {
			c.twist(twist);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn corner() -> Cubie {
		Cubie::with_faces(&[
			(Face::Front, Color::Red),
			(Face::Top, Color::Green),
			(Face::Left, Color::Yellow),
		])
	}

	#[test]
	/// Each twist results to the neutral element after 4 applications
	fn twist_order_four() {
		let start = corner();
		for twist in Twist::iter() {
			let mut c = start;
			for i in 0..4 {
				if i > 0 {
					assert_ne!(c, start, "{:?} returns too early", twist);
				}
				c.twist(twist);
			}
			assert_eq!(c, start, "{:?} is not of order 4", twist);
		}
	}

	#[test]
	fn twist_inverse() {
		let start = corner();
		for twist in Twist::iter() {
			let mut c = start;
			c.twist(twist);
			c.twist(twist.inverse());
			assert_eq!(c, start);
			assert_eq!(twist.inverse().inverse(), twist);
		}
	}

	#[test]
	/// A twist touches exactly the four slots of its cycle
	fn twist_keeps_axis() {
		let all = Cubie::new([
			Some(Color::Red),
			Some(Color::Green),
			Some(Color::Orange),
			Some(Color::Blue),
			Some(Color::Yellow),
			Some(Color::White),
		]);

		for twist in Twist::iter() {
			let cycle = twist.cycle();
			let mut c = all;
			c.twist(twist);
			for face in Face::iter() {
				if cycle.contains(&face) {
					assert_ne!(c.face(face), all.face(face), "{:?} keeps {}", twist, face);
				} else {
					assert_eq!(c.face(face), all.face(face), "{:?} moves {}", twist, face);
				}
			}
			// The label of the first slot ends up in the second one
			assert_eq!(c.face(cycle[1]), all.face(cycle[0]));
		}
	}

	#[test]
	fn identity_ignores_orientation() {
		let start = corner();
		let mut c = start;
		c.twist(Twist::FrontToTop);
		c.twist(Twist::LeftToTop);

		assert_ne!(c, start);
		assert_eq!(c.identity(), start.identity());
		assert_eq!(c.identity().len(), 3);
		assert!(c.is_corner());
		assert_eq!(c.identity().to_string(), "RGY");
	}

	#[test]
	fn pivots_ignore_twists() {
		let mut pivot = Piece::Pivot(Some(Color::Blue));
		pivot.twist(Twist::RightToFront);
		assert_eq!(pivot, Piece::Pivot(Some(Color::Blue)));
		assert!(pivot.cubie().is_none());
	}
}

use std::str::FromStr;

use rand::Rng;
use strum::{EnumCount, IntoEnumIterator};

use crate::cube::cubie::Twist;

/// The axis a move rotates around
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter)]
pub enum Axis {
	TopBottom,
	LeftRight,
	FrontBack,
}

/// The twelve quarter turns.
///
/// The bottom and back faces turn in the same sense as the top and front faces,
/// i.e. "clockwise" is always seen from the top (or the front).
/// The displayed text is the description reported to the user.
#[derive(
	Clone, Copy, PartialEq, Eq, Hash, Debug, strum::EnumIter, strum::EnumCount, strum::Display,
)]
#[repr(usize)]
pub enum Move {
	#[strum(to_string = "Rotate the top face clockwise")]
	TopClockwise,
	#[strum(to_string = "Rotate the top face counter-clockwise")]
	TopCounterClockwise,
	#[strum(to_string = "Rotate the bottom face clockwise (with respect to the top)")]
	BottomClockwise,
	#[strum(to_string = "Rotate the bottom face counter-clockwise (with respect to the top)")]
	BottomCounterClockwise,
	#[strum(to_string = "Rotate the left face's section upwards")]
	LeftUp,
	#[strum(to_string = "Rotate the left face's section downwards")]
	LeftDown,
	#[strum(to_string = "Rotate the right face's section upwards")]
	RightUp,
	#[strum(to_string = "Rotate the right face's section downwards")]
	RightDown,
	#[strum(to_string = "Rotate the front face clockwise")]
	FrontClockwise,
	#[strum(to_string = "Rotate the front face counter-clockwise")]
	FrontCounterClockwise,
	#[strum(to_string = "Rotate the back face clockwise (with respect to the front)")]
	BackClockwise,
	#[strum(to_string = "Rotate the back face counter-clockwise (with respect to the front)")]
	BackCounterClockwise,
}

/// Total number of quarter turns
pub const NUM_MOVES: usize = Move::COUNT;

/// All moves in the order successors are generated.
#[rustfmt::skip]
pub const ALL_MOVES: [Move; NUM_MOVES] = [
	Move::TopClockwise, Move::TopCounterClockwise,
	Move::BottomClockwise, Move::BottomCounterClockwise,
	Move::LeftUp, Move::LeftDown,
	Move::RightUp, Move::RightDown,
	Move::FrontClockwise, Move::FrontCounterClockwise,
	Move::BackClockwise, Move::BackCounterClockwise,
];

impl Move {
	pub const fn axis(self) -> Axis {
		match self {
			Move::TopClockwise
			| Move::TopCounterClockwise
			| Move::BottomClockwise
			| Move::BottomCounterClockwise => Axis::TopBottom,
			Move::LeftUp | Move::LeftDown | Move::RightUp | Move::RightDown => Axis::LeftRight,
			Move::FrontClockwise
			| Move::FrontCounterClockwise
			| Move::BackClockwise
			| Move::BackCounterClockwise => Axis::FrontBack,
		}
	}

	/// The index of the turned slice along the axis (0 or 2).
	/// That is the row for top/bottom, the column for left/right
	/// and the layer for front/back.
	pub const fn slice(self) -> usize {
		match self {
			Move::TopClockwise
			| Move::TopCounterClockwise
			| Move::LeftUp
			| Move::LeftDown
			| Move::FrontClockwise
			| Move::FrontCounterClockwise => 0,
			_ => 2,
		}
	}

	/// The move which negates this one
	pub const fn inverse(self) -> Self {
		match self {
			Move::TopClockwise => Move::TopCounterClockwise,
			Move::TopCounterClockwise => Move::TopClockwise,
			Move::BottomClockwise => Move::BottomCounterClockwise,
			Move::BottomCounterClockwise => Move::BottomClockwise,
			Move::LeftUp => Move::LeftDown,
			Move::LeftDown => Move::LeftUp,
			Move::RightUp => Move::RightDown,
			Move::RightDown => Move::RightUp,
			Move::FrontClockwise => Move::FrontCounterClockwise,
			Move::FrontCounterClockwise => Move::FrontClockwise,
			Move::BackClockwise => Move::BackCounterClockwise,
			Move::BackCounterClockwise => Move::BackClockwise,
		}
	}

	/// How every moved cubie is reoriented
	pub const fn twist(self) -> Twist {
		match self {
			Move::TopClockwise | Move::BottomClockwise => Twist::RightToFront,
			Move::TopCounterClockwise | Move::BottomCounterClockwise => Twist::FrontToRight,
			Move::LeftUp | Move::RightUp => Twist::FrontToTop,
			Move::LeftDown | Move::RightDown => Twist::TopToFront,
			Move::FrontClockwise | Move::BackClockwise => Twist::LeftToTop,
			Move::FrontCounterClockwise | Move::BackCounterClockwise => Twist::TopToLeft,
		}
	}

	/// By how many places the pieces shift along the ring of the turned slice.
	/// See state::ring for the ring order.
	pub const fn ring_shift(self) -> usize {
		match self {
			Move::TopClockwise
			| Move::BottomClockwise
			| Move::LeftUp
			| Move::RightUp
			| Move::FrontCounterClockwise
			| Move::BackCounterClockwise => 2,
			_ => 6,
		}
	}

	/// Standard cube notation (Singmaster).
	/// The bottom and back moves are named from their own side, hence D' for BottomClockwise.
	pub const fn notation(self) -> &'static str {
		match self {
			Move::TopClockwise => "U",
			Move::TopCounterClockwise => "U'",
			Move::BottomClockwise => "D'",
			Move::BottomCounterClockwise => "D",
			Move::LeftUp => "L'",
			Move::LeftDown => "L",
			Move::RightUp => "R",
			Move::RightDown => "R'",
			Move::FrontClockwise => "F",
			Move::FrontCounterClockwise => "F'",
			Move::BackClockwise => "B'",
			Move::BackCounterClockwise => "B",
		}
	}

	/// The human readable description
	pub fn description(self) -> String {
		self.to_string()
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("\"{0}\" is not a move (expected one of U U' D D' L L' R R' F F' B B')")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
	type Err = ParseMoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Move::iter()
			.find(|mv| mv.notation() == s)
			.ok_or_else(|| ParseMoveError(s.to_string()))
	}
}

/// Parse a whitespace separated sequence of moves in notation, e.g. "U R' F"
pub fn parse_moves<T>(string: T) -> Result<Vec<Move>, ParseMoveError>
where
	T: AsRef<str>,
{
	string.as_ref().split_whitespace().map(Move::from_str).collect()
}

/// Write a sequence of moves in notation
pub fn format_moves(moves: &[Move]) -> String {
	moves.iter().map(|mv| mv.notation()).collect::<Vec<_>>().join(" ")
}

/// A random sequence of quarter turns.
/// A move never directly undoes the one before it.
pub fn random_sequence(len: usize) -> Vec<Move> {
	let mut rng = rand::thread_rng();
	let mut out: Vec<Move> = Vec::with_capacity(len);

	while out.len() < len {
		let mv = ALL_MOVES[rng.gen_range(0..NUM_MOVES)];
		if out.last().is_some_and(|last| last.inverse() == mv) {
			continue;
		}
		out.push(mv);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_moves_in_order() {
		for (i, mv) in Move::iter().enumerate() {
			assert_eq!(ALL_MOVES[i], mv);
			assert_eq!(mv as usize, i);
		}
	}

	#[test]
	/// Inverse moves share axis and slice, but not the direction
	fn inverse_moves() {
		for mv in Move::iter() {
			let inv = mv.inverse();
			assert_ne!(inv, mv);
			assert_eq!(inv.inverse(), mv);
			assert_eq!(inv.axis(), mv.axis());
			assert_eq!(inv.slice(), mv.slice());
			assert_eq!(inv.twist(), mv.twist().inverse());
			assert_eq!((inv.ring_shift() + mv.ring_shift()) % 8, 0);
		}
	}

	#[test]
	/// Notation can be parsed back, and each notation is unique
	fn notation() {
		for mv in Move::iter() {
			assert_eq!(Move::from_str(mv.notation()), Ok(mv));
		}

		let moves = parse_moves("U R' F  B\tD'").unwrap();
		assert_eq!(
			moves,
			vec![
				Move::TopClockwise,
				Move::RightDown,
				Move::FrontClockwise,
				Move::BackCounterClockwise,
				Move::BottomClockwise,
			]
		);
		assert_eq!(format_moves(&moves), "U R' F B D'");

		assert_eq!(parse_moves(""), Ok(vec![]));
		assert_eq!(parse_moves("U X"), Err(ParseMoveError("X".to_string())));
		assert!(parse_moves("U2").is_err());
	}

	#[test]
	fn descriptions() {
		assert_eq!(Move::TopClockwise.description(), "Rotate the top face clockwise");
		assert_eq!(
			Move::BackCounterClockwise.to_string(),
			"Rotate the back face counter-clockwise (with respect to the front)"
		);
	}

	#[test]
	fn random_sequences() {
		for len in [0, 1, 20] {
			let seq = random_sequence(len);
			assert_eq!(seq.len(), len);
			for pair in seq.windows(2) {
				assert_ne!(pair[0].inverse(), pair[1]);
			}
		}
	}
}

//! The text format of a cube: 6 lines of 9 color symbols.
//!
//! The lines are the faces in the order front, top, opposite, bottom, left, right.
//! Hold the cube with the red center in front and the green center on top, then:
//!
//! - read the front face left to right, top to bottom,
//! - tip the whole cube forward (towards you) by a quarter and read the top face,
//! - tip it again and read the opposite face, once more for the bottom face,
//! - hold it red in front again, turn the whole cube a quarter counter-clockwise
//!   (seen from the top) and read the left face,
//! - turn it a half turn and read the right face.
//!
//! The centers must show the colors of that orientation, pivots never move.

use std::{path::Path, str::FromStr};

use strum::IntoEnumIterator;

use crate::cube::*;

/// The index of the center sticker on a face
pub const CENTER: usize = CUBE_AREA / 2;

#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
	#[error("A cube layout needs 6 lines (one per face), found {0}")]
	LineCount(usize),
	#[error("Line {line} ({face} face) has {length} symbols, expected 9")]
	LineLength { line: usize, face: Face, length: usize },
	#[error("Could not read the cube layout: {0}")]
	Io(#[from] std::io::Error),
}

/// The raw symbols of the six faces.
/// Symbols are not checked here, that's done when building a cube state.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Layout {
	faces: [[char; CUBE_AREA]; NUM_SIDES],
}

impl Default for Layout {
	/// The layout of a *solved* cube
	fn default() -> Self {
		let mut faces = [[' '; CUBE_AREA]; NUM_SIDES];
		for face in Face::iter() {
			faces[face as usize] = [face.pivot_color().symbol(); CUBE_AREA];
		}
		Self { faces }
	}
}

impl Layout {
	pub fn new(faces: [[char; CUBE_AREA]; NUM_SIDES]) -> Self {
		Self { faces }
	}

	pub fn solved() -> Self {
		Self::default()
	}

	/// The 9 symbols of a face in reading order
	pub fn face(&self, face: Face) -> &[char; CUBE_AREA] {
		&self.faces[face as usize]
	}

	pub fn symbol(&self, face: Face, index: usize) -> char {
		self.faces[face as usize][index]
	}

	pub fn set_symbol(&mut self, face: Face, index: usize, symbol: char) {
		self.faces[face as usize][index] = symbol;
	}

	/// Read a layout file
	pub fn read<P>(path: P) -> Result<Self, LayoutError>
	where
		P: AsRef<Path>,
	{
		std::fs::read_to_string(path)?.parse()
	}
}

impl FromStr for Layout {
	type Err = LayoutError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut lines: Vec<&str> = s.lines().map(str::trim_end).collect();
		while lines.last().is_some_and(|l| l.is_empty()) {
			lines.pop();
		}

		if lines.len() != NUM_SIDES {
			return Err(LayoutError::LineCount(lines.len()));
		}

		let mut faces = [[' '; CUBE_AREA]; NUM_SIDES];
		for ((i, line), face) in lines.into_iter().enumerate().zip(Face::iter()) {
			let symbols: Vec<char> = line.chars().collect();
			faces[face as usize] = symbols.try_into().map_err(|symbols: Vec<char>| {
				LayoutError::LineLength {
					line: i + 1,
					face,
					length: symbols.len(),
				}
			})?;
		}

		Ok(Self { faces })
	}
}

impl std::fmt::Display for Layout {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for face in self.faces.iter() {
			let line: String = face.iter().collect();
			writeln!(f, "{}", line)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SOLVED: &str = "RRRRRRRRR\nGGGGGGGGG\nOOOOOOOOO\nBBBBBBBBB\nYYYYYYYYY\nWWWWWWWWW\n";

	#[test]
	fn parse_solved() {
		let layout: Layout = SOLVED.parse().unwrap();
		assert_eq!(layout, Layout::solved());
		assert_eq!(layout.to_string(), SOLVED);
		assert_eq!(layout.symbol(Face::Left, 4), 'Y');
	}

	#[test]
	/// Windows line endings and trailing blank lines are fine
	fn parse_tolerates_whitespace() {
		let text = SOLVED.replace('\n', "\r\n") + "\n\n";
		let layout: Layout = text.parse().unwrap();
		assert_eq!(layout, Layout::solved());
	}

	#[test]
	fn parse_errors() {
		let five_lines: String = SOLVED.lines().take(5).map(|l| format!("{}\n", l)).collect();
		assert!(matches!(five_lines.parse::<Layout>(), Err(LayoutError::LineCount(5))));

		let seven_lines = format!("{}RRRRRRRRR\n", SOLVED);
		assert!(matches!(seven_lines.parse::<Layout>(), Err(LayoutError::LineCount(7))));

		let short = SOLVED.replace("OOOOOOOOO", "OOOOOOOO");
		match short.parse::<Layout>() {
			Err(LayoutError::LineLength { line, face, length }) => {
				assert_eq!(line, 3);
				assert_eq!(face, Face::Opposite);
				assert_eq!(length, 8);
			}
			other => panic!("Expected a line length error, got {:?}", other),
		}

		let long = SOLVED.replace("WWWWWWWWW", "WWWWWWWWWW");
		assert!(matches!(
			long.parse::<Layout>(),
			Err(LayoutError::LineLength { line: 6, length: 10, .. })
		));
	}

	#[test]
	/// Unknown symbols are the cube state's problem, not the parser's
	fn parse_keeps_unknown_symbols() {
		let text = SOLVED.replacen('R', "X", 1);
		let layout: Layout = text.parse().unwrap();
		assert_eq!(layout.symbol(Face::Front, 0), 'X');
	}

	#[test]
	fn read_missing_file() {
		let res = Layout::read("this/file/does/not/exist.txt");
		assert!(matches!(res, Err(LayoutError::Io(_))));
	}
}

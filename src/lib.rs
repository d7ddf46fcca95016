//! This is a simple example how to scramble and solve the cube.
//!
//! ```
//! use rubick::prelude::*;
//!
//! let mut cube = CubeState::solved();
//! cube.apply_moves(parse_moves("U R' F").unwrap());
//!
//! let solution = solve(&cube, &SolverConfig::default()).unwrap();
//! assert_eq!(solution.len(), 3);
//!
//! cube.apply_moves(solution.moves());
//! assert!(cube.is_solved());
//! ```
//!
//! Cubes can also be read from a layout of 6 lines with 9 color symbols each,
//! see the layout module.

pub mod cube;
pub mod solve;

pub mod prelude {
	pub use crate::cube::{cubie::*, layout::*, state::*, turn::*, *};
	pub use crate::solve::{ida::Solver, *};
}

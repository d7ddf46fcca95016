pub mod ida;

use std::time::Duration;

use rayon::prelude::*;

use crate::cube::{layout::Layout, state::*, turn::*, CubeError};

/// Settings for a single search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
	/// Abort after expanding this many nodes
	pub max_nodes: Option<u64>,
	/// Abort once the search ran for this long
	pub time_limit: Option<Duration>,
	/// Visit the successors with the lowest estimate first
	pub order_successors: bool,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			max_nodes: None,
			time_limit: None,
			order_successors: true,
		}
	}
}

/// What a search did
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SearchStats {
	/// Number of bound iterations
	pub iterations: usize,
	/// Number of expanded nodes, over all iterations
	pub nodes: u64,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SolveError {
	#[error("Unsolvable cube: {0}")]
	Malformed(#[from] CubeError),
	#[error("No solution exists within reach of the given cube")]
	Exhausted,
	#[error("Search aborted after expanding {nodes} nodes")]
	Budget { nodes: u64 },
}

/// A solved search: the states from the start to the solved cube.
#[derive(Clone, Debug)]
pub struct Solution {
	path: Vec<CubeState>,
	bound: Score,
	stats: SearchStats,
}

impl Solution {
	/// The states visited, starting with the given cube and ending with a solved one
	pub fn path(&self) -> &[CubeState] {
		&self.path
	}

	/// The bound of the iteration which found the solution
	pub fn bound(&self) -> Score {
		self.bound
	}

	pub fn stats(&self) -> SearchStats {
		self.stats
	}

	/// The moves leading from the start to the solved cube
	pub fn moves(&self) -> Vec<Move> {
		self.path.iter().skip(1).filter_map(|s| s.previous_move()).collect()
	}

	/// Number of moves
	pub fn len(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn descriptions(&self) -> Vec<String> {
		self.moves().into_iter().map(Move::description).collect()
	}

	/// The moves in short notation, e.g. "U R' F"
	pub fn notation(&self) -> String {
		format_moves(&self.moves())
	}
}

impl std::fmt::Display for Solution {
	/// One numbered move description per line
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for (i, mv) in self.moves().into_iter().enumerate() {
			writeln!(f, "{}. {}", i + 1, mv)?;
		}
		Ok(())
	}
}

/// Find a shortest sequence of quarter turns which solves the cube.
pub fn solve(cube: &CubeState, config: &SolverConfig) -> Result<Solution, SolveError> {
	ida::Solver::new(config.clone()).solve(cube)
}

/// Build the cube from a layout and solve it
pub fn solve_layout(layout: &Layout, config: &SolverConfig) -> Result<Solution, SolveError> {
	let cube = CubeState::from_layout(layout)?;
	solve(&cube, config)
}

/// Solve independent cubes in parallel.
/// Returns one result per cube, in the given order.
pub fn solve_all(cubes: &[CubeState], config: &SolverConfig) -> Vec<Result<Solution, SolveError>> {
	cubes.par_iter().map(|cube| solve(cube, config)).collect()
}

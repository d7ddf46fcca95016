//! Iterative deepening A*.
//!
//! Each iteration is a depth first search which cuts off every node whose
//! estimate f = g + h exceeds the bound. The next bound is the smallest f
//! which was cut off, so the first solution found is a shortest one.

use std::{
	ops::{Deref, DerefMut},
	time::Instant,
};

use log::{debug, info, trace, warn};

use super::*;
use crate::cube::RubiksCube;

/// The outcome of one bounded probe
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Probe {
	/// The path ends in a solved cube
	Found,
	/// Nothing found, the smallest estimate over the bound
	Overshoot(Score),
	/// Nothing was cut off, the search can't go anywhere
	Exhausted,
}

/// Pushes a state on the path and pops it again when dropped,
/// unless the path is kept as the solution.
struct PathGuard<'a> {
	path: &'a mut Vec<CubeState>,
	keep: bool,
}

impl<'a> PathGuard<'a> {
	fn push(path: &'a mut Vec<CubeState>, state: CubeState) -> Self {
		path.push(state);
		Self { path, keep: false }
	}

	fn keep(mut self) {
		self.keep = true;
	}
}

impl Deref for PathGuard<'_> {
	type Target = Vec<CubeState>;

	fn deref(&self) -> &Self::Target {
		self.path
	}
}

impl DerefMut for PathGuard<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.path
	}
}

impl Drop for PathGuard<'_> {
	fn drop(&mut self) {
		if !self.keep {
			self.path.pop();
		}
	}
}

pub struct Solver {
	config: SolverConfig,
	stats: SearchStats,
	started: Instant,
}

impl Solver {
	pub fn new(config: SolverConfig) -> Self {
		Self {
			config,
			stats: SearchStats::default(),
			started: Instant::now(),
		}
	}

	/// The statistics of the last search
	pub fn stats(&self) -> SearchStats {
		self.stats
	}

	pub fn solve(&mut self, root: &CubeState) -> Result<Solution, SolveError> {
		root.check_solvability()?;

		self.stats = SearchStats::default();
		self.started = Instant::now();

		let mut bound = root.heuristic();
		let mut path = vec![root.clone()];
		info!("Solving a cube with an estimated distance of {} moves", bound);

		loop {
			self.stats.iterations += 1;
			debug!(
				"Iteration {} with bound {} ({} nodes expanded so far)",
				self.stats.iterations, bound, self.stats.nodes
			);

			match self.search(&mut path, Score::ZERO, bound)? {
				Probe::Found => break,
				Probe::Overshoot(next) => bound = next,
				Probe::Exhausted => {
					info!("Search exhausted after {} nodes", self.stats.nodes);
					return Err(SolveError::Exhausted);
				}
			}
		}

		let solution = Solution {
			path,
			bound,
			stats: self.stats,
		};
		info!(
			"Found a solution of {} moves in {:.2?} ({} iterations, {} nodes)",
			solution.len(),
			self.started.elapsed(),
			self.stats.iterations,
			self.stats.nodes
		);

		#[cfg(debug_assertions)]
		{
			let mut c = root.clone();
			c.apply_moves(solution.moves());
			assert!(c.is_solved());
		}

		Ok(solution)
	}

	/// The bounded depth first search below the last state of the path.
	/// On Found the path holds the solution, otherwise it is left as it was.
	fn search(
		&mut self,
		path: &mut Vec<CubeState>,
		g: Score,
		bound: Score,
	) -> Result<Probe, SolveError> {
		let Some(node) = path.last() else {
			return Ok(Probe::Exhausted);
		};
		debug_assert!(
			path.iter().rev().skip(1).all(|s| s != node),
			"A state appears twice on the path"
		);

		let f = g + node.heuristic();
		if f > bound {
			return Ok(Probe::Overshoot(f));
		}
		if node.is_solved() {
			return Ok(Probe::Found);
		}

		let child_g = g + Score::from_moves(1);
		let mut successors = self.expand(node)?;
		if self.config.order_successors {
			successors.sort_by(|a, b| (child_g + a.heuristic()).cmp(&(child_g + b.heuristic())));
		}

		let mut min: Option<Score> = None;
		for next in successors {
			if path.contains(&next) {
				continue;
			}

			let mut guard = PathGuard::push(path, next);
			match self.search(&mut guard, child_g, bound)? {
				Probe::Found => {
					guard.keep();
					return Ok(Probe::Found);
				}
				Probe::Overshoot(t) => min = Some(min.map_or(t, |m| m.min(t))),
				Probe::Exhausted => {}
			}
		}

		Ok(min.map_or(Probe::Exhausted, Probe::Overshoot))
	}

	/// Generate the successors of a node, counting it against the budget
	fn expand(&mut self, node: &CubeState) -> Result<Vec<CubeState>, SolveError> {
		let out_of_nodes = self.config.max_nodes.is_some_and(|max| self.stats.nodes >= max);
		let out_of_time = self
			.config
			.time_limit
			.is_some_and(|limit| self.started.elapsed() >= limit);

		if out_of_nodes || out_of_time {
			warn!(
				"Search aborted after {} nodes and {:.2?}",
				self.stats.nodes,
				self.started.elapsed()
			);
			return Err(SolveError::Budget {
				nodes: self.stats.nodes,
			});
		}

		self.stats.nodes += 1;
		trace!("Expanding a node with estimate {}", node.heuristic());
		Ok(node.successors())
	}
}

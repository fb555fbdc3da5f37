#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate for searching Paths in generic, caller-defined Graphs.
//!
//! ## Introduction
//! Most Graphs that need searching never exist as a data structure: the Tiles of a Grid,
//! the States of a Puzzle or the Positions in a Game are usually generated on the fly. This
//! crate therefore never asks for the Graph itself. Instead, a search is described by a
//! Problem that knows where to start, where to go, how to identify a Vertex and which
//! Vertices can be reached from a given Vertex (see [`SearchProblem`]). The Graph may be
//! generated lazily and may even be infinite.
//!
//! The crate provides four search Algorithms on top of that:
//! - [`graph_search`]: an uninformed search. Breadth-first or depth-first, depending on
//! the [`Combiner`] of the Problem
//! - [`dijkstra`]: finds the cheapest Path, given a Cost for every step
//! - [`greedy_best_first`]: follows a Heuristic towards the goal. Fast, but not optimal
//! - [`a_star`]: finds the cheapest Path, guided by a Heuristic
//!
//! as well as the [`MinHeap`] and [`PriorityQueue`] used by the informed searches.
//!
//! Vertices are identified by their [`Key`](SearchProblem::Key), not by comparing the
//! Vertices themselves. This allows Vertices to carry additional data that is not part of
//! their identity.
//!
//! ## Examples
//! Creating a Problem from closures:
//! ```
//! use graph_search::prelude::*;
//!
//! // 0 = empty, 1 = swamp, 2 = wall
//! let grid = [
//!     [0, 2, 0, 0, 0],
//!     [0, 2, 2, 2, 0],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 2, 0],
//!     [0, 0, 0, 2, 0],
//! ];
//! const COST_MAP: [usize; 3] = [1, 5, usize::MAX];
//!
//! let neighbors = |&(x, y): &(usize, usize)| {
//!     [(x + 1, y), (x, y + 1), (x.wrapping_sub(1), y), (x, y.wrapping_sub(1))]
//!         .into_iter()
//!         .filter(|&(x, y)| x < 5 && y < 5 && grid[y][x] != 2)
//!         .collect::<Vec<_>>()
//! };
//!
//! let problem = Problem::new((0, 0), (4, 4), |p: &(usize, usize)| *p, neighbors)
//!     .with_cost(|_: &(usize, usize), &(x, y): &(usize, usize)| COST_MAP[grid[y][x]])
//!     .with_heuristic(|goal: &(usize, usize), p: &(usize, usize)| {
//!         goal.0.abs_diff(p.0) + goal.1.abs_diff(p.1)
//!     });
//! ```
//!
//! ### Searching
//! The cheapest Path, using Dijkstra or A*:
//! ```
//! # use graph_search::prelude::*;
//! # let grid = [
//! #     [0, 2, 0, 0, 0],
//! #     [0, 2, 2, 2, 0],
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 0, 2, 0],
//! #     [0, 0, 0, 2, 0],
//! # ];
//! # const COST_MAP: [usize; 3] = [1, 5, usize::MAX];
//! # let neighbors = |&(x, y): &(usize, usize)| {
//! #     [(x + 1, y), (x, y + 1), (x.wrapping_sub(1), y), (x, y.wrapping_sub(1))]
//! #         .into_iter()
//! #         .filter(|&(x, y)| x < 5 && y < 5 && grid[y][x] != 2)
//! #         .collect::<Vec<_>>()
//! # };
//! # let problem = Problem::new((0, 0), (4, 4), |p: &(usize, usize)| *p, neighbors)
//! #     .with_cost(|_: &(usize, usize), &(x, y): &(usize, usize)| COST_MAP[grid[y][x]])
//! #     .with_heuristic(|goal: &(usize, usize), p: &(usize, usize)| {
//! #         goal.0.abs_diff(p.0) + goal.1.abs_diff(p.1)
//! #     });
//! // both return Some(CostPath) on success
//! let cheapest = dijkstra(&problem).unwrap();
//! let guided = a_star(&problem).unwrap();
//!
//! assert_eq!(cheapest.cost, 12);
//! assert_eq!(guided.cost, cheapest.cost);
//! assert_eq!(guided.path.first(), Some(&(0, 0)));
//! assert_eq!(guided.path.last(), Some(&(4, 4)));
//! ```
//! Any Path, using an uninformed or a greedy search:
//! ```
//! # use graph_search::prelude::*;
//! # let grid = [
//! #     [0, 2, 0, 0, 0],
//! #     [0, 2, 2, 2, 0],
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 0, 2, 0],
//! #     [0, 0, 0, 2, 0],
//! # ];
//! # let neighbors = |&(x, y): &(usize, usize)| {
//! #     [(x + 1, y), (x, y + 1), (x.wrapping_sub(1), y), (x, y.wrapping_sub(1))]
//! #         .into_iter()
//! #         .filter(|&(x, y)| x < 5 && y < 5 && grid[y][x] != 2)
//! #         .collect::<Vec<_>>()
//! # };
//! let problem = Problem::new((0, 0), (4, 4), |p: &(usize, usize)| *p, neighbors)
//!     .with_combiner(Combiner::BREADTH_FIRST)
//!     .with_heuristic(|goal: &(usize, usize), p: &(usize, usize)| {
//!         goal.0.abs_diff(p.0) + goal.1.abs_diff(p.1)
//!     });
//!
//! let fewest_steps = graph_search(&problem).unwrap();
//! assert_eq!(fewest_steps.len(), 9);
//!
//! assert!(greedy_best_first(&problem).is_some());
//!
//! // an unreachable goal is not an error, just None
//! let walled_in = Problem::new((0, 0), (0, 4), |p: &(usize, usize)| *p, |_: &(usize, usize)| vec![]);
//! assert_eq!(graph_search(&walled_in), None);
//! ```
//!
//! ### Configuration
//! Every search Function has a `_with_config` variant that takes a [`SearchConfig`]. The
//! config only controls how much memory is reserved up front, it never changes the result.
//! ```
//! # use graph_search::prelude::*;
//! let problem = Problem::new(0_u32, 1000, |n: &u32| *n, |n: &u32| [n + 1, n * 2])
//!     .with_cost(|_: &u32, _: &u32| 1_u32);
//!
//! let result = dijkstra_with_config(&problem, SearchConfig::LARGE).unwrap();
//! assert_eq!(Some(result.cost), dijkstra(&problem).map(|p| p.cost));
//! ```
//!
//! ## Logging
//! With the `log` Feature enabled, every search reports the number of expanded Vertices and
//! the time it took at the `trace` level.

/// A [`HashMap`](hashbrown::HashMap) from the Keys of Vertices to some Value.
pub type KeyMap<K, V> = hashbrown::HashMap<K, V>;

mod trace;

mod heap;
pub use self::heap::MinHeap;

mod priority_queue;
pub use self::priority_queue::{PriorityNode, PriorityQueue};

pub mod problem;
pub use self::problem::{
	Combiner, Cost, CostProblem, GraphSearchProblem, HeuristicProblem, Problem, SearchProblem,
};

mod path;
pub use self::path::{reconstruct_path, CostPath, Path};

mod config;
pub use self::config::SearchConfig;

mod search;
pub use self::search::{
	a_star, a_star_with_config, dijkstra, dijkstra_with_config, graph_search,
	graph_search_with_config, greedy_best_first, greedy_best_first_with_config, CostSearchResult,
};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		a_star, a_star_with_config, dijkstra, dijkstra_with_config, graph_search,
		graph_search_with_config, greedy_best_first, greedy_best_first_with_config, Combiner,
		Cost, CostPath, CostProblem, GraphSearchProblem, HeuristicProblem, Path, Problem,
		SearchConfig, SearchProblem,
	};
}

//! Descriptions of the Problems the search Functions can solve.
//!
//! Every search needs a [`SearchProblem`]: a start, a goal, a way to identify Vertices and a
//! way to list the successors of a Vertex. The other Traits add what the individual
//! Algorithms need on top of that:
//!
//! | Algorithm | Trait |
//! |---|---|
//! | [`graph_search`](crate::graph_search) | [`GraphSearchProblem`] |
//! | [`dijkstra`](crate::dijkstra) | [`CostProblem`] |
//! | [`greedy_best_first`](crate::greedy_best_first) | [`HeuristicProblem`] |
//! | [`a_star`](crate::a_star) | [`CostProblem`] + [`HeuristicProblem`] |
//!
//! The Traits can be implemented directly on a Graph type, or a [`Problem`] can be assembled
//! from closures.

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// A numeric Type that can be used as the Cost of an Edge or as a Heuristic estimate.
///
/// Implemented for all primitive integer types (where additions saturate at `MAX`) and for
/// `f32` and `f64`.
///
/// Costs are expected to be non-negative. Negative Costs are not detected, but they break
/// the optimality of [`dijkstra`](crate::dijkstra) and [`a_star`](crate::a_star).
pub trait Cost: Copy + PartialOrd + Debug {
	/// The Cost of the empty Path
	const ZERO: Self;
	/// A Cost larger than any reachable Cost
	const INFINITY: Self;
	/// Adds two Costs. Never overflows, but saturates at [`INFINITY`](Cost::INFINITY)
	fn add_cost(self, other: Self) -> Self;
}

macro_rules! impl_cost_int {
	($($type:ty),+) => {$(
		impl Cost for $type {
			const ZERO: $type = 0;
			const INFINITY: $type = <$type>::MAX;
			fn add_cost(self, other: $type) -> $type {
				self.saturating_add(other)
			}
		}
	)+}
}

impl_cost_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_cost_float {
	($($type:ty),+) => {$(
		impl Cost for $type {
			const ZERO: $type = 0.0;
			const INFINITY: $type = <$type>::INFINITY;
			fn add_cost(self, other: $type) -> $type {
				self + other
			}
		}
	)+}
}

impl_cost_float!(f32, f64);

/// The basic description of a search: where to start, where to go and how to move.
///
/// Vertices are never compared directly. Two Vertices are considered to be the same place
/// if and only if their [`Key`](SearchProblem::Key)s are equal, so `key` has to be a pure
/// Function of the identity of a Vertex.
///
/// The Graph never has to exist as a whole: `successors` is only called for Vertices that
/// are expanded, which allows searching huge or infinite implicit Graphs. It has to be
/// deterministic for a given Vertex.
pub trait SearchProblem {
	/// The Vertices of the Graph
	type Vertex: Clone;
	/// The identity of a Vertex. Used for all lookups during a search
	type Key: Hash + Eq + Clone;
	/// What [`successors`](SearchProblem::successors) returns
	type Successors: IntoIterator<Item = Self::Vertex>;

	/// Extracts the identity of a Vertex
	fn key(&self, vertex: &Self::Vertex) -> Self::Key;
	/// The Vertex where the search starts
	fn start(&self) -> &Self::Vertex;
	/// The Vertex the search is looking for
	fn goal(&self) -> &Self::Vertex;
	/// All Vertices that can be reached from `vertex` in one step
	fn successors(&self, vertex: &Self::Vertex) -> Self::Successors;
}

/// A [`SearchProblem`] for [`graph_search`](crate::graph_search), which needs a
/// [`Combiner`] to decide the traversal order.
pub trait GraphSearchProblem: SearchProblem {
	/// How newly discovered Vertices are inserted into the frontier
	fn combiner(&self) -> Combiner;
}

/// A [`SearchProblem`] where every step has a Cost.
pub trait CostProblem: SearchProblem {
	/// The numeric Type of the Costs
	type Cost: Cost;

	/// The Cost of moving from `from` to its successor `to`. Should be non-negative
	fn cost(&self, from: &Self::Vertex, to: &Self::Vertex) -> Self::Cost;
}

/// A [`SearchProblem`] with an estimate of how far a Vertex is from the goal.
pub trait HeuristicProblem: SearchProblem {
	/// The numeric Type of the estimates
	type Estimate: Cost;

	/// Estimates the remaining Cost from `current` to `goal`.
	///
	/// [`a_star`](crate::a_star) only returns optimal Paths if this never overestimates the
	/// actual Cost (admissible) and never decreases by more than the Cost of a step
	/// (consistent). Returning `ZERO` is always valid, but turns A* into Dijkstra.
	fn heuristic(&self, goal: &Self::Vertex, current: &Self::Vertex) -> Self::Estimate;
}

/// Decides where newly discovered Vertices are inserted into the frontier of
/// [`graph_search`](crate::graph_search), which determines the traversal order.
///
/// The search always takes the next Vertex from the back of the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Combiner {
	/// Insert at the back, where the next Vertex is taken from. The most recently discovered
	/// Vertex is expanded first: a depth-first search
	PushBack,
	/// Insert at the front. Vertices are expanded in the order they were discovered: a
	/// breadth-first search
	#[default]
	PushFront,
}

impl Combiner {
	/// Alias for [`Combiner::PushBack`]
	pub const DEPTH_FIRST: Combiner = Combiner::PushBack;
	/// Alias for [`Combiner::PushFront`]
	pub const BREADTH_FIRST: Combiner = Combiner::PushFront;

	/// Inserts `vertex` into `frontier`
	pub fn combine<V>(self, vertex: V, frontier: &mut VecDeque<V>) {
		match self {
			Combiner::PushBack => frontier.push_back(vertex),
			Combiner::PushFront => frontier.push_front(vertex),
		}
	}
}

/// A [`SearchProblem`] assembled from closures.
///
/// [`new`](Problem::new) creates a Problem that can be used with
/// [`graph_search`](crate::graph_search). Adding a Cost Function with
/// [`with_cost`](Problem::with_cost) enables [`dijkstra`](crate::dijkstra), adding a
/// Heuristic with [`with_heuristic`](Problem::with_heuristic) enables
/// [`greedy_best_first`](crate::greedy_best_first), and with both it can be used for
/// [`a_star`](crate::a_star).
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_search::{a_star, Problem};
///
/// // walk along the number line in steps of 1 or 3, where a step of 3 costs 2
/// let problem = Problem::new(0_i32, 10, |n: &i32| *n, |n: &i32| [n + 1, n + 3])
///     .with_cost(|from: &i32, to: &i32| if to - from == 3 { 2_u32 } else { 1 })
///     .with_heuristic(|goal: &i32, n: &i32| (goal - n).max(0) as u32 * 2 / 3);
///
/// let result = a_star(&problem).unwrap();
///
/// assert_eq!(result.cost, 7);
/// assert_eq!(result.path.first(), Some(&0));
/// assert_eq!(result.path.last(), Some(&10));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Problem<V, KF, SF, CF = (), HF = ()> {
	start: V,
	goal: V,
	key: KF,
	successors: SF,
	cost: CF,
	heuristic: HF,
	combiner: Combiner,
}

impl<V, KF, SF> Problem<V, KF, SF> {
	/// Creates a new Problem
	///
	/// ## Arguments
	/// - `start` - the starting Vertex
	/// - `goal` - the Vertex to search for
	/// - `key` - a Function that returns the identity of a Vertex
	/// - `successors` - a Function that lists all Vertices reachable from a Vertex in one step
	pub fn new<K, I>(start: V, goal: V, key: KF, successors: SF) -> Problem<V, KF, SF>
	where
		KF: Fn(&V) -> K,
		SF: Fn(&V) -> I,
		I: IntoIterator<Item = V>,
	{
		Problem {
			start,
			goal,
			key,
			successors,
			cost: (),
			heuristic: (),
			combiner: Combiner::default(),
		}
	}
}

impl<V, KF, SF, CF, HF> Problem<V, KF, SF, CF, HF> {
	/// Sets the Cost of moving from one Vertex to a successor
	pub fn with_cost<C, F>(self, cost: F) -> Problem<V, KF, SF, F, HF>
	where
		F: Fn(&V, &V) -> C,
		C: Cost,
	{
		Problem {
			start: self.start,
			goal: self.goal,
			key: self.key,
			successors: self.successors,
			cost,
			heuristic: self.heuristic,
			combiner: self.combiner,
		}
	}

	/// Sets the Heuristic. The Function is called as `heuristic(goal, current)`
	pub fn with_heuristic<E, F>(self, heuristic: F) -> Problem<V, KF, SF, CF, F>
	where
		F: Fn(&V, &V) -> E,
		E: Cost,
	{
		Problem {
			start: self.start,
			goal: self.goal,
			key: self.key,
			successors: self.successors,
			cost: self.cost,
			heuristic,
			combiner: self.combiner,
		}
	}

	/// Sets the [`Combiner`] used by [`graph_search`](crate::graph_search).
	/// Defaults to [`Combiner::PushFront`] (breadth-first)
	pub fn with_combiner(mut self, combiner: Combiner) -> Self {
		self.combiner = combiner;
		self
	}
}

impl<V, K, I, KF, SF, CF, HF> SearchProblem for Problem<V, KF, SF, CF, HF>
where
	V: Clone,
	K: Hash + Eq + Clone,
	KF: Fn(&V) -> K,
	SF: Fn(&V) -> I,
	I: IntoIterator<Item = V>,
{
	type Vertex = V;
	type Key = K;
	type Successors = I;

	fn key(&self, vertex: &V) -> K {
		(self.key)(vertex)
	}
	fn start(&self) -> &V {
		&self.start
	}
	fn goal(&self) -> &V {
		&self.goal
	}
	fn successors(&self, vertex: &V) -> I {
		(self.successors)(vertex)
	}
}

impl<V, K, I, KF, SF, CF, HF> GraphSearchProblem for Problem<V, KF, SF, CF, HF>
where
	V: Clone,
	K: Hash + Eq + Clone,
	KF: Fn(&V) -> K,
	SF: Fn(&V) -> I,
	I: IntoIterator<Item = V>,
{
	fn combiner(&self) -> Combiner {
		self.combiner
	}
}

impl<V, K, I, C, KF, SF, CF, HF> CostProblem for Problem<V, KF, SF, CF, HF>
where
	V: Clone,
	K: Hash + Eq + Clone,
	KF: Fn(&V) -> K,
	SF: Fn(&V) -> I,
	I: IntoIterator<Item = V>,
	CF: Fn(&V, &V) -> C,
	C: Cost,
{
	type Cost = C;

	fn cost(&self, from: &V, to: &V) -> C {
		(self.cost)(from, to)
	}
}

impl<V, K, I, E, KF, SF, CF, HF> HeuristicProblem for Problem<V, KF, SF, CF, HF>
where
	V: Clone,
	K: Hash + Eq + Clone,
	KF: Fn(&V) -> K,
	SF: Fn(&V) -> I,
	I: IntoIterator<Item = V>,
	HF: Fn(&V, &V) -> E,
	E: Cost,
{
	type Estimate = E;

	fn heuristic(&self, goal: &V, current: &V) -> E {
		(self.heuristic)(goal, current)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integer_costs_saturate() {
		assert_eq!(u8::INFINITY.add_cost(1), u8::MAX);
		assert_eq!(250_u8.add_cost(10), u8::MAX);
		assert_eq!(3_i64.add_cost(4), 7);
		assert_eq!(usize::ZERO, 0);
	}

	#[test]
	fn float_costs() {
		assert_eq!(1.5_f64.add_cost(2.25), 3.75);
		assert!(f32::INFINITY.add_cost(1.0).is_infinite());
		assert!(f64::ZERO < 1e-300);
	}

	#[test]
	fn combiner_insertion_ends() {
		let mut frontier: VecDeque<u8> = [1, 2].into_iter().collect();
		Combiner::PushBack.combine(3, &mut frontier);
		Combiner::PushFront.combine(0, &mut frontier);
		assert_eq!(frontier, [0, 1, 2, 3]);
		assert_eq!(Combiner::default(), Combiner::BREADTH_FIRST);
		assert_eq!(Combiner::DEPTH_FIRST, Combiner::PushBack);
	}

	#[test]
	fn problem_from_closures() {
		let problem = Problem::new('a', 'c', |c: &char| *c as u32, |c: &char| {
			std::char::from_u32(*c as u32 + 1)
		})
		.with_cost(|_: &char, _: &char| 2_u8)
		.with_heuristic(|goal: &char, c: &char| (*goal as u32).saturating_sub(*c as u32))
		.with_combiner(Combiner::DEPTH_FIRST);

		assert_eq!(problem.start(), &'a');
		assert_eq!(problem.goal(), &'c');
		assert_eq!(problem.key(&'b'), 98);
		assert_eq!(problem.successors(&'a').into_iter().collect::<Vec<_>>(), vec!['b']);
		assert_eq!(problem.cost(&'a', &'b'), 2);
		assert_eq!(problem.heuristic(&'c', &'a'), 2);
		assert_eq!(problem.combiner(), Combiner::PushBack);
	}
}

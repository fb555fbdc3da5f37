//! The search Algorithms.
//!
//! All of them share the same shape: take the next Vertex from a frontier, stop if its Key is
//! the goal's Key, otherwise discover its successors and remember where they came from.
//! They differ in how the frontier is ordered and whether a Vertex can be rediscovered
//! through a cheaper Path.

mod graph;
pub use self::graph::{graph_search, graph_search_with_config};

mod dijkstra;
pub use self::dijkstra::{dijkstra, dijkstra_with_config};

mod greedy;
pub use self::greedy::{greedy_best_first, greedy_best_first_with_config};

mod a_star;
pub use self::a_star::{a_star, a_star_with_config};

use crate::trace::SearchTrace;
use crate::{reconstruct_path, Cost, CostPath, CostProblem, KeyMap, PriorityQueue, SearchConfig};

/// The Result of a search that tracks Costs
pub type CostSearchResult<P> = Option<
	CostPath<
		<P as crate::SearchProblem>::Vertex,
		<P as crate::SearchProblem>::Key,
		<P as CostProblem>::Cost,
	>,
>;

/// The common core of Dijkstra and A*.
///
/// `priority` turns the cumulative Cost of reaching a Vertex into its priority in the
/// frontier. The Costs stored in the result are always the pure cumulative Costs.
fn relaxing_search<P, F>(
	problem: &P,
	config: SearchConfig,
	mut trace: SearchTrace,
	priority: F,
) -> CostSearchResult<P>
where
	P: CostProblem,
	F: Fn(&P::Vertex, P::Cost) -> P::Cost,
{
	let start = problem.start();
	let goal_key = problem.key(problem.goal());

	let mut frontier = PriorityQueue::with_capacity(config.frontier_capacity);
	frontier.push(start.clone(), <P::Cost as Cost>::ZERO);

	let mut costs = KeyMap::with_capacity(config.visited_capacity);
	costs.insert(problem.key(start), <P::Cost as Cost>::ZERO);

	let mut parents = KeyMap::with_capacity(config.visited_capacity);

	while let Some(current) = frontier.pop() {
		let current_key = problem.key(&current);
		let current_cost = costs
			.get(&current_key)
			.copied()
			.unwrap_or(<P::Cost as Cost>::INFINITY);

		if current_key == goal_key {
			let path = reconstruct_path(&parents, |v| problem.key(v), start, current);
			trace.finish(true);
			return Some(CostPath::new(path, current_cost, costs));
		}
		trace.expand();

		for next in problem.successors(&current) {
			let next_key = problem.key(&next);
			let next_cost = current_cost.add_cost(problem.cost(&current, &next));

			let improves = match costs.get(&next_key) {
				Some(&existing) => next_cost < existing,
				None => true,
			};
			if improves {
				costs.insert(next_key.clone(), next_cost);
				let next_priority = priority(&next, next_cost);
				frontier.push(next, next_priority);
				parents.insert(next_key, current.clone());
			}
		}
	}

	trace.finish(false);
	None
}

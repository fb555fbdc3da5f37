use crate::trace::SearchTrace;
use crate::{reconstruct_path, GraphSearchProblem, KeyMap, Path, SearchConfig};
use std::collections::VecDeque;

/// Searches a Graph without Costs or Heuristics, in the order decided by the Problem's
/// [`Combiner`](crate::Combiner).
///
/// The next Vertex is always taken from the back of the frontier.
/// [`Combiner::PushFront`](crate::Combiner::PushFront) turns this into a breadth-first search
/// (which finds a Path with the fewest steps), [`Combiner::PushBack`](crate::Combiner::PushBack)
/// into a depth-first search.
///
/// Every Key is discovered at most once, so no Vertex is expanded twice. The search only
/// terminates if the number of Keys reachable from the start is finite or the goal is found.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{graph_search, Combiner, Problem};
/// // A--B--C
/// // |     |
/// // D--E--F--G
/// let edges = [
///     ('A', "BD"), ('B', "AC"), ('C', "BF"), ('D', "AE"),
///     ('E', "DF"), ('F', "CEG"), ('G', "F"),
/// ];
/// let neighbors = |v: &char| {
///     edges.iter().find(|(id, _)| id == v).map(|(_, n)| n.chars()).into_iter().flatten()
/// };
///
/// let problem = Problem::new('A', 'G', |v: &char| *v, neighbors);
///
/// let path = graph_search(&problem).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.first(), Some(&'A'));
/// assert_eq!(path.last(), Some(&'G'));
/// ```
///
/// If the goal cannot be reached, None is returned:
/// ```
/// # use graph_search::{graph_search, Combiner, Problem};
/// let problem = Problem::new(0_u8, 200, |n: &u8| *n, |n: &u8| n.checked_add(3))
///     .with_combiner(Combiner::DEPTH_FIRST);
///
/// assert_eq!(graph_search(&problem), None);
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if the goal is unreachable.
/// The first Vertex in the Path is always the start and the last is the goal
pub fn graph_search<P: GraphSearchProblem>(problem: &P) -> Option<Path<P::Vertex>> {
	graph_search_with_config(problem, SearchConfig::default())
}

/// [`graph_search`] with a custom [`SearchConfig`]
pub fn graph_search_with_config<P: GraphSearchProblem>(
	problem: &P,
	config: SearchConfig,
) -> Option<Path<P::Vertex>> {
	let mut trace = SearchTrace::start("graph_search");
	let start = problem.start();
	let goal_key = problem.key(problem.goal());
	let combiner = problem.combiner();

	let mut frontier = VecDeque::with_capacity(config.frontier_capacity);
	frontier.push_back(start.clone());

	let mut parents = KeyMap::with_capacity(config.visited_capacity);

	while let Some(current) = frontier.pop_back() {
		if problem.key(&current) == goal_key {
			let path = reconstruct_path(&parents, |v| problem.key(v), start, current);
			trace.finish(true);
			return Some(path);
		}
		trace.expand();

		for next in problem.successors(&current) {
			let next_key = problem.key(&next);
			if !parents.contains_key(&next_key) {
				combiner.combine(next, &mut frontier);
				parents.insert(next_key, current.clone());
			}
		}
	}

	trace.finish(false);
	None
}

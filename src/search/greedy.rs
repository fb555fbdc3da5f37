use crate::trace::SearchTrace;
use crate::{reconstruct_path, Cost, HeuristicProblem, KeyMap, Path, PriorityQueue, SearchConfig};

/// Searches a Graph using [Greedy Best-First Search](https://en.wikipedia.org/wiki/Best-first_search).
///
/// The frontier is ordered only by the Heuristic estimate of each Vertex; the Cost of the
/// Path walked so far is ignored. Every Key keeps the parent it was first discovered from.
///
/// This usually expands far fewer Vertices than [`a_star`](crate::a_star), but the returned
/// Path is not necessarily the cheapest one.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{greedy_best_first, Problem};
/// type Point = (i32, i32);
/// let walls = [(1, 0), (1, 1), (1, 2)];
///
/// let neighbors = |&(x, y): &Point| {
///     [(x + 1, y), (x, y + 1), (x - 1, y), (x, y - 1)]
///         .into_iter()
///         .filter(|&(x, y)| (0..4).contains(&x) && (0..4).contains(&y))
///         .filter(|p| !walls.contains(p))
///         .collect::<Vec<_>>()
/// };
/// let manhattan = |a: &Point, b: &Point| (a.0 - b.0).unsigned_abs() + (a.1 - b.1).unsigned_abs();
///
/// let problem = Problem::new((0, 0), (3, 0), |p: &Point| *p, neighbors)
///     .with_heuristic(manhattan);
///
/// let path = greedy_best_first(&problem).unwrap();
/// assert_eq!(path.first(), Some(&(0, 0)));
/// assert_eq!(path.last(), Some(&(3, 0)));
/// ```
///
/// ## Returns
/// the Path, if one was found, or None if the goal is unreachable.
/// The first Vertex in the Path is always the start and the last is the goal
pub fn greedy_best_first<P: HeuristicProblem>(problem: &P) -> Option<Path<P::Vertex>> {
	greedy_best_first_with_config(problem, SearchConfig::default())
}

/// [`greedy_best_first`] with a custom [`SearchConfig`]
pub fn greedy_best_first_with_config<P: HeuristicProblem>(
	problem: &P,
	config: SearchConfig,
) -> Option<Path<P::Vertex>> {
	let mut trace = SearchTrace::start("greedy_best_first");
	let start = problem.start();
	let goal = problem.goal();
	let goal_key = problem.key(goal);

	let mut frontier = PriorityQueue::with_capacity(config.frontier_capacity);
	frontier.push(start.clone(), <P::Estimate as Cost>::ZERO);

	let mut parents = KeyMap::with_capacity(config.visited_capacity);

	while let Some(current) = frontier.pop() {
		if problem.key(&current) == goal_key {
			let path = reconstruct_path(&parents, |v| problem.key(v), start, current);
			trace.finish(true);
			return Some(path);
		}
		trace.expand();

		for next in problem.successors(&current) {
			let next_key = problem.key(&next);
			if !parents.contains_key(&next_key) {
				let estimate = problem.heuristic(goal, &next);
				frontier.push(next, estimate);
				parents.insert(next_key, current.clone());
			}
		}
	}

	trace.finish(false);
	None
}

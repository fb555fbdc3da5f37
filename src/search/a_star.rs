use super::{relaxing_search, CostSearchResult};
use crate::trace::SearchTrace;
use crate::{Cost, CostProblem, HeuristicProblem, SearchConfig};

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Works like [`dijkstra`](crate::dijkstra), except that the frontier is ordered by the
/// cumulative Cost plus the Heuristic estimate of the remaining Cost. The Costs in the
/// result are the pure cumulative Costs, without the estimate.
///
/// The Path is only guaranteed to be optimal if the Heuristic never overestimates the
/// remaining Cost. This is not checked.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{a_star, Problem};
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[i32; 5]; 5] = [
/// //    A,  B,  C,  D,  E
/// 	[-1, -1,  1,  9, -1], // A
/// 	[-1, -1, -1, -1,  2], // B
/// 	[ 1, -1, -1,  6, -1], // C
/// 	[ 9, -1,  6, -1, -1], // D
/// 	[-1,  2, -1, -1, -1], // E
/// ];
/// fn euclid_distance(a: usize, b: usize) -> usize {
/// 	[[0, 1, 1, 2, 2], [1, 0, 2, 1, 1], [1, 2, 0, 1, 3], [2, 1, 1, 0, 2], [2, 1, 3, 2, 0]][a][b]
/// }
/// let neighbors = |point: &usize| {
/// 	cost_matrix[*point]
/// 		.iter()
/// 		.enumerate()
/// 		.filter(|&(_, cost)| *cost != -1)
/// 		.map(|(id, _)| id)
/// 		.collect::<Vec<_>>()
/// };
///
/// let problem = Problem::new(A, D, |point: &usize| *point, neighbors)
/// 	.with_cost(|a: &usize, b: &usize| cost_matrix[*a][*b] as usize)
/// 	.with_heuristic(|goal: &usize, point: &usize| euclid_distance(*point, *goal));
///
/// let result = a_star(&problem).unwrap();
///
/// assert_eq!(*result.path, [A, C, D]);
/// assert_eq!(result.cost, 7);
/// ```
///
/// ## Returns
/// the Path with its total Cost and the Costs of every discovered Key, if one was found,
/// or None if the goal is unreachable.
/// The first Vertex in the Path is always the start and the last is the goal
pub fn a_star<P>(problem: &P) -> CostSearchResult<P>
where
	P: CostProblem + HeuristicProblem<Estimate = <P as CostProblem>::Cost>,
{
	a_star_with_config(problem, SearchConfig::default())
}

/// [`a_star`] with a custom [`SearchConfig`]
pub fn a_star_with_config<P>(problem: &P, config: SearchConfig) -> CostSearchResult<P>
where
	P: CostProblem + HeuristicProblem<Estimate = <P as CostProblem>::Cost>,
{
	let goal = problem.goal();
	relaxing_search(problem, config, SearchTrace::start("a_star"), |next, cost| {
		cost.add_cost(problem.heuristic(goal, next))
	})
}

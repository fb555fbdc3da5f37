use super::{relaxing_search, CostSearchResult};
use crate::trace::SearchTrace;
use crate::{CostProblem, SearchConfig};

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The frontier is ordered by the cumulative Cost from the start. Whenever a cheaper Path to
/// an already discovered Key is found, its Cost and parent are replaced and it is pushed
/// again. Outdated entries stay in the frontier and are expanded again without effect.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{dijkstra, Problem};
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
/// 	.with_cost(|a: &usize, b: &usize| cost_matrix[*a][*b] as u32);
///
/// let result = dijkstra(&problem).unwrap();
///
/// assert_eq!(*result.path, [A, C, D]);
/// assert_eq!(result.cost, 7);
/// assert_eq!(result.costs[&C], 1);
/// ```
///
/// If the goal cannot be reached, None is returned:
/// ```
/// # use graph_search::{dijkstra, Problem};
/// # let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// # let cost_matrix: [[i32; 5]; 5] = [
/// #     [-1, -1,  1,  9, -1],
/// #     [-1, -1, -1, -1,  2],
/// #     [ 1, -1, -1,  6, -1],
/// #     [ 9, -1,  6, -1, -1],
/// #     [-1,  2, -1, -1, -1],
/// # ];
/// # let neighbors = |point: &usize| {
/// #     cost_matrix[*point]
/// #         .iter()
/// #         .enumerate()
/// #         .filter(|&(_, cost)| *cost != -1)
/// #         .map(|(id, _)| id)
/// #         .collect::<Vec<_>>()
/// # };
/// let problem = Problem::new(A, E, |point: &usize| *point, neighbors)
/// 	.with_cost(|a: &usize, b: &usize| cost_matrix[*a][*b] as u32);
///
/// assert_eq!(dijkstra(&problem), None);
/// ```
///
/// ## Returns
/// the Path with its total Cost and the Costs of every discovered Key, if one was found,
/// or None if the goal is unreachable.
/// The first Vertex in the Path is always the start and the last is the goal
pub fn dijkstra<P: CostProblem>(problem: &P) -> CostSearchResult<P> {
	dijkstra_with_config(problem, SearchConfig::default())
}

/// [`dijkstra`] with a custom [`SearchConfig`]
pub fn dijkstra_with_config<P: CostProblem>(problem: &P, config: SearchConfig) -> CostSearchResult<P> {
	relaxing_search(problem, config, SearchTrace::start("dijkstra"), |_, cost| cost)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Path, Problem};

	fn triangle(v: &char) -> Vec<char> {
		match v {
			'A' => vec!['B', 'C'],
			'C' => vec!['B'],
			_ => vec![],
		}
	}

	fn triangle_cost(from: &char, to: &char) -> u32 {
		match (from, to) {
			('A', 'B') => 5,
			('A', 'C') => 1,
			('C', 'B') => 1,
			_ => unreachable!("no edge from {} to {}", from, to),
		}
	}

	#[test]
	fn prefers_cheaper_detour() {
		let problem = Problem::new('A', 'B', |v: &char| *v, triangle).with_cost(triangle_cost);

		let result = dijkstra(&problem).unwrap();
		assert_eq!(result.path, Path::new(vec!['A', 'C', 'B']));
		assert_eq!(result.cost, 2);
		assert_eq!(result.costs[&'A'], 0);
		assert_eq!(result.costs[&'B'], 2);
		assert_eq!(result.costs[&'C'], 1);
	}

	#[test]
	fn start_is_goal() {
		let problem = Problem::new('A', 'A', |v: &char| *v, triangle).with_cost(triangle_cost);

		let result = dijkstra(&problem).unwrap();
		assert_eq!(result.path.into_vec(), vec!['A']);
		assert_eq!(result.cost, 0);
		assert_eq!(result.costs.len(), 1);
	}

	#[test]
	fn float_costs() {
		// 0 -> 1 -> 2 -> 3 costs 0.5 per step, 0 -> 3 directly costs 1.75
		let successors = |n: &u8| match n {
			0 => vec![3, 1],
			1 => vec![2],
			2 => vec![3],
			_ => vec![],
		};
		let cost = |a: &u8, b: &u8| if b - a == 3 { 1.75 } else { 0.5 };
		let problem = Problem::new(0_u8, 3, |n: &u8| *n, successors).with_cost(cost);

		let result = dijkstra(&problem).unwrap();
		assert_eq!(result.path.into_vec(), vec![0, 1, 2, 3]);
		assert_eq!(result.cost, 1.5);
	}

	#[test]
	fn infinite_graph() {
		// every integer is connected to its neighbors; the goal is found without
		// exploring the whole (infinite) Graph
		let problem = Problem::new(0_i64, -4, |n: &i64| *n, |n: &i64| [n - 1, n + 1])
			.with_cost(|_: &i64, _: &i64| 1_u64);

		let result = dijkstra(&problem).unwrap();
		assert_eq!(result.path.into_vec(), vec![0, -1, -2, -3, -4]);
		assert_eq!(result.cost, 4);
	}

	#[test]
	fn unreachable_goal() {
		let problem = Problem::new('A', 'Z', |v: &char| *v, triangle).with_cost(triangle_cost);
		assert_eq!(dijkstra(&problem), None);
	}
}

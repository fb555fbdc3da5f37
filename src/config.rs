/// Options for the containers a search allocates.
///
/// These are only hints for the initial capacities: every search returns the same result
/// regardless of the config. Use the `*_with_config` variants of the search Functions (like
/// [`dijkstra_with_config`](crate::dijkstra_with_config)) to pass one.
///
/// Default options:
/// ```
/// # use graph_search::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		frontier_capacity: 16,
/// 		visited_capacity: 64,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
	/// Initial capacity of the frontier (defaults to `16`)
	pub frontier_capacity: usize,
	/// Initial capacity of the Maps storing parents and Costs of discovered Vertices
	/// (defaults to `64`)
	pub visited_capacity: usize,
}

impl SearchConfig {
	/// a SearchConfig for searches that are expected to touch only a handful of Vertices
	///
	/// Values:
	/// ```
	/// # use graph_search::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		frontier_capacity: 0,
	/// 		visited_capacity: 0,
	/// 	},
	/// 	SearchConfig::SMALL
	/// );
	/// ```
	pub const SMALL: SearchConfig = SearchConfig {
		frontier_capacity: 0,
		visited_capacity: 0,
	};
	/// a SearchConfig for searches over large Graphs, to avoid repeated reallocations
	///
	/// Values:
	/// ```
	/// # use graph_search::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		frontier_capacity: 1024,
	/// 		visited_capacity: 4096,
	/// 	},
	/// 	SearchConfig::LARGE
	/// );
	/// ```
	pub const LARGE: SearchConfig = SearchConfig {
		frontier_capacity: 1024,
		visited_capacity: 4096,
	};

	/// Creates a SearchConfig for an expected number of visited Vertices.
	///
	/// The frontier is sized at a quarter of that, similar to the frontier of a search
	/// on a grid.
	/// ```
	/// # use graph_search::SearchConfig;
	/// let config = SearchConfig::with_capacity(1000);
	/// assert_eq!(config.visited_capacity, 1000);
	/// assert_eq!(config.frontier_capacity, 250);
	/// ```
	pub fn with_capacity(visited: usize) -> SearchConfig {
		SearchConfig {
			frontier_capacity: visited / 4,
			visited_capacity: visited,
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			frontier_capacity: 16,
			visited_capacity: 64,
		}
	}
}

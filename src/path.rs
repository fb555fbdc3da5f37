use crate::KeyMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, Index};

/// A sequence of Vertices, as found by a search.
///
/// The first Vertex is always the start of the search and the last one is the goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path<V> {
	steps: Vec<V>,
}

impl<V> Path<V> {
	/// creates a new Path from a sequence of Vertices
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use graph_search::Path;
	/// let path = Path::new(vec!['a', 'b', 'c']);
	///
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path[1], 'b');
	/// ```
	pub fn new(steps: Vec<V>) -> Path<V> {
		Path { steps }
	}

	/// the Vertices of the Path
	pub fn into_vec(self) -> Vec<V> {
		self.steps
	}
}

impl<V> Index<usize> for Path<V> {
	type Output = V;
	fn index(&self, index: usize) -> &V {
		&self.steps[index]
	}
}

impl<V> Deref for Path<V> {
	type Target = [V];
	fn deref(&self) -> &[V] {
		&self.steps
	}
}

impl<V> IntoIterator for Path<V> {
	type Item = V;
	type IntoIter = std::vec::IntoIter<V>;
	fn into_iter(self) -> Self::IntoIter {
		self.steps.into_iter()
	}
}

impl<V> From<Path<V>> for Vec<V> {
	fn from(path: Path<V>) -> Vec<V> {
		path.steps
	}
}

fn write_steps<V: fmt::Display>(fmt: &mut fmt::Formatter, steps: &[V]) -> fmt::Result {
	match steps.split_first() {
		None => write!(fmt, "<empty>"),
		Some((first, rest)) => {
			write!(fmt, "{}", first)?;
			for p in rest {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

impl<V: fmt::Display> fmt::Display for Path<V> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write_steps(fmt, &self.steps)
	}
}

/// The result of a search that keeps track of Costs ([`dijkstra`](crate::dijkstra) and
/// [`a_star`](crate::a_star)).
#[derive(Debug, Clone, PartialEq)]
pub struct CostPath<V, K: Hash + Eq, C> {
	/// the Path from the start to the goal
	pub path: Path<V>,
	/// the total Cost of the Path
	pub cost: C,
	/// the cheapest known Cost to every Key the search has seen, including ones that were
	/// discovered but never expanded
	pub costs: KeyMap<K, C>,
}

impl<V, K: Hash + Eq, C> CostPath<V, K, C> {
	/// creates a new CostPath
	pub fn new(path: Path<V>, cost: C, costs: KeyMap<K, C>) -> CostPath<V, K, C> {
		CostPath { path, cost, costs }
	}
}

impl<V, K: Hash + Eq, C> Deref for CostPath<V, K, C> {
	type Target = [V];
	fn deref(&self) -> &[V] {
		&self.path
	}
}

impl<V: fmt::Display, K: Hash + Eq, C: fmt::Display> fmt::Display for CostPath<V, K, C> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		write_steps(fmt, &self.path)
	}
}

/// Walks the `parents` Map from `goal` back to `start`.
///
/// `parents` maps the Key of every discovered Vertex to the Vertex it was reached from.
/// The walk stops at the first Vertex whose Key equals the Key of `start`, or when a Vertex
/// has no recorded parent. `start` itself is always the first Vertex of the result.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{reconstruct_path, KeyMap};
/// let mut parents = KeyMap::new();
/// parents.insert('b', 'a');
/// parents.insert('c', 'b');
/// parents.insert('x', 'a');
///
/// let path = reconstruct_path(&parents, |v: &char| *v, &'a', 'c');
///
/// assert_eq!(*path, ['a', 'b', 'c']);
/// ```
pub fn reconstruct_path<V, K>(
	parents: &KeyMap<K, V>,
	key: impl Fn(&V) -> K,
	start: &V,
	goal: V,
) -> Path<V>
where
	V: Clone,
	K: Hash + Eq,
{
	let start_key = key(start);
	let mut steps = vec![];
	let mut current = Some(goal);

	// a chain can't be longer than the Map
	for _ in 0..=parents.len() {
		let vertex = match current {
			Some(vertex) => vertex,
			None => break,
		};
		let vertex_key = key(&vertex);
		if vertex_key == start_key {
			break;
		}
		current = parents.get(&vertex_key).cloned();
		steps.push(vertex);
	}
	steps.push(start.clone());
	steps.reverse();

	Path::new(steps)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn path_index() {
		let path = Path::new(vec![4, 2, 0]);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec![4, 2, 0]);

		assert_eq!(&format!("{}", path), "4 -> 2 -> 0");
	}

	#[test]
	fn path_display_empty() {
		let path = Path::new(Vec::<i32>::new());

		assert_eq!(&format!("{}", path), "<empty>");
	}

	#[test]
	fn cost_path_display() {
		let path = CostPath::new(Path::new(vec!['a', 'c', 'b']), 2, KeyMap::<char, u32>::new());

		assert_eq!(&format!("{}", path), "Path[Cost = 2]: a -> c -> b");
	}

	#[test]
	fn reconstruct_start_is_goal() {
		let parents = KeyMap::<u32, u32>::new();
		let path = reconstruct_path(&parents, |v: &u32| *v, &7, 7);

		assert_eq!(path.into_vec(), vec![7]);
	}

	#[test]
	fn reconstruct_uses_keys_not_values() {
		// vertices carry extra data that isn't part of their identity
		let mut parents = KeyMap::new();
		parents.insert(1, (0, "discovered first"));
		parents.insert(2, (1, "via one"));

		let path = reconstruct_path(&parents, |v: &(u32, &str)| v.0, &(0, "start"), (2, "goal"));

		assert_eq!(path.into_vec(), vec![(0, "start"), (1, "via one"), (2, "goal")]);
	}

	#[test]
	fn reconstruct_broken_chain() {
		let mut parents = KeyMap::new();
		parents.insert(3, 2);

		let path = reconstruct_path(&parents, |v: &u32| *v, &0, 3);

		assert_eq!(path.into_vec(), vec![0, 2, 3]);
	}

	#[test]
	fn reconstruct_cycle_terminates() {
		let mut parents = KeyMap::new();
		parents.insert(1, 2);
		parents.insert(2, 1);

		let path = reconstruct_path(&parents, |v: &u32| *v, &0, 1);

		assert_eq!(path.first(), Some(&0));
		assert_eq!(path.last(), Some(&1));
	}
}

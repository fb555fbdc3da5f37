//! An array-backed binary Min-Heap ordered by a scoring Function.

use std::fmt;

/// A binary Min-Heap that orders its Elements by a caller-supplied scoring Function.
///
/// Unlike [`std::collections::BinaryHeap`], the Elements themselves don't need to implement
/// [`Ord`]. Every comparison goes through `score`, which may return anything that is
/// [`PartialOrd`] (integers, floats, tuples, ...).
///
/// The Heap keeps the invariant that every Element's score is `<=` the scores of both of
/// its children, where the children of index `i` live at `2i + 1` and `2i + 2`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::MinHeap;
/// let mut heap = MinHeap::new(|word: &&str| word.len());
/// heap.push("three");
/// heap.push("a");
/// heap.push("four");
///
/// assert_eq!(heap.pop(), Some("a"));
/// assert_eq!(heap.pop(), Some("four"));
/// assert_eq!(heap.pop(), Some("three"));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Clone)]
pub struct MinHeap<T, F> {
	values: Vec<T>,
	score: F,
}

fn left(i: usize) -> usize {
	2 * i + 1
}

fn right(i: usize) -> usize {
	2 * i + 2
}

fn parent(i: usize) -> usize {
	(i - 1) / 2
}

impl<T, F, S> MinHeap<T, F>
where
	F: Fn(&T) -> S,
	S: PartialOrd,
{
	/// Creates an empty Heap ordered by `score`
	pub fn new(score: F) -> MinHeap<T, F> {
		MinHeap {
			values: Vec::new(),
			score,
		}
	}

	/// Creates an empty Heap with space for at least `capacity` Elements
	pub fn with_capacity(score: F, capacity: usize) -> MinHeap<T, F> {
		MinHeap {
			values: Vec::with_capacity(capacity),
			score,
		}
	}

	/// Creates a Heap from an arbitrary Vec of Elements.
	///
	/// The Elements are rearranged in O(n) so that the Heap invariant holds.
	///
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use graph_search::MinHeap;
	/// let mut heap = MinHeap::from_vec(|n: &i32| *n, vec![5, 3, 8, 1]);
	///
	/// assert_eq!(heap.peek(), Some(&1));
	/// assert_eq!(heap.len(), 4);
	/// ```
	pub fn from_vec(score: F, values: Vec<T>) -> MinHeap<T, F> {
		let mut heap = MinHeap { values, score };
		if heap.values.len() > 1 {
			for i in (0..=parent(heap.values.len() - 1)).rev() {
				heap.bubble_down(i);
			}
		}
		heap
	}

	/// Inserts an Element into the Heap in O(log n)
	pub fn push(&mut self, item: T) {
		self.values.push(item);
		self.bubble_up(self.values.len() - 1);
	}

	/// Removes the Element with the smallest score, or returns `None` if the Heap is empty
	pub fn pop(&mut self) -> Option<T> {
		let last = self.values.len().checked_sub(1)?;
		self.values.swap(0, last);
		let min = self.values.pop();

		if self.values.len() > 1 {
			self.bubble_down(0);
		}
		min
	}

	/// Returns the Element with the smallest score without removing it
	pub fn peek(&self) -> Option<&T> {
		self.values.first()
	}

	fn bubble_up(&mut self, mut index: usize) {
		while index > 0 {
			let parent_index = parent(index);
			if (self.score)(&self.values[parent_index]) > (self.score)(&self.values[index]) {
				self.values.swap(index, parent_index);
				index = parent_index;
			} else {
				break;
			}
		}
	}

	fn bubble_down(&mut self, mut index: usize) {
		loop {
			let min_index = self.smallest_of_family(index);
			if min_index == index {
				break;
			}
			self.values.swap(index, min_index);
			index = min_index;
		}
	}

	/// the index of the smallest Element among `index` and its children.
	/// `index` wins ties, then the left child.
	fn smallest_of_family(&self, index: usize) -> usize {
		let mut min_index = index;
		let mut min_score = (self.score)(&self.values[index]);

		for child in [left(index), right(index)] {
			if let Some(value) = self.values.get(child) {
				let score = (self.score)(value);
				if score < min_score {
					min_index = child;
					min_score = score;
				}
			}
		}
		min_index
	}
}

impl<T, F> MinHeap<T, F> {
	/// The number of Elements in the Heap
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// `true` if the Heap contains no Elements
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Removes all Elements, keeping the allocated memory and the scoring Function
	pub fn clear(&mut self) {
		self.values.clear();
	}

	/// The Elements in their internal (heap) order
	pub fn as_slice(&self) -> &[T] {
		&self.values
	}

	/// Consumes the Heap, returning the Elements in their internal (heap) order
	pub fn into_vec(self) -> Vec<T> {
		self.values
	}
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		fmt.debug_struct("MinHeap")
			.field("values", &self.values)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use nanorand::{Rng, WyRand};

	fn assert_heap_invariant<T, F: Fn(&T) -> u32>(heap: &MinHeap<T, F>) {
		let values = heap.as_slice();
		for i in 1..values.len() {
			assert!(
				(heap.score)(&values[parent(i)]) <= (heap.score)(&values[i]),
				"parent of index {} has a larger score",
				i
			);
		}
	}

	#[test]
	fn empty_pop() {
		let mut heap = MinHeap::new(|n: &u32| *n);
		assert_eq!(heap.pop(), None);
		assert!(heap.is_empty());
		assert_eq!(heap.peek(), None);
	}

	#[test]
	fn single_element() {
		let mut heap = MinHeap::new(|n: &u32| *n);
		heap.push(42);
		assert_eq!(heap.len(), 1);
		assert_eq!(heap.pop(), Some(42));
		assert_eq!(heap.pop(), None);
	}

	#[test]
	fn pops_in_order() {
		let mut heap = MinHeap::new(|n: &u32| *n);
		for n in [7, 3, 9, 1, 4, 4, 0, 12, 6] {
			heap.push(n);
			assert_heap_invariant(&heap);
		}
		let mut popped = vec![];
		while let Some(n) = heap.pop() {
			assert_heap_invariant(&heap);
			popped.push(n);
		}
		assert_eq!(popped, vec![0, 1, 3, 4, 4, 6, 7, 9, 12]);
	}

	#[test]
	fn orders_by_score_not_value() {
		// order by distance to 10
		let mut heap = MinHeap::new(|n: &i32| (10 - *n).unsigned_abs());
		for n in [0, 20, 9, 13, 10] {
			heap.push(n);
		}
		assert_eq!(heap.pop(), Some(10));
		assert_eq!(heap.pop(), Some(9));
		assert_eq!(heap.pop(), Some(13));
	}

	#[test]
	fn ties_keep_parent_then_left_child() {
		let mut heap = MinHeap::new(|n: &(u32, char)| n.0);
		for n in [(1, 'a'), (2, 'b'), (2, 'c')] {
			heap.push(n);
		}
		assert_eq!(heap.pop(), Some((1, 'a')));
		// 'c' moved to the root and its equal child doesn't replace it
		assert_eq!(heap.as_slice(), &[(2, 'c'), (2, 'b')]);
		assert_eq!(heap.pop(), Some((2, 'c')));
		assert_eq!(heap.pop(), Some((2, 'b')));

		for n in [(0, 'r'), (1, 'x'), (1, 'y'), (5, 'z')] {
			heap.push(n);
		}
		assert_eq!(heap.pop(), Some((0, 'r')));
		// both children are equal, the left one rises
		assert_eq!(heap.as_slice(), &[(1, 'x'), (5, 'z'), (1, 'y')]);
		assert_eq!(heap.pop(), Some((1, 'x')));
		assert_eq!(heap.pop(), Some((1, 'y')));
		assert_eq!(heap.pop(), Some((5, 'z')));
	}

	#[test]
	fn float_scores() {
		let mut heap = MinHeap::new(|n: &(char, f64)| n.1);
		heap.push(('a', 2.5));
		heap.push(('b', -1.0));
		heap.push(('c', 0.25));
		assert_eq!(heap.pop().map(|n| n.0), Some('b'));
		assert_eq!(heap.pop().map(|n| n.0), Some('c'));
		assert_eq!(heap.pop().map(|n| n.0), Some('a'));
	}

	#[test]
	fn random_push_pop() {
		let mut rng = WyRand::new_seed(4);
		let mut heap = MinHeap::with_capacity(|n: &u32| *n, 64);
		let mut reference = vec![];

		for _ in 0..2000 {
			if reference.is_empty() || rng.generate_range(0_u32..3) != 0 {
				let n = rng.generate_range(0_u32..500);
				heap.push(n);
				reference.push(n);
			} else {
				reference.sort_unstable();
				let expected = reference.remove(0);
				assert_eq!(heap.pop(), Some(expected));
			}
			assert_heap_invariant(&heap);
			assert_eq!(heap.len(), reference.len());
		}

		reference.sort_unstable();
		let mut drained = vec![];
		while let Some(n) = heap.pop() {
			drained.push(n);
		}
		assert_eq!(drained, reference);
	}

	#[test]
	fn from_vec_heapifies() {
		let mut rng = WyRand::new_seed(17);
		let values: Vec<u32> = (0..257).map(|_| rng.generate_range(0_u32..100)).collect();
		let mut sorted = values.clone();
		sorted.sort_unstable();

		let mut heap = MinHeap::from_vec(|n: &u32| *n, values);
		assert_heap_invariant(&heap);

		let mut drained = vec![];
		while let Some(n) = heap.pop() {
			drained.push(n);
		}
		assert_eq!(drained, sorted);
	}

	#[test]
	fn clear_keeps_heap_usable() {
		let mut heap = MinHeap::new(|n: &u32| *n);
		heap.push(3);
		heap.push(1);
		heap.clear();
		assert!(heap.is_empty());

		heap.push(5);
		heap.push(2);
		assert_eq!(heap.pop(), Some(2));
		assert_eq!(heap.into_vec(), vec![5]);
	}

	#[test]
	fn debug_output() {
		let heap = MinHeap::from_vec(|n: &u32| *n, vec![2, 1]);
		assert_eq!(format!("{:?}", heap), "MinHeap { values: [1, 2] }");
	}
}

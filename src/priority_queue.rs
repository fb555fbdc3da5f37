use crate::MinHeap;

/// A Value stored in a [`PriorityQueue`] together with its Priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityNode<T, P> {
	/// the stored Value
	pub value: T,
	/// the Priority. Smaller Priorities are popped first
	pub priority: P,
}

type ScoreFn<T, P> = fn(&PriorityNode<T, P>) -> P;

fn score_fn<T, P: Copy>() -> ScoreFn<T, P> {
	|node| node.priority
}

/// A Min-Priority-Queue: [`pop`](PriorityQueue::pop) always returns the Value with the
/// smallest Priority.
///
/// This is a thin adapter around [`MinHeap`] that scores every Node by its Priority.
/// Values with equal Priority are returned in an unspecified (but deterministic) order.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.push('b', 2.0);
/// queue.push('c', 3.5);
/// queue.push('a', 0.5);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.pop(), Some('a'));
/// assert_eq!(queue.pop(), Some('b'));
/// assert_eq!(queue.pop(), Some('c'));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P> {
	heap: MinHeap<PriorityNode<T, P>, ScoreFn<T, P>>,
}

impl<T, P: Copy + PartialOrd> PriorityQueue<T, P> {
	/// Creates an empty PriorityQueue
	pub fn new() -> PriorityQueue<T, P> {
		PriorityQueue {
			heap: MinHeap::new(score_fn()),
		}
	}

	/// Creates an empty PriorityQueue with space for at least `capacity` Values
	pub fn with_capacity(capacity: usize) -> PriorityQueue<T, P> {
		PriorityQueue {
			heap: MinHeap::with_capacity(score_fn(), capacity),
		}
	}

	/// Adds a Value with the given Priority
	pub fn push(&mut self, value: T, priority: P) {
		self.heap.push(PriorityNode { value, priority });
	}

	/// Removes the Value with the smallest Priority, or returns `None` if the Queue is empty
	pub fn pop(&mut self) -> Option<T> {
		self.heap.pop().map(|node| node.value)
	}

	/// Same as [`pop`](PriorityQueue::pop), but also returns the Priority of the Value
	pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
		self.heap.pop().map(|node| (node.value, node.priority))
	}

	/// The Value with the smallest Priority and its Priority, without removing it
	pub fn peek(&self) -> Option<(&T, P)> {
		self.heap.peek().map(|node| (&node.value, node.priority))
	}
}

impl<T, P> PriorityQueue<T, P> {
	/// The number of Values in the Queue
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// `true` if the Queue contains no Values
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Removes all Values
	pub fn clear(&mut self) {
		self.heap.clear();
	}
}

impl<T, P: Copy + PartialOrd> Default for PriorityQueue<T, P> {
	fn default() -> PriorityQueue<T, P> {
		PriorityQueue::new()
	}
}

impl<T, P: Copy + PartialOrd> Extend<(T, P)> for PriorityQueue<T, P> {
	fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
		for (value, priority) in iter {
			self.push(value, priority);
		}
	}
}

impl<T, P: Copy + PartialOrd> FromIterator<(T, P)> for PriorityQueue<T, P> {
	fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> PriorityQueue<T, P> {
		let nodes = iter
			.into_iter()
			.map(|(value, priority)| PriorityNode { value, priority })
			.collect();
		PriorityQueue {
			heap: MinHeap::from_vec(score_fn(), nodes),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_then_pop() {
		let mut queue = PriorityQueue::new();
		queue.push("only", 7);
		assert_eq!(queue.pop(), Some("only"));
		assert!(queue.is_empty());
	}

	#[test]
	fn pop_empty() {
		let mut queue: PriorityQueue<u8, u32> = PriorityQueue::default();
		assert_eq!(queue.pop(), None);
		assert_eq!(queue.pop_with_priority(), None);
		assert_eq!(queue.peek(), None);
	}

	#[test]
	fn values_need_no_ordering() {
		#[derive(Debug, PartialEq)]
		struct Opaque(&'static str);

		let mut queue = PriorityQueue::with_capacity(4);
		queue.push(Opaque("late"), 10);
		queue.push(Opaque("early"), 1);
		assert_eq!(queue.peek(), Some((&Opaque("early"), 1)));
		assert_eq!(queue.pop_with_priority(), Some((Opaque("early"), 1)));
		assert_eq!(queue.pop_with_priority(), Some((Opaque("late"), 10)));
	}

	#[test]
	fn len_tracks_contents() {
		let mut queue = PriorityQueue::new();
		queue.extend([('x', 3), ('y', 1), ('z', 2)]);
		assert_eq!(queue.len(), 3);
		queue.pop();
		assert_eq!(queue.len(), 2);
		queue.clear();
		assert_eq!(queue.len(), 0);
	}

	#[test]
	fn collect_from_iter() {
		let mut queue: PriorityQueue<char, f32> =
			[('c', 3.0), ('a', 1.0), ('d', 4.0), ('b', 2.0)].into_iter().collect();
		let mut out = String::new();
		while let Some(c) = queue.pop() {
			out.push(c);
		}
		assert_eq!(out, "abcd");
	}
}

//! A min-priority queue implemented with a binary heap.
//!
//! The heap lives in a dense, zero-indexed `Vec`: the children of slot `i` sit at
//! `2i + 1` and `2i + 2`. Only the root is ordered with respect to everything
//! else; the remaining slots are heap-ordered, not sorted.

use crate::error::{GraphError, Result};
use core::cmp::Ord;
use core::fmt;

/// A priority queue implemented with a binary min-heap.
///
/// The front element is always the smallest one according to `T`'s total order.
/// Equal elements are not kept in insertion order.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `enqueue` | \(O(\log n)\) |
/// | `dequeue` | \(O(\log n)\) |
/// | `peek`    | \(O(1)\) |
///
/// ```
/// use waygraph::PriorityQueue;
///
/// let mut queue: PriorityQueue<i32> = [10, 7, 6, 1].into_iter().collect();
/// assert_eq!(queue.to_string(), "1,6,7,10");
/// assert_eq!(queue.dequeue().unwrap(), 1);
/// assert_eq!(*queue.peek().unwrap(), 6);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    data: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Adds an element, percolating it up to its place.
    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.data.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let item = self.data.swap_remove(0);
        if self.data.len() > 1 {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Returns the smallest element without removing it.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(GraphError::EmptyQueue)
    }

    /// Consumes the queue, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.dequeue() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.data[node] < self.data[parent] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right] < self.data[left] {
                smaller = right;
            }

            if self.data[smaller] < self.data[node] {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T> PriorityQueue<T> {
    /// Returns the number of elements in the queue.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in backing-array order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Renders the backing array, not the dequeue order.
impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn queue_of(values: &[i32]) -> PriorityQueue<i32> {
        let mut queue = PriorityQueue::new();
        for &value in values {
            queue.enqueue(value);
        }
        queue
    }

    fn drain(queue: &mut PriorityQueue<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while !queue.is_empty() {
            out.push(queue.dequeue().unwrap());
        }
        out
    }

    #[test]
    fn test_enqueue_array_order_distinct() {
        let queue = queue_of(&[10, 7, 6, 1, 2, 3, 5, 4, 9, 8]);
        assert_eq!(queue.to_string(), "1,2,3,4,6,7,5,10,9,8");
    }

    #[test]
    fn test_enqueue_array_order_repeated() {
        let queue = queue_of(&[10, 5, 6, 1, 2, 3, 6, 4, 5, 8]);
        assert_eq!(queue.to_string(), "1,2,3,4,5,6,6,10,5,8");
    }

    #[test]
    fn test_dequeue_pushes_last_element_down() {
        let mut queue = queue_of(&[10, 7, 6, 1, 2, 3, 5, 4, 9, 8]);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.to_string(), "2,4,3,8,6,7,5,10,9");
    }

    #[test]
    fn test_dequeue_sorted() {
        let mut queue = queue_of(&[10, 7, 6, 1, 2, 3, 5, 4, 9, 8]);
        assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        let mut queue = queue_of(&[10, 5, 6, 1, 2, 3, 6, 4, 5, 8]);
        assert_eq!(drain(&mut queue), vec![1, 2, 3, 4, 5, 5, 6, 6, 8, 10]);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = PriorityQueue::<i32>::new();
        assert_eq!(queue.to_string(), "");
        assert_eq!(queue.peek().unwrap_err().kind(), ErrorKind::EmptyQueue);
        assert_eq!(queue.dequeue().unwrap_err().kind(), ErrorKind::EmptyQueue);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let queue = queue_of(&[3, 1, 2]);
        assert_eq!(*queue.peek().unwrap(), 1);
        assert_eq!(*queue.peek().unwrap(), 1);
        assert_eq!(queue.count(), 3);
    }

    #[test]
    fn test_clear_and_collect() {
        let mut queue: PriorityQueue<i32> = vec![4, 2, 8].into_iter().collect();
        assert_eq!(queue.count(), 3);
        assert_eq!(queue.iter().count(), 3);
        queue.clear();
        assert!(queue.is_empty());

        queue.extend([9, 1, 5]);
        assert_eq!(queue.into_sorted_vec(), vec![1, 5, 9]);
    }
}

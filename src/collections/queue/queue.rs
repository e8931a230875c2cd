use std::collections::VecDeque;
use std::collections::vec_deque::{self, Iter};

/// A first-in-first-out collection. Items come out in exactly the order they were enqueued.
///
/// Backed by a ring buffer, so removing from the front doesn't shift the remaining items.
/// Dequeuing or peeking an empty Queue returns [`None`].
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `is_empty` | `O(1)` |
///
/// \* Amortized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue { items: VecDeque::new() }
    }

    /// Adds `item` to the back of the Queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the front of the Queue, or None if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::queue::Queue;
    /// let mut queue = Queue::new();
    /// queue.enqueue("first");
    /// queue.enqueue("second");
    /// assert_eq!(queue.dequeue(), Some("first"));
    /// assert_eq!(queue.dequeue(), Some("second"));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the item at the front of the Queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of items waiting in the Queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the Queue from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Consumes the Queue, yielding items in the order they would have been dequeued.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

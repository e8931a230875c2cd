use std::iter::Rev;
use std::ops::Deref;
use std::slice;

/// A last-in-first-out collection. The most recently pushed item that hasn't been popped is
/// always the next one out.
///
/// Popping or peeking an empty Stack isn't an error, it just returns [`None`].
///
/// The Stack dereferences to a slice ordered from bottom to top, whereas [`Stack::iter`] walks
/// from the top down, in the order items would be popped.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `is_empty` | `O(1)` |
///
/// \* Amortized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub const fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    /// Pushes `item` onto the top of the Stack.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::stack::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.peek(), Some(&2));
    /// ```
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the item on top of the Stack, or None if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::stack::Stack;
    /// let mut stack: Stack<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(stack.pop(), Some('c'));
    /// assert_eq!(stack.pop(), Some('b'));
    /// assert_eq!(stack.pop(), Some('a'));
    /// assert_eq!(stack.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the item on top of the Stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a mutable reference to the item on top of the Stack without removing it.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns the number of items on the Stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the Stack from top to bottom.
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Stack<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes each item in order, so the last item yielded ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

use std::ops::Deref;
use std::slice;

use crate::collections::traits::ArrayManager;

/// An ordered, index-addressable collection that allows duplicates, implementing
/// [`ArrayManager`].
///
/// Removal is lenient: removing a value that isn't present, or an index that is out of range,
/// does nothing and reports that nothing was removed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the manager.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `remove` | `O(n)` |
/// | `remove_at_index` | `O(n-i)` |
/// | `get_length` | `O(1)` |
/// | `get_array` | `O(n)` |
///
/// \* Amortized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericArrayManager<T> {
    pub(crate) items: Vec<T>,
}

impl<T> GenericArrayManager<T> {
    /// Creates a new, empty manager.
    pub const fn new() -> GenericArrayManager<T> {
        GenericArrayManager { items: Vec::new() }
    }

    /// Returns the number of items held by the manager.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the manager holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts a signed index into a position within the manager, if there is one.
    fn position(&self, index: isize) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|index| *index < self.items.len())
    }
}

impl<T> ArrayManager<T> for GenericArrayManager<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// # Examples
    /// ```
    /// # use generic_containers::collections::manager::GenericArrayManager;
    /// # use generic_containers::collections::traits::ArrayManager;
    /// let mut manager: GenericArrayManager<_> = [1, 2, 1].into_iter().collect();
    /// assert!(manager.remove(&1));
    /// assert_eq!(manager.get_array(), [2, 1]);
    /// assert!(!manager.remove(&3));
    /// ```
    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            },
            None => false,
        }
    }

    /// # Examples
    /// ```
    /// # use generic_containers::collections::manager::GenericArrayManager;
    /// # use generic_containers::collections::traits::ArrayManager;
    /// let mut manager: GenericArrayManager<_> = "abc".chars().collect();
    /// assert_eq!(manager.remove_at_index(1), Some('b'));
    /// assert_eq!(manager.remove_at_index(-1), None);
    /// assert_eq!(manager.remove_at_index(2), None);
    /// assert_eq!(manager.get_length(), 2);
    /// ```
    fn remove_at_index(&mut self, index: isize) -> Option<T> {
        let index = self.position(index)?;
        Some(self.items.remove(index))
    }

    fn get_length(&self) -> usize {
        self.items.len()
    }

    fn get_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Default for GenericArrayManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GenericArrayManager<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> Extend<T> for GenericArrayManager<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for GenericArrayManager<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut manager = GenericArrayManager::new();
        manager.extend(iter);
        manager
    }
}

impl<'a, T> IntoIterator for &'a GenericArrayManager<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

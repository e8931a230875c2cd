use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use super::{KeySearch, Node};

/// An ordered map from string keys to [`Node`]s.
///
/// Keys are unique. Array index keys (canonical decimal integers below `u32::MAX`, such as `"0"`
/// or `"42"` but not `"042"`) enumerate first, in ascending numeric order. Every other key follows
/// in the order it was first inserted. Inserting a key that already exists replaces its value but
/// keeps its position.
///
/// Two Mappings are equal if they hold the same keys with equal values, regardless of order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Mapping.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(n)` |
/// | `get` | `O(n)` |
/// | `len` | `O(1)` |
#[derive(Debug, Clone)]
pub struct Mapping<T> {
    pub(crate) entries: Vec<(String, Node<T>)>,
}

impl<T> Mapping<T> {
    /// Creates a new, empty Mapping.
    pub const fn new() -> Mapping<T> {
        Mapping { entries: Vec::new() }
    }

    /// Returns the number of keys in the Mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the Mapping contains no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`. If the key was already present, its value is replaced in place
    /// and the previous value is returned.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::nested::{Mapping, Node};
    /// let mut mapping = Mapping::new();
    /// mapping.insert("b", Node::Scalar(1));
    /// mapping.insert("a", Node::Scalar(2));
    /// assert_eq!(mapping.insert("b", Node::Scalar(3)), Some(Node::Scalar(1)));
    ///
    /// mapping.insert("10", Node::Scalar(4));
    /// mapping.insert("9", Node::Scalar(5));
    /// assert_eq!(mapping.keys().collect::<Vec<_>>(), ["9", "10", "b", "a"]);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Node<T>) -> Option<Node<T>> {
        let key = key.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            return Some(std::mem::replace(existing, value));
        }

        match array_index(&key) {
            Some(index) => {
                // Index keys form a sorted prefix of the entries.
                let position = self.entries.partition_point(|(existing, _)| {
                    array_index(existing).is_some_and(|other| other < index)
                });
                self.entries.insert(position, (key, value));
            },
            None => self.entries.push((key, value)),
        }
        None
    }

    /// Returns a reference to the value stored under `key`, or None if there is no such key.
    pub fn get(&self, key: &str) -> Option<&Node<T>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over all entries, in enumeration order.
    pub fn iter(&self) -> Entries<'_, T> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Node<T>> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns a lazy iterator over every value stored under `target` in this Mapping or any
    /// Mapping nested below it.
    pub fn find_by_key<'a>(&'a self, target: &'a str) -> KeySearch<'a, T> {
        KeySearch::new(self, target)
    }
}

/// Returns the numeric value of `key` if it is an array index: the canonical decimal form of an
/// integer in `0..u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    let canonical = key == "0" || !key.starts_with('0');
    if !canonical || !key.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

impl<T> Default for Mapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Mapping<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<T: Eq> Eq for Mapping<T> {}

impl<K: Into<String>, T> Extend<(K, Node<T>)> for Mapping<T> {
    fn extend<I: IntoIterator<Item = (K, Node<T>)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, T> FromIterator<(K, Node<T>)> for Mapping<T> {
    fn from_iter<I: IntoIterator<Item = (K, Node<T>)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<T> IntoIterator for Mapping<T> {
    type Item = (String, Node<T>);
    type IntoIter = vec::IntoIter<(String, Node<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Mapping<T> {
    type Item = (&'a str, &'a Node<T>);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Display> Display for Mapping<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// A borrowed iterator over the entries of a [`Mapping`], in enumeration order.
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    pub(crate) inner: slice::Iter<'a, (String, Node<T>)>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a str, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key.as_str(), value))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

use std::iter::FusedIterator;

use super::{Entries, Mapping, Node};

/// Returns every value stored under `target`, anywhere within `node`, in the order described by
/// [`KeySearch`].
///
/// # Examples
/// ```
/// # use generic_containers::node;
/// # use generic_containers::nested::{Node, find_value_by_key};
/// let data = node!({ "a": 1, "b": { "a": 2, "c": { "a": 3 } } });
/// let found = find_value_by_key(&data, "a");
/// assert_eq!(found, [&Node::Scalar(1), &Node::Scalar(2), &Node::Scalar(3)]);
/// ```
pub fn find_value_by_key<'a, T>(node: &'a Node<T>, target: &'a str) -> Vec<&'a Node<T>> {
    node.find_by_key(target).collect()
}

/// A lazy, depth-first search for every value stored under a target key.
///
/// The keys of each [`Mapping`] are visited in enumeration order. When a key matches, its value
/// is yielded before anything nested inside that value, so an outer match always comes before an
/// inner one. Only mappings are searched into: an array is treated as a single opaque value, so
/// any mappings inside it are never visited.
///
/// The search keeps its own stack of partially visited mappings, so deeply nested input doesn't
/// grow the call stack.
#[derive(Debug, Clone)]
pub struct KeySearch<'a, T> {
    target: &'a str,
    stack: Vec<Entries<'a, T>>,
}

impl<'a, T> KeySearch<'a, T> {
    pub(crate) fn new(root: &'a Mapping<T>, target: &'a str) -> KeySearch<'a, T> {
        KeySearch {
            target,
            stack: vec![root.iter()],
        }
    }

    pub(crate) const fn empty(target: &'a str) -> KeySearch<'a, T> {
        KeySearch {
            target,
            stack: Vec::new(),
        }
    }

    /// Returns the key being searched for.
    pub const fn target(&self) -> &'a str {
        self.target
    }
}

impl<'a, T> Iterator for KeySearch<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // None once every mapping has been exhausted.
            let entries = self.stack.last_mut()?;

            match entries.next() {
                Some((key, value)) => {
                    // Queue up the value's own entries so they're visited before its siblings.
                    if let Node::Mapping(mapping) = value {
                        self.stack.push(mapping.iter());
                    }

                    if key == self.target {
                        return Some(value);
                    }
                },
                None => {
                    self.stack.pop();
                },
            }
        }
    }
}

impl<T> FusedIterator for KeySearch<'_, T> {}

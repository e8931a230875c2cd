use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

use super::{KeySearch, Mapping};

/// A value in an arbitrarily nested structure: a scalar of type `T`, an array of nodes, or a
/// mapping from string keys to nodes.
///
/// Because a Node owns all of its children, a Node can never contain itself, so every traversal
/// over one is guaranteed to end.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Node<T> {
    Scalar(T),
    Array(Vec<Node<T>>),
    Mapping(Mapping<T>),
}

impl<T> Node<T> {
    pub const fn as_scalar(&self) -> Option<&T> {
        match self {
            Node::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node<T>]> {
        match self {
            Node::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub const fn as_mapping(&self) -> Option<&Mapping<T>> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Takes the scalar value out of this Node, or hands the Node back if it isn't a scalar.
    pub fn into_scalar(self) -> Result<T, Node<T>> {
        match self {
            Node::Scalar(value) => Ok(value),
            other => Err(other),
        }
    }

    /// Returns a lazy iterator over every value stored under `target`, anywhere below this Node.
    /// See [`KeySearch`] for the order values are yielded in.
    ///
    /// A Node that isn't a mapping has no keys, so searching it yields nothing.
    pub fn find_by_key<'a>(&'a self, target: &'a str) -> KeySearch<'a, T> {
        match self {
            Node::Mapping(mapping) => mapping.find_by_key(target),
            _ => KeySearch::empty(target),
        }
    }
}

impl<T> From<Mapping<T>> for Node<T> {
    fn from(value: Mapping<T>) -> Self {
        Node::Mapping(value)
    }
}

impl<T> From<Vec<Node<T>>> for Node<T> {
    fn from(value: Vec<Node<T>>) -> Self {
        Node::Array(value)
    }
}

impl<T> FromIterator<Node<T>> for Node<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

impl<T: Display> Display for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(value) => write!(f, "{value}"),
            Node::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Node::Mapping(mapping) => write!(f, "{mapping}"),
        }
    }
}

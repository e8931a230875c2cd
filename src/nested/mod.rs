//! Arbitrarily nested key-value data, and searching it by key.
//!
//! A [`Node`] is either a scalar, an array of nodes or a [`Mapping`] from string keys to nodes.
//! [`find_value_by_key`] (or the lazy [`KeySearch`] behind it) finds every value stored under a
//! given key, at any depth.
//!
//! The [`node!`](crate::node) macro builds nodes from a JSON-like literal:
//! ```
//! # use generic_containers::node;
//! # use generic_containers::nested::{Node, find_value_by_key};
//! let data = node!({ "a": 1, "b": { "a": 2, "c": [3, 4] } });
//! assert_eq!(find_value_by_key(&data, "a"), [&Node::Scalar(1), &Node::Scalar(2)]);
//! ```

#[cfg(feature = "json")]
mod json;
mod mapping;
mod node;
mod search;
mod tests;

pub use mapping::*;
pub use node::*;
pub use search::*;

/// Builds a [`Node`] from a JSON-like literal. Keys must be string literals and nested values
/// must each be a single token tree, so wrap anything more complex (like `-1`) in parentheses.
///
/// ```
/// # use generic_containers::node;
/// # use generic_containers::nested::{Mapping, Node};
/// let node = node!({ "name": "root", "children": ["a", "b"], "meta": {} });
/// let Node::Mapping(mapping) = node else { unreachable!() };
/// assert_eq!(mapping.get("name"), Some(&Node::Scalar("root")));
/// assert_eq!(mapping.get("meta"), Some(&Node::Mapping(Mapping::new())));
/// ```
#[macro_export]
macro_rules! node {
    ({}) => {
        $crate::nested::Node::Mapping($crate::nested::Mapping::new())
    };
    ({ $($key:literal : $value:tt),+ $(,)? }) => {
        $crate::nested::Node::Mapping(
            <$crate::nested::Mapping<_> as ::core::iter::FromIterator<_>>::from_iter(
                [$( ($key, $crate::node!($value)) ),+]
            )
        )
    };
    ([ $($value:tt),* $(,)? ]) => {
        $crate::nested::Node::Array(::std::vec![$( $crate::node!($value) ),*])
    };
    ($scalar:expr) => {
        $crate::nested::Node::Scalar($scalar)
    };
}

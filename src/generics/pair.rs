use crate::nested::Mapping;

/// A key and a value, each of its own type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    pub key: K,
    pub value: V,
}

pub type KeyValuePair<K, V> = Pair<K, V>;

impl<K, V> Pair<K, V> {
    pub const fn new(key: K, value: V) -> Pair<K, V> {
        Pair { key, value }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Pair { key, value }
    }
}

/// Merges two Pairs, with the fields of `second` taking precedence. Since every field is present
/// in both, the result is always `second`, and `first` is dropped.
pub fn merge_pairs<K1, V1, K2, V2>(first: Pair<K1, V1>, second: Pair<K2, V2>) -> Pair<K2, V2> {
    drop(first);
    second
}

/// Shallowly merges two Mappings. Keys only in `left` keep their place, keys in both take the
/// value from `right`, and keys only in `right` follow in their original order.
///
/// # Examples
/// ```
/// # use generic_containers::node;
/// # use generic_containers::nested::Node;
/// # use generic_containers::generics::merge;
/// let (Node::Mapping(left), Node::Mapping(right)) = (
///     node!({ "a": 1, "b": 2 }),
///     node!({ "c": 3, "b": 20 }),
/// ) else { unreachable!() };
///
/// let merged = merge(left, right);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(merged.get("b"), Some(&Node::Scalar(20)));
/// ```
pub fn merge<T>(mut left: Mapping<T>, right: Mapping<T>) -> Mapping<T> {
    left.extend(right);
    left
}

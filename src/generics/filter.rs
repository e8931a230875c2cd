use crate::nested::{Mapping, Node};

/// Keeps only the items that convert into `U`, converting them as it goes. Items which fail the
/// conversion are dropped.
///
/// This pairs well with enums deriving [`TryInto`](derive_more::TryInto), where each variant's
/// conversion acts as a check for that variant.
///
/// # Examples
/// ```
/// # use generic_containers::generics::filter_array;
/// let values: Vec<i64> = vec![-1, 2, -3, 4];
/// let positive: Vec<u8> = filter_array(values);
/// assert_eq!(positive, [2, 4]);
/// ```
pub fn filter_array<T, U, I>(items: I) -> Vec<U>
where
    T: TryInto<U>,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter_map(|item| item.try_into().ok())
        .collect()
}

/// Keeps the scalar values out of `nodes`, dropping every array and mapping.
///
/// # Examples
/// ```
/// # use generic_containers::node;
/// # use generic_containers::generics::filter_scalars;
/// let mixed = [node!(1), node!([2]), node!({ "x": 3 }), node!(4)];
/// assert_eq!(filter_scalars(mixed), [1, 4]);
/// ```
pub fn filter_scalars<T, I>(nodes: I) -> Vec<T>
where
    I: IntoIterator<Item = Node<T>>,
{
    nodes
        .into_iter()
        .filter_map(|node| node.into_scalar().ok())
        .collect()
}

/// Returns every item that holds an equal value for each key in `content`. An item missing one of
/// the keys doesn't match. An empty `content` matches every item.
///
/// # Examples
/// ```
/// # use generic_containers::node;
/// # use generic_containers::nested::Node;
/// # use generic_containers::generics::search_data;
/// let users: Vec<_> = [
///     node!({ "name": "ann", "role": "admin" }),
///     node!({ "name": "bob", "role": "user" }),
/// ]
/// .into_iter()
/// .filter_map(|node| node.as_mapping().cloned())
/// .collect();
///
/// let Node::Mapping(pattern) = node!({ "role": "admin" }) else { unreachable!() };
/// let found = search_data(&users, &pattern);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].get("name"), Some(&Node::Scalar("ann")));
/// ```
pub fn search_data<'a, T: PartialEq>(items: &'a [Mapping<T>], content: &Mapping<T>) -> Vec<&'a Mapping<T>> {
    items
        .iter()
        .filter(|item| {
            content
                .iter()
                .all(|(key, value)| item.get(key) == Some(value))
        })
        .collect()
}

use std::collections::HashSet;
use std::hash::Hash;

/// Collects `items` into a Vec, skipping any item equal to one already collected. The first
/// occurrence of each value is kept, in its original position.
///
/// # Examples
/// ```
/// # use generic_containers::generics::unique_elements;
/// assert_eq!(unique_elements("mississippi".chars()), ['m', 'i', 's', 'p']);
/// ```
pub fn unique_elements<T, I>(items: I) -> Vec<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns a copy of `items` with duplicates removed, keeping the first occurrence of each value.
///
/// # Examples
/// ```
/// # use generic_containers::generics::remove_duplicates;
/// assert_eq!(remove_duplicates(&[3, 1, 3, 2, 1]), [3, 1, 2]);
/// ```
pub fn remove_duplicates<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    unique_elements(items.iter().cloned())
}

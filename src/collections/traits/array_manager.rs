/// A mutable, ordered collection of items which can be removed either by value or by position.
///
/// Failing to find something to remove is a normal outcome rather than an error: [`remove`]
/// returns false and [`remove_at_index`] returns [`None`], leaving the collection untouched.
///
/// [`remove`]: ArrayManager::remove
/// [`remove_at_index`]: ArrayManager::remove_at_index
pub trait ArrayManager<T> {
    /// Appends `item` to the end of the collection.
    fn add(&mut self, item: T);

    /// Removes the first item equal to `item`, returning true if one was found.
    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq;

    /// Removes and returns the item at `index`, or returns None if `index` is negative or not less
    /// than the length.
    fn remove_at_index(&mut self, index: isize) -> Option<T>;

    fn get_length(&self) -> usize;

    /// Returns an owned copy of every item, in order.
    fn get_array(&self) -> Vec<T>
    where
        T: Clone;
}

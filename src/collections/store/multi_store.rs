/// Holds exactly one key and one value, each of its own type. Neither can be changed once the
/// store is created.
///
/// # Examples
/// ```
/// # use generic_containers::collections::store::MultiGenericStore;
/// let store = MultiGenericStore::new("user_id", 12345);
/// assert_eq!(*store.delegate_key(), "user_id");
/// assert_eq!(*store.value(), 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiGenericStore<T, U> {
    delegate_key: T,
    value: U,
}

impl<T, U> MultiGenericStore<T, U> {
    pub const fn new(delegate_key: T, value: U) -> MultiGenericStore<T, U> {
        MultiGenericStore {
            delegate_key,
            value,
        }
    }

    pub const fn delegate_key(&self) -> &T {
        &self.delegate_key
    }

    pub const fn value(&self) -> &U {
        &self.value
    }

    pub fn into_parts(self) -> (T, U) {
        (self.delegate_key, self.value)
    }
}

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Iter;
use std::hash::{BuildHasher, Hash, RandomState};

/// A store mapping unique keys to values, relying on the keys implementing [`Hash`] and [`Eq`].
///
/// Adding a pair for a key that is already present replaces its value, so no key ever appears
/// twice. There is no way to remove a pair once it has been added.
///
/// It is a logic error for keys in a KeyValueStore to be manipulated in a way that changes their
/// hash or equality. The store never hands out mutable access to its keys.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `add_pair` | `O(1)`* |
/// | `get_value` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Expected, hash collisions are resolved by comparing keys for equality.
#[derive(Debug, Clone)]
pub struct KeyValueStore<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) store: HashMap<K, V, B>,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> KeyValueStore<K, V, B> {
    /// Creates a new, empty KeyValueStore using the default value for `B`.
    pub fn new() -> KeyValueStore<K, V, B> {
        KeyValueStore {
            store: HashMap::with_hasher(B::default()),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> KeyValueStore<K, V, B> {
    /// Creates a new, empty KeyValueStore using the provided `hasher`.
    pub fn with_hasher(hasher: B) -> KeyValueStore<K, V, B> {
        KeyValueStore {
            store: HashMap::with_hasher(hasher),
        }
    }

    /// Associates `value` with `key`, replacing any value that was already associated with it.
    /// The replaced value is returned.
    ///
    /// As with the standard library, the key itself isn't replaced if it already exists.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::store::KeyValueStore;
    /// let mut store: KeyValueStore<&str, u32> = KeyValueStore::new();
    /// assert_eq!(store.add_pair("id", 1), None);
    /// assert_eq!(store.add_pair("id", 2), Some(1));
    /// assert_eq!(store.get_value("id"), Some(&2));
    /// ```
    pub fn add_pair(&mut self, key: K, value: V) -> Option<V> {
        self.store.insert(key, value)
    }

    /// Returns a reference to the value associated with `key`, or None if the key has never been
    /// added.
    pub fn get_value<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.get(key)
    }

    /// Returns true if a value has been associated with `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.contains_key(key)
    }

    /// Returns the number of keys in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns an iterator over all pairs in the store, in no particular order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.store.iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for KeyValueStore<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for KeyValueStore<K, V, B> {
    /// Adds each pair in order, so later pairs win over earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = KeyValueStore::new();
        for (key, value) in iter {
            store.add_pair(key, value);
        }
        store
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for KeyValueStore<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for KeyValueStore<K, V, B> {}

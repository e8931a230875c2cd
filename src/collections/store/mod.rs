//! Key-value containers. [`KeyValueStore`] maps unique keys to values, while
//! [`MultiGenericStore`] simply pairs one key with one value of a different type.

mod key_value_store;
mod multi_store;

pub use key_value_store::*;
pub use multi_store::*;

//! A module containing [`GenericArrayManager`], the default implementation of
//! [`ArrayManager`](crate::collections::traits::ArrayManager).

mod array_manager;

pub use array_manager::*;

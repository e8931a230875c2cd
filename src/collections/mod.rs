//! Simple generic collection types.
//!
//! # Purpose
//! Each type wraps a standard library collection and narrows its API down to a single job, which
//! keeps the invariant that job needs (a maximum size, LIFO or FIFO order, unique keys) in one
//! place.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) for read-only access,
//! but never [`DerefMut`](std::ops::DerefMut), so the only way to change their contents is through
//! their own methods.

#[cfg(feature = "bounded")]
pub mod bounded;
#[cfg(feature = "manager")]
pub mod manager;
#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "store")]
pub mod store;
#[cfg(feature = "traits")]
pub mod traits;

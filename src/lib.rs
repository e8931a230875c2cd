//! A small collection of generic containers and utility functions, written while learning how
//! generics, traits and ownership fit together in Rust.
//!
//! # Purpose
//! This crate is a learning exercise with no expectation of being used in production. Each type
//! here is deliberately simple: a stack, a queue, a key-value store, a list with a fixed maximum
//! size and a manager for a plain array of items. Alongside them sits a tagged [`Node`] type for
//! arbitrarily nested key-value data and a search that finds every value stored under a given
//! key, at any depth.
//!
//! [`Node`]: nested::Node
//!
//! # Method
//! None of the containers know about each other. They are thin, strongly typed wrappers around
//! the standard library's storage types, with an API shaped around what each container is for
//! rather than everything the backing storage could do.
//!
//! # Error Handling
//! There are two very different kinds of "nothing happened" in this crate, and they're kept
//! apart on purpose:
//! - Absence, where there is simply nothing to return: popping an empty [`Stack`], looking up a
//!   key that was never inserted or removing an index that doesn't exist. These return [`None`]
//!   (or `false`) and are never errors.
//! - Faults, where the caller asked for something the container can't do: creating a
//!   [`BoundedList`] with a capacity that isn't positive, or appending to one that is already
//!   full. These return [`Result`]s with dedicated error types that implement
//!   [`Error`](std::error::Error).
//!
//! [`Stack`]: collections::stack::Stack
//! [`BoundedList`]: collections::bounded::BoundedList
//!
//! # Dependencies
//! Error types derive their boilerplate through `derive_more`. The optional `json` feature pulls
//! in `serde_json` to turn parsed JSON into [`Node`]s. The demo binary logs through `tracing`.

// #![warn(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "generics")]
pub mod generics;
#[cfg(feature = "nested")]
pub mod nested;

pub(crate) mod util;

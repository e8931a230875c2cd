//! A module containing [`Queue`], a first-in-first-out collection backed by a ring buffer.

mod queue;
mod tests;

pub use queue::*;

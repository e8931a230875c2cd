//! Small generic helper functions and value types that don't warrant a collection of their own.
//!
//! These are all pure: they never keep state between calls and never mutate their input.

mod filter;
mod identity;
mod pair;
mod sort;
mod unique;

pub use filter::*;
pub use identity::*;
pub use pair::*;
pub use sort::*;
pub use unique::*;

//! A module containing [`BoundedList`] and the errors it can produce.
//!
//! [`InvalidCapacity`] is returned when constructing a list with a maximum size that isn't
//! positive and [`CapacityExceeded`] when appending to a full list. [`BoundedListError`] is the
//! union of both, for code that does both in one go.

mod bounded_list;
mod error;
mod tests;

pub use bounded_list::*;
pub use error::*;

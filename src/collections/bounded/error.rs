use std::error::Error;
use std::fmt::Debug;

use derive_more::{Display, From, IsVariant};

/// The maximum size requested for a [`BoundedList`](super::BoundedList) was not a positive
/// integer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("maximum size must be a positive integer, got {requested}")]
pub struct InvalidCapacity {
    pub requested: isize,
}

impl Error for InvalidCapacity {}

/// An append was attempted on a [`BoundedList`](super::BoundedList) that already holds
/// `max_size` items. The rejected item is handed back so that it isn't lost.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("list has reached its maximum size of {max_size}, unable to append")]
pub struct CapacityExceeded<T> {
    pub max_size: usize,
    pub item: T,
}

impl<T> CapacityExceeded<T> {
    /// Takes back ownership of the item that couldn't be appended.
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T: Debug> Error for CapacityExceeded<T> {}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, IsVariant)]
pub enum BoundedListError<T> {
    InvalidCapacity(InvalidCapacity),
    CapacityExceeded(CapacityExceeded<T>),
}

impl<T: Debug> Error for BoundedListError<T> {}

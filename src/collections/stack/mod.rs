//! A module containing [`Stack`], a last-in-first-out collection.

mod stack;

pub use stack::*;

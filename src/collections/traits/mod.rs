//! Traits shared between collections and the generic helper functions.

mod array_manager;
mod lengthwise;

pub use array_manager::*;
pub use lengthwise::*;

//! Pure data structures: menu dishes, their file records, and orders.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;

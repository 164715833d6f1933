//! Pure data structures exchanged with the order API.

pub mod order;

pub use order::*;

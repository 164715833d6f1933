//! Type-safe facade over the order API transport.

pub mod order_client;

pub use order_client::*;

//! Runtime setup: configuration and observability.
//!
//! # Main Components
//!
//! - [`ClientConfig`] - Where the order API lives and how to reach it
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::setup_tracing;

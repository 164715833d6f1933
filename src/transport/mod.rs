//! HTTP transport abstraction for the order API.
//!
//! # Main Components
//!
//! - [`HttpTransport`] - The `get` / `post` / `patch` contract the facade depends on
//! - [`ReqwestTransport`](http::ReqwestTransport) - Production implementation
//! - [`TransportError`] - Failure type every transport returns
//!
//! # Testing
//!
//! See [`mock`] module for a transport that answers from an expectation queue.

pub mod core;
pub mod http;
pub mod mock;

pub use self::core::*;
pub use self::http::ReqwestTransport;

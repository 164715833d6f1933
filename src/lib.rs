//! # Order Client
//!
//! > **A typed client for the order API.**
//!
//! This crate wraps the remote order API behind a small async facade,
//! [`OrderClient`](clients::OrderClient), and ships the pure helpers a
//! storefront needs around it: price and date formatting, order validation and
//! basket totals.
//!
//! ## Core Concepts
//!
//! ### Injected Transport
//! `OrderClient` never talks HTTP itself. It holds an
//! `Arc<dyn HttpTransport>` and hands it paths relative to the API root. In
//! production that is [`ReqwestTransport`](transport::ReqwestTransport); in
//! tests it is [`MockTransport`](transport::mock::MockTransport), which
//! answers from a queue of expectations.
//!
//! ### One Failure Kind
//! Every network call either succeeds once or fails once. Failures are logged
//! and surfaced as [`OrderError`](order::OrderError), whose message is the
//! transport's own message or a fixed French fallback for that operation.
//! There are no retries.
//!
//! ### Validation Is Data
//! [`validate_order_data`](order::validate_order_data) returns the list of
//! problems found. It never fails; the caller decides what to do with them.
//!
//! ## Module Tour
//!
//! - [`transport`]: the `HttpTransport` seam, its reqwest implementation and the mock.
//! - [`model`]: `Order`, `OrderData`, `OrderItem` and friends, as they travel over the wire.
//! - [`order`]: errors, validation, totals and `fr-FR` / `XOF` formatting.
//! - [`clients`]: the `OrderClient` facade.
//! - [`lifecycle`]: configuration and tracing setup.
//!
//! ## Quick Start
//!
//! ```bash
//! ORDER_API_BASE_URL=http://localhost:5000/api RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order;
pub mod transport;

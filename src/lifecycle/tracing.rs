//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Client Operations**: one span per `OrderClient` call, with the order id
//!   as a field where there is one.
//! - **Transport**: request dispatch (`debug`) and rejected responses (`warn`).
//! - **Failures**: every normalized failure is logged at `error` with the
//!   operation name and the underlying message, before the simplified
//!   `OrderError` reaches the caller.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show request payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the facade
//! RUST_LOG=order_client::clients=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, a failed creation looks like:
//!
//! ```text
//! DEBUG create_order: create_order called order_data=OrderData { plat: Some("Yassa"), .. }
//! INFO create_order: Sending create_order to API
//! ERROR create_order: Order request failed operation=create_order order_id=None status=None error=Network error
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

//! # Mock Transport
//!
//! Utilities for testing the order facade without a server.
//!
//! [`MockTransport`] implements [`HttpTransport`] entirely in memory. Queue the
//! calls you expect with [`MockTransport::expect_get`], [`expect_post`] or
//! [`expect_patch`], choose what each one returns, then hand
//! [`MockTransport::transport`] to the client under test.
//!
//! ## When to use the mock vs a real server
//!
//! | Feature | MockTransport | ReqwestTransport |
//! |---------|---------------|------------------|
//! | **Speed** | Instant (in-memory) | Network round trip |
//! | **Determinism** | 100% Deterministic | Depends on the server |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a misbehaving server) |
//! | **Use Case** | Unit testing logic *around* the transport | End-to-end checks |
//!
//! ## Example
//!
//! ```rust
//! use order_client::clients::OrderClient;
//! use order_client::transport::mock::MockTransport;
//! use order_client::transport::TransportError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockTransport::new();
//!     mock.expect_post("/orders")
//!         .return_err(TransportError::new("Network error"));
//!
//!     let client = OrderClient::new(mock.transport());
//!     let result = client.create_order(&Default::default()).await;
//!
//!     assert_eq!(result.unwrap_err().to_string(), "Network error");
//!     mock.verify();
//! }
//! ```
//!
//! [`expect_post`]: MockTransport::expect_post
//! [`expect_patch`]: MockTransport::expect_patch

use crate::transport::{ApiResponse, Filters, HttpTransport, Method, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A queued expectation: which call should arrive next and what it returns.
struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, TransportError>,
}

/// A request the mock received, kept for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub params: Filters,
    pub body: Option<Value>,
}

/// An in-memory transport with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that doesn't match the
/// next expectation's method and path panics, as does a request arriving when
/// the queue is empty.
///
/// Clones share the same queue and request log, so a test can keep one handle
/// for [`verify`](Self::verify) while the client owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shareable handle for injection into a client.
    pub fn transport(&self) -> Arc<dyn HttpTransport> {
        Arc::new(self.clone())
    }

    /// Expects a `get` on `path`.
    pub fn expect_get(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, path)
    }

    /// Expects a `post` on `path`.
    pub fn expect_post(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Post, path)
    }

    /// Expects a `patch` on `path`.
    pub fn expect_patch(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Patch, path)
    }

    fn expect(&mut self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn respond(&self, request: RecordedRequest) -> Result<ApiResponse, TransportError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        let (method, path) = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        match expectation {
            Some(exp) if exp.method == method && exp.path == path => exp.response,
            Some(exp) => panic!(
                "Unexpected request: {} {} (expected {} {})",
                method, path, exp.method, exp.path
            ),
            None => panic!("Unexpected request: {} {} (no expectations left)", method, path),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, path: &str, params: &Filters) -> Result<ApiResponse, TransportError> {
        self.respond(RecordedRequest {
            method: Method::Get,
            path: path.to_string(),
            params: params.clone(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        self.respond(RecordedRequest {
            method: Method::Post,
            path: path.to_string(),
            params: Filters::new(),
            body: Some(body),
        })
    }

    async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        self.respond(RecordedRequest {
            method: Method::Patch,
            path: path.to_string(),
            params: Filters::new(),
            body: Some(body),
        })
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Responds with `{ "data": data }`.
    pub fn return_ok(self, data: Value) {
        self.return_response(ApiResponse::new(data));
    }

    /// Responds with an arbitrary envelope, e.g. [`ApiResponse::empty`].
    pub fn return_response(self, response: ApiResponse) {
        self.push(Ok(response));
    }

    /// Fails the call with `error`.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, TransportError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

//! # Transport Contract
//!
//! This module defines the seam between the order facade and whatever actually
//! speaks HTTP.
//!
//! ## Key Types
//!
//! - [`HttpTransport`]: The trait every transport must implement (`get`, `post`, `patch`).
//! - [`ApiResponse`]: The `{ "data": ... }` envelope every call resolves to.
//! - [`TransportError`]: Network or server failure, with an optional message.
//! - [`Filters`]: Query parameters forwarded verbatim.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Query parameters appended to a GET request.
///
/// Pairs keep the order they were added in and values keep their JSON type
/// until the transport renders them, so `page = 2` and `paid = true` need no
/// conversion by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(Vec<(String, Value)>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Filters::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Renders the pairs as query-string text. Strings go out as-is, other
    /// scalars in their JSON form, `null` values are dropped and arrays or
    /// objects are sent as JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// HTTP verbs the order API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        };
        f.write_str(verb)
    }
}

/// Response envelope returned by the order API.
///
/// The payload lives under `data`. It may be missing entirely, which callers
/// treat differently depending on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn new(data: Value) -> Self {
        Self { data: Some(data) }
    }

    /// A response whose envelope has no `data` field.
    pub fn empty() -> Self {
        Self { data: None }
    }

    /// Returns the payload unless it is absent or falsy
    /// (`null`, `false`, `0`, `""`).
    pub fn truthy_data(&self) -> Option<&Value> {
        self.data.as_ref().filter(|value| !is_falsy(value))
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Failure reported by a transport.
///
/// `message` is optional: some failures (a dropped connection behind a proxy,
/// an empty error body) carry nothing worth showing, and the facade then
/// substitutes its own fallback text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct TransportError {
    pub message: Option<String>,
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status: None,
        }
    }

    /// A failure with no usable message.
    pub fn without_message() -> Self {
        Self {
            message: None,
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The message, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// The HTTP client collaborator the order facade depends on.
///
/// # Architecture Note
/// The facade never builds URLs against a host or touches headers. It hands a
/// path relative to the API root (e.g. `/orders/42/status`) to the transport and
/// gets back the decoded envelope. Authentication, timeouts and base URLs are
/// the transport's business, which is what makes [`MockTransport`] a drop-in
/// replacement in tests.
///
/// [`MockTransport`]: crate::transport::mock::MockTransport
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET with query parameters (empty map for none).
    async fn get(&self, path: &str, params: &Filters) -> Result<ApiResponse, TransportError>;

    /// Issue a POST with a JSON body.
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError>;

    /// Issue a PATCH with a JSON body.
    async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError>;
}

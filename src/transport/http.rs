//! # Reqwest Transport
//!
//! Production [`HttpTransport`] backed by `reqwest`.

use crate::lifecycle::ClientConfig;
use crate::transport::{ApiResponse, Filters, HttpTransport, Method, TransportError};
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Talks to the order API over HTTP.
///
/// Paths handed in by the facade are appended to `base_url`. JSON bodies and
/// query parameters are sent as-is, the bearer token (if configured) goes on
/// every request, and the `{ "data": ... }` envelope is decoded on success.
///
/// Non-2xx responses become a [`TransportError`] with the HTTP status and the
/// body's `message` field when the server sent one.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Initializing order API transport");

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::new(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse, TransportError> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        debug!(%method, path, "Sending request");
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(e.to_string()).with_status(status.as_u16()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
            warn!(%method, path, status = status.as_u16(), ?message, "Request rejected");
            return Err(TransportError {
                message,
                status: Some(status.as_u16()),
            });
        }

        if status == StatusCode::NO_CONTENT || body.is_empty() {
            return Ok(ApiResponse::empty());
        }

        serde_json::from_slice(&body).map_err(|e| {
            TransportError::new(format!("Failed to parse response: {}", e))
                .with_status(status.as_u16())
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str, params: &Filters) -> Result<ApiResponse, TransportError> {
        let request = self.client.get(self.url(path)).query(&params.to_query_pairs());
        self.send(Method::Get, path, request).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        let request = self.client.post(self.url(path)).json(&body);
        self.send(Method::Post, path, request).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse, TransportError> {
        let request = self.client.patch(self.url(path)).json(&body);
        self.send(Method::Patch, path, request).await
    }
}

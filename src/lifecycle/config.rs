//! Client configuration.

use crate::clients::OrderClient;
use crate::transport::{ReqwestTransport, TransportError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub const ENV_BASE_URL: &str = "ORDER_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ORDER_API_TIMEOUT_SECS";
pub const ENV_TOKEN: &str = "ORDER_API_TOKEN";

/// Settings for [`ReqwestTransport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root the `/orders` paths are appended to.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Sent as `Authorization: Bearer <token>` when present.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: 30,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `ORDER_API_BASE_URL`, `ORDER_API_TIMEOUT_SECS`
    /// and `ORDER_API_TOKEN`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout_secs = secs,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }
        config.auth_token = lookup(ENV_TOKEN).filter(|v| !v.is_empty());

        config
    }

    /// Builds an [`OrderClient`] over a [`ReqwestTransport`].
    pub fn connect(&self) -> Result<OrderClient, TransportError> {
        let transport = ReqwestTransport::new(self)?;
        Ok(OrderClient::new(Arc::new(transport)))
    }
}

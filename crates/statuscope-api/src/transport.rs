// Shared transport configuration for building reqwest::Client instances.
//
// Both the status-page and uptime clients share timeout and header
// settings through this module, avoiding duplicated builder logic.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    ///
    /// Every request carries `Accept: application/json`; both upstreams
    /// serve JSON exclusively.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        self.build_client_with_headers(HeaderMap::new())
    }

    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by the uptime client to inject the `Authorization: Bearer`
    /// header on every request.
    pub fn build_client_with_headers(
        &self,
        mut headers: HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("statuscope/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(crate::error::Error::Transport)
    }
}

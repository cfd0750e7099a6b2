//! Runtime configuration for a snapshot builder.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::history::HISTORY_WINDOW_DAYS;

/// Everything a [`Statuscope`](crate::Statuscope) needs to build
/// snapshots.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// Base URL of the public status page (its `index.json` lives here).
    pub status_page_url: Url,

    /// Base URL of the uptime-monitor API.
    pub uptime_api_url: Url,

    /// Bearer token for the uptime API. `None` means the monitor source
    /// is unconfigured: snapshots simply carry no monitors.
    pub uptime_token: Option<SecretString>,

    /// HTTP timeout applied to every upstream request.
    pub timeout: Duration,

    /// Tracked history window in days.
    pub history_days: usize,
}

impl StatusConfig {
    /// Config with defaults for everything but the status-page URL.
    pub fn new(status_page_url: Url) -> Self {
        Self {
            status_page_url,
            uptime_api_url: Url::parse(statuscope_api::uptime::client::DEFAULT_BASE_URL)
                .expect("default uptime URL is valid"),
            uptime_token: None,
            timeout: Duration::from_secs(30),
            history_days: HISTORY_WINDOW_DAYS,
        }
    }

    /// Set the uptime API token, enabling the monitor source.
    pub fn with_uptime_token(mut self, token: SecretString) -> Self {
        self.uptime_token = Some(token);
        self
    }
}

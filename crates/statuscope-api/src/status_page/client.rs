// Hand-crafted async HTTP client for the public status-page document.
//
// A status page publishes its full state as one JSON:API document at
// `{base}/index.json`. No auth is required.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::StatusPageDocument;
use crate::Error;

/// Async client for the status-page document endpoint.
pub struct StatusPageClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StatusPageClient {
    /// Build from a status-page base URL and transport config.
    pub fn new(base_url: &str, transport: &crate::TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with a single trailing slash so that
    /// joining `index.json` lands under the page's path.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Fetch the full status-page document.
    ///
    /// Any non-2xx response is an error — the status page is the primary
    /// data source and callers treat its failure as fatal.
    pub async fn fetch_status_page(&self) -> Result<StatusPageDocument, Error> {
        self.get("index.json").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            let raw = resp.text().await.unwrap_or_default();
            Err(Error::StatusPage {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            })
        }
    }
}

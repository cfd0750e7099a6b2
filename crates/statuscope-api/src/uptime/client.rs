// Hand-crafted async HTTP client for the uptime-monitor API.
//
// Base path: /api/v2/
// Auth: `Authorization: Bearer {token}` header

use chrono::NaiveDate;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::types::{MonitorListResponse, MonitorResource, SlaReportListResponse, SlaReportResource};
use crate::Error;

/// Default base URL of the hosted uptime API.
pub const DEFAULT_BASE_URL: &str = "https://uptime.betterstack.com/api/v2/";

/// Async client for the uptime-monitor API.
///
/// Uses bearer-token authentication and communicates via JSON REST
/// endpoints under `/api/v2/`.
pub struct UptimeClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UptimeClient {
    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer {token}` as a sensitive default
    /// header on every request.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &crate::TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value =
            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| Error::InvalidToken)?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── HTTP plumbing ────────────────────────────────────────────────

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::InvalidToken);
        }
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
            Err(Error::Uptime {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            })
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// List all monitors on the account.
    pub async fn list_monitors(&self) -> Result<Vec<MonitorResource>, Error> {
        let resp: MonitorListResponse = self.get_with_params("monitors", &[]).await?;
        Ok(resp.data)
    }

    /// Fetch a monitor's SLA reports for the inclusive `[from, to]`
    /// calendar-day range.
    pub async fn list_sla_reports(
        &self,
        monitor_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<SlaReportResource>, Error> {
        let resp: SlaReportListResponse = self
            .get_with_params(
                &format!("monitors/{monitor_id}/sla-reports"),
                &[("from", from.to_string()), ("to", to.to_string())],
            )
            .await?;
        Ok(resp.data)
    }
}

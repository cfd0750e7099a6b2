//! Wire types for the uptime-monitor API (`/monitors`, `/monitors/{id}/sla-reports`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Envelope for `GET /monitors`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorListResponse {
    #[serde(default)]
    pub data: Vec<MonitorResource>,
}

/// One monitor — id plus attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorResource {
    pub id: String,
    #[serde(default)]
    pub attributes: MonitorAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonitorAttributes {
    #[serde(default)]
    pub pronounceable_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// One of: `up`, `down`, `validating`, `paused`, `pending`, `maintenance`.
    #[serde(default)]
    pub status: Option<String>,
    /// ISO 8601 date-time.
    #[serde(default)]
    pub last_checked_at: Option<String>,
}

/// Envelope for `GET /monitors/{id}/sla-reports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlaReportListResponse {
    #[serde(default)]
    pub data: Vec<SlaReportResource>,
}

/// One SLA report — a periodic availability record for a monitor.
#[derive(Debug, Clone, Deserialize)]
pub struct SlaReportResource {
    #[serde(default)]
    pub attributes: SlaReportAttributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlaReportAttributes {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub availability: Option<f64>,
    /// ISO 8601 date-time; the date part identifies the report's day.
    #[serde(default)]
    pub created_at: String,
}

/// Accept a JSON number; anything else becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

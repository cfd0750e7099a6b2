//! Uptime monitors, fed by the separate SLA-report source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use super::state::DayStatus;

/// Check state reported by the uptime API for a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MonitorStatus {
    Up,
    Down,
    Validating,
    Paused,
    Pending,
    Maintenance,
}

impl MonitorStatus {
    /// Parse an upstream status string. Unknown or missing values map to
    /// `Pending`, the upstream's own not-yet-classified state.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("up") => Self::Up,
            Some("down") => Self::Down,
            Some("validating") => Self::Validating,
            Some("paused") => Self::Paused,
            Some("maintenance") => Self::Maintenance,
            _ => Self::Pending,
        }
    }
}

/// One uptime monitor with its SLA-derived availability history.
///
/// The history is independent of any service's history: it comes from
/// the monitor source's SLA reports, not the status-page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: MonitorStatus,
    pub last_checked_at: Option<DateTime<Utc>>,
    /// Headline availability from the latest SLA report; `None` when the
    /// SLA fetch failed or returned nothing.
    pub availability: Option<f64>,
    /// Exactly the window length (90) entries, oldest first, ending today.
    pub status_history: Vec<DayStatus>,
}

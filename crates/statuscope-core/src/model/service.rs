//! Services and the sections that group them.

use serde::{Deserialize, Serialize};

use super::state::{AggregateState, DayStatus};

/// One monitored service on the status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Optional free-text note shown next to the service.
    pub explanation: Option<String>,
    pub status: AggregateState,
    /// Uptime percentage over the tracked window (0–100).
    pub availability: f64,
    /// Exactly the window length (90) entries, oldest first, ending today.
    pub status_history: Vec<DayStatus>,
}

/// A named group of services. Service order within a section is
/// meaningful: priority names first, the rest alphabetical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub services: Vec<Service>,
}

//! Incidents (status reports) and their updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One status report, bucketed into ongoing or past solely by its
/// `ongoing` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub ongoing: bool,
    pub starts_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// Chronological as received from upstream — never re-sorted here.
    pub updates: Vec<Update>,
}

/// One free-text update published on an incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub id: String,
    pub message: String,
    pub published_at: DateTime<Utc>,
}

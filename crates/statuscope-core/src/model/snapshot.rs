//! The top-level snapshot handed to presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::incident::Incident;
use super::monitor::Monitor;
use super::service::Section;
use super::state::AggregateState;

/// One fully-resolved status-page result, produced per request.
///
/// Every field is a value — nothing references upstream data after the
/// build completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub company_name: String,
    pub aggregate_state: AggregateState,
    pub sections: Vec<Section>,
    pub ongoing_incidents: Vec<Incident>,
    pub past_incidents: Vec<Incident>,
    pub monitors: Vec<Monitor>,
    /// When this snapshot was produced.
    pub fetched_at: DateTime<Utc>,
}

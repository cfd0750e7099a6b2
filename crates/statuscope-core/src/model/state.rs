//! Severity states and per-day status samples.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Overall severity of a service or the whole page.
///
/// The four states are independent — no total ordering is assumed —
/// though `Downtime` is semantically the most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AggregateState {
    Operational,
    Degraded,
    Downtime,
    Maintenance,
}

impl AggregateState {
    /// Parse an upstream state string; unknown values yield `None` so
    /// callers can apply their documented default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "operational" => Some(Self::Operational),
            "degraded" => Some(Self::Degraded),
            "downtime" => Some(Self::Downtime),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// A day's state: an [`AggregateState`] or `NotMonitored` when no
/// sample exists for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DayState {
    Operational,
    Degraded,
    Downtime,
    Maintenance,
    NotMonitored,
}

impl From<AggregateState> for DayState {
    fn from(state: AggregateState) -> Self {
        match state {
            AggregateState::Operational => Self::Operational,
            AggregateState::Degraded => Self::Degraded,
            AggregateState::Downtime => Self::Downtime,
            AggregateState::Maintenance => Self::Maintenance,
        }
    }
}

/// One calendar day paired with its observed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    /// ISO calendar date (serializes as `YYYY-MM-DD`).
    pub day: NaiveDate,
    pub status: DayState,
}

//! Canonical domain model: the value types a snapshot build produces.
//!
//! Everything here is an immutable value — built fresh per request from
//! upstream resource data, never mutated after construction, and holding
//! no live references to upstream state.

pub mod incident;
pub mod monitor;
pub mod service;
pub mod snapshot;
pub mod state;

pub use incident::{Incident, Update};
pub use monitor::{Monitor, MonitorStatus};
pub use service::{Section, Service};
pub use snapshot::StatusSnapshot;
pub use state::{AggregateState, DayState, DayStatus};

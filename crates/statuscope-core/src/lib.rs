// statuscope-core: Normalization layer between statuscope-api and consumers (CLI).

pub mod aggregate;
pub mod config;
pub mod convert;
pub mod error;
pub mod history;
pub mod model;
pub mod resolve;
pub mod snapshot;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::StatusConfig;
pub use error::CoreError;
pub use snapshot::Statuscope;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AggregateState, DayState, DayStatus, Incident, Monitor, MonitorStatus, Section, Service,
    StatusSnapshot, Update,
};

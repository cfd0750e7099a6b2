//! Aggregation passes over resolved resources: section/service
//! ordering, incident bucketing, and the monitor fan-out.

pub mod incidents;
pub mod monitors;
pub mod services;

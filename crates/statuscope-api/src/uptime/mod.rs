//! Uptime-monitor API: monitor metadata plus per-monitor SLA reports.
//! Requires a bearer token.

pub mod client;
pub mod types;

pub use client::UptimeClient;

// statuscope-api: Async Rust clients for the status-page and uptime-monitor APIs.

pub mod error;
pub mod status_page;
pub mod transport;
pub mod uptime;

pub use error::Error;
pub use status_page::StatusPageClient;
pub use transport::TransportConfig;
pub use uptime::UptimeClient;

//! Status-page document API: the public JSON:API endpoint serving
//! sections, services (resources), and status reports.

pub mod client;
pub mod types;

pub use client::StatusPageClient;

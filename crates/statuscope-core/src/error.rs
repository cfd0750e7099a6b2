// ── Core error types ──
//
// User-facing errors from statuscope-core. Consumers never see raw
// transport errors directly; the `From<statuscope_api::Error>` impl
// translates them into domain-appropriate variants. Only the primary
// status-page path can surface an error at all — the monitor path
// degrades in place and never produces one.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The primary status-page source could not be fetched. Fatal to the
    /// whole snapshot build.
    #[error("Status page source unavailable: {message}")]
    SourceUnavailable {
        message: String,
        /// HTTP status code, when the source answered at all.
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<statuscope_api::Error> for CoreError {
    fn from(err: statuscope_api::Error) -> Self {
        match err {
            statuscope_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            statuscope_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            other => CoreError::SourceUnavailable {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

use thiserror::Error;

/// Top-level error type for the `statuscope-api` crate.
///
/// Covers every failure mode across both API surfaces: the public
/// status-page document and the bearer-authed uptime-monitor API.
/// `statuscope-core` decides which of these are fatal to a snapshot
/// build and which degrade gracefully.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Authentication ──────────────────────────────────────────────
    /// The uptime API rejected the bearer token.
    #[error("Invalid uptime API token")]
    InvalidToken,

    // ── Status-page API ─────────────────────────────────────────────
    /// Non-success response from the status-page document endpoint.
    #[error("Status page API error (HTTP {status}): {message}")]
    StatusPage { status: u16, message: String },

    // ── Uptime API ──────────────────────────────────────────────────
    /// Non-success response from the uptime-monitor API.
    #[error("Uptime API error (HTTP {status}): {message}")]
    Uptime { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying
    /// (callers may wrap fetches with their own retry policy; the
    /// clients themselves never retry).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::StatusPage { status, .. } | Self::Uptime { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::StatusPage { status, .. } | Self::Uptime { status, .. } => Some(*status),
            Self::InvalidToken => Some(401),
            _ => None,
        }
    }
}

//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use statuscope_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Source errors ────────────────────────────────────────────────

    #[error("Could not fetch the status page: {message}")]
    #[diagnostic(
        code(statuscope::source_unavailable),
        help(
            "Check that the status page is reachable.\n\
             Try: statuscope show --url <status-page-url>"
        )
    )]
    SourceUnavailable {
        message: String,
        status: Option<u16>,
    },

    #[error("Status page authentication failed")]
    #[diagnostic(
        code(statuscope::auth_failed),
        help("Verify the bearer token.\nSet STATUSCOPE_UPTIME_TOKEN or pass --uptime-token.")
    )]
    AuthFailed,

    // ── Configuration ────────────────────────────────────────────────

    #[error("No status page URL configured")]
    #[diagnostic(
        code(statuscope::no_url),
        help(
            "Pass --url (-u), set STATUSCOPE_URL, or add `url = \"...\"` to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoUrl { path: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(statuscope::validation))]
    Validation { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(statuscope::config))]
    Config(Box<figment::Error>),

    // ── Internal ─────────────────────────────────────────────────────

    #[error("Internal error: {0}")]
    #[diagnostic(code(statuscope::internal))]
    Internal(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SourceUnavailable { .. } => exit_code::CONNECTION,
            Self::AuthFailed => exit_code::AUTH,
            Self::NoUrl { .. } | Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SourceUnavailable { message, status } => {
                if status == Some(401) {
                    CliError::AuthFailed
                } else {
                    CliError::SourceUnavailable { message, status }
                }
            }

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::Internal(message),
        }
    }
}

//! CLI-owned configuration: a TOML file plus environment overrides,
//! resolved into a `statuscope_core::StatusConfig`.
//!
//! Core never sees these types -- it receives a pre-built `StatusConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use statuscope_core::StatusConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config struct ───────────────────────────────────────────────

/// CLI-owned TOML configuration. Core never touches this type.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Status page base URL.
    pub url: Option<String>,

    /// Uptime API bearer token (plaintext -- prefer STATUSCOPE_UPTIME_TOKEN).
    pub uptime_token: Option<String>,

    /// Uptime API base URL override.
    pub uptime_api_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,

    /// Tracked history window in days.
    pub history_days: Option<usize>,
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "statuscope", "statuscope")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        })
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("statuscope");
    p
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the file-and-environment layer of the configuration.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("STATUSCOPE_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Resolution ───────────────────────────────────────────────────────

/// Merge the config file with CLI flags into a core `StatusConfig`.
///
/// Flags win over environment and file values; the environment layer is
/// shared with clap's `env =` attributes, so both agree on precedence.
pub fn resolve(global: &GlobalOpts) -> Result<StatusConfig, CliError> {
    let file = load_config()?;

    let url_str = global
        .url
        .as_deref()
        .or(file.url.as_deref())
        .ok_or_else(|| CliError::NoUrl {
            path: config_path().display().to_string(),
        })?;
    let url: Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let mut config = StatusConfig::new(url);

    if let Some(token) = global.uptime_token.clone().or(file.uptime_token) {
        config = config.with_uptime_token(SecretString::from(token));
    }

    if let Some(raw) = file.uptime_api_url {
        config.uptime_api_url = raw.parse().map_err(|_| CliError::Validation {
            field: "uptime_api_url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
    }

    if let Some(seconds) = global.timeout.or(file.timeout) {
        config.timeout = Duration::from_secs(seconds);
    }

    if let Some(days) = file.history_days {
        config.history_days = days;
    }

    Ok(config)
}

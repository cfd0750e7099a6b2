//! Clap derive structures for the `statuscope` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// statuscope -- status-page and uptime-monitor inspection from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "statuscope",
    version,
    about = "Inspect a hosted status page from the command line",
    long_about = "Fetches a public status-page document and, when a token is\n\
        configured, the uptime-monitor API, and renders the merged result.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Status page base URL (its index.json lives here)
    #[arg(long, short = 'u', env = "STATUSCOPE_URL", global = true)]
    pub url: Option<String>,

    /// Uptime API bearer token (enables the monitors source)
    #[arg(long, env = "STATUSCOPE_UPTIME_TOKEN", global = true, hide_env = true)]
    pub uptime_token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STATUSCOPE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "STATUSCOPE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the full snapshot: sections, services, and ongoing incidents
    #[command(alias = "s")]
    Show,

    /// List uptime monitors with their SLA-derived availability
    #[command(alias = "mon", alias = "m")]
    Monitors,

    /// List status reports, ongoing first
    #[command(alias = "inc", alias = "i")]
    Incidents(IncidentsArgs),
}

#[derive(Debug, Args)]
pub struct IncidentsArgs {
    /// Only show ongoing reports
    #[arg(long)]
    pub ongoing: bool,
}

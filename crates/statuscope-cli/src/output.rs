//! Output formatting: table, JSON, compact JSON.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use statuscope_core::{AggregateState, DayState, MonitorStatus};

use crate::cli::OutputFormat;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
pub fn render_list<T, R>(format: &OutputFormat, data: &[T], to_row: impl Fn(&T) -> R) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string, since detail views don't use `Tabled` derive.
pub fn render_single<T>(format: &OutputFormat, data: &T, detail_fn: impl Fn(&T) -> String) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {e}\"}}"))
}

// ── State coloring ───────────────────────────────────────────────────

fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// Color a page or service state for terminal display.
pub fn paint_state(state: AggregateState) -> String {
    if !should_color() {
        return state.to_string();
    }
    match state {
        AggregateState::Operational => state.green().to_string(),
        AggregateState::Degraded | AggregateState::Maintenance => state.yellow().to_string(),
        AggregateState::Downtime => state.red().to_string(),
    }
}

/// Color a monitor check state for terminal display.
pub fn paint_monitor_status(status: MonitorStatus) -> String {
    if !should_color() {
        return status.to_string();
    }
    match status {
        MonitorStatus::Up => status.green().to_string(),
        MonitorStatus::Down => status.red().to_string(),
        MonitorStatus::Validating | MonitorStatus::Maintenance => status.yellow().to_string(),
        MonitorStatus::Paused | MonitorStatus::Pending => status.dimmed().to_string(),
    }
}

/// Compress a day-status history into a one-glyph-per-day strip, oldest
/// first. Intended for the trailing slice of a 90-day window.
pub fn history_strip(history: &[statuscope_core::DayStatus], days: usize) -> String {
    let start = history.len().saturating_sub(days);
    history[start..]
        .iter()
        .map(|d| match d.status {
            DayState::Operational => '█',
            DayState::Degraded | DayState::Maintenance => '▓',
            DayState::Downtime => '░',
            DayState::NotMonitored => '·',
        })
        .collect()
}

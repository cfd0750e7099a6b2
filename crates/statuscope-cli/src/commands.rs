//! Command handlers: one snapshot build per invocation, rendered per
//! the selected output format.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use tabled::Tabled;

use statuscope_core::{Incident, Monitor, Service, StatusSnapshot, Statuscope};

use crate::cli::{Command, GlobalOpts, IncidentsArgs};
use crate::error::CliError;
use crate::output;

/// Days of history shown in table strips. JSON output carries the full
/// window regardless.
const STRIP_DAYS: usize = 30;

/// Dispatch a subcommand to its handler.
pub async fn dispatch(
    cmd: Command,
    scope: &Statuscope,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let snapshot = scope.snapshot().await?;

    match cmd {
        Command::Show => show(&snapshot, global),
        Command::Monitors => monitors(&snapshot, global),
        Command::Incidents(args) => incidents(&snapshot, &args, global),
    }
    Ok(())
}

// ── show ─────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Availability")]
    availability: String,
    #[tabled(rename = "Last 30 days")]
    history: String,
}

impl From<&Service> for ServiceRow {
    fn from(s: &Service) -> Self {
        Self {
            name: s.name.clone(),
            status: output::paint_state(s.status),
            availability: format!("{:.2}%", s.availability),
            history: output::history_strip(&s.status_history, STRIP_DAYS),
        }
    }
}

fn show(snapshot: &StatusSnapshot, global: &GlobalOpts) {
    let out = output::render_single(&global.output, snapshot, render_show);
    output::print_output(&out, global.quiet);
}

fn render_show(snapshot: &StatusSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} [{}]",
        snapshot.company_name,
        output::paint_state(snapshot.aggregate_state)
    );
    let _ = writeln!(out, "fetched {}", format_time(snapshot.fetched_at));

    for section in &snapshot.sections {
        let _ = writeln!(out, "\n{}", section.name);
        let rows: Vec<ServiceRow> = section.services.iter().map(ServiceRow::from).collect();
        let _ = writeln!(out, "{}", tabled::Table::new(rows));
    }

    if !snapshot.ongoing_incidents.is_empty() {
        let _ = writeln!(out, "\nOngoing incidents:");
        for incident in &snapshot.ongoing_incidents {
            let _ = writeln!(
                out,
                "  {} (since {})",
                incident.title,
                format_time(incident.starts_at)
            );
            if let Some(update) = incident.updates.last() {
                let _ = writeln!(out, "    {}", update.message);
            }
        }
    }

    out
}

// ── monitors ─────────────────────────────────────────────────────────

#[derive(Tabled)]
struct MonitorRow {
    #[tabled(rename = "Monitor")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Availability")]
    availability: String,
    #[tabled(rename = "Last checked")]
    last_checked: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl From<&Monitor> for MonitorRow {
    fn from(m: &Monitor) -> Self {
        Self {
            name: m.name.clone(),
            status: output::paint_monitor_status(m.status),
            availability: m
                .availability
                .map_or_else(|| "n/a".into(), |a| format!("{a:.2}%")),
            last_checked: m.last_checked_at.map_or_else(String::new, format_time),
            url: m.url.clone(),
        }
    }
}

fn monitors(snapshot: &StatusSnapshot, global: &GlobalOpts) {
    let out = output::render_list(&global.output, &snapshot.monitors, |m| MonitorRow::from(m));
    output::print_output(&out, global.quiet);
}

// ── incidents ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct IncidentRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Started")]
    started: String,
    #[tabled(rename = "Resolved")]
    resolved: String,
    #[tabled(rename = "Updates")]
    updates: usize,
}

impl From<&Incident> for IncidentRow {
    fn from(i: &Incident) -> Self {
        Self {
            title: i.title.clone(),
            state: if i.ongoing { "ongoing" } else { "resolved" }.into(),
            started: format_time(i.starts_at),
            resolved: i.resolved_at.map_or_else(String::new, format_time),
            updates: i.updates.len(),
        }
    }
}

fn incidents(snapshot: &StatusSnapshot, args: &IncidentsArgs, global: &GlobalOpts) {
    let mut listed: Vec<Incident> = snapshot.ongoing_incidents.clone();
    if !args.ongoing {
        listed.extend(snapshot.past_incidents.iter().cloned());
    }

    let out = output::render_list(&global.output, &listed, |i| IncidentRow::from(i));
    output::print_output(&out, global.quiet);
}

// ── helpers ──────────────────────────────────────────────────────────

fn format_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// ── API-to-domain type conversions ──
//
// Bridges raw `statuscope_api` wire types into canonical
// `statuscope_core::model` domain types. Each conversion normalizes
// field names, parses strings into strong types, and fills the
// documented defaults for missing or malformed optional data.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use statuscope_api::status_page::types::{
    KIND_UPDATE, RawResource, ReportAttributes, SectionAttributes, ServiceAttributes,
    UpdateAttributes,
};
use statuscope_api::uptime::types::MonitorResource;

use crate::model::{AggregateState, DayStatus, Incident, Monitor, MonitorStatus, Service, Update};
use crate::resolve::IncludedPool;
use crate::history::day_window;

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an optional ISO-8601 datetime string, silently dropping
/// unparseable values.
pub(crate) fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a `YYYY-MM-DD` day string.
pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    raw.parse().ok()
}

/// The calendar day of an ISO-8601 timestamp (its date part).
pub(crate) fn day_of_timestamp(raw: &str) -> Option<NaiveDate> {
    parse_day(raw.split('T').next().unwrap_or_default())
}

/// Treat empty strings as absent, like the upstream UI does.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ── Service ────────────────────────────────────────────────────────

/// Convert a pooled `status_page_resource` into a [`Service`].
///
/// Defaults per the upstream contract: name "Unknown", status
/// operational, availability 100, explanation absent. History samples
/// with unparseable days or unknown states degrade to gaps, which the
/// day window then renders as `not_monitored`.
pub fn service_from_resource(raw: &RawResource, today: NaiveDate, window: usize) -> Service {
    let attrs: ServiceAttributes = raw.attributes_as();

    let samples: HashMap<NaiveDate, AggregateState> = attrs
        .status_history
        .iter()
        .filter_map(|entry| {
            Some((parse_day(&entry.day)?, AggregateState::parse(&entry.status)?))
        })
        .collect();

    Service {
        id: raw.id.clone(),
        name: non_empty(attrs.public_name)
            .or_else(|| non_empty(attrs.name))
            .unwrap_or_else(|| "Unknown".into()),
        explanation: attrs.explanation,
        status: attrs
            .status
            .as_deref()
            .and_then(AggregateState::parse)
            .unwrap_or(AggregateState::Operational),
        availability: attrs.availability.unwrap_or(100.0),
        status_history: day_window(today, window, &samples),
    }
}

// ── Section name ───────────────────────────────────────────────────

/// Display name for a pooled section, defaulting to "Services".
pub fn section_name(raw: Option<&RawResource>) -> String {
    raw.map(RawResource::attributes_as::<SectionAttributes>)
        .and_then(|attrs| non_empty(attrs.name))
        .unwrap_or_else(|| "Services".into())
}

// ── Incident ───────────────────────────────────────────────────────

/// Convert a pooled `status_page_report` into an [`Incident`],
/// resolving its updates through the pool (unresolved updates are
/// dropped, source order kept).
pub fn incident_from_report(
    report: &RawResource,
    pool: &IncludedPool<'_>,
    now: DateTime<Utc>,
) -> Incident {
    let attrs: ReportAttributes = report.attributes_as();
    let starts_at = parse_datetime(attrs.created_at.as_deref()).unwrap_or(now);

    let updates: Vec<Update> = report
        .relationship_many("status_updates")
        .iter()
        .filter_map(|uref| pool.get(KIND_UPDATE, &uref.id))
        .map(|u| {
            let update_attrs: UpdateAttributes = u.attributes_as();
            Update {
                id: u.id.clone(),
                message: update_attrs.message.unwrap_or_default(),
                published_at: parse_datetime(update_attrs.created_at.as_deref())
                    .unwrap_or(starts_at),
            }
        })
        .collect();

    Incident {
        id: report.id.clone(),
        title: non_empty(attrs.title).unwrap_or_else(|| "Incident".into()),
        ongoing: attrs.ongoing,
        starts_at,
        resolved_at: parse_datetime(attrs.resolved_at.as_deref()),
        updates,
    }
}

// ── Monitor ────────────────────────────────────────────────────────

/// Merge monitor metadata with its independently-fetched SLA history.
pub fn monitor_from_resource(
    raw: MonitorResource,
    availability: Option<f64>,
    status_history: Vec<DayStatus>,
) -> Monitor {
    let attrs = raw.attributes;
    let url = attrs.url.unwrap_or_default();

    Monitor {
        name: non_empty(attrs.pronounceable_name)
            .unwrap_or_else(|| if url.is_empty() { raw.id.clone() } else { url.clone() }),
        id: raw.id,
        status: MonitorStatus::parse(attrs.status.as_deref()),
        last_checked_at: parse_datetime(attrs.last_checked_at.as_deref()),
        availability,
        status_history,
        url,
    }
}

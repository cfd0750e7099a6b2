//! Monitor fan-out: per-monitor SLA histories fetched concurrently and
//! merged back in list order.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use futures_util::future::join_all;
use tracing::warn;

use statuscope_api::UptimeClient;
use statuscope_api::uptime::types::SlaReportResource;

use crate::convert::{day_of_timestamp, monitor_from_resource};
use crate::history::{classify_availability, day_window, empty_window};
use crate::model::{AggregateState, DayStatus, Monitor};

/// A monitor's SLA-derived history: headline availability plus the
/// padded day window.
struct SlaHistory {
    availability: Option<f64>,
    status_history: Vec<DayStatus>,
}

/// Fetch all monitors and their SLA histories.
///
/// The monitor list itself failing degrades to an empty result — the
/// snapshot is still produced. Per-monitor SLA fetches run concurrently;
/// `join_all` returns results in argument order, so the merged output
/// follows the original monitor-list order regardless of completion
/// order. A single monitor's failure never affects its siblings.
pub async fn collect_monitors(
    client: &UptimeClient,
    today: NaiveDate,
    window: usize,
) -> Vec<Monitor> {
    let monitors = match client.list_monitors().await {
        Ok(monitors) => monitors,
        Err(e) => {
            warn!(error = %e, "monitor list fetch failed; omitting monitors");
            return Vec::new();
        }
    };

    let histories = join_all(
        monitors
            .iter()
            .map(|m| fetch_sla_history(client, &m.id, today, window)),
    )
    .await;

    monitors
        .into_iter()
        .zip(histories)
        .map(|(raw, history)| {
            monitor_from_resource(raw, history.availability, history.status_history)
        })
        .collect()
}

/// Fetch and classify one monitor's SLA reports over the trailing
/// window ending today. Infallible: any failure (transport, non-2xx,
/// empty report set) yields a null availability and an all
/// `not_monitored` history.
async fn fetch_sla_history(
    client: &UptimeClient,
    monitor_id: &str,
    today: NaiveDate,
    window: usize,
) -> SlaHistory {
    let span = i64::try_from(window.saturating_sub(1)).unwrap_or(i64::MAX);
    let from = today - Duration::days(span);

    let reports = match client.list_sla_reports(monitor_id, from, today).await {
        Ok(reports) => reports,
        Err(e) => {
            warn!(monitor = monitor_id, error = %e, "SLA fetch failed; marking not monitored");
            return SlaHistory {
                availability: None,
                status_history: empty_window(today, window),
            };
        }
    };

    if reports.is_empty() {
        return SlaHistory {
            availability: None,
            status_history: empty_window(today, window),
        };
    }

    let mut reports = reports;
    // Lexicographic comparison is chronological for ISO-8601 timestamps.
    reports.sort_by(|a, b| a.attributes.created_at.cmp(&b.attributes.created_at));

    // A report without a numeric availability contributes no sample;
    // its day stays not_monitored.
    let samples: HashMap<NaiveDate, AggregateState> = reports
        .iter()
        .filter_map(|report| {
            let day = day_of_timestamp(&report.attributes.created_at)?;
            let availability = report.attributes.availability?;
            Some((day, classify_availability(availability)))
        })
        .collect();

    SlaHistory {
        availability: last_availability(&reports),
        status_history: day_window(today, window, &samples),
    }
}

/// Headline availability: the chronologically-last report's value.
fn last_availability(sorted: &[SlaReportResource]) -> Option<f64> {
    sorted.last().and_then(|r| r.attributes.availability)
}

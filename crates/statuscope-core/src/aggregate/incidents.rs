//! Status-report bucketing: ongoing vs. past, with a retention cutoff.

use chrono::{DateTime, Duration, Utc};

use statuscope_api::status_page::types::{KIND_REPORT, ResourceRef};

use crate::convert::incident_from_report;
use crate::model::Incident;
use crate::resolve::IncludedPool;

/// Past reports resolved earlier than this many days ago are dropped.
pub const INCIDENT_RETENTION_DAYS: i64 = 30;

/// Split status reports into (ongoing, past) buckets.
///
/// Bucket membership is decided solely by the report's `ongoing` flag.
/// A non-ongoing report whose resolution timestamp is older than the
/// retention cutoff is excluded from both buckets; an ongoing report is
/// never filtered, however old. No sorting beyond source order is
/// applied — presentation may re-sort.
pub fn bucket_reports(
    report_refs: &[ResourceRef],
    pool: &IncludedPool<'_>,
    now: DateTime<Utc>,
) -> (Vec<Incident>, Vec<Incident>) {
    let cutoff = now - Duration::days(INCIDENT_RETENTION_DAYS);

    let mut ongoing = Vec::new();
    let mut past = Vec::new();

    for rref in report_refs {
        let Some(report) = pool.get(KIND_REPORT, &rref.id) else {
            continue;
        };
        let incident = incident_from_report(report, pool, now);

        if incident.ongoing {
            ongoing.push(incident);
        } else {
            // Unparseable or absent resolution timestamps keep the report:
            // only a known-old resolution ages it out.
            if incident.resolved_at.is_some_and(|resolved| resolved < cutoff) {
                continue;
            }
            past.push(incident);
        }
    }

    (ongoing, past)
}

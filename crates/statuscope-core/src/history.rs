//! Day-window padding and availability classification.
//!
//! Both are pure functions: "today" is passed in by the caller (computed
//! once per build from the local wall clock), so results are
//! deterministic given `(today, input)`.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::model::{AggregateState, DayState, DayStatus};

/// Length of the tracked history window, in days.
pub const HISTORY_WINDOW_DAYS: usize = 90;

/// Availability at or above this is `Operational`.
pub const OPERATIONAL_THRESHOLD: f64 = 99.0;
/// Availability at or above this (but below operational) is `Degraded`;
/// anything lower is `Downtime`.
pub const DEGRADED_THRESHOLD: f64 = 80.0;

/// Produce exactly `window` consecutive [`DayStatus`] entries ending at
/// `today` (inclusive), oldest first. Days absent from `samples` become
/// [`DayState::NotMonitored`].
pub fn day_window(
    today: NaiveDate,
    window: usize,
    samples: &HashMap<NaiveDate, AggregateState>,
) -> Vec<DayStatus> {
    (0..window)
        .map(|i| {
            let back = i64::try_from(window - 1 - i).unwrap_or(i64::MAX);
            let day = today - Duration::days(back);
            let status = samples
                .get(&day)
                .copied()
                .map_or(DayState::NotMonitored, DayState::from);
            DayStatus { day, status }
        })
        .collect()
}

/// A fully unmonitored window — the placeholder history for a monitor
/// whose SLA fetch failed or returned nothing.
pub fn empty_window(today: NaiveDate, window: usize) -> Vec<DayStatus> {
    day_window(today, window, &HashMap::new())
}

/// Classify a daily availability percentage into a discrete state.
pub fn classify_availability(pct: f64) -> AggregateState {
    if pct >= OPERATIONAL_THRESHOLD {
        AggregateState::Operational
    } else if pct >= DEGRADED_THRESHOLD {
        AggregateState::Degraded
    } else {
        AggregateState::Downtime
    }
}

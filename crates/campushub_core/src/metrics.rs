//! Derived dashboard metrics.
//!
//! # Responsibility
//! - Compute counts and the 7-day alert window from current collection state.
//!
//! # Invariants
//! - Pure functions of the inputs; no independent mutable state is retained.
//! - Callers recompute after every mutation; nothing here is cached.
//! - Date comparison is calendar-day granularity; time of day is ignored.

use crate::model::record::{Announcement, Event, Student};
use chrono::NaiveDate;

/// How far ahead (in days, inclusive) an event raises an alert.
pub const ALERT_WINDOW_DAYS: i64 = 7;

/// Snapshot of all dashboard counters and alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    /// Count of all student records.
    pub total_students: usize,
    /// Count of active (non-archived) announcements.
    pub announcements_count: usize,
    /// Count of active events dated today or later.
    pub upcoming_events: usize,
    /// Active events within `[today, today + 7]`, in collection order.
    pub alerts: Vec<Event>,
}

impl DashboardMetrics {
    /// Number of events currently raising an alert.
    pub fn alerts_count(&self) -> usize {
        self.alerts.len()
    }
}

/// Recomputes all dashboard metrics from the given collections.
///
/// `today` is passed explicitly so callers (and tests) control the clock.
pub fn compute(
    announcements: &[Announcement],
    events: &[Event],
    students: &[Student],
    today: NaiveDate,
) -> DashboardMetrics {
    let announcements_count = announcements.iter().filter(|a| !a.archived).count();
    let upcoming_events = events
        .iter()
        .filter(|e| !e.archived && e.date >= today)
        .count();
    let alerts = events
        .iter()
        .filter(|e| !e.archived && in_alert_window(e.date, today))
        .cloned()
        .collect();

    DashboardMetrics {
        total_students: students.len(),
        announcements_count,
        upcoming_events,
        alerts,
    }
}

/// Returns whether `date` falls within the inclusive alert window.
///
/// An event exactly 7 days away is included; 8 days away is not. Past
/// events never alert.
pub fn in_alert_window(date: NaiveDate, today: NaiveDate) -> bool {
    let diff_days = date.signed_duration_since(today).num_days();
    (0..=ALERT_WINDOW_DAYS).contains(&diff_days)
}

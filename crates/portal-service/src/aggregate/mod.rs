//! Aggregation primitives for attendance and growth statistics
//!
//! Pure functions over already-fetched rows. Percentages are computed in
//! full `f64` precision and rounded to two decimals only here, at the
//! reporting boundary. Every zero-denominator case yields 0 rather than
//! NaN or an error.

use std::collections::BTreeMap;

use chrono::Datelike;
use portal_core::MemberAttendance;

/// Attendance counts for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyAttendance {
    /// Month key in "YYYY-MM" form
    pub month: String,
    /// Meetings the member checked in to
    pub attended: i64,
    /// Meetings the member has an attendance row for
    pub total: i64,
}

/// Percentage of meetings attended, rounded to two decimals.
/// Zero meetings means a rate of 0, not a division error.
pub fn attendance_rate(attended: i64, total_meetings: i64) -> f64 {
    if total_meetings == 0 {
        return 0.0;
    }
    round2(attended as f64 / total_meetings as f64 * 100.0)
}

/// Month-over-month growth of the active member count, as a percentage.
/// An empty baseline yields 0.
pub fn monthly_growth(active_now: i64, active_at_month_start: i64) -> f64 {
    if active_at_month_start == 0 {
        return 0.0;
    }
    round2(
        (active_now - active_at_month_start) as f64 / active_at_month_start as f64 * 100.0,
    )
}

/// Average attendance across the group: checked-in rows over the
/// (meetings x members) grid, as a percentage. Either empty dimension
/// yields 0.
pub fn average_attendance(checked_in_rows: i64, total_meetings: i64, total_members: i64) -> f64 {
    let slots = total_meetings * total_members;
    if slots == 0 {
        return 0.0;
    }
    round2(checked_in_rows as f64 / slots as f64 * 100.0)
}

/// Group attendance rows into per-month buckets keyed by the meeting's
/// date ("YYYY-MM"), sorted chronologically
pub fn bucket_by_month(rows: &[MemberAttendance]) -> Vec<MonthlyAttendance> {
    let mut buckets: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for row in rows {
        let key = format!(
            "{:04}-{:02}",
            row.meeting_date.year(),
            row.meeting_date.month()
        );
        let entry = buckets.entry(key).or_insert((0, 0));
        entry.1 += 1;
        if row.checked_in {
            entry.0 += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(month, (attended, total))| MonthlyAttendance {
            month,
            attended,
            total,
        })
        .collect()
}

/// Number of pages needed to show `total` rows at `limit` per page
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Row offset for a 1-based page number
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

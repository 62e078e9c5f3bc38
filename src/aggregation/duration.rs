//! Duration calculation for paired shifts.
//!
//! Durations are expressed in whole minutes, truncating. Both instants are
//! built on the shift's single grouping date, so a clock-out on the calendar
//! day after the clock-in is not supported; such a pair reads as a negative
//! span and is handled by the configured [`DurationPolicy`].

use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// How to treat a clock-out instant that precedes the clock-in instant.
///
/// The source data does not reject reversed pairs, so the engine makes the
/// handling an explicit, configurable choice rather than leaving the result
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Negative spans are reported as zero minutes.
    ClampToZero,
    /// Negative spans are passed through unchanged.
    Passthrough,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        DurationPolicy::ClampToZero
    }
}

/// Computes a shift's duration in whole minutes.
///
/// Returns `None` if either the clock-in or the clock-out is absent; an open
/// shift is valid input and never an error. When both sides are present the
/// duration is the span between `date + clock_in.time` and
/// `date + clock_out.time`, with negative spans resolved by `policy`.
///
/// # Examples
///
/// ```
/// use timesheet_engine::aggregation::{compute_duration, DurationPolicy};
/// use timesheet_engine::models::{EntryKind, Shift, TimeEntry};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let clock_in = TimeEntry {
///     staff_id: "staff_001".to_string(),
///     kind: EntryKind::In,
///     date,
///     time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     notes: None,
///     location: None,
/// };
/// let clock_out = TimeEntry {
///     kind: EntryKind::Out,
///     time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     ..clock_in.clone()
/// };
/// let shift = Shift {
///     staff_id: "staff_001".to_string(),
///     date,
///     clock_in: Some(clock_in.clone()),
///     clock_out: Some(clock_out.clone()),
///     entries: vec![clock_in, clock_out],
/// };
///
/// assert_eq!(compute_duration(&shift, DurationPolicy::ClampToZero), Some(480));
/// ```
pub fn compute_duration(shift: &Shift, policy: DurationPolicy) -> Option<i64> {
    let clock_in = shift.clock_in.as_ref()?;
    let clock_out = shift.clock_out.as_ref()?;

    let start = shift.date.and_time(clock_in.time);
    let end = shift.date.and_time(clock_out.time);
    let minutes = (end - start).num_minutes();

    match policy {
        DurationPolicy::ClampToZero => Some(minutes.max(0)),
        DurationPolicy::Passthrough => Some(minutes),
    }
}

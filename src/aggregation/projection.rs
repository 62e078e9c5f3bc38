//! Presentation projections over paired shifts and weekly summaries.
//!
//! Three read-only views: a chronological list of shifts, a per-staff weekly
//! grid, and an export-ready table for an external spreadsheet writer. None
//! of them mutate their inputs; they are re-derived on every call.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, StaffRef, WeeklySummary};

use super::duration::{DurationPolicy, compute_duration};

/// Placeholder shown where a shift side or duration is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the chronological list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRow {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Display name from the roster, or the staff id when not rostered.
    pub staff_name: String,
    /// Position from the roster, empty when not rostered.
    pub position: String,
    /// The shift date.
    pub date: NaiveDate,
    /// Clock-in time, if recorded.
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time, if recorded.
    pub clock_out: Option<NaiveTime>,
    /// Computed duration in minutes; `None` for open shifts.
    pub duration_minutes: Option<i64>,
    /// Concatenated notes from every entry in the shift's group.
    pub notes: String,
}

/// Builds the list view: one row per shift, sorted by `(staff_name, date)`.
///
/// Staff missing from the roster keep their rows; their id doubles as the
/// display name so the row is still attributable.
pub fn list_view(shifts: &[Shift], roster: &[StaffRef], policy: DurationPolicy) -> Vec<ShiftRow> {
    let mut rows: Vec<ShiftRow> = shifts
        .iter()
        .map(|shift| {
            let staff = roster.iter().find(|s| s.id == shift.staff_id);
            ShiftRow {
                staff_id: shift.staff_id.clone(),
                staff_name: staff
                    .map(|s| s.display_name.clone())
                    .unwrap_or_else(|| shift.staff_id.clone()),
                position: staff.map(|s| s.position.clone()).unwrap_or_default(),
                date: shift.date,
                clock_in: shift.clock_in.as_ref().map(|e| e.time),
                clock_out: shift.clock_out.as_ref().map(|e| e.time),
                duration_minutes: compute_duration(shift, policy),
                notes: shift.combined_notes(),
            }
        })
        .collect();

    rows.sort_by(|a, b| (&a.staff_name, a.date).cmp(&(&b.staff_name, b.date)));
    rows
}

/// One cell of the weekly grid.
///
/// A day with no completed shift renders distinctly from a day with a
/// zero-minute shift, so "did not work" is never confused with "worked
/// zero minutes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayCell {
    /// No completed shift on this day.
    NoShift,
    /// At least one completed shift totalling the given hours.
    Worked {
        /// Worked hours for the day.
        hours: Decimal,
    },
}

impl std::fmt::Display for DayCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCell::NoShift => write!(f, "-"),
            DayCell::Worked { hours } => write!(f, "{}", hours.normalize()),
        }
    }
}

/// One row of the weekly grid view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Display name from the roster.
    pub display_name: String,
    /// Position from the roster.
    pub position: String,
    /// One cell per day-of-week slot.
    pub days: [DayCell; 7],
    /// Total hours across the window.
    pub total_hours: Decimal,
    /// Number of completed shifts counted.
    pub shift_count: u32,
}

/// Builds the grid view: one row per weekly summary, in summary order.
pub fn grid_view(summaries: &[WeeklySummary]) -> Vec<GridRow> {
    summaries
        .iter()
        .map(|summary| {
            let days = std::array::from_fn(|i| {
                if summary.daily_shift_counts[i] == 0 {
                    DayCell::NoShift
                } else {
                    DayCell::Worked {
                        hours: summary.daily_hours[i],
                    }
                }
            });
            GridRow {
                staff_id: summary.staff_id.clone(),
                display_name: summary.display_name.clone(),
                position: summary.position.clone(),
                days,
                total_hours: summary.total_hours(),
                shift_count: summary.shift_count,
            }
        })
        .collect()
}

/// One flattened row of the export table. All fields are display-ready
/// strings for the external spreadsheet/CSV writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Display name of the staff member.
    pub staff_name: String,
    /// Position or role title.
    pub position: String,
    /// The shift date, ISO formatted.
    pub date: String,
    /// Full weekday name of the shift date.
    pub day_of_week: String,
    /// Clock-in time, or `N/A`.
    pub clock_in: String,
    /// Clock-out time, or `N/A`.
    pub clock_out: String,
    /// Formatted duration, or `N/A`.
    pub duration: String,
    /// Concatenated notes.
    pub notes: String,
}

/// An export-ready table: a fixed header row plus one row per shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTable {
    /// Column headers, in output order.
    pub headers: Vec<String>,
    /// Data rows.
    pub rows: Vec<ExportRow>,
}

/// Formats a duration in minutes as `"7h 30m"`, or [`NOT_AVAILABLE`].
///
/// Negative passthrough durations keep their sign: `-90` formats as
/// `"-1h 30m"`.
pub fn format_duration(minutes: Option<i64>) -> String {
    match minutes {
        None => NOT_AVAILABLE.to_string(),
        Some(m) => {
            let sign = if m < 0 { "-" } else { "" };
            let m = m.abs();
            format!("{}{}h {:02}m", sign, m / 60, m % 60)
        }
    }
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Flattens list-view rows into an export table.
///
/// # Errors
///
/// Returns [`EngineError::EmptyExport`] when `rows` is empty, so callers
/// reject the export instead of writing a blank file.
///
/// # Examples
///
/// ```
/// use timesheet_engine::aggregation::build_export_table;
/// use timesheet_engine::error::EngineError;
///
/// let result = build_export_table(&[]);
/// assert!(matches!(result, Err(EngineError::EmptyExport)));
/// ```
pub fn build_export_table(rows: &[ShiftRow]) -> EngineResult<ExportTable> {
    if rows.is_empty() {
        return Err(EngineError::EmptyExport);
    }

    let export_rows = rows
        .iter()
        .map(|row| ExportRow {
            staff_name: row.staff_name.clone(),
            position: row.position.clone(),
            date: row.date.to_string(),
            day_of_week: row.date.format("%A").to_string(),
            clock_in: format_time(row.clock_in),
            clock_out: format_time(row.clock_out),
            duration: format_duration(row.duration_minutes),
            notes: row.notes.clone(),
        })
        .collect();

    Ok(ExportTable {
        headers: [
            "Staff Name",
            "Position",
            "Date",
            "Day",
            "Clock In",
            "Clock Out",
            "Duration",
            "Notes",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect(),
        rows: export_rows,
    })
}

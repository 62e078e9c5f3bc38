//! Request types for the Timesheet Aggregation Engine API.
//!
//! This module defines the JSON request structures shared by the
//! `/timesheet` and `/timesheet/export` endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::aggregation::DurationPolicy;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{EntryRecord, ReportingWindow, StaffRef, WeekStart};

/// Request body for the timesheet endpoints.
///
/// Carries one complete snapshot of raw entries plus the roster and the
/// reporting window; the engine never fetches anything itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// The raw clock events to aggregate.
    pub entries: Vec<EntryRecordRequest>,
    /// The full staff roster for the window.
    #[serde(default)]
    pub roster: Vec<StaffRefRequest>,
    /// The reporting window and aggregation options.
    pub window: WindowRequest,
}

/// A raw clock event in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRecordRequest {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The event kind as recorded (`"in"` or `"out"`).
    #[serde(default)]
    pub kind: Option<String>,
    /// The calendar date the event is logged under.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// The time of day the event occurred.
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// Optional free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional free-text location.
    #[serde(default)]
    pub location: Option<String>,
}

/// A roster entry in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRefRequest {
    /// Unique identifier of the staff member.
    pub id: String,
    /// Human-readable name for display.
    pub display_name: String,
    /// The staff member's position or role title.
    #[serde(default)]
    pub position: String,
}

/// The reporting window and per-request aggregation options.
///
/// Omitted options fall back to the deployment configuration; an omitted
/// `end_date` makes the window the seven-day week starting at `start_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRequest {
    /// The first date of the window (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the window (inclusive); defaults to `start_date + 6`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Week-start override for day-of-week bucketing.
    #[serde(default)]
    pub week_start: Option<WeekStart>,
    /// Negative-duration policy override.
    #[serde(default)]
    pub duration_policy: Option<DurationPolicy>,
}

impl WindowRequest {
    /// Resolves the request against deployment defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidWindow`] when an explicit
    /// `end_date` precedes `start_date`.
    pub fn resolve(
        &self,
        config: &EngineConfig,
    ) -> EngineResult<(ReportingWindow, WeekStart, DurationPolicy)> {
        let window = match self.end_date {
            Some(end) => ReportingWindow::new(self.start_date, end)?,
            None => ReportingWindow::week(self.start_date),
        };
        Ok((
            window,
            self.week_start.unwrap_or(config.week_start),
            self.duration_policy.unwrap_or(config.duration_policy),
        ))
    }
}

impl From<EntryRecordRequest> for EntryRecord {
    fn from(req: EntryRecordRequest) -> Self {
        EntryRecord {
            staff_id: req.staff_id,
            kind: req.kind,
            date: req.date,
            time: req.time,
            notes: req.notes,
            location: req.location,
        }
    }
}

impl From<StaffRefRequest> for StaffRef {
    fn from(req: StaffRefRequest) -> Self {
        StaffRef {
            id: req.id,
            display_name: req.display_name,
            position: req.position,
        }
    }
}

//! Core data models for the Timesheet Aggregation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod reporting_window;
mod shift;
mod time_entry;
mod weekly_summary;

pub use reporting_window::{ReportingWindow, WeekStart};
pub use shift::{Shift, ShiftKey};
pub use time_entry::{EntryKind, EntryRecord, StaffRef, TimeEntry};
pub use weekly_summary::WeeklySummary;

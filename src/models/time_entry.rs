//! Time entry models and the staff roster reference.
//!
//! This module defines the raw clock-event record supplied by the external
//! persistence collaborator, the validated entry used by the aggregation
//! pipeline, and the roster entry used to join staff metadata by id.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The kind of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A clock-in event (start of work).
    In,
    /// A clock-out event (end of work).
    Out,
}

impl EntryKind {
    /// Parses an entry kind from its wire representation.
    ///
    /// Returns `None` for anything other than `"in"` or `"out"`, so that
    /// records with an unknown kind can be skipped rather than rejected
    /// wholesale.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in" => Some(EntryKind::In),
            "out" => Some(EntryKind::Out),
            _ => None,
        }
    }
}

/// A raw clock event as supplied by the external store.
///
/// Every field that the store may omit is an explicit `Option`; a record
/// missing its kind, date, or time is malformed and is counted and skipped
/// during pairing instead of failing the whole computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Identifier of the staff member the event belongs to.
    pub staff_id: String,
    /// The event kind as recorded (`"in"` or `"out"`); anything else is malformed.
    pub kind: Option<String>,
    /// The calendar date the event is logged under.
    pub date: Option<NaiveDate>,
    /// The time of day the event occurred.
    pub time: Option<NaiveTime>,
    /// Optional free-text notes attached to the event.
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional free-text location the event was logged from.
    #[serde(default)]
    pub location: Option<String>,
}

/// A validated clock event.
///
/// Unlike [`EntryRecord`], the kind, date, and time are guaranteed present.
/// Entries are immutable once created; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Identifier of the staff member the event belongs to.
    pub staff_id: String,
    /// Whether this is a clock-in or a clock-out.
    pub kind: EntryKind,
    /// The calendar date the event is logged under.
    pub date: NaiveDate,
    /// The time of day the event occurred.
    pub time: NaiveTime,
    /// Optional free-text notes attached to the event.
    pub notes: Option<String>,
    /// Optional free-text location the event was logged from.
    pub location: Option<String>,
}

impl TimeEntry {
    /// Validates a raw record into a [`TimeEntry`].
    ///
    /// Returns `None` if the record is malformed: missing kind, date, or
    /// time, or a kind outside `{"in", "out"}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::{EntryRecord, TimeEntry, EntryKind};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let record = EntryRecord {
    ///     staff_id: "staff_001".to_string(),
    ///     kind: Some("in".to_string()),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 1),
    ///     time: NaiveTime::from_hms_opt(9, 0, 0),
    ///     notes: None,
    ///     location: None,
    /// };
    /// let entry = TimeEntry::from_record(&record).unwrap();
    /// assert_eq!(entry.kind, EntryKind::In);
    /// ```
    pub fn from_record(record: &EntryRecord) -> Option<Self> {
        let kind = EntryKind::parse(record.kind.as_deref()?)?;
        Some(TimeEntry {
            staff_id: record.staff_id.clone(),
            kind,
            date: record.date?,
            time: record.time?,
            notes: record.notes.clone(),
            location: record.location.clone(),
        })
    }
}

/// A roster entry identifying one staff member.
///
/// Staff identity is owned by an external collaborator; the engine only
/// joins on `id` and echoes the display metadata into its summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    /// Unique identifier of the staff member.
    pub id: String,
    /// Human-readable name for display.
    pub display_name: String,
    /// The staff member's position or role title.
    pub position: String,
}

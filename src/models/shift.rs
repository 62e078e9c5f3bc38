//! Shift model and grouping key.
//!
//! A shift is derived, never persisted: it pairs the first clock-in and first
//! clock-out recorded for one staff member on one calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time_entry::TimeEntry;

/// The grouping key for a shift: one staff member on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShiftKey {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The calendar date the shift is logged under.
    pub date: NaiveDate,
}

/// A derived pairing of clock events for one staff member and date.
///
/// Either side may be absent: a shift with only a clock-in is still open, a
/// shift with only a clock-out has no matching in. Both are representable and
/// simply carry no computable duration.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Shift, TimeEntry, EntryKind};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let clock_in = TimeEntry {
///     staff_id: "staff_001".to_string(),
///     kind: EntryKind::In,
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     notes: None,
///     location: None,
/// };
/// let shift = Shift {
///     staff_id: "staff_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     clock_in: Some(clock_in.clone()),
///     clock_out: None,
///     entries: vec![clock_in],
/// };
/// assert!(!shift.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// The calendar date the shift is logged under.
    pub date: NaiveDate,
    /// The first chronological clock-in for the key, if any.
    pub clock_in: Option<TimeEntry>,
    /// The first chronological clock-out for the key, if any.
    pub clock_out: Option<TimeEntry>,
    /// Every valid entry observed for the key, in chronological order.
    ///
    /// Duplicate ins/outs beyond the first of each kind are retained here
    /// for notes display but play no part in duration math.
    pub entries: Vec<TimeEntry>,
}

impl Shift {
    /// Returns the grouping key for this shift.
    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            staff_id: self.staff_id.clone(),
            date: self.date,
        }
    }

    /// Returns true when both a clock-in and a clock-out are present.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }

    /// Concatenates the notes of every entry in the group, separated by "; ".
    ///
    /// Entries without notes contribute nothing; an all-noteless shift
    /// yields an empty string.
    pub fn combined_notes(&self) -> String {
        self.entries
            .iter()
            .filter_map(|e| e.notes.as_deref())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

//! Pairing engine: grouping raw clock events into shifts.
//!
//! Raw records are partitioned by `(staff_id, date)`, sorted by time, and the
//! first chronological entry of each kind becomes that key's clock-in or
//! clock-out. The source data tolerates duplicate and reversed entries;
//! first-of-each-kind is the contract, not a guess at correct timekeeping.

use std::collections::BTreeMap;

use crate::models::{EntryKind, EntryRecord, Shift, ShiftKey, TimeEntry};

/// The result of grouping raw records into shifts.
#[derive(Debug, Clone, PartialEq)]
pub struct PairingOutcome {
    /// One shift per `(staff_id, date)` key observed in the valid input,
    /// ordered by key.
    pub shifts: BTreeMap<ShiftKey, Shift>,
    /// The number of malformed records excluded from grouping.
    pub skipped_records: usize,
}

impl PairingOutcome {
    /// Returns the shifts as a vector in key order.
    pub fn into_shifts(self) -> Vec<Shift> {
        self.shifts.into_values().collect()
    }
}

/// Groups raw clock events into one shift per `(staff_id, date)` key.
///
/// Malformed records (missing kind, date, or time, or a kind outside
/// `{"in", "out"}`) are counted in `skipped_records` and excluded, so one
/// bad record never blanks the whole view. Every key observed in the valid
/// records yields exactly one shift, even when only one side is present.
/// Empty input yields an empty map.
///
/// Within a key, entries are sorted ascending by time; ties keep their input
/// order. The first `in` becomes `clock_in` and the first `out` becomes
/// `clock_out`, independent of their order relative to each other. Further
/// entries of either kind are retained in the shift's entry list for notes
/// display only.
///
/// # Examples
///
/// ```
/// use timesheet_engine::aggregation::group_into_shifts;
/// use timesheet_engine::models::EntryRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let records = vec![
///     EntryRecord {
///         staff_id: "staff_001".to_string(),
///         kind: Some("in".to_string()),
///         date: NaiveDate::from_ymd_opt(2024, 1, 1),
///         time: NaiveTime::from_hms_opt(9, 0, 0),
///         notes: None,
///         location: None,
///     },
///     EntryRecord {
///         staff_id: "staff_001".to_string(),
///         kind: Some("out".to_string()),
///         date: NaiveDate::from_ymd_opt(2024, 1, 1),
///         time: NaiveTime::from_hms_opt(17, 0, 0),
///         notes: None,
///         location: None,
///     },
/// ];
///
/// let outcome = group_into_shifts(&records);
/// assert_eq!(outcome.shifts.len(), 1);
/// assert_eq!(outcome.skipped_records, 0);
/// ```
pub fn group_into_shifts(records: &[EntryRecord]) -> PairingOutcome {
    let mut partitions: BTreeMap<ShiftKey, Vec<TimeEntry>> = BTreeMap::new();
    let mut skipped_records = 0usize;

    for record in records {
        match TimeEntry::from_record(record) {
            Some(entry) => {
                let key = ShiftKey {
                    staff_id: entry.staff_id.clone(),
                    date: entry.date,
                };
                partitions.entry(key).or_default().push(entry);
            }
            None => skipped_records += 1,
        }
    }

    let shifts = partitions
        .into_iter()
        .map(|(key, mut entries)| {
            // Stable sort: equal times keep input order, so the first
            // recorded event of a kind wins.
            entries.sort_by_key(|e| e.time);

            let clock_in = entries.iter().find(|e| e.kind == EntryKind::In).cloned();
            let clock_out = entries.iter().find(|e| e.kind == EntryKind::Out).cloned();

            let shift = Shift {
                staff_id: key.staff_id.clone(),
                date: key.date,
                clock_in,
                clock_out,
                entries,
            };
            (key, shift)
        })
        .collect();

    PairingOutcome {
        shifts,
        skipped_records,
    }
}

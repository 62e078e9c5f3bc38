//! Property-based tests for the aggregation pipeline.
//!
//! Covers the pipeline's structural guarantees: grouping completeness,
//! duration totality, aggregation conservation, roster completeness, and
//! idempotence over arbitrary entry sets.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveTime};
use proptest::prelude::*;

use timesheet_engine::aggregation::{
    DurationPolicy, aggregate_week, compute_duration, group_into_shifts,
};
use timesheet_engine::models::{EntryRecord, ReportingWindow, StaffRef, WeekStart};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
}

/// An arbitrary entry record: a small staff pool, dates around the window,
/// and a kind that is sometimes malformed or absent.
fn arb_record() -> impl Strategy<Value = EntryRecord> {
    (
        0u8..4,
        proptest::option::weighted(
            0.9,
            prop_oneof![Just("in"), Just("out"), Just("bogus")],
        ),
        proptest::option::weighted(0.95, 0u64..10),
        proptest::option::weighted(0.95, (0u32..24, 0u32..60)),
        proptest::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(staff, kind, day_offset, time, notes)| EntryRecord {
            staff_id: format!("staff_{:03}", staff),
            kind: kind.map(str::to_string),
            date: day_offset.map(|d| base_date() + Days::new(d)),
            time: time.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            notes,
            location: None,
        })
}

fn arb_records() -> impl Strategy<Value = Vec<EntryRecord>> {
    proptest::collection::vec(arb_record(), 0..40)
}

fn is_well_formed(record: &EntryRecord) -> bool {
    matches!(record.kind.as_deref(), Some("in") | Some("out"))
        && record.date.is_some()
        && record.time.is_some()
}

fn roster_covering(records: &[EntryRecord]) -> Vec<StaffRef> {
    let ids: BTreeSet<&str> = records.iter().map(|r| r.staff_id.as_str()).collect();
    ids.into_iter()
        .map(|id| StaffRef {
            id: id.to_string(),
            display_name: format!("Staff {}", id),
            position: "Porter".to_string(),
        })
        .collect()
}

proptest! {
    /// Every distinct (staff, date) pair among well-formed records appears
    /// as exactly one shift, and nothing else does.
    #[test]
    fn grouping_is_complete(records in arb_records()) {
        let outcome = group_into_shifts(&records);

        let expected_keys: BTreeSet<(String, NaiveDate)> = records
            .iter()
            .filter(|r| is_well_formed(r))
            .map(|r| (r.staff_id.clone(), r.date.unwrap()))
            .collect();
        let actual_keys: BTreeSet<(String, NaiveDate)> = outcome
            .shifts
            .keys()
            .map(|k| (k.staff_id.clone(), k.date))
            .collect();

        prop_assert_eq!(actual_keys, expected_keys);

        let malformed = records.iter().filter(|r| !is_well_formed(r)).count();
        prop_assert_eq!(outcome.skipped_records, malformed);
    }

    /// Duration computation is total: never panics, and returns None exactly
    /// when a side is missing.
    #[test]
    fn duration_is_total(records in arb_records()) {
        for shift in group_into_shifts(&records).into_shifts() {
            for policy in [DurationPolicy::ClampToZero, DurationPolicy::Passthrough] {
                let duration = compute_duration(&shift, policy);
                prop_assert_eq!(duration.is_none(), !shift.is_complete());
                if policy == DurationPolicy::ClampToZero {
                    if let Some(minutes) = duration {
                        prop_assert!(minutes >= 0);
                    }
                }
            }
        }
    }

    /// Total minutes across all summaries equal the summed durations of the
    /// complete shifts inside the window.
    #[test]
    fn aggregation_conserves_minutes(records in arb_records()) {
        let shifts = group_into_shifts(&records).into_shifts();
        let roster = roster_covering(&records);
        let window = ReportingWindow::week(base_date());
        let policy = DurationPolicy::ClampToZero;

        let summaries = aggregate_week(&shifts, &roster, &window, WeekStart::Sunday, policy);

        let summarized: i64 = summaries.iter().map(|s| s.total_minutes).sum();
        let expected: i64 = shifts
            .iter()
            .filter(|s| window.contains_date(s.date))
            .filter_map(|s| compute_duration(s, policy))
            .sum();
        prop_assert_eq!(summarized, expected);
    }

    /// Exactly one summary per roster member, in roster order, regardless of
    /// activity.
    #[test]
    fn roster_is_complete(records in arb_records()) {
        let shifts = group_into_shifts(&records).into_shifts();
        let mut roster = roster_covering(&records);
        roster.push(StaffRef {
            id: "staff_idle".to_string(),
            display_name: "Idle Staff".to_string(),
            position: "Porter".to_string(),
        });
        let window = ReportingWindow::week(base_date());

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &window,
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        prop_assert_eq!(summaries.len(), roster.len());
        for (summary, staff) in summaries.iter().zip(&roster) {
            prop_assert_eq!(&summary.staff_id, &staff.id);
        }

        let idle = summaries.last().unwrap();
        prop_assert_eq!(idle.total_minutes, 0);
        prop_assert_eq!(idle.shift_count, 0);
    }

    /// Re-running the pipeline on unchanged input produces structurally
    /// identical output.
    #[test]
    fn pipeline_is_idempotent(records in arb_records()) {
        let roster = roster_covering(&records);
        let window = ReportingWindow::week(base_date());
        let policy = DurationPolicy::ClampToZero;

        let run = || {
            let shifts = group_into_shifts(&records).into_shifts();
            let summaries =
                aggregate_week(&shifts, &roster, &window, WeekStart::Sunday, policy);
            (shifts, summaries)
        };

        prop_assert_eq!(run(), run());
    }
}

//! Weekly aggregation of shift durations per staff member.

use chrono::Datelike;

use crate::models::{ReportingWindow, Shift, StaffRef, WeekStart, WeeklySummary};

use super::duration::{DurationPolicy, compute_duration};

/// Aggregates shift durations into one [`WeeklySummary`] per roster member.
///
/// Every roster member gets a summary in roster order, all-zero when they
/// have no activity. Only shifts whose date falls inside `window` and whose
/// duration is computable (both sides present) contribute; each lands in the
/// day slot given by `week_start.day_index` of its date's weekday. Windows
/// shorter than seven days simply leave the untouched slots at zero; the
/// array is always length seven.
///
/// # Examples
///
/// ```
/// use timesheet_engine::aggregation::{aggregate_week, DurationPolicy};
/// use timesheet_engine::models::{ReportingWindow, StaffRef, WeekStart};
/// use chrono::NaiveDate;
///
/// let roster = vec![StaffRef {
///     id: "staff_001".to_string(),
///     display_name: "Alice Nguyen".to_string(),
///     position: "Receptionist".to_string(),
/// }];
/// let window = ReportingWindow::week(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
///
/// let summaries = aggregate_week(&[], &roster, &window, WeekStart::Sunday, DurationPolicy::ClampToZero);
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].total_minutes, 0);
/// ```
pub fn aggregate_week(
    shifts: &[Shift],
    roster: &[StaffRef],
    window: &ReportingWindow,
    week_start: WeekStart,
    policy: DurationPolicy,
) -> Vec<WeeklySummary> {
    let mut summaries: Vec<WeeklySummary> = roster.iter().map(WeeklySummary::zeroed).collect();

    for shift in shifts {
        if !window.contains_date(shift.date) {
            continue;
        }
        let Some(minutes) = compute_duration(shift, policy) else {
            continue;
        };
        let Some(summary) = summaries.iter_mut().find(|s| s.staff_id == shift.staff_id) else {
            // Shifts for staff outside the roster are not summarized.
            continue;
        };
        summary.add_shift(week_start.day_index(shift.date.weekday()), minutes);
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, TimeEntry};
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_staff(id: &str, name: &str) -> StaffRef {
        StaffRef {
            id: id.to_string(),
            display_name: name.to_string(),
            position: "Housekeeper".to_string(),
        }
    }

    fn make_shift(staff: &str, date: &str, clock_in: Option<&str>, clock_out: Option<&str>) -> Shift {
        let date = make_date(date);
        let entry = |kind, time: &str| TimeEntry {
            staff_id: staff.to_string(),
            kind,
            date,
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            notes: None,
            location: None,
        };
        let clock_in = clock_in.map(|t| entry(EntryKind::In, t));
        let clock_out = clock_out.map(|t| entry(EntryKind::Out, t));
        let entries = clock_in.iter().chain(clock_out.iter()).cloned().collect();
        Shift {
            staff_id: staff.to_string(),
            date,
            clock_in,
            clock_out,
            entries,
        }
    }

    // 2024-01-07 is a Sunday.
    fn sunday_window() -> ReportingWindow {
        ReportingWindow::week(make_date("2024-01-07"))
    }

    #[test]
    fn test_every_roster_member_summarized_in_order() {
        let roster = vec![
            make_staff("staff_003", "Carol"),
            make_staff("staff_001", "Alice"),
            make_staff("staff_002", "Bob"),
        ];
        let shifts = vec![make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:00"))];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        // Roster order, not sorted by name or hours.
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].staff_id, "staff_003");
        assert_eq!(summaries[1].staff_id, "staff_001");
        assert_eq!(summaries[2].staff_id, "staff_002");
    }

    #[test]
    fn test_zero_activity_staff_gets_all_zero_summary() {
        let roster = vec![make_staff("staff_001", "Alice"), make_staff("staff_002", "Bob")];
        let shifts = vec![make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:00"))];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        let idle = &summaries[1];
        assert_eq!(idle.daily_hours, [Decimal::ZERO; 7]);
        assert_eq!(idle.total_minutes, 0);
        assert_eq!(idle.shift_count, 0);
    }

    #[test]
    fn test_shift_lands_in_weekday_slot() {
        let roster = vec![make_staff("staff_001", "Alice")];
        // 2024-01-08 is a Monday: index 1 with a Sunday week start.
        let shifts = vec![make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:00"))];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        assert_eq!(summaries[0].daily_hours[1], dec("8"));
        assert_eq!(summaries[0].daily_shift_counts[1], 1);
        assert_eq!(summaries[0].total_minutes, 480);
        assert_eq!(summaries[0].shift_count, 1);
    }

    #[test]
    fn test_monday_week_start_shifts_slot() {
        let roster = vec![make_staff("staff_001", "Alice")];
        let shifts = vec![make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:00"))];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Monday,
            DurationPolicy::ClampToZero,
        );

        assert_eq!(summaries[0].daily_hours[0], dec("8"));
    }

    #[test]
    fn test_open_shifts_do_not_contribute() {
        let roster = vec![make_staff("staff_001", "Alice")];
        let shifts = vec![
            make_shift("staff_001", "2024-01-08", Some("09:00"), None),
            make_shift("staff_001", "2024-01-09", None, Some("17:00")),
        ];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        assert_eq!(summaries[0].total_minutes, 0);
        assert_eq!(summaries[0].shift_count, 0);
    }

    #[test]
    fn test_shifts_outside_window_excluded() {
        let roster = vec![make_staff("staff_001", "Alice")];
        let shifts = vec![
            make_shift("staff_001", "2024-01-06", Some("09:00"), Some("17:00")),
            make_shift("staff_001", "2024-01-14", Some("09:00"), Some("17:00")),
            make_shift("staff_001", "2024-01-10", Some("09:00"), Some("13:00")),
        ];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        assert_eq!(summaries[0].total_minutes, 240);
        assert_eq!(summaries[0].shift_count, 1);
    }

    #[test]
    fn test_partial_window_keeps_seven_slots() {
        let roster = vec![make_staff("staff_001", "Alice")];
        // Window covers only Wednesday through Friday.
        let window = ReportingWindow::new(make_date("2024-01-10"), make_date("2024-01-12")).unwrap();
        let shifts = vec![make_shift("staff_001", "2024-01-11", Some("09:00"), Some("12:00"))];

        let summaries =
            aggregate_week(&shifts, &roster, &window, WeekStart::Sunday, DurationPolicy::ClampToZero);

        assert_eq!(summaries[0].daily_hours.len(), 7);
        // Thursday is absolute index 4 under a Sunday week start.
        assert_eq!(summaries[0].daily_hours[4], dec("3"));
        let worked_slots = summaries[0]
            .daily_hours
            .iter()
            .filter(|h| **h != Decimal::ZERO)
            .count();
        assert_eq!(worked_slots, 1);
    }

    #[test]
    fn test_off_roster_shift_ignored() {
        let roster = vec![make_staff("staff_001", "Alice")];
        let shifts = vec![make_shift("staff_999", "2024-01-08", Some("09:00"), Some("17:00"))];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_minutes, 0);
    }

    #[test]
    fn test_total_minutes_conserved_across_staff() {
        let roster = vec![make_staff("staff_001", "Alice"), make_staff("staff_002", "Bob")];
        let shifts = vec![
            make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:00")),
            make_shift("staff_001", "2024-01-09", Some("10:00"), Some("14:30")),
            make_shift("staff_002", "2024-01-10", Some("07:00"), Some("15:00")),
        ];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        let total: i64 = summaries.iter().map(|s| s.total_minutes).sum();
        let expected: i64 = shifts
            .iter()
            .filter_map(|s| compute_duration(s, DurationPolicy::ClampToZero))
            .sum();
        assert_eq!(total, expected);
        assert_eq!(total, 480 + 270 + 480);
    }

    #[test]
    fn test_daily_sum_matches_total_minutes() {
        let roster = vec![make_staff("staff_001", "Alice")];
        let shifts = vec![
            make_shift("staff_001", "2024-01-08", Some("09:00"), Some("17:30")),
            make_shift("staff_001", "2024-01-09", Some("09:00"), Some("09:45")),
        ];

        let summaries = aggregate_week(
            &shifts,
            &roster,
            &sunday_window(),
            WeekStart::Sunday,
            DurationPolicy::ClampToZero,
        );

        let daily_sum: Decimal = summaries[0].daily_hours.iter().copied().sum();
        assert_eq!(daily_sum, summaries[0].total_hours());
    }
}

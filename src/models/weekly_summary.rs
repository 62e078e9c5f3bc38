//! Weekly summary model.
//!
//! One summary per staff member per reporting window, carrying a fixed
//! seven-slot grid of worked hours alongside the window totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time_entry::StaffRef;

/// Aggregated worked hours for one staff member across a reporting window.
///
/// `daily_hours` always has seven slots regardless of the window length;
/// days outside a partial window simply stay at zero. `daily_shift_counts`
/// records how many completed shifts contributed to each slot, which lets
/// presentation layers distinguish "worked zero minutes" from "did not work".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Identifier of the staff member.
    pub staff_id: String,
    /// Human-readable name, copied from the roster.
    pub display_name: String,
    /// Position or role title, copied from the roster.
    pub position: String,
    /// Worked hours per day-of-week slot (index 0 = configured week start).
    pub daily_hours: [Decimal; 7],
    /// Completed shifts counted per day-of-week slot.
    pub daily_shift_counts: [u32; 7],
    /// Total worked minutes across the window.
    pub total_minutes: i64,
    /// Number of completed (paired) shifts counted.
    pub shift_count: u32,
}

impl WeeklySummary {
    /// Creates an all-zero summary for a roster member.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::{StaffRef, WeeklySummary};
    /// use rust_decimal::Decimal;
    ///
    /// let staff = StaffRef {
    ///     id: "staff_001".to_string(),
    ///     display_name: "Alice Nguyen".to_string(),
    ///     position: "Receptionist".to_string(),
    /// };
    /// let summary = WeeklySummary::zeroed(&staff);
    /// assert_eq!(summary.daily_hours, [Decimal::ZERO; 7]);
    /// assert_eq!(summary.total_minutes, 0);
    /// assert_eq!(summary.shift_count, 0);
    /// ```
    pub fn zeroed(staff: &StaffRef) -> Self {
        Self {
            staff_id: staff.id.clone(),
            display_name: staff.display_name.clone(),
            position: staff.position.clone(),
            daily_hours: [Decimal::ZERO; 7],
            daily_shift_counts: [0; 7],
            total_minutes: 0,
            shift_count: 0,
        }
    }

    /// Adds one completed shift's minutes into the given day slot.
    pub fn add_shift(&mut self, day_index: usize, minutes: i64) {
        self.daily_hours[day_index] += Decimal::new(minutes, 0) / Decimal::new(60, 0);
        self.daily_shift_counts[day_index] += 1;
        self.total_minutes += minutes;
        self.shift_count += 1;
    }

    /// Returns the window total expressed in hours.
    pub fn total_hours(&self) -> Decimal {
        Decimal::new(self.total_minutes, 0) / Decimal::new(60, 0)
    }
}

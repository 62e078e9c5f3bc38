//! Reporting window and week-start convention.
//!
//! The window bounds which shift dates contribute to a weekly aggregation;
//! the week-start enum makes the day-of-week bucketing convention explicit
//! instead of leaving it as a hidden date-library default.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The day a reporting week begins on.
///
/// Determines how a calendar weekday maps to an index in the seven-slot
/// daily-hours array: with [`WeekStart::Sunday`], index 0 is Sunday and
/// index 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday through Saturday (index 0 = Sunday).
    Sunday,
    /// Weeks run Monday through Sunday (index 0 = Monday).
    Monday,
}

impl WeekStart {
    /// Maps a calendar weekday to its bucket index under this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::WeekStart;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(WeekStart::Sunday.day_index(Weekday::Sun), 0);
    /// assert_eq!(WeekStart::Sunday.day_index(Weekday::Sat), 6);
    /// assert_eq!(WeekStart::Monday.day_index(Weekday::Mon), 0);
    /// assert_eq!(WeekStart::Monday.day_index(Weekday::Sun), 6);
    /// ```
    pub fn day_index(self, weekday: Weekday) -> usize {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
            WeekStart::Monday => weekday.num_days_from_monday() as usize,
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::Sunday
    }
}

/// An inclusive date range bounding one aggregation run.
///
/// A window need not align to a full seven-day span; day-of-week bucketing
/// uses the absolute weekday index, so partial windows produce sparse
/// seven-slot arrays rather than shorter ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// The first date of the window (inclusive).
    pub start: NaiveDate,
    /// The last date of the window (inclusive).
    pub end: NaiveDate,
}

impl ReportingWindow {
    /// Creates a window from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWindow`] if `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the seven-day window beginning at `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::ReportingWindow;
    /// use chrono::NaiveDate;
    ///
    /// let window = ReportingWindow::week(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
    /// ```
    pub fn week(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    /// Checks whether a date falls within the window, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

//! Aggregation pipeline for the Timesheet Aggregation Engine.
//!
//! This module contains the pure transformations from raw clock events to
//! presentation data: pairing raw entries into shifts, computing shift
//! durations, aggregating durations into per-staff weekly summaries, and
//! projecting the results into list, grid, and export views.

mod duration;
mod pairing;
mod projection;
mod weekly;

pub use duration::{DurationPolicy, compute_duration};
pub use pairing::{PairingOutcome, group_into_shifts};
pub use projection::{
    DayCell, ExportRow, ExportTable, GridRow, NOT_AVAILABLE, ShiftRow, build_export_table,
    format_duration, grid_view, list_view,
};
pub use weekly::aggregate_week;

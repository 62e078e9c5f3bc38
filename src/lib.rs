//! Timesheet Aggregation Engine
//!
//! This crate turns raw clock-in/clock-out events into paired shifts, computed
//! durations, per-staff weekly summaries, and presentation/export projections
//! for timesheet and payroll views.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;

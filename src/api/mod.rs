//! HTTP API module for the Timesheet Aggregation Engine.
//!
//! This module provides the REST API endpoints for computing timesheet
//! views and export tables from raw clock events.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntryRecordRequest, StaffRefRequest, TimesheetRequest, WindowRequest};
pub use response::{ApiError, ExportResponse, TimesheetResponse};
pub use state::AppState;

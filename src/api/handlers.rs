//! HTTP request handlers for the Timesheet Aggregation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{
    DurationPolicy, aggregate_week, build_export_table, grid_view, group_into_shifts, list_view,
};
use crate::error::EngineResult;
use crate::models::{EntryRecord, ReportingWindow, Shift, StaffRef, WeekStart};

use super::request::TimesheetRequest;
use super::response::{ApiError, ApiErrorResponse, ExportResponse, TimesheetResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .route("/timesheet/export", post(export_handler))
        .with_state(state)
}

/// Everything derived from one aggregation run.
struct PipelineOutput {
    response: TimesheetResponse,
}

/// Runs the full pipeline for one request snapshot.
///
/// Shifts outside the resolved window are dropped before any view is built,
/// so the list, grid, and summaries all describe the same window.
fn run_pipeline(
    entries: &[EntryRecord],
    roster: &[StaffRef],
    window: &ReportingWindow,
    week_start: WeekStart,
    policy: DurationPolicy,
) -> PipelineOutput {
    let outcome = group_into_shifts(entries);
    let skipped_records = outcome.skipped_records;

    let shifts: Vec<Shift> = outcome
        .into_shifts()
        .into_iter()
        .filter(|shift| window.contains_date(shift.date))
        .collect();

    let summaries = aggregate_week(&shifts, roster, window, week_start, policy);
    let grid = grid_view(&summaries);
    let rows = list_view(&shifts, roster, policy);

    PipelineOutput {
        response: TimesheetResponse {
            shifts: rows,
            grid,
            summaries,
            skipped_records,
        },
    }
}

fn process_request(
    state: &AppState,
    request: TimesheetRequest,
) -> EngineResult<PipelineOutput> {
    let (window, week_start, policy) = request.window.resolve(state.config())?;
    let entries: Vec<EntryRecord> = request.entries.into_iter().map(Into::into).collect();
    let roster: Vec<StaffRef> = request.roster.into_iter().map(Into::into).collect();
    Ok(run_pipeline(&entries, &roster, &window, week_start, policy))
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the `POST /timesheet` endpoint.
///
/// Accepts a snapshot of raw entries, a roster, and a window, and returns
/// the list view, grid view, and weekly summaries.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match process_request(&state, request) {
        Ok(output) => {
            info!(
                correlation_id = %correlation_id,
                shifts = output.response.shifts.len(),
                skipped_records = output.response.skipped_records,
                "Timesheet computed"
            );
            (StatusCode::OK, Json(output.response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Timesheet request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /timesheet/export` endpoint.
///
/// Runs the same pipeline and returns the flattened export table; a window
/// with no shifts is rejected with `EMPTY_EXPORT` rather than answered with
/// a blank table.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = process_request(&state, request)
        .and_then(|output| {
            let table = build_export_table(&output.response.shifts)?;
            Ok(ExportResponse {
                table,
                skipped_records: output.response.skipped_records,
            })
        });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                rows = response.table.rows.len(),
                "Export table built"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export request failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

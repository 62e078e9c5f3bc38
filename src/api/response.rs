//! Response types for the Timesheet Aggregation Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API, including the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::aggregation::{ExportTable, GridRow, ShiftRow};
use crate::error::EngineError;
use crate::models::WeeklySummary;

/// Success body for `POST /timesheet`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetResponse {
    /// List-view rows for the shifts in the window, sorted by name and date.
    pub shifts: Vec<ShiftRow>,
    /// Grid-view rows, one per roster member.
    pub grid: Vec<GridRow>,
    /// Weekly summaries, one per roster member in roster order.
    pub summaries: Vec<WeeklySummary>,
    /// The number of malformed records excluded from grouping.
    pub skipped_records: usize,
}

/// Success body for `POST /timesheet/export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// The flattened export table for the external file writer.
    pub table: ExportTable,
    /// The number of malformed records excluded from grouping.
    pub skipped_records: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidWindow { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WINDOW",
                    format!("Invalid reporting window: {} to {}", start, end),
                    "The window end date must not precede its start date",
                ),
            },
            EngineError::EmptyExport => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EMPTY_EXPORT",
                    "Nothing to export",
                    "No shifts fall within the requested window",
                ),
            },
        }
    }
}

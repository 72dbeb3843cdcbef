//! Response types for the Vacation Allocation Engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors and allocation rejections to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::RejectionReason;

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
            EngineError::InvalidDateRange {
                start_date,
                end_date,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!(
                        "Invalid date range: start date {} is after end date {}",
                        start_date, end_date
                    ),
                    "The start date of a vacation period must not be after its end date",
                ),
            },
            EngineError::PeriodNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "PERIOD_NOT_FOUND",
                    format!("Vacation period not found: {}", id),
                ),
            },
            EngineError::InvalidStatusTransition { id, from, to } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "INVALID_STATUS_TRANSITION",
                    format!("Invalid status transition for period {}: {} -> {}", id, from, to),
                    "Only pending periods can be approved or rejected",
                ),
            },
        }
    }
}

impl From<RejectionReason> for ApiErrorResponse {
    fn from(reason: RejectionReason) -> Self {
        ApiErrorResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::new(reason.code(), reason.to_string()),
        }
    }
}

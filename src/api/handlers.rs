//! HTTP request handlers for the Vacation Allocation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::SubmitOutcome;

use super::request::{EditPeriodRequest, ListPeriodsQuery, StatusUpdateRequest, SubmitPeriodRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/vacation-periods",
            post(submit_handler).get(list_handler),
        )
        .route(
            "/vacation-periods/:id",
            get(get_handler).put(edit_handler).delete(delete_handler),
        )
        .route("/vacation-periods/:id/status", put(status_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
    }
}

/// Handler for `POST /vacation-periods`.
///
/// Validates the proposed period against the user's existing periods for the
/// year and persists it as `pending` when admissible.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitPeriodRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Processing vacation period submission"
    );

    match state
        .store()
        .submit(&request.user_id, request.start_date, request.end_date)
        .await
    {
        Ok(SubmitOutcome::Created(period)) => {
            (StatusCode::CREATED, Json(period)).into_response()
        }
        Ok(SubmitOutcome::Rejected(reason)) => {
            info!(
                correlation_id = %correlation_id,
                user_id = %request.user_id,
                code = reason.code(),
                "Vacation period rejected"
            );
            ApiErrorResponse::from(reason).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Submission failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /vacation-periods`.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListPeriodsQuery>,
) -> impl IntoResponse {
    let periods = state
        .store()
        .list(query.user_id.as_deref(), query.year)
        .await;
    Json(periods)
}

/// Handler for `GET /vacation-periods/{id}`.
async fn get_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.store().get(id).await {
        Ok(period) => Json(period).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `PUT /vacation-periods/{id}`.
///
/// Changes the dates of a period; the full rule set is re-run with the
/// period excluded from its own active set.
async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EditPeriodRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        period_id = %id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Processing vacation period edit"
    );

    match state
        .store()
        .edit(id, request.start_date, request.end_date)
        .await
    {
        Ok(SubmitOutcome::Created(period)) => Json(period).into_response(),
        Ok(SubmitOutcome::Rejected(reason)) => {
            info!(
                correlation_id = %correlation_id,
                period_id = %id,
                code = reason.code(),
                "Vacation period edit rejected"
            );
            ApiErrorResponse::from(reason).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Edit failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `PUT /vacation-periods/{id}/status`.
///
/// Approves or rejects a pending period. The validator is not re-invoked;
/// quota was satisfied at creation time.
async fn status_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(rejection, correlation_id);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state.store().set_status(id, request.status).await {
        Ok(period) => Json(period).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                period_id = %id,
                error = %err,
                "Status update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `DELETE /vacation-periods/{id}`.
async fn delete_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.store().delete(id).await {
        Ok(period) => {
            info!(period_id = %id, user_id = %period.user_id, "Vacation period deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

//! HTTP API module for the Vacation Allocation Engine.
//!
//! This module provides the REST endpoints for submitting, listing,
//! editing, approving, and deleting vacation periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EditPeriodRequest, StatusUpdateRequest, SubmitPeriodRequest};
pub use response::ApiError;
pub use state::AppState;

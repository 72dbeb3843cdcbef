//! Request types for the Vacation Allocation Engine API.
//!
//! This module defines the JSON request structures for the vacation-period
//! endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PeriodStatus;

/// Request body for `POST /vacation-periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitPeriodRequest {
    /// Identifier of the requesting employee.
    pub user_id: String,
    /// First day of vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of vacation (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for `PUT /vacation-periods/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPeriodRequest {
    /// New first day of vacation (inclusive).
    pub start_date: NaiveDate,
    /// New last day of vacation (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for `PUT /vacation-periods/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// The requested status; only `approved` or `rejected` are accepted.
    pub status: PeriodStatus,
}

/// Query parameters for `GET /vacation-periods`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPeriodsQuery {
    /// Restrict results to one employee.
    pub user_id: Option<String>,
    /// Restrict results to one calendar year.
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_submit_request() {
        let json = r#"{
            "user_id": "emp_001",
            "start_date": "2025-07-01",
            "end_date": "2025-07-15"
        }"#;

        let request: SubmitPeriodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "emp_001");
        assert_eq!(
            request.start_date,
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert_eq!(
            request.end_date,
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        );
    }

    #[test]
    fn test_deserialize_status_update() {
        let request: StatusUpdateRequest =
            serde_json::from_str(r#"{"status": "approved"}"#).unwrap();
        assert_eq!(request.status, PeriodStatus::Approved);
    }

    #[test]
    fn test_deserialize_list_query_defaults() {
        let query: ListPeriodsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.user_id.is_none());
        assert!(query.year.is_none());
    }

    #[test]
    fn test_submit_request_rejects_bad_date_format() {
        let json = r#"{
            "user_id": "emp_001",
            "start_date": "01/07/2025",
            "end_date": "2025-07-15"
        }"#;
        assert!(serde_json::from_str::<SubmitPeriodRequest>(json).is_err());
    }
}

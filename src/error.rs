//! Error types for the Vacation Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions that can occur outside of allocation
//! decisions. Allocation rejections are not errors; they are returned as
//! [`Decision`](crate::models::Decision) values by the validator.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::PeriodStatus;

/// The main error type for the Vacation Allocation Engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateRange {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: start date 2025-03-10 is after end date 2025-03-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The proposed range is reversed; durations are only defined for
    /// `start_date <= end_date`.
    #[error("Invalid date range: start date {start_date} is after end date {end_date}")]
    InvalidDateRange {
        /// The proposed start date.
        start_date: NaiveDate,
        /// The proposed end date.
        end_date: NaiveDate,
    },

    /// No vacation period exists with the given id.
    #[error("Vacation period not found: {id}")]
    PeriodNotFound {
        /// The id that was not found.
        id: Uuid,
    },

    /// A status transition was requested that the lifecycle does not allow.
    /// Only `pending` periods can be approved or rejected.
    #[error("Invalid status transition for period {id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// The id of the period.
        id: Uuid,
        /// The current status of the period.
        from: PeriodStatus,
        /// The requested status.
        to: PeriodStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start_date: date(2025, 6, 20),
            end_date: date(2025, 6, 10),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start date 2025-06-20 is after end date 2025-06-10"
        );
    }

    #[test]
    fn test_period_not_found_displays_id() {
        let id = Uuid::new_v4();
        let error = EngineError::PeriodNotFound { id };
        assert_eq!(error.to_string(), format!("Vacation period not found: {}", id));
    }

    #[test]
    fn test_invalid_status_transition_displays_statuses() {
        let id = Uuid::new_v4();
        let error = EngineError::InvalidStatusTransition {
            id,
            from: PeriodStatus::Approved,
            to: PeriodStatus::Rejected,
        };
        assert_eq!(
            error.to_string(),
            format!("Invalid status transition for period {}: approved -> rejected", id)
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::PeriodNotFound { id: Uuid::nil() })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

//! Vacation period model and its status lifecycle.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::validation::duration_in_days;

/// Lifecycle status of a vacation period.
///
/// Only `pending` and `approved` periods count against an employee's annual
/// quota; `rejected` periods are excluded from all calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// Submitted and awaiting an administrator's decision.
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator; no longer counts against quota.
    Rejected,
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeriodStatus::Pending => "pending",
            PeriodStatus::Approved => "approved",
            PeriodStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// A requested vacation period for a single employee.
///
/// The date range is inclusive of both endpoints; `duration` and `year` are
/// derived from the dates at construction time and kept consistent by
/// [`VacationPeriod::reschedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// Identifier of the requesting employee.
    pub user_id: String,
    /// First day of vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of vacation (inclusive).
    pub end_date: NaiveDate,
    /// Number of days in the period, counting both endpoints.
    pub duration: i64,
    /// The calendar year the period is attributed to (the start date's year).
    pub year: i32,
    /// Current lifecycle status.
    pub status: PeriodStatus,
    /// When the period was submitted.
    pub created_at: DateTime<Utc>,
}

impl VacationPeriod {
    /// Creates a new pending period for the given user and date range.
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `start_date` is after
    /// `end_date`; the duration calculation is only defined for ordered
    /// ranges.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::{PeriodStatus, VacationPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let period = VacationPeriod::new(
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(period.duration, 15);
    /// assert_eq!(period.year, 2025);
    /// assert_eq!(period.status, PeriodStatus::Pending);
    /// ```
    pub fn new(
        user_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            start_date,
            end_date,
            duration: duration_in_days(start_date, end_date),
            year: start_date.year(),
            status: PeriodStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Replaces the date range, recomputing `duration` and `year`.
    ///
    /// Returns [`EngineError::InvalidDateRange`] for reversed ranges and
    /// leaves the period untouched in that case.
    pub fn reschedule(&mut self, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        self.start_date = start_date;
        self.end_date = end_date;
        self.duration = duration_in_days(start_date, end_date);
        self.year = start_date.year();
        Ok(())
    }

    /// Returns true if the period counts against the annual quota.
    ///
    /// Pending and approved periods count; rejected periods do not.
    pub fn counts_against_quota(&self) -> bool {
        matches!(self.status, PeriodStatus::Pending | PeriodStatus::Approved)
    }
}

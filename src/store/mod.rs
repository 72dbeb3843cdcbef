//! In-memory persistence for vacation periods.
//!
//! The store owns the only shared mutable state in the system. Validation
//! reads the active set and the subsequent insert is a separate step, so the
//! store holds its lock across read, validate, and write; two concurrent
//! submissions for the same user and year therefore serialize and cannot
//! jointly exceed the annual ceilings.

use std::collections::HashMap;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodStatus, RejectionReason, VacationPeriod};
use crate::validation::validate_allocation;

/// The outcome of submitting or editing a vacation period.
///
/// A rejection is a normal outcome of a well-formed request, distinct from
/// the [`EngineError`] cases (reversed ranges, unknown ids).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The period passed validation and was written.
    Created(VacationPeriod),
    /// The period failed validation; nothing was written.
    Rejected(RejectionReason),
}

/// Thread-safe collection of vacation periods.
///
/// All mutating operations take the internal lock for their whole duration,
/// which is what upholds the per-user-per-year invariants under concurrent
/// submissions.
#[derive(Debug, Default)]
pub struct PeriodStore {
    periods: Mutex<HashMap<Uuid, VacationPeriod>>,
}

impl PeriodStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and, if admissible, records a new pending period.
    ///
    /// Returns [`EngineError::InvalidDateRange`] for reversed ranges before
    /// any validation runs.
    pub async fn submit(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<SubmitOutcome> {
        let period = VacationPeriod::new(user_id, start_date, end_date)?;

        let mut periods = self.periods.lock().await;
        let existing: Vec<VacationPeriod> = periods.values().cloned().collect();
        let decision = validate_allocation(&existing, period.duration, user_id, period.year);

        if let Some(reason) = decision.rejection() {
            return Ok(SubmitOutcome::Rejected(reason.clone()));
        }

        info!(
            period_id = %period.id,
            user_id = %period.user_id,
            year = period.year,
            duration = period.duration,
            "Vacation period created"
        );
        periods.insert(period.id, period.clone());
        Ok(SubmitOutcome::Created(period))
    }

    /// Changes the dates of an existing period, re-running full validation
    /// with the period itself excluded from the active set.
    ///
    /// Exclusion guarantees an edit cannot bypass the quota or combination
    /// rules, and that an edit leaving the duration unchanged is always
    /// admissible.
    pub async fn edit(
        &self,
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<SubmitOutcome> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start_date,
                end_date,
            });
        }

        let mut periods = self.periods.lock().await;
        let current = periods
            .get(&id)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { id })?;

        let mut edited = current.clone();
        edited.reschedule(start_date, end_date)?;

        let others: Vec<VacationPeriod> = periods
            .values()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        let decision =
            validate_allocation(&others, edited.duration, &edited.user_id, edited.year);

        if let Some(reason) = decision.rejection() {
            return Ok(SubmitOutcome::Rejected(reason.clone()));
        }

        info!(
            period_id = %id,
            user_id = %edited.user_id,
            year = edited.year,
            duration = edited.duration,
            "Vacation period rescheduled"
        );
        periods.insert(id, edited.clone());
        Ok(SubmitOutcome::Created(edited))
    }

    /// Transitions a pending period to approved or rejected.
    ///
    /// The validator is not re-invoked: quota was satisfied at creation
    /// time, and rejection frees quota implicitly because rejected periods
    /// are excluded from future active sets.
    pub async fn set_status(&self, id: Uuid, status: PeriodStatus) -> EngineResult<VacationPeriod> {
        let mut periods = self.periods.lock().await;
        let period = periods
            .get_mut(&id)
            .ok_or(EngineError::PeriodNotFound { id })?;

        if period.status != PeriodStatus::Pending || status == PeriodStatus::Pending {
            return Err(EngineError::InvalidStatusTransition {
                id,
                from: period.status,
                to: status,
            });
        }

        period.status = status;
        info!(period_id = %id, status = %status, "Vacation period status updated");
        Ok(period.clone())
    }

    /// Removes a period, releasing its quota contribution.
    pub async fn delete(&self, id: Uuid) -> EngineResult<VacationPeriod> {
        let mut periods = self.periods.lock().await;
        let period = periods
            .remove(&id)
            .ok_or(EngineError::PeriodNotFound { id })?;
        info!(period_id = %id, user_id = %period.user_id, "Vacation period deleted");
        Ok(period)
    }

    /// Fetches a single period by id.
    pub async fn get(&self, id: Uuid) -> EngineResult<VacationPeriod> {
        let periods = self.periods.lock().await;
        periods
            .get(&id)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { id })
    }

    /// Lists periods, optionally filtered by user and/or year, newest first.
    pub async fn list(&self, user_id: Option<&str>, year: Option<i32>) -> Vec<VacationPeriod> {
        let periods = self.periods.lock().await;
        let mut result: Vec<VacationPeriod> = periods
            .values()
            .filter(|p| user_id.is_none_or(|u| p.user_id == u))
            .filter(|p| year.is_none_or(|y| p.year == y))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        result
    }
}

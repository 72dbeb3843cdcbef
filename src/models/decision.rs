//! The validator's decision type and rejection taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a proposed vacation period was rejected.
///
/// Every variant carries the data needed to render a precise message to the
/// user; the `Display` implementation provides the engine's own phrasing.
/// Rejections are ordinary decision values, not errors raised for control
/// flow, but implementing `std::error::Error` lets callers propagate them
/// with `?` when that suits their flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The requested duration is not one of the legal values.
    #[error("Invalid duration: vacation periods must be 5, 10, 15 or 30 days")]
    InvalidDuration {
        /// The duration that was requested.
        requested: i64,
    },

    /// Granting the request would exceed the annual day ceiling.
    #[error(
        "Exceeds the limit of {limit} vacation days per year (used: {days_used}, requested: {requested})"
    )]
    QuotaExceeded {
        /// Days already used by non-rejected periods this year.
        days_used: i64,
        /// The duration that was requested.
        requested: i64,
        /// The annual day ceiling.
        limit: i64,
    },

    /// The annual period-count ceiling is already reached.
    #[error("Maximum of {limit} vacation periods per year already reached")]
    TooManyPeriods {
        /// The annual period-count ceiling.
        limit: usize,
    },

    /// The resulting duration multiset matches no canonical combination.
    #[error(
        "Invalid period combination: allowed combinations are 30 days, 15+15 days, or 5+10+15 days, in any submission order"
    )]
    InvalidCombination {
        /// The duration that was requested.
        requested: i64,
    },
}

impl RejectionReason {
    /// Returns a stable machine-readable code for the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidDuration { .. } => "INVALID_DURATION",
            RejectionReason::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            RejectionReason::TooManyPeriods { .. } => "TOO_MANY_PERIODS",
            RejectionReason::InvalidCombination { .. } => "INVALID_COMBINATION",
        }
    }
}

/// The outcome of validating a proposed vacation period.
///
/// # Example
///
/// ```
/// use vacation_engine::models::{Decision, RejectionReason};
///
/// let decision = Decision::Rejected(RejectionReason::TooManyPeriods { limit: 3 });
/// assert!(!decision.is_admissible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// The proposed period may be persisted.
    Admissible,
    /// The proposed period must not be persisted; the reason says why.
    Rejected(RejectionReason),
}

impl Decision {
    /// Returns true if the proposed period was admitted.
    pub fn is_admissible(&self) -> bool {
        matches!(self, Decision::Admissible)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            Decision::Admissible => None,
            Decision::Rejected(reason) => Some(reason),
        }
    }
}

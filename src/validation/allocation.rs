//! Allocation validation against annual quota and combination rules.
//!
//! The validator is a pure function over an employee's existing periods for
//! a year: it inspects and decides, and leaves persistence, status
//! transitions, and notification to the caller. It assumes the caller hands
//! it an up-to-date view of the existing periods; the store serializes the
//! read-validate-insert step so concurrent submissions cannot pass
//! validation against a stale view.

use crate::models::{Decision, RejectionReason, VacationPeriod};

use super::duration::is_legal_duration;

/// Annual ceiling on vacation days per employee.
pub const MAX_DAYS_PER_YEAR: i64 = 30;

/// Annual ceiling on vacation periods per employee.
pub const MAX_PERIODS_PER_YEAR: usize = 3;

/// The sorted duration multisets permitted to exhaust a year's allocation.
///
/// A partially used year must always be a strict prefix of one of these,
/// so the order of submission never matters: any prefix of a canonical
/// combination can still be completed.
pub const CANONICAL_COMBINATIONS: [&[i64]; 3] = [&[30], &[15, 15], &[5, 10, 15]];

/// Returns the sorted durations of the periods that count against quota for
/// the given user and year.
pub fn active_durations(existing: &[VacationPeriod], user_id: &str, year: i32) -> Vec<i64> {
    let mut durations: Vec<i64> = existing
        .iter()
        .filter(|p| p.user_id == user_id && p.year == year && p.counts_against_quota())
        .map(|p| p.duration)
        .collect();
    durations.sort_unstable();
    durations
}

/// Decides whether a new period of `new_duration` days is admissible for the
/// given user and year, against their existing periods.
///
/// Checks run in a fixed order; the first failure wins:
///
/// 1. the day quota (`MAX_DAYS_PER_YEAR`),
/// 2. the period count (`MAX_PERIODS_PER_YEAR`),
/// 3. for a first period, membership in [`LEGAL_DURATIONS`](super::LEGAL_DURATIONS),
/// 4. otherwise, that the sorted durations including the new one are a
///    prefix of some combination in [`CANONICAL_COMBINATIONS`].
///
/// Periods belonging to other users or years, and rejected periods, are
/// ignored. The function has no side effects and may be called concurrently.
///
/// # Example
///
/// ```
/// use vacation_engine::validation::validate_allocation;
///
/// let decision = validate_allocation(&[], 15, "emp_001", 2025);
/// assert!(decision.is_admissible());
///
/// let decision = validate_allocation(&[], 7, "emp_001", 2025);
/// assert!(!decision.is_admissible());
/// ```
pub fn validate_allocation(
    existing: &[VacationPeriod],
    new_duration: i64,
    user_id: &str,
    year: i32,
) -> Decision {
    let durations = active_durations(existing, user_id, year);
    let days_used: i64 = durations.iter().sum();
    let periods_count = durations.len();

    if days_used + new_duration > MAX_DAYS_PER_YEAR {
        return Decision::Rejected(RejectionReason::QuotaExceeded {
            days_used,
            requested: new_duration,
            limit: MAX_DAYS_PER_YEAR,
        });
    }

    if periods_count >= MAX_PERIODS_PER_YEAR {
        return Decision::Rejected(RejectionReason::TooManyPeriods {
            limit: MAX_PERIODS_PER_YEAR,
        });
    }

    if periods_count == 0 {
        if is_legal_duration(new_duration) {
            return Decision::Admissible;
        }
        return Decision::Rejected(RejectionReason::InvalidDuration {
            requested: new_duration,
        });
    }

    let mut candidate = durations;
    candidate.push(new_duration);
    candidate.sort_unstable();

    if matches_canonical_prefix(&candidate) {
        Decision::Admissible
    } else {
        Decision::Rejected(RejectionReason::InvalidCombination {
            requested: new_duration,
        })
    }
}

/// Returns true if `candidate` (sorted ascending) equals the leading
/// elements of at least one canonical combination.
fn matches_canonical_prefix(candidate: &[i64]) -> bool {
    CANONICAL_COMBINATIONS
        .iter()
        .any(|combination| combination.len() >= candidate.len() && candidate == &combination[..candidate.len()])
}

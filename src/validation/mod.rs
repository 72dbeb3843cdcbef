//! Validation logic for the Vacation Allocation Engine.
//!
//! This module contains the two collaborating pieces of the core: the
//! duration calculator, which turns an inclusive date range into a day count
//! and knows the legal duration values, and the allocation validator, which
//! decides whether a proposed period fits the employee's remaining annual
//! allocation and the permitted duration combinations.

mod allocation;
mod duration;

pub use allocation::{
    CANONICAL_COMBINATIONS, MAX_DAYS_PER_YEAR, MAX_PERIODS_PER_YEAR, active_durations,
    validate_allocation,
};
pub use duration::{LEGAL_DURATIONS, duration_in_days, is_legal_duration};

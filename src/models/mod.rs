//! Core data models for the Vacation Allocation Engine.
//!
//! This module contains the domain models used throughout the engine.

mod decision;
mod vacation_period;

pub use decision::{Decision, RejectionReason};
pub use vacation_period::{PeriodStatus, VacationPeriod};

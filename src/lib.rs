//! Vacation Allocation Engine for an internal HR tool.
//!
//! This crate decides whether a proposed vacation period is admissible given
//! an employee's existing periods for a calendar year, enforcing the 30-day
//! annual ceiling, the 3-period ceiling, and the permitted duration
//! combinations (30, 15+15, or 5+10+15 days in any submission order).

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

//! Domain model for daily answers and guess results.
//!
//! # Invariants
//! - Words are ASCII lowercase letters once normalized.
//! - Dates are calendar days without time zone; one answer per day.

pub mod daily_answer;
pub mod guess;

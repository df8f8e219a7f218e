//! Domain module containing core business types and validation rules
//!
//! This module defines the core entities (Habit, StreakState) and the
//! identifier types used throughout the habit tracking system. Temporal
//! reasoning lives in the engine module; these types only know how to
//! validate themselves and how their counters move.

pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid periodicity: {0}")]
    InvalidPeriodicity(String),
}

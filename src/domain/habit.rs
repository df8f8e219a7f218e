//! Habit entity and related functionality
//!
//! This module defines the core Habit struct that represents something the
//! user wants to do regularly, along with its validation rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A habit represents something the user wants to do regularly
///
/// Each habit has a name (unique across all habits, exact match), a
/// periodicity in days, and the date it was created. All three fields are
/// fixed at creation time; streak counters live in a separate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Display name (e.g., "Workout", "Water the Plants")
    pub name: String,
    /// Maximum number of days allowed between check-offs before the
    /// streak breaks (1 = daily, 7 = weekly)
    pub periodicity: u32,
    /// When this habit was created
    pub date_created: NaiveDate,
}

impl Habit {
    /// Longest accepted habit name, in characters after trimming
    pub const MAX_NAME_LEN: usize = 100;
    /// Largest accepted periodicity, in days
    pub const MAX_PERIODICITY: u32 = 365;

    /// Create a new habit with validation
    ///
    /// The name is trimmed before it is validated and stored, so lookups
    /// against the stored name never depend on surrounding whitespace.
    pub fn new(
        name: String,
        periodicity: u32,
        date_created: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_periodicity(periodicity)?;

        Ok(Self {
            name: name.trim().to_string(),
            periodicity,
            date_created,
        })
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > Self::MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(format!(
                "Habit name cannot be longer than {} characters",
                Self::MAX_NAME_LEN
            )));
        }

        Ok(())
    }

    /// Validate periodicity according to business rules
    fn validate_periodicity(periodicity: u32) -> Result<(), DomainError> {
        if periodicity == 0 {
            return Err(DomainError::InvalidPeriodicity(
                "Periodicity must be at least 1 day".to_string(),
            ));
        }

        if periodicity > Self::MAX_PERIODICITY {
            return Err(DomainError::InvalidPeriodicity(format!(
                "Periodicity cannot be longer than {} days",
                Self::MAX_PERIODICITY
            )));
        }

        Ok(())
    }
}

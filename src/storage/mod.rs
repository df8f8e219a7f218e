//! Storage layer for persisting habit data
//!
//! This module handles all database operations using SQLite. It defines the
//! narrow persistence interface the engine and the operations layer are
//! written against, plus the concrete SQLite implementation behind it.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{HabitId, StreakState};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: HabitId },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the persistence interface for habits
///
/// This trait allows swapping SQLite for another database while keeping
/// the same interface, and lets the streak logic be tested against any
/// implementation. Lookups that can legitimately come up empty return
/// `Option`; by-id reads of rows that must exist return `HabitNotFound`
/// when they don't.
pub trait HabitStore {
    /// Insert a new habit row and return its assigned id
    fn insert_habit(
        &self,
        name: &str,
        periodicity: u32,
        date_created: NaiveDate,
    ) -> Result<HabitId, StorageError>;

    /// Look up a habit id by exact name match
    fn find_habit_id(&self, name: &str) -> Result<Option<HabitId>, StorageError>;

    /// Create the zeroed streak record for a freshly inserted habit
    fn insert_streak_state(&self, habit_id: HabitId) -> Result<(), StorageError>;

    /// Check whether a check-off exists for the habit on the given date
    fn checkoff_exists(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, StorageError>;

    /// Append a check-off; errors if one already exists for this date
    fn insert_checkoff(&self, habit_id: HabitId, date: NaiveDate) -> Result<(), StorageError>;

    /// Read a habit's periodicity
    fn get_periodicity(&self, habit_id: HabitId) -> Result<u32, StorageError>;

    /// Read a habit's streak counters
    fn get_streak_state(&self, habit_id: HabitId) -> Result<Option<StreakState>, StorageError>;

    /// Overwrite the current streak counter
    fn set_current_streak(&self, habit_id: HabitId, value: u32) -> Result<(), StorageError>;

    /// Raise the longest streak counter
    ///
    /// Applied conditionally: values at or below the stored longest
    /// streak leave the row untouched, so the counter never decreases.
    fn set_longest_streak(&self, habit_id: HabitId, value: u32) -> Result<(), StorageError>;

    /// Names of all stored habits
    fn all_habit_names(&self) -> Result<HashSet<String>, StorageError>;

    /// Names of habits with exactly this periodicity
    fn habit_names_with_periodicity(
        &self,
        periodicity: u32,
    ) -> Result<HashSet<String>, StorageError>;

    /// Run `op` inside a single database transaction
    ///
    /// Commits when `op` returns Ok and rolls back when it returns Err,
    /// so multi-step write sequences are applied all-or-nothing.
    /// Transactions do not nest; `op` must not call `atomically` again.
    fn atomically<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Self) -> Result<T, StorageError>,
        Self: Sized;
}

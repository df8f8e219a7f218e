//! Checking off habits for a date

use chrono::NaiveDate;

use crate::domain::StreakState;
use crate::engine;
use crate::storage::{HabitStore, StorageError};

/// Outcome of attempting to check off a habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOffOutcome {
    /// Check-off recorded; carries the updated counters
    CheckedOff(StreakState),
    /// No habit with the given name exists
    UnknownHabit,
    /// A check-off for this date was already recorded
    AlreadyCheckedOff,
}

/// Check off a habit by name for the given date
///
/// Runs the required sequence: reconcile for `date` first (so a broken
/// streak restarts at 1 instead of continuing from a stale counter),
/// then record the check-off.
pub fn check_off<S: HabitStore>(
    store: &S,
    name: &str,
    date: NaiveDate,
) -> Result<CheckOffOutcome, StorageError> {
    let habit_id = match store.find_habit_id(name)? {
        Some(id) => id,
        None => return Ok(CheckOffOutcome::UnknownHabit),
    };

    if store.checkoff_exists(habit_id, date)? {
        return Ok(CheckOffOutcome::AlreadyCheckedOff);
    }

    let periodicity = store.get_periodicity(habit_id)?;
    engine::reconcile(store, habit_id, periodicity, date)?;
    let state = engine::record_check_off(store, habit_id, date)?;

    Ok(CheckOffOutcome::CheckedOff(state))
}

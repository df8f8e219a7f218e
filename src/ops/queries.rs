//! Read-only queries over stored habits
//!
//! None of these reconcile; current streak values are only as fresh as
//! the last reconciliation for the session's date. The interactive
//! session guarantees that with its startup sweep.

use std::collections::HashSet;

use crate::domain::StreakState;
use crate::storage::{HabitStore, StorageError};

/// A habit's current streak, or `None` if no such habit exists
pub fn current_streak<S: HabitStore>(
    store: &S,
    name: &str,
) -> Result<Option<u32>, StorageError> {
    let habit_id = match store.find_habit_id(name)? {
        Some(id) => id,
        None => return Ok(None),
    };

    let streak = store
        .get_streak_state(habit_id)?
        .map(|state| state.current_streak)
        .unwrap_or(0);

    Ok(Some(streak))
}

/// A habit's longest streak, or `None` if no such habit exists
pub fn longest_streak<S: HabitStore>(
    store: &S,
    name: &str,
) -> Result<Option<u32>, StorageError> {
    let habit_id = match store.find_habit_id(name)? {
        Some(id) => id,
        None => return Ok(None),
    };

    let streak = store
        .get_streak_state(habit_id)?
        .map(|state| state.longest_streak)
        .unwrap_or(0);

    Ok(Some(streak))
}

/// Names of all stored habits
pub fn all_habit_names<S: HabitStore>(store: &S) -> Result<HashSet<String>, StorageError> {
    store.all_habit_names()
}

/// Names of habits with exactly this periodicity
pub fn habits_by_periodicity<S: HabitStore>(
    store: &S,
    periodicity: u32,
) -> Result<HashSet<String>, StorageError> {
    store.habit_names_with_periodicity(periodicity)
}

/// Every habit name paired with its longest streak, sorted by name
pub fn longest_streaks<S: HabitStore>(store: &S) -> Result<Vec<(String, u32)>, StorageError> {
    streak_listing(store, |state| state.longest_streak)
}

/// Every habit name paired with its current streak, sorted by name
pub fn current_streaks<S: HabitStore>(store: &S) -> Result<Vec<(String, u32)>, StorageError> {
    streak_listing(store, |state| state.current_streak)
}

fn streak_listing<S, F>(store: &S, pick: F) -> Result<Vec<(String, u32)>, StorageError>
where
    S: HabitStore,
    F: Fn(StreakState) -> u32,
{
    let mut rows = Vec::new();

    for name in store.all_habit_names()? {
        if let Some(habit_id) = store.find_habit_id(&name)? {
            let state = store.get_streak_state(habit_id)?.unwrap_or_default();
            rows.push((name, pick(state)));
        }
    }

    rows.sort();
    Ok(rows)
}

//! Streak engine: breakage detection and check-off recording
//!
//! This module is the only place with temporal reasoning. Both operations
//! take explicit dates; resolving "today" is the caller's job. The rules
//! they maintain: `reconcile` may only zero a current streak, never grow
//! it, and `record_check_off` may only grow it, never zero it. Running
//! reconcile before recording, once per day, keeps the counters honest.

use chrono::{Duration, NaiveDate};

use crate::domain::{HabitId, StreakState};
use crate::storage::{HabitStore, StorageError};

/// Reconcile the stored current streak against the check-off history
///
/// Scans the inclusive window `[as_of_date - periodicity, as_of_date]`
/// for a check-off. If none exists there, the streak is broken and the
/// current streak is reset to 0; otherwise the counters are left exactly
/// as they are. Returns the current streak after reconciliation.
///
/// Calling this twice for the same date without an intervening check-off
/// gives the same answer both times.
pub fn reconcile<S: HabitStore>(
    store: &S,
    habit_id: HabitId,
    periodicity: u32,
    as_of_date: NaiveDate,
) -> Result<u32, StorageError> {
    // The window spans periodicity + 1 dates: a check-off landing exactly
    // `periodicity` days ago still keeps the streak alive today.
    let mut alive = false;
    for offset in 0..=periodicity {
        let candidate = as_of_date - Duration::days(offset as i64);
        if store.checkoff_exists(habit_id, candidate)? {
            alive = true;
            break;
        }
    }

    if !alive {
        store.set_current_streak(habit_id, 0)?;
        tracing::debug!("Streak broken for habit {} as of {}", habit_id, as_of_date);
        return Ok(0);
    }

    let state = store.get_streak_state(habit_id)?.unwrap_or_default();
    Ok(state.current_streak)
}

/// Record a completed habit for the given date
///
/// Appends the check-off and moves both streak counters in a single
/// transaction: the current streak goes up by one, and the longest streak
/// is raised to match when overtaken.
///
/// Callers must have confirmed via `checkoff_exists` that the date is not
/// already recorded, and must have reconciled the habit for the same date
/// first; this operation never detects breakage on its own. Recording a
/// date earlier than existing check-offs is unsupported.
pub fn record_check_off<S: HabitStore>(
    store: &S,
    habit_id: HabitId,
    date: NaiveDate,
) -> Result<StreakState, StorageError> {
    store.atomically(|s| {
        s.insert_checkoff(habit_id, date)?;

        let updated = s.get_streak_state(habit_id)?.unwrap_or_default().incremented();
        s.set_current_streak(habit_id, updated.current_streak)?;
        s.set_longest_streak(habit_id, updated.current_streak)?;

        Ok(updated)
    })
}

/// Reconcile every stored habit for the given date
///
/// The interactive session runs this once at startup so stored current
/// streaks are trustworthy before any query or check-off. Returns the
/// number of habits reconciled.
pub fn reconcile_all<S: HabitStore>(
    store: &S,
    as_of_date: NaiveDate,
) -> Result<usize, StorageError> {
    let names = store.all_habit_names()?;
    let mut reconciled = 0;

    for name in &names {
        if let Some(habit_id) = store.find_habit_id(name)? {
            let periodicity = store.get_periodicity(habit_id)?;
            reconcile(store, habit_id, periodicity, as_of_date)?;
            reconciled += 1;
        }
    }

    tracing::info!("Reconciled {} habits as of {}", reconciled, as_of_date);
    Ok(reconciled)
}

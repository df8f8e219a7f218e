//! Creating new habits

use crate::domain::{Habit, HabitId};
use crate::storage::{HabitStore, StorageError};

/// Outcome of attempting to create a habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The habit was created under this id
    Created(HabitId),
    /// A habit with the same name already exists; nothing was written
    AlreadyExists,
}

/// Create a habit together with its zeroed streak record
///
/// An existing habit with the same name turns the call into a no-op
/// reported as `AlreadyExists`. Both inserts run in one transaction so a
/// habit can never exist without its streak record.
pub fn create_habit<S: HabitStore>(
    store: &S,
    habit: &Habit,
) -> Result<CreateOutcome, StorageError> {
    if store.find_habit_id(&habit.name)?.is_some() {
        return Ok(CreateOutcome::AlreadyExists);
    }

    let habit_id = store.atomically(|s| {
        let habit_id = s.insert_habit(&habit.name, habit.periodicity, habit.date_created)?;
        s.insert_streak_state(habit_id)?;
        Ok(habit_id)
    })?;

    tracing::info!("Created habit '{}' ({})", habit.name, habit_id);
    Ok(CreateOutcome::Created(habit_id))
}

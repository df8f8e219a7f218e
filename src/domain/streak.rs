//! Streak counters and the rules for moving them
//!
//! This module defines the StreakState struct that holds the persisted
//! streak counters for a habit. The counters only ever move through the
//! two transitions below; deciding WHEN they move is the engine's job.

use serde::{Deserialize, Serialize};

/// Persisted streak counters for a habit
///
/// `current_streak` counts consecutive on-time check-offs up to and
/// including the most recent one. `longest_streak` is the highest value
/// `current_streak` has ever reached and never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Current consecutive completions within the periodicity window
    pub current_streak: u32,
    /// Best streak ever achieved for this habit
    pub longest_streak: u32,
}

impl StreakState {
    /// Create a fresh streak record with both counters at zero
    pub fn new() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
        }
    }

    /// Counters after one more on-time check-off
    ///
    /// Increments the current streak and raises the longest streak to
    /// match whenever the current streak overtakes it.
    pub fn incremented(self) -> Self {
        let current_streak = self.current_streak + 1;
        Self {
            current_streak,
            longest_streak: self.longest_streak.max(current_streak),
        }
    }

    /// Counters after the streak has been detected as broken
    pub fn broken(self) -> Self {
        Self {
            current_streak: 0,
            ..self
        }
    }
}

//! Identifier types used throughout the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a habit
///
/// This is a wrapper around the store-assigned row id to provide type
/// safety - you can't accidentally pass a periodicity or a streak count
/// where a habit id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

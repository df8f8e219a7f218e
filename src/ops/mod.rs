//! User-level operations on habits
//!
//! This module contains the operations the interactive session calls to
//! act on stored habits. Each one is a free function generic over the
//! store so it can be exercised against an in-memory database in tests.
//! Expected conditions (name taken, unknown habit, already checked off)
//! are outcome variants, not errors.

pub mod checkoff;
pub mod create;
pub mod queries;

// Re-export operation functions for easy access
pub use checkoff::*;
pub use create::*;
pub use queries::*;

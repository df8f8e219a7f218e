//! Public library interface for the habits tracker
//!
//! This crate exports the domain types, the streak engine, the storage
//! layer, and the interactive session so they can be driven by the
//! binary and exercised directly by tests.

use thiserror::Error;

// Internal modules
pub mod cli;
pub mod domain;
pub mod engine;
pub mod ops;
pub mod storage;

// Re-export the types most callers need
pub use cli::{Command, Session};
pub use domain::{DomainError, Habit, HabitId, StreakState};
pub use ops::{CheckOffOutcome, CreateOutcome};
pub use storage::{HabitStore, SqliteStore, StorageError};

/// Errors that can occur while running the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

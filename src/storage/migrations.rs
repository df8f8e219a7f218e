//! Database migration management
//!
//! This module handles creating and updating the SQLite database schema.
//! It ensures the database has all the required tables and indexes.

use rusqlite::Connection;

use crate::storage::StorageError;

/// Current database schema version
///
/// Increment this when you add new migrations
const CURRENT_VERSION: i32 = 1;

/// Initialize the database schema
///
/// This creates all required tables and indexes if they don't exist.
/// It also sets up the version tracking for future migrations.
pub fn initialize_database(conn: &Connection) -> Result<(), StorageError> {
    // Create version tracking table first
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    // Check current version
    let current_version = get_current_version(conn)?;

    // Run migrations if needed
    if current_version < CURRENT_VERSION {
        run_migrations(conn, current_version)?;
        set_version(conn, CURRENT_VERSION)?;
    }

    Ok(())
}

/// Get the current database schema version
fn get_current_version(conn: &Connection) -> Result<i32, StorageError> {
    let version = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get::<_, i32>(0)
        })
        .unwrap_or(0); // Default to version 0 if no version record exists

    Ok(version)
}

/// Set the database schema version
fn set_version(conn: &Connection, version: i32) -> Result<(), StorageError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Run database migrations from the current version to the latest
fn run_migrations(conn: &Connection, from_version: i32) -> Result<(), StorageError> {
    if from_version < 1 {
        migration_v1(conn)?;
    }

    // Future migrations would go here:
    // if from_version < 2 {
    //     migration_v2(conn)?;
    // }

    Ok(())
}

/// Migration to version 1: Create initial tables
///
/// This creates the core tables for habits, check-offs, and streaks.
/// Check-offs and streaks cascade on habit deletion so a habit can only
/// ever be removed as a whole.
fn migration_v1(conn: &Connection) -> Result<(), StorageError> {
    // Create habits table
    conn.execute(
        "CREATE TABLE IF NOT EXISTS habits (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            periodicity INTEGER NOT NULL,
            date_created TEXT NOT NULL
        )",
        [],
    )?;

    // Create check_off_dates table (append-only completion history)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS check_off_dates (
            habit_id INTEGER NOT NULL,
            check_off_date TEXT NOT NULL,
            FOREIGN KEY (habit_id) REFERENCES habits (id)
                ON DELETE CASCADE ON UPDATE CASCADE
        )",
        [],
    )?;

    // Create streaks table (one counter row per habit)
    conn.execute(
        "CREATE TABLE IF NOT EXISTS streaks (
            habit_id INTEGER PRIMARY KEY,
            current_streak INTEGER NOT NULL DEFAULT 0,
            longest_streak INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (habit_id) REFERENCES habits (id)
                ON DELETE CASCADE ON UPDATE CASCADE
        )",
        [],
    )?;

    // Create indexes for better query performance
    create_indexes_v1(conn)?;

    tracing::info!("Applied migration v1: Created initial database schema");
    Ok(())
}

/// Create database indexes for version 1
fn create_indexes_v1(conn: &Connection) -> Result<(), StorageError> {
    // Unique constraint: at most one check-off per habit and date, and the
    // index the window scan probes
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_check_off_dates_unique
         ON check_off_dates (habit_id, check_off_date)",
        [],
    )?;

    // Index for filtering habits by periodicity
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_habits_periodicity
         ON habits (periodicity)",
        [],
    )?;

    tracing::info!("Created database indexes for v1");
    Ok(())
}

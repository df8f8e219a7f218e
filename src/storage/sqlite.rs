//! SQLite implementation of the habit persistence interface
//!
//! This module provides the concrete SQLite implementation for storing and
//! retrieving habits, check-offs, and streak counters. Dates are bound and
//! read as `chrono::NaiveDate` values in ISO-8601 text columns.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{HabitId, StreakState};
use crate::storage::{migrations, HabitStore, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the operations defined in the HabitStore trait.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        let store = Self::setup(conn)?;
        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(store)
    }

    /// Open a fresh in-memory database, mainly useful for tests
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        Self::setup(conn)
    }

    fn setup(conn: Connection) -> Result<Self, StorageError> {
        // Enable foreign key constraints
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        // Initialize/migrate the database schema
        migrations::initialize_database(&conn)?;

        Ok(Self { conn })
    }
}

impl HabitStore for SqliteStore {
    /// Insert a new habit row and return its assigned rowid
    fn insert_habit(
        &self,
        name: &str,
        periodicity: u32,
        date_created: NaiveDate,
    ) -> Result<HabitId, StorageError> {
        self.conn.execute(
            "INSERT INTO habits (name, periodicity, date_created) VALUES (?1, ?2, ?3)",
            params![name, periodicity, date_created],
        )?;

        let habit_id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Inserted habit: {} ({})", name, habit_id);
        Ok(habit_id)
    }

    /// Look up a habit id by exact name match
    fn find_habit_id(&self, name: &str) -> Result<Option<HabitId>, StorageError> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM habits WHERE name = ?1",
                params![name],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        Ok(id.map(HabitId))
    }

    /// Create the zeroed streak record for a freshly inserted habit
    fn insert_streak_state(&self, habit_id: HabitId) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO streaks (habit_id, current_streak, longest_streak) VALUES (?1, 0, 0)",
            params![habit_id.0],
        )?;

        Ok(())
    }

    /// Check whether a check-off exists for the habit on the given date
    fn checkoff_exists(&self, habit_id: HabitId, date: NaiveDate) -> Result<bool, StorageError> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM check_off_dates WHERE habit_id = ?1 AND check_off_date = ?2",
                params![habit_id.0, date],
                |_| Ok(()),
            )
            .optional()?;

        Ok(found.is_some())
    }

    /// Append a check-off row
    ///
    /// The unique index on (habit_id, check_off_date) rejects a second
    /// check-off for the same day; callers are expected to test with
    /// `checkoff_exists` first.
    fn insert_checkoff(&self, habit_id: HabitId, date: NaiveDate) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO check_off_dates (habit_id, check_off_date) VALUES (?1, ?2)",
            params![habit_id.0, date],
        )?;

        tracing::debug!("Recorded check-off for habit {} on {}", habit_id, date);
        Ok(())
    }

    /// Read a habit's periodicity
    fn get_periodicity(&self, habit_id: HabitId) -> Result<u32, StorageError> {
        let result = self.conn.query_row(
            "SELECT periodicity FROM habits WHERE id = ?1",
            params![habit_id.0],
            |row| row.get::<_, u32>(0),
        );

        match result {
            Ok(periodicity) => Ok(periodicity),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StorageError::HabitNotFound { habit_id })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Read a habit's streak counters
    fn get_streak_state(&self, habit_id: HabitId) -> Result<Option<StreakState>, StorageError> {
        let state = self
            .conn
            .query_row(
                "SELECT current_streak, longest_streak FROM streaks WHERE habit_id = ?1",
                params![habit_id.0],
                |row| {
                    Ok(StreakState {
                        current_streak: row.get(0)?,
                        longest_streak: row.get(1)?,
                    })
                },
            )
            .optional()?;

        Ok(state)
    }

    /// Overwrite the current streak counter
    fn set_current_streak(&self, habit_id: HabitId, value: u32) -> Result<(), StorageError> {
        let rows_affected = self.conn.execute(
            "UPDATE streaks SET current_streak = ?2 WHERE habit_id = ?1",
            params![habit_id.0, value],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { habit_id });
        }

        Ok(())
    }

    /// Raise the longest streak counter
    ///
    /// The comparison lives in the WHERE clause so values at or below the
    /// stored longest streak leave the row untouched.
    fn set_longest_streak(&self, habit_id: HabitId, value: u32) -> Result<(), StorageError> {
        self.conn.execute(
            "UPDATE streaks SET longest_streak = ?2
             WHERE habit_id = ?1 AND longest_streak < ?2",
            params![habit_id.0, value],
        )?;

        Ok(())
    }

    /// Names of all stored habits
    fn all_habit_names(&self) -> Result<HashSet<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT name FROM habits")?;
        let name_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = HashSet::new();
        for name in name_iter {
            names.insert(name?);
        }

        Ok(names)
    }

    /// Names of habits with exactly this periodicity
    fn habit_names_with_periodicity(
        &self,
        periodicity: u32,
    ) -> Result<HashSet<String>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM habits WHERE periodicity = ?1")?;
        let name_iter = stmt.query_map(params![periodicity], |row| row.get::<_, String>(0))?;

        let mut names = HashSet::new();
        for name in name_iter {
            names.insert(name?);
        }

        Ok(names)
    }

    /// Run `op` inside a single database transaction
    fn atomically<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Self) -> Result<T, StorageError>,
    {
        // Dropping the transaction without committing rolls it back
        let tx = self.conn.unchecked_transaction()?;
        let value = op(self)?;
        tx.commit()?;

        Ok(value)
    }
}

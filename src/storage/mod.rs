/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing and retrieving habit records, including
/// their JSON-encoded completion logs.

pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use sqlite::*;

use chrono::NaiveDate;
use thiserror::Error;
use crate::domain::{Frequency, Habit, HabitId};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Habit not found: {id}")]
    HabitNotFound { id: HabitId },

    #[error("Database already contains habits; refusing to seed demo data")]
    NotEmpty,

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// This trait allows swapping SQLite for another backend while keeping the
/// same interface. All engine computations take habit snapshots loaded
/// through it; the engine itself never touches storage.
pub trait HabitStorage {
    /// Persist a new habit and return its assigned id
    ///
    /// The habit's own id field is ignored; ids are allocated by storage.
    fn create_habit(&self, habit: &Habit) -> Result<HabitId, StorageError>;

    /// Get a habit by id; `None` when no record matches
    fn get_habit(&self, id: HabitId) -> Result<Option<Habit>, StorageError>;

    /// Update an existing habit in place
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit record
    fn delete_habit(&self, id: HabitId) -> Result<(), StorageError>;

    /// List habits ordered by id, optionally filtered by frequency
    fn list_habits(&self, frequency: Option<Frequency>) -> Result<Vec<Habit>, StorageError>;

    /// Reset a habit's completion log to empty
    fn clear_log(&self, id: HabitId) -> Result<(), StorageError>;

    /// Insert predefined demo habits with randomized logs
    ///
    /// The habits span the four weeks up to `as_of`. Fails with
    /// [`StorageError::NotEmpty`] unless the habits table is empty.
    fn seed_demo_habits(&self, as_of: NaiveDate) -> Result<Vec<HabitId>, StorageError>;
}

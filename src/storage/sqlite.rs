/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit records. Completion logs are stored in a JSON
/// status column and round-trip through serde.

use std::path::PathBuf;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::{CompletionLog, Frequency, Habit, HabitId};
use crate::storage::{migrations, HabitStorage, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds a connection to the SQLite database and implements
/// all the storage operations defined in the HabitStorage trait.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens the database file and runs any necessary migrations
    /// to ensure the schema is up to date.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let conn = Connection::open(&db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create an in-memory storage instance (used in tests)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    /// Convert a database row into a Habit
    fn row_to_habit(row: &Row<'_>) -> rusqlite::Result<Habit> {
        let id: i64 = row.get(0)?;

        let frequency_str: String = row.get(3)?;
        let frequency: Frequency = frequency_str.parse().map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                3,
                "Invalid frequency".to_string(),
                rusqlite::types::Type::Text,
            )
        })?;

        let start_date: NaiveDate = row.get(4)?;
        let end_date: NaiveDate = row.get(5)?;

        let status_json: String = row.get(6)?;
        let log: CompletionLog = serde_json::from_str(&status_json).map_err(|_| {
            rusqlite::Error::InvalidColumnType(
                6,
                "Invalid status log".to_string(),
                rusqlite::types::Type::Text,
            )
        })?;

        Ok(Habit::from_existing(
            HabitId(id),
            row.get(1)?, // name
            row.get(2)?, // description
            frequency,
            start_date,
            end_date,
            log,
        ))
    }
}

impl HabitStorage for SqliteStorage {
    /// Create a new habit in the database
    ///
    /// The id column is assigned by SQLite; the returned id identifies the
    /// stored record regardless of the id on the passed habit.
    fn create_habit(&self, habit: &Habit) -> Result<HabitId, StorageError> {
        let status_json = serde_json::to_string(&habit.log)?;

        self.conn.execute(
            "INSERT INTO habits (name, description, frequency, start_date, end_date, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                habit.name,
                habit.description,
                habit.frequency.as_str(),
                habit.start_date,
                habit.end_date,
                status_json,
            ],
        )?;

        let id = HabitId(self.conn.last_insert_rowid());
        tracing::debug!("Created habit: {} ({})", habit.name, id);
        Ok(id)
    }

    /// Get a habit by its id
    fn get_habit(&self, id: HabitId) -> Result<Option<Habit>, StorageError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, frequency, start_date, end_date, status
             FROM habits WHERE id = ?1",
        )?;

        let habit = stmt
            .query_row(params![id.0], Self::row_to_habit)
            .optional()?;

        Ok(habit)
    }

    /// Update an existing habit, including its completion log
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let status_json = serde_json::to_string(&habit.log)?;

        let changed = self.conn.execute(
            "UPDATE habits
             SET name = ?1, description = ?2, frequency = ?3,
                 start_date = ?4, end_date = ?5, status = ?6
             WHERE id = ?7",
            params![
                habit.name,
                habit.description,
                habit.frequency.as_str(),
                habit.start_date,
                habit.end_date,
                status_json,
                habit.id.0,
            ],
        )?;

        if changed == 0 {
            return Err(StorageError::HabitNotFound { id: habit.id });
        }

        tracing::debug!("Updated habit: {} ({})", habit.name, habit.id);
        Ok(())
    }

    /// Delete a habit record
    fn delete_habit(&self, id: HabitId) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id.0])?;

        if changed == 0 {
            return Err(StorageError::HabitNotFound { id });
        }

        tracing::debug!("Deleted habit {}", id);
        Ok(())
    }

    /// List habits ordered by id, optionally filtered by frequency
    fn list_habits(&self, frequency: Option<Frequency>) -> Result<Vec<Habit>, StorageError> {
        let mut habits = Vec::new();

        match frequency {
            Some(frequency) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, name, description, frequency, start_date, end_date, status
                     FROM habits WHERE frequency = ?1 ORDER BY id",
                )?;
                let rows = stmt.query_map(params![frequency.as_str()], Self::row_to_habit)?;
                for row in rows {
                    habits.push(row?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, name, description, frequency, start_date, end_date, status
                     FROM habits ORDER BY id",
                )?;
                let rows = stmt.query_map([], Self::row_to_habit)?;
                for row in rows {
                    habits.push(row?);
                }
            }
        }

        Ok(habits)
    }

    /// Reset a habit's completion log to empty
    fn clear_log(&self, id: HabitId) -> Result<(), StorageError> {
        let changed = self
            .conn
            .execute("UPDATE habits SET status = '{}' WHERE id = ?1", params![id.0])?;

        if changed == 0 {
            return Err(StorageError::HabitNotFound { id });
        }

        tracing::debug!("Cleared completion log for habit {}", id);
        Ok(())
    }

    /// Insert predefined demo habits with randomized completion logs
    fn seed_demo_habits(&self, as_of: NaiveDate) -> Result<Vec<HabitId>, StorageError> {
        let existing: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
        if existing > 0 {
            return Err(StorageError::NotEmpty);
        }

        let start = as_of - Duration::weeks(4);
        let demo = [
            ("Exercise", "Daily workout routine", Frequency::Daily),
            ("Read", "Read a book for at least 30 minutes", Frequency::Weekly),
            ("Meditation", "Practice meditation for 10 minutes", Frequency::Daily),
            ("Drink Water", "Drink at least 8 glasses of water", Frequency::Weekly),
            (
                "Learn a Language",
                "Spend 30 minutes learning a new language",
                Frequency::Daily,
            ),
        ];

        let mut rng = rand::thread_rng();
        let mut ids = Vec::with_capacity(demo.len());

        for (name, description, frequency) in demo {
            let habit = Habit::from_existing(
                HabitId::UNASSIGNED,
                name.to_string(),
                description.to_string(),
                frequency,
                start,
                as_of,
                generate_demo_log(start, as_of, frequency, &mut rng),
            );
            ids.push(self.create_habit(&habit)?);
        }

        tracing::info!("Seeded {} demo habits spanning {} to {}", ids.len(), start, as_of);
        Ok(ids)
    }
}

/// Generate a randomized completion log for a demo habit
///
/// Daily habits get an entry for every day in the range; weekly and monthly
/// habits get one entry per period, dated at the period interval from the
/// start.
fn generate_demo_log<R: Rng>(
    start: NaiveDate,
    end: NaiveDate,
    frequency: Frequency,
    rng: &mut R,
) -> CompletionLog {
    let days = (end - start).num_days() + 1;
    let mut log = CompletionLog::new();

    match frequency {
        Frequency::Daily => {
            for date in start.iter_days().take_while(|d| *d <= end) {
                log.mark(date, rng.gen_bool(0.5));
            }
        }
        Frequency::Weekly => {
            for week in 0..days / 7 {
                log.mark(start + Duration::weeks(week), rng.gen_bool(0.5));
            }
        }
        Frequency::Monthly => {
            for month in 0..days / 30 {
                log.mark(
                    start + chrono::Months::new(month as u32),
                    rng.gen_bool(0.5),
                );
            }
        }
    }

    log
}

/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// habit tracked over an inclusive date range, along with validation and the
/// check-in rules that keep the completion log well-formed.

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::{CompletionLog, DomainError, Frequency, PeriodKey, period};

/// Unique identifier for a habit
///
/// Integer ids are assigned by the storage layer when a habit is first
/// persisted; a freshly constructed habit carries [`HabitId::UNASSIGNED`]
/// until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Placeholder id for habits not yet persisted
    pub const UNASSIGNED: HabitId = HabitId(0);

    /// Whether storage has assigned a real id
    pub fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HabitId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HabitId(s.trim().parse()?))
    }
}

/// A habit tracked over an inclusive calendar range
///
/// This is the core entity in the system. Each habit has a frequency that
/// determines its completion period (day, ISO week, or calendar month) and a
/// completion log recording per-date status. The streak and statistics
/// computations receive habits as read-only snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier, assigned by storage
    pub id: HabitId,
    /// Display name (e.g. "Morning Run")
    pub name: String,
    /// Free-text description
    pub description: String,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// First day of the tracking range, inclusive
    pub start_date: NaiveDate,
    /// Last day of the tracking range, inclusive
    pub end_date: NaiveDate,
    /// Per-date completion status
    pub log: CompletionLog,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The id is left unassigned until the habit is persisted and the log
    /// starts empty.
    pub fn new(
        name: String,
        description: String,
        frequency: Frequency,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_description(&description)?;
        Self::validate_date_range(start_date, end_date)?;

        Ok(Self {
            id: HabitId::UNASSIGNED,
            name,
            description,
            frequency,
            start_date,
            end_date,
            log: CompletionLog::new(),
        })
    }

    /// Create a habit from existing data (used when loading from the database)
    ///
    /// Assumes the data was validated when first stored.
    pub fn from_existing(
        id: HabitId,
        name: String,
        description: String,
        frequency: Frequency,
        start_date: NaiveDate,
        end_date: NaiveDate,
        log: CompletionLog,
    ) -> Self {
        Self {
            id,
            name,
            description,
            frequency,
            start_date,
            end_date,
            log,
        }
    }

    /// Update the habit's properties with validation
    ///
    /// Only the provided fields change. New values are validated before any
    /// of them are applied, so a failed update leaves the habit untouched.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        frequency: Option<Frequency>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<(), DomainError> {
        if let Some(ref new_name) = name {
            Self::validate_name(new_name)?;
        }
        if let Some(ref new_description) = description {
            Self::validate_description(new_description)?;
        }

        let new_start = start_date.unwrap_or(self.start_date);
        let new_end = end_date.unwrap_or(self.end_date);
        Self::validate_date_range(new_start, new_end)?;

        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_frequency) = frequency {
            self.frequency = new_frequency;
        }
        self.start_date = new_start;
        self.end_date = new_end;

        Ok(())
    }

    /// Check whether `date` is a valid check-in date
    ///
    /// Rules: the date must lie within the habit's active range, must not be
    /// after `as_of`, must not already carry a log entry, and for weekly or
    /// monthly habits the period containing it must not already be logged.
    pub fn can_log(&self, date: NaiveDate, as_of: NaiveDate) -> Result<(), DomainError> {
        if date < self.start_date || date > self.end_date {
            return Err(DomainError::DateOutOfRange {
                date,
                start: self.start_date,
                end: self.end_date,
            });
        }
        if date > as_of {
            return Err(DomainError::FutureDate { date, as_of });
        }
        if self.log.contains(date) {
            return Err(DomainError::AlreadyLogged { date });
        }

        if matches!(self.frequency, Frequency::Weekly | Frequency::Monthly) {
            let span_start = period::period_start(date, self.frequency);
            let span_end = period::period_end(date, self.frequency);
            let period_logged = self
                .log
                .iter()
                .any(|(logged, _)| logged >= span_start && logged <= span_end);
            if period_logged {
                return Err(DomainError::PeriodAlreadyLogged {
                    frequency: self.frequency,
                    period_start: PeriodKey::containing(date, self.frequency).start(),
                });
            }
        }

        Ok(())
    }

    /// Mark the habit complete for `date`
    ///
    /// Validates via [`Habit::can_log`], then gap-fills the log from the
    /// habit's start date through `date` before marking the date itself.
    /// Every previously-unlogged day up to the check-in becomes an explicit
    /// `false`, recording "missed" rather than "unknown".
    pub fn check_in(&mut self, date: NaiveDate, as_of: NaiveDate) -> Result<(), DomainError> {
        self.can_log(date, as_of)?;
        self.log = self.log.fill_gaps(self.start_date, date);
        self.log.mark(date, true);
        Ok(())
    }

    // Validation helper methods

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.len() > 500 {
            return Err(DomainError::Validation {
                message: "Description cannot be longer than 500 characters".to_string(),
            });
        }
        Ok(())
    }

    fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(())
    }
}

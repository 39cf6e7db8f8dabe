/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, CompletionLog) and the
/// streak/period machinery that operates on them, along with the validation
/// rules that keep habit data well-formed.

pub mod frequency;
pub mod habit;
pub mod log;
pub mod period;
pub mod streak;

// Re-export public types for easy access
pub use frequency::*;
pub use habit::*;
pub use log::*;
pub use period::*;
pub use streak::*;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during domain operations
///
/// All of these are validation failures surfaced immediately at the call
/// site; none are recoverable conditions worth retrying.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Date {date} is outside the habit's range {start} to {end}")]
    DateOutOfRange {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Cannot check in for {date}: after the as-of date {as_of}")]
    FutureDate { date: NaiveDate, as_of: NaiveDate },

    #[error("Date {date} is already logged")]
    AlreadyLogged { date: NaiveDate },

    #[error("A {frequency} habit allows one check-in per period; the period starting {period_start} already has an entry")]
    PeriodAlreadyLogged {
        frequency: Frequency,
        period_start: NaiveDate,
    },
}

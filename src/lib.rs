/// Public library interface for the habit tracker
///
/// This module exports the domain types, the streak/statistics engine, and
/// the storage layer so they can be used by the CLI binary and by tests.

use thiserror::Error;

pub mod analytics;
pub mod cli;
pub mod domain;
pub mod storage;

// Re-export the most commonly used types
pub use analytics::{AggregateStats, SingleStats, StatsError};
pub use domain::*;
pub use storage::{HabitStorage, SqliteStorage, StorageError};

/// Errors that can occur while running the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Statistics error: {0}")]
    Stats(#[from] analytics::StatsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

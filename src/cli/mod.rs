/// Command-line surface for the habit tracker
///
/// This module defines the clap command tree and dispatches each subcommand
/// to its handler. The as-of date is resolved once by `main` and threaded
/// through every handler, so the engine itself never reads the clock.

pub mod commands;
pub mod table;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{Frequency, HabitId};
use crate::storage::HabitStorage;
use crate::AppError;

/// Command line arguments for the habit tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Reference date for streak and statistics computations
    /// Defaults to today's local calendar date
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub as_of: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new habit
    Add {
        /// Display name of the habit
        #[arg(long)]
        name: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,

        /// daily, weekly, or monthly
        #[arg(long)]
        frequency: Frequency,

        /// First tracked day (defaults to the as-of date)
        #[arg(long, value_name = "YYYY-MM-DD")]
        start_date: Option<NaiveDate>,

        /// Last tracked day, inclusive (defaults to one month after the start)
        #[arg(long, value_name = "YYYY-MM-DD")]
        end_date: Option<NaiveDate>,
    },

    /// List habits, optionally filtered by frequency
    List {
        /// Only show habits with this frequency
        #[arg(long)]
        frequency: Option<Frequency>,
    },

    /// Show a single habit
    Show {
        /// Habit id
        id: HabitId,
    },

    /// Update an existing habit
    Update {
        /// Habit id
        id: HabitId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        frequency: Option<Frequency>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        start_date: Option<NaiveDate>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        end_date: Option<NaiveDate>,
    },

    /// Delete a habit
    Delete {
        /// Habit id
        id: HabitId,
    },

    /// Mark a habit as completed for a date
    Check {
        /// Habit id
        id: HabitId,

        /// Completion date (defaults to the as-of date)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Clear a habit's check-in log
    ClearLog {
        /// Habit id
        id: HabitId,
    },

    /// Show statistics for all habits or a single one
    Stats {
        /// Restrict to a single habit id
        #[arg(long)]
        habit: Option<HabitId>,
    },

    /// Load predefined demo habits into an empty database
    Seed,
}

/// Dispatch a parsed command against the given storage
pub fn run<S: HabitStorage>(
    storage: &S,
    command: Commands,
    as_of: NaiveDate,
) -> Result<(), AppError> {
    match command {
        Commands::Add {
            name,
            description,
            frequency,
            start_date,
            end_date,
        } => commands::add(storage, name, description, frequency, start_date, end_date, as_of),
        Commands::List { frequency } => commands::list(storage, frequency, as_of),
        Commands::Show { id } => commands::show(storage, id, as_of),
        Commands::Update {
            id,
            name,
            description,
            frequency,
            start_date,
            end_date,
        } => commands::update(storage, id, name, description, frequency, start_date, end_date),
        Commands::Delete { id } => commands::delete(storage, id),
        Commands::Check { id, date } => commands::check(storage, id, date, as_of),
        Commands::ClearLog { id } => commands::clear_log(storage, id),
        Commands::Stats { habit } => commands::stats(storage, habit, as_of),
        Commands::Seed => commands::seed(storage, as_of),
    }
}

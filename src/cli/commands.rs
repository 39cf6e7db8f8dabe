/// Subcommand handlers
///
/// Each handler loads habit snapshots through the storage trait, invokes the
/// engine, and renders the result. All user-facing messaging lives here; the
/// domain and analytics layers never print.

use chrono::{Months, NaiveDate};

use crate::analytics;
use crate::cli::table;
use crate::domain::{streak, Frequency, Habit, HabitId};
use crate::storage::{HabitStorage, StorageError};
use crate::AppError;

const HABITS_NOT_FOUND: &str = "No habit(s) found in the database.";

/// Create a new habit and display it
pub fn add<S: HabitStorage>(
    storage: &S,
    name: String,
    description: String,
    frequency: Frequency,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> Result<(), AppError> {
    let start = start_date.unwrap_or(as_of);
    let end = end_date.unwrap_or(start + Months::new(1));

    let habit = Habit::new(name, description, frequency, start, end)?;
    let id = storage.create_habit(&habit)?;

    println!("Created habit \"{}\" with id {}.", habit.name, id);
    if let Some(stored) = storage.get_habit(id)? {
        print!("{}", table::render_habits(&[stored], as_of));
    }
    Ok(())
}

/// List habits, optionally restricted to one frequency
pub fn list<S: HabitStorage>(
    storage: &S,
    frequency: Option<Frequency>,
    as_of: NaiveDate,
) -> Result<(), AppError> {
    let habits = storage.list_habits(frequency)?;

    if habits.is_empty() {
        match frequency {
            Some(frequency) => {
                println!("No habits with the frequency \"{}\" are currently tracked.", frequency)
            }
            None => println!("{}", HABITS_NOT_FOUND),
        }
        return Ok(());
    }

    print!("{}", table::render_habits(&habits, as_of));
    Ok(())
}

/// Show a single habit as a one-row table
pub fn show<S: HabitStorage>(storage: &S, id: HabitId, as_of: NaiveDate) -> Result<(), AppError> {
    match storage.get_habit(id)? {
        Some(habit) => print!("{}", table::render_habits(&[habit], as_of)),
        None => println!("No habit found with id {}.", id),
    }
    Ok(())
}

/// Update fields of an existing habit
pub fn update<S: HabitStorage>(
    storage: &S,
    id: HabitId,
    name: Option<String>,
    description: Option<String>,
    frequency: Option<Frequency>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), AppError> {
    let mut habit = match storage.get_habit(id)? {
        Some(habit) => habit,
        None => {
            println!("No habit found with id {}.", id);
            return Ok(());
        }
    };

    habit.update(name, description, frequency, start_date, end_date)?;
    storage.update_habit(&habit)?;

    println!("Habit {} has been updated.", id);
    Ok(())
}

/// Delete a habit
pub fn delete<S: HabitStorage>(storage: &S, id: HabitId) -> Result<(), AppError> {
    match storage.delete_habit(id) {
        Ok(()) => println!("Habit with id {} has been deleted.", id),
        Err(StorageError::HabitNotFound { id }) => println!("No habit found with id {}.", id),
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

/// Mark a habit complete for a date
pub fn check<S: HabitStorage>(
    storage: &S,
    id: HabitId,
    date: Option<NaiveDate>,
    as_of: NaiveDate,
) -> Result<(), AppError> {
    let mut habit = match storage.get_habit(id)? {
        Some(habit) => habit,
        None => {
            println!("No habit found with id {}.", id);
            return Ok(());
        }
    };

    let date = date.unwrap_or(as_of);
    habit.check_in(date, as_of)?;
    storage.update_habit(&habit)?;

    let streaks = streak::streak_history(&habit, as_of);
    println!(
        "\"{}\" has been marked as completed for {}. Current streak: {} {}",
        habit.name, date, streaks.current, streaks.unit
    );
    Ok(())
}

/// Clear a habit's check-in log
pub fn clear_log<S: HabitStorage>(storage: &S, id: HabitId) -> Result<(), AppError> {
    match storage.clear_log(id) {
        Ok(()) => println!("Logged data for habit with id {} has been cleared.", id),
        Err(StorageError::HabitNotFound { id }) => println!("No habit found with id {}.", id),
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

/// Show statistics for all habits or a single one
pub fn stats<S: HabitStorage>(
    storage: &S,
    habit: Option<HabitId>,
    as_of: NaiveDate,
) -> Result<(), AppError> {
    let habits = storage.list_habits(None)?;

    if habits.is_empty() {
        println!("{}", HABITS_NOT_FOUND);
        return Ok(());
    }

    match habit {
        Some(id) => single_stats(&habits, id, as_of),
        None => aggregate_stats(&habits, as_of),
    }
}

fn aggregate_stats(habits: &[Habit], as_of: NaiveDate) -> Result<(), AppError> {
    let stats = analytics::calculate(habits, as_of)?;

    println!(
        "You have {} habits and {} completions.",
        stats.total_habits, stats.total_completions
    );
    println!();
    println!("Your average completion rate is {}.", stats.average_rate);
    println!("Your habits by frequency:");
    for (frequency, count) in &stats.frequency_distribution {
        println!("- {}: {} habit(s)", frequency, count);
    }
    println!();
    println!(
        "Your longest streak of habit completions is {}.",
        stats.longest_streak
    );
    println!(
        "Your current streak of habit completions is {}.",
        stats.current_streak
    );
    Ok(())
}

fn single_stats(habits: &[Habit], id: HabitId, as_of: NaiveDate) -> Result<(), AppError> {
    let stats = match analytics::calculate_single(habits, id, as_of)? {
        Some(stats) => stats,
        None => {
            println!("No habit found with id {}.", id);
            return Ok(());
        }
    };

    // the id was just matched against this list
    let name = habits
        .iter()
        .find(|habit| habit.id == id)
        .map(|habit| habit.name.as_str())
        .unwrap_or("unknown");

    println!("Statistics for habit \"{}\" (id {}):", name, id);
    println!("Total completions: {}", stats.total_completions);
    println!("Total {}s: {}", stats.rate_unit, stats.total_days);
    println!(
        "Completion rate: {} per {}",
        stats.completion_rate, stats.rate_unit
    );
    println!("Longest streak: {} {}", stats.longest_streak, stats.unit);
    println!("Current streak: {} {}", stats.current_streak, stats.unit);
    Ok(())
}

/// Load predefined demo habits and list them
pub fn seed<S: HabitStorage>(storage: &S, as_of: NaiveDate) -> Result<(), AppError> {
    match storage.seed_demo_habits(as_of) {
        Ok(ids) => {
            println!("Added {} demo habits to the database.", ids.len());
            list(storage, None, as_of)
        }
        Err(StorageError::NotEmpty) => {
            println!("Database is not empty. Clear the database and try again.");
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

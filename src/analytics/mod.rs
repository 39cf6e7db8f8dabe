/// Aggregate statistics over habit data
///
/// This module rolls per-habit completion logs into summary statistics:
/// totals, completion rates, frequency distribution, and cross-habit streak
/// figures. Everything here is a pure function over read-only habit
/// snapshots; results are derived on demand and never persisted.

use std::collections::BTreeMap;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use crate::domain::{streak, Frequency, Habit, HabitId};

/// Precondition violations in statistics computations
///
/// These indicate caller errors (statistics over nothing to count) and are
/// surfaced immediately rather than papered over with zero rates.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("Cannot calculate statistics for an empty habit set")]
    EmptyHabitSet,

    #[error("Total tracked periods is zero; completion rate is undefined")]
    ZeroTotalDays,
}

/// Summary statistics across all habits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Number of habits in the snapshot
    pub total_habits: u32,
    /// Sum of completed entries across all logs
    pub total_completions: u32,
    /// Sum of per-habit countable periods (see [`total_days`])
    pub total_days: u32,
    /// Habits with at least one completion
    pub completed_habits: u32,
    /// total_completions / total_days, rounded to 2 decimals
    pub average_rate: f64,
    /// Habit count per frequency value
    pub frequency_distribution: BTreeMap<Frequency, u32>,
    /// Maximum full-history longest streak over all habits
    pub longest_streak: u32,
    /// Sum of full-history trailing streaks over all habits
    pub current_streak: u32,
}

/// Statistics for a single habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleStats {
    pub habit_id: HabitId,
    pub total_completions: u32,
    pub total_days: u32,
    /// total_completions / total_days, rounded to 2 decimals
    pub completion_rate: f64,
    /// "day", "week", or "month": the denominator unit of the rate
    pub rate_unit: &'static str,
    pub longest_streak: u32,
    pub current_streak: u32,
    /// Streak unit matching the habit's frequency
    pub unit: String,
}

/// Countable periods in a habit's active range
///
/// The inclusive day count of `[start_date, end_date]`, floor-divided by 7
/// for weekly habits and by 30 for monthly ones. A short range can yield
/// zero periods (ten days is zero months).
pub fn total_days(habit: &Habit) -> u32 {
    let days = (habit.end_date - habit.start_date).num_days() + 1;
    (days / habit.frequency.days_per_period()) as u32
}

/// Calculate aggregate statistics over all habits
///
/// Fails fast on an empty habit set or a zero total period count, both of
/// which would make the average rate a division by zero.
pub fn calculate(habits: &[Habit], as_of: NaiveDate) -> Result<AggregateStats, StatsError> {
    if habits.is_empty() {
        return Err(StatsError::EmptyHabitSet);
    }

    let mut total_completions = 0u32;
    let mut days_sum = 0u32;
    let mut completed_habits = 0u32;
    let mut frequency_distribution: BTreeMap<Frequency, u32> = BTreeMap::new();

    for habit in habits {
        total_completions += habit.log.completions();
        days_sum += total_days(habit);
        if habit.log.any_completed() {
            completed_habits += 1;
        }
        *frequency_distribution.entry(habit.frequency).or_insert(0) += 1;
    }

    if days_sum == 0 {
        return Err(StatsError::ZeroTotalDays);
    }

    Ok(AggregateStats {
        total_habits: habits.len() as u32,
        total_completions,
        total_days: days_sum,
        completed_habits,
        average_rate: round_rate(f64::from(total_completions) / f64::from(days_sum)),
        frequency_distribution,
        longest_streak: streak::longest_streak(habits, as_of),
        current_streak: streak::current_streak(habits, as_of),
    })
}

/// Calculate statistics for the habit with the given id
///
/// Returns `Ok(None)` when no habit matches; an absent habit is a value,
/// not a defect. A zero period count for the matched habit is still a
/// precondition violation.
pub fn calculate_single(
    habits: &[Habit],
    id: HabitId,
    as_of: NaiveDate,
) -> Result<Option<SingleStats>, StatsError> {
    let habit = match habits.iter().find(|habit| habit.id == id) {
        Some(habit) => habit,
        None => return Ok(None),
    };

    let days = total_days(habit);
    if days == 0 {
        return Err(StatsError::ZeroTotalDays);
    }

    let completions = habit.log.completions();
    let streaks = streak::streak_history(habit, as_of);

    Ok(Some(SingleStats {
        habit_id: habit.id,
        total_completions: completions,
        total_days: days,
        completion_rate: round_rate(f64::from(completions) / f64::from(days)),
        rate_unit: habit.frequency.period_name(),
        longest_streak: streaks.longest,
        current_streak: streaks.current,
        unit: streaks.unit,
    }))
}

fn round_rate(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

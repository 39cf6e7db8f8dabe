/// Streak calculation and tracking functionality
///
/// This module computes streaks from a habit's completion log. The canonical
/// computation is [`streak_history`], which walks every calendar period from
/// the habit's start date to the as-of date and counts consecutive periods
/// containing at least one completion. The window-limited variants at the
/// bottom only examine the period containing the as-of date; they are kept
/// as deprecated aliases and nothing else in the crate consumes them.
///
/// Every function takes an explicit `as_of` date. Callers anchor it to the
/// wall clock exactly once, at the outermost boundary, so results are
/// reproducible.

use std::fmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::domain::{Frequency, Habit, Periods, period};

/// Calculated streak information for one habit
///
/// Derived on demand, never persisted. `longest >= current` always holds:
/// the current streak is the trailing run of the same scan that produces the
/// maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    /// Longest run of consecutive completed periods
    pub longest: u32,
    /// Trailing run of completed periods ending at the as-of period
    pub current: u32,
    /// "day(s)", "week(s)", or "month(s)", matching the habit's frequency
    pub unit: String,
}

impl StreakResult {
    /// Empty result for a habit with no completions
    pub fn zero(frequency: Frequency) -> Self {
        Self {
            longest: 0,
            current: 0,
            unit: frequency.unit().to_string(),
        }
    }
}

impl fmt::Display for StreakResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.longest, self.unit)
    }
}

/// Full-history streak scan for a habit
///
/// Walks every period from the one containing the habit's start date through
/// the one containing `as_of` (day by day, week by week, or month by month).
/// A period counts as hit when any date within it is marked complete; the
/// final period is clamped to `as_of`. Consecutive hit periods accumulate a
/// running streak and a non-hit period resets it to zero. `longest` is the
/// maximum run observed, `current` the run still open at `as_of`.
pub fn streak_history(habit: &Habit, as_of: NaiveDate) -> StreakResult {
    let mut longest = 0u32;
    let mut run = 0u32;

    for span in Periods::new(habit.start_date, as_of, habit.frequency) {
        let hit = span.days().any(|day| habit.log.is_complete(day));
        if hit {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    StreakResult {
        longest,
        current: run,
        unit: habit.frequency.unit().to_string(),
    }
}

/// Longest full-history streak across several habits
///
/// The maximum of each habit's [`streak_history`] longest value, or zero for
/// an empty slice.
pub fn longest_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|habit| streak_history(habit, as_of).longest)
        .max()
        .unwrap_or(0)
}

/// Combined current streak across several habits
///
/// Each habit contributes its own trailing run independently, so the result
/// is a sum rather than a maximum.
pub fn current_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    habits
        .iter()
        .map(|habit| streak_history(habit, as_of).current)
        .sum()
}

/// Longest streak limited to the period containing `as_of`
///
/// Daily habits scan their whole log; weekly and monthly habits only examine
/// entries inside the current week or month, so runs never span period
/// boundaries. Cross-habit result is the maximum.
#[deprecated(
    note = "window-limited scan kept for compatibility; use streak_history / longest_streak for full-history semantics"
)]
pub fn window_longest_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    let mut longest = 0u32;

    for habit in habits {
        let window = scan_window(habit.frequency, as_of);
        let mut run = 0u32;
        let mut max_run = 0u32;

        for (date, done) in habit.log.iter() {
            if date > as_of {
                continue;
            }
            if let Some((window_start, _)) = window {
                if date < window_start {
                    continue;
                }
            }
            if done {
                run += 1;
                max_run = max_run.max(run);
            } else {
                run = 0;
            }
        }

        longest = longest.max(max_run);
    }

    longest
}

/// Current streak limited to the period containing `as_of`
///
/// Daily habits contribute 1 when `as_of` itself is complete; weekly and
/// monthly habits scan the current period's dates backwards from `as_of`,
/// stopping at the first incomplete day. Cross-habit result is the sum.
#[deprecated(
    note = "window-limited scan kept for compatibility; use streak_history / current_streak for full-history semantics"
)]
pub fn window_current_streak(habits: &[Habit], as_of: NaiveDate) -> u32 {
    let mut total = 0u32;

    for habit in habits {
        match habit.frequency {
            Frequency::Daily => {
                if habit.log.is_complete(as_of) {
                    total += 1;
                }
            }
            Frequency::Weekly | Frequency::Monthly => {
                let window_start = period::period_start(as_of, habit.frequency);
                let mut day = as_of;
                while day >= window_start {
                    if habit.log.is_complete(day) {
                        total += 1;
                    } else {
                        break;
                    }
                    match day.pred_opt() {
                        Some(previous) => day = previous,
                        None => break,
                    }
                }
            }
        }
    }

    total
}

fn scan_window(frequency: Frequency, as_of: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match frequency {
        Frequency::Daily => None,
        Frequency::Weekly | Frequency::Monthly => Some((
            period::period_start(as_of, frequency),
            period::period_end(as_of, frequency),
        )),
    }
}

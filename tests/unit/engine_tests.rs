/// Engine-level tests exercising check-ins, streaks, and statistics together
use habit_tracker_cli::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn daily_habit(id: i64, start: NaiveDate, end: NaiveDate) -> Habit {
    let mut habit = Habit::new(
        format!("Habit {}", id),
        String::new(),
        Frequency::Daily,
        start,
        end,
    )
    .unwrap();
    habit.id = HabitId(id);
    habit
}

#[test]
fn test_check_ins_build_a_streak() {
    let mut habit = daily_habit(1, date(2023, 1, 1), date(2023, 1, 31));

    for day in 1..=3 {
        habit.check_in(date(2023, 1, day), date(2023, 1, 3)).unwrap();
    }

    let result = streak::streak_history(&habit, date(2023, 1, 3));
    assert_eq!(result.longest, 3);
    assert_eq!(result.current, 3);
}

#[test]
fn test_gap_filled_days_break_streaks() {
    let mut habit = daily_habit(1, date(2023, 1, 1), date(2023, 1, 31));

    // checking in on the 5th materializes the 1st-4th as missed
    habit.check_in(date(2023, 1, 5), date(2023, 1, 5)).unwrap();
    habit.check_in(date(2023, 1, 6), date(2023, 1, 6)).unwrap();

    let result = streak::streak_history(&habit, date(2023, 1, 6));
    assert_eq!(result.longest, 2);
    assert_eq!(result.current, 2);

    // a later scan with no new check-ins drops the current streak
    let later = streak::streak_history(&habit, date(2023, 1, 8));
    assert_eq!(later.longest, 2);
    assert_eq!(later.current, 0);
}

#[test]
fn test_current_never_exceeds_longest() {
    let mut habit = daily_habit(1, date(2023, 1, 1), date(2023, 1, 31));

    for day in [1, 2, 3, 5, 6] {
        habit.check_in(date(2023, 1, day), date(2023, 1, 6)).unwrap();
    }

    for probe in 1..=10 {
        let result = streak::streak_history(&habit, date(2023, 1, probe));
        assert!(
            result.longest >= result.current,
            "longest {} < current {} at day {}",
            result.longest,
            result.current,
            probe
        );
    }
}

#[test]
fn test_weekly_check_ins_accumulate_weekly_streaks() {
    let mut habit = Habit::new(
        "Review".to_string(),
        String::new(),
        Frequency::Weekly,
        date(2023, 3, 6),
        date(2023, 4, 30),
    )
    .unwrap();
    habit.id = HabitId(2);

    // one check-in in each of three consecutive ISO weeks, on varying weekdays
    habit.check_in(date(2023, 3, 8), date(2023, 3, 22)).unwrap();
    habit.check_in(date(2023, 3, 17), date(2023, 3, 22)).unwrap();
    habit.check_in(date(2023, 3, 20), date(2023, 3, 22)).unwrap();

    let result = streak::streak_history(&habit, date(2023, 3, 22));
    assert_eq!(result.longest, 3);
    assert_eq!(result.current, 3);
    assert_eq!(result.unit, "week(s)");
}

#[test]
fn test_aggregate_stats_over_mixed_frequencies() {
    let mut first = daily_habit(1, date(2023, 1, 1), date(2023, 1, 10));
    for day in [1, 2, 4, 6, 8] {
        first.check_in(date(2023, 1, day), date(2023, 1, 10)).unwrap();
    }

    let mut second = daily_habit(2, date(2023, 1, 1), date(2023, 1, 5));
    for day in [1, 3, 5] {
        second.check_in(date(2023, 1, day), date(2023, 1, 10)).unwrap();
    }

    let habits = vec![first, second];
    let stats = analytics::calculate(&habits, date(2023, 1, 10)).unwrap();

    assert_eq!(stats.total_habits, 2);
    assert_eq!(stats.total_completions, 8);
    assert_eq!(stats.total_days, 15);
    assert_eq!(stats.average_rate, 0.53);
    assert_eq!(stats.frequency_distribution[&Frequency::Daily], 2);
}

#[test]
fn test_single_stats_not_found_is_none() {
    let habits = vec![daily_habit(1, date(2023, 1, 1), date(2023, 1, 10))];
    let result = analytics::calculate_single(&habits, HabitId(7), date(2023, 1, 5)).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_fill_gaps_idempotence_through_check_in() {
    let mut habit = daily_habit(1, date(2023, 1, 1), date(2023, 1, 31));
    habit.check_in(date(2023, 1, 4), date(2023, 1, 10)).unwrap();

    let filled_once = habit.log.fill_gaps(date(2023, 1, 1), date(2023, 1, 4));
    assert_eq!(filled_once, habit.log);
}

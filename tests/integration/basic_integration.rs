/// Storage integration tests over a real database file
use habit_tracker_cli::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_habit(name: &str, frequency: Frequency) -> Habit {
    Habit::new(
        name.to_string(),
        format!("{} description", name),
        frequency,
        date(2023, 1, 1),
        date(2023, 12, 31),
    )
    .expect("valid habit")
}

#[test]
fn test_full_crud_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("storage");

    // create
    let id = storage.create_habit(&new_habit("Exercise", Frequency::Daily)).unwrap();

    // read
    let mut habit = storage.get_habit(id).unwrap().expect("habit exists");
    assert_eq!(habit.name, "Exercise");

    // update
    habit
        .update(Some("Morning Exercise".to_string()), None, None, None, None)
        .unwrap();
    storage.update_habit(&habit).unwrap();
    let reloaded = storage.get_habit(id).unwrap().expect("habit exists");
    assert_eq!(reloaded.name, "Morning Exercise");

    // delete
    storage.delete_habit(id).unwrap();
    assert!(storage.get_habit(id).unwrap().is_none());
}

#[test]
fn test_check_in_persists_across_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_file.path().to_path_buf();

    let id = {
        let storage = SqliteStorage::new(db_path.clone()).expect("storage");
        let id = storage.create_habit(&new_habit("Read", Frequency::Daily)).unwrap();

        let mut habit = storage.get_habit(id).unwrap().expect("habit exists");
        habit.check_in(date(2023, 1, 3), date(2023, 1, 3)).unwrap();
        storage.update_habit(&habit).unwrap();
        id
    };

    // a fresh connection sees the same log
    let storage = SqliteStorage::new(db_path).expect("storage");
    let habit = storage.get_habit(id).unwrap().expect("habit exists");
    assert!(habit.log.is_complete(date(2023, 1, 3)));
    // gap-filled days were persisted too
    assert!(habit.log.contains(date(2023, 1, 1)));
    assert!(!habit.log.is_complete(date(2023, 1, 2)));
}

#[test]
fn test_statistics_over_stored_habits() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("storage");

    let first = storage.create_habit(&new_habit("Exercise", Frequency::Daily)).unwrap();
    storage.create_habit(&new_habit("Review", Frequency::Weekly)).unwrap();

    let mut habit = storage.get_habit(first).unwrap().expect("habit exists");
    habit.check_in(date(2023, 1, 1), date(2023, 1, 2)).unwrap();
    habit.check_in(date(2023, 1, 2), date(2023, 1, 2)).unwrap();
    storage.update_habit(&habit).unwrap();

    let habits = storage.list_habits(None).unwrap();
    let stats = analytics::calculate(&habits, date(2023, 1, 2)).unwrap();

    assert_eq!(stats.total_habits, 2);
    assert_eq!(stats.total_completions, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.frequency_distribution[&Frequency::Daily], 1);
    assert_eq!(stats.frequency_distribution[&Frequency::Weekly], 1);

    let single = analytics::calculate_single(&habits, first, date(2023, 1, 2))
        .unwrap()
        .expect("habit exists");
    assert_eq!(single.total_completions, 2);
    assert_eq!(single.rate_unit, "day");
}

#[test]
fn test_seed_then_clear_workflow() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("storage");

    let ids = storage.seed_demo_habits(date(2023, 6, 1)).unwrap();
    assert_eq!(ids.len(), 5);

    // seeded logs can be cleared independently
    storage.clear_log(ids[0]).unwrap();
    let cleared = storage.get_habit(ids[0]).unwrap().expect("habit exists");
    assert!(cleared.log.is_empty());

    // the remaining habits still carry their generated logs
    let untouched = storage.get_habit(ids[2]).unwrap().expect("habit exists");
    assert!(!untouched.log.is_empty());
}

#[test]
fn test_frequency_filter_round_trip() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let storage = SqliteStorage::new(temp_file.path().to_path_buf()).expect("storage");

    storage.create_habit(&new_habit("Exercise", Frequency::Daily)).unwrap();
    storage.create_habit(&new_habit("Budget", Frequency::Monthly)).unwrap();
    storage.create_habit(&new_habit("Review", Frequency::Weekly)).unwrap();

    let monthly = storage.list_habits(Some(Frequency::Monthly)).unwrap();
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].name, "Budget");
    assert_eq!(monthly[0].frequency, Frequency::Monthly);

    let all = storage.list_habits(None).unwrap();
    assert_eq!(all.len(), 3);
    // listings come back in id order
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
}

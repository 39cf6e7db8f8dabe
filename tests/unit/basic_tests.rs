/// Basic unit tests to verify core functionality
use habit_tracker_cli::*;
use chrono::NaiveDate;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new(
            "Test Habit".to_string(),
            "A test habit".to_string(),
            Frequency::Daily,
            date(2023, 1, 1),
            date(2023, 12, 31),
        );

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Test Habit");
        assert_eq!(habit.frequency, Frequency::Daily);
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("yearly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_completion_log_defaults() {
        let log = CompletionLog::new();
        assert!(log.is_empty());
        assert!(!log.is_complete(date(2023, 1, 1)));
        assert_eq!(log.completions(), 0);
    }

    #[test]
    fn test_period_resolver_reference_dates() {
        // 2023-03-15 is a Wednesday
        let d = date(2023, 3, 15);
        assert_eq!(period::period_start(d, Frequency::Weekly), date(2023, 3, 13));
        assert_eq!(period::period_end(d, Frequency::Weekly), date(2023, 3, 19));
        assert_eq!(period::period_start(d, Frequency::Monthly), date(2023, 3, 1));
        assert_eq!(period::period_end(d, Frequency::Monthly), date(2023, 3, 31));
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStorage::new(temp_file.path().to_path_buf());
        assert!(storage.is_ok());
    }
}

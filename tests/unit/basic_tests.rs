//! Basic unit tests to verify core functionality
use habits::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Morning Run".to_string(), 1, date(2025, 4, 1));

        assert!(habit.is_ok());
        let habit = habit.unwrap();
        assert_eq!(habit.name, "Morning Run");
        assert_eq!(habit.periodicity, 1);
        assert_eq!(habit.date_created, date(2025, 4, 1));
    }

    #[test]
    fn test_habit_validation_rules() {
        assert!(Habit::new("".to_string(), 1, date(2025, 4, 1)).is_err());
        assert!(Habit::new("   ".to_string(), 1, date(2025, 4, 1)).is_err());
        assert!(Habit::new("Run".to_string(), 0, date(2025, 4, 1)).is_err());
        assert!(Habit::new("Run".to_string(), 366, date(2025, 4, 1)).is_err());
    }

    #[test]
    fn test_streak_state_transitions() {
        let state = StreakState::new().incremented().incremented();
        assert_eq!(state.current_streak, 2);
        assert_eq!(state.longest_streak, 2);

        let state = state.broken();
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.longest_streak, 2);
    }

    #[test]
    fn test_storage_creation() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStore::new(temp_file.path().to_path_buf());
        assert!(storage.is_ok());
    }

    #[test]
    fn test_create_habit_through_public_api() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit = Habit::new("Workout".to_string(), 1, date(2025, 4, 1)).unwrap();

        let outcome = ops::create_habit(&store, &habit).unwrap();
        assert!(matches!(outcome, CreateOutcome::Created(_)));

        // A second create with the same name is reported, not stored twice
        let outcome = ops::create_habit(&store, &habit).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert_eq!(ops::all_habit_names(&store).unwrap().len(), 1);
    }

    #[test]
    fn test_check_off_through_public_api() {
        let store = SqliteStore::open_in_memory().unwrap();
        let habit = Habit::new("Workout".to_string(), 1, date(2025, 4, 1)).unwrap();
        ops::create_habit(&store, &habit).unwrap();

        let outcome = ops::check_off(&store, "Workout", date(2025, 4, 1)).unwrap();
        match outcome {
            CheckOffOutcome::CheckedOff(state) => {
                assert_eq!(state.current_streak, 1);
                assert_eq!(state.longest_streak, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        let outcome = ops::check_off(&store, "Workout", date(2025, 4, 1)).unwrap();
        assert_eq!(outcome, CheckOffOutcome::AlreadyCheckedOff);

        let outcome = ops::check_off(&store, "Missing", date(2025, 4, 1)).unwrap();
        assert_eq!(outcome, CheckOffOutcome::UnknownHabit);
    }

    #[test]
    fn test_streak_queries_through_public_api() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(ops::current_streak(&store, "Missing").unwrap(), None);
        assert_eq!(ops::longest_streak(&store, "Missing").unwrap(), None);

        let habit = Habit::new("Read".to_string(), 3, date(2025, 4, 1)).unwrap();
        ops::create_habit(&store, &habit).unwrap();
        assert_eq!(ops::current_streak(&store, "Read").unwrap(), Some(0));
        assert_eq!(ops::longest_streak(&store, "Read").unwrap(), Some(0));
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("LIST HABITS"), Some(Command::ListHabits));
        assert_eq!(Command::parse("  exit  "), Some(Command::Exit));
        assert_eq!(Command::parse("unknown"), None);
    }
}

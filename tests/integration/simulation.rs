//! Month-long usage simulation
//!
//! Drives five habits through thirty days of realistic check-off patterns
//! and verifies streak values at fixed checkpoints along the way.
use habits::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod simulation_tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::collections::HashSet;

    fn creation_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// The five sample habits, in creation order.
    fn sample_habits() -> Vec<(&'static str, u32)> {
        vec![
            ("Study", 1),
            ("Water the Plants", 7),
            ("Workout", 1),
            ("Read", 3),
            ("Meditate", 7),
        ]
    }

    /// Days of the month on which each habit gets checked off.
    fn checkoff_days(name: &str) -> Vec<u32> {
        match name {
            "Study" => (1u32..=30).filter(|d| ![4, 12, 15, 28].contains(d)).collect(),
            "Water the Plants" => vec![1, 6, 11, 18, 25, 30],
            "Workout" => (1u32..=30)
                .filter(|d| ![2, 7, 12, 19, 23, 24, 25].contains(d))
                .collect(),
            "Read" => vec![1, 5, 6, 7, 9, 12, 14, 16, 17, 19, 20, 22, 23, 25, 30],
            "Meditate" => vec![1, 6, 13, 24, 30],
            _ => panic!("unknown sample habit: {}", name),
        }
    }

    /// Current streaks expected at the three checkpoint days.
    fn expected_current_streaks(day: u32) -> Option<[(&'static str, u32); 5]> {
        match day {
            11 => Some([
                ("Study", 7),
                ("Water the Plants", 3),
                ("Workout", 4),
                ("Read", 4),
                ("Meditate", 2),
            ]),
            16 => Some([
                ("Study", 1),
                ("Water the Plants", 3),
                ("Workout", 4),
                ("Read", 7),
                ("Meditate", 3),
            ]),
            26 => Some([
                ("Study", 11),
                ("Water the Plants", 5),
                ("Workout", 1),
                ("Read", 13),
                ("Meditate", 1),
            ]),
            _ => None,
        }
    }

    fn store_with_sample_habits() -> SqliteStore {
        let store = SqliteStore::open_in_memory().expect("Failed to create storage");
        for (name, periodicity) in sample_habits() {
            let habit = Habit::new(name.to_string(), periodicity, creation_date()).unwrap();
            let outcome = ops::create_habit(&store, &habit).unwrap();
            assert!(matches!(outcome, CreateOutcome::Created(_)));
        }
        store
    }

    #[test]
    fn test_month_of_checkoffs_day_by_day() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let store =
            SqliteStore::new(temp_file.path().to_path_buf()).expect("Failed to create storage");

        for (name, periodicity) in sample_habits() {
            let habit = Habit::new(name.to_string(), periodicity, creation_date()).unwrap();
            let outcome = ops::create_habit(&store, &habit).unwrap();
            assert!(matches!(outcome, CreateOutcome::Created(_)));
        }

        // Ids are assigned in creation order
        assert_eq!(store.find_habit_id("Study").unwrap(), Some(HabitId(1)));
        assert_eq!(store.find_habit_id("Read").unwrap(), Some(HabitId(4)));

        for day_offset in 0..30 {
            let current_date = creation_date() + Duration::days(day_offset);
            let day = day_offset as u32 + 1;

            for (name, _) in sample_habits() {
                if checkoff_days(name).contains(&day) {
                    let outcome = ops::check_off(&store, name, current_date).unwrap();
                    assert!(
                        matches!(outcome, CheckOffOutcome::CheckedOff(_)),
                        "habit '{}' should have been freshly checked off on {}",
                        name,
                        current_date
                    );

                    let habit_id = store.find_habit_id(name).unwrap().unwrap();
                    assert!(store.checkoff_exists(habit_id, current_date).unwrap());
                }
            }

            if let Some(expected) = expected_current_streaks(day) {
                for (name, want) in expected {
                    let got = ops::current_streak(&store, name).unwrap().unwrap();
                    assert_eq!(
                        got, want,
                        "habit '{}' should have current streak {} on {}",
                        name, want, current_date
                    );
                }
            }
        }

        // Spot-check the recorded history
        let study = store.find_habit_id("Study").unwrap().unwrap();
        let workout = store.find_habit_id("Workout").unwrap().unwrap();
        let meditate = store.find_habit_id("Meditate").unwrap().unwrap();

        assert!(store.checkoff_exists(study, date(2025, 4, 3)).unwrap());
        assert!(!store.checkoff_exists(study, date(2025, 4, 15)).unwrap());
        assert!(store.checkoff_exists(workout, date(2025, 4, 5)).unwrap());
        assert!(!store.checkoff_exists(workout, date(2025, 4, 19)).unwrap());
        assert!(!store.checkoff_exists(meditate, date(2025, 4, 3)).unwrap());
        assert!(store.checkoff_exists(meditate, date(2025, 4, 6)).unwrap());

        // Longest streaks at month end
        let expected_longest = [
            ("Study", 12),
            ("Water the Plants", 6),
            ("Workout", 6),
            ("Read", 13),
            ("Meditate", 3),
        ];
        for (name, want) in expected_longest {
            let got = ops::longest_streak(&store, name).unwrap().unwrap();
            assert_eq!(
                got, want,
                "habit '{}' should end the month with longest streak {}",
                name, want
            );
        }
    }

    #[test]
    fn test_periodicity_filter_over_sample_habits() {
        let store = store_with_sample_habits();

        let daily: HashSet<String> = ["Study", "Workout"].iter().map(|s| s.to_string()).collect();
        assert_eq!(ops::habits_by_periodicity(&store, 1).unwrap(), daily);

        let weekly: HashSet<String> = ["Water the Plants", "Meditate"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(ops::habits_by_periodicity(&store, 7).unwrap(), weekly);

        assert!(ops::habits_by_periodicity(&store, 30).unwrap().is_empty());
    }

    #[test]
    fn test_all_habit_names_over_sample_habits() {
        let store = store_with_sample_habits();

        let expected: HashSet<String> = sample_habits()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        assert_eq!(ops::all_habit_names(&store).unwrap(), expected);
    }
}

//! Interactive session over stdin/stdout
//!
//! This module implements the line-oriented interactive loop:
//! 1. Reads commands from stdin
//! 2. Executes them against the store
//! 3. Prints plain-text responses to stdout
//!
//! Log output goes to stderr, so it never interleaves with responses.
//! All command handlers are synchronous and return their response text;
//! only the prompt/read plumbing is async.

use chrono::NaiveDate;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::{debug, error, info};

use crate::cli::Command;
use crate::domain::Habit;
use crate::engine;
use crate::ops::{self, CheckOffOutcome, CreateOutcome};
use crate::storage::{HabitStore, StorageError};
use crate::AppError;

/// Interactive session bound to one store and one calendar date
///
/// "Today" is fixed when the session is constructed and every operation
/// uses it; a session never consults the clock again.
pub struct Session<S: HabitStore> {
    store: S,
    today: NaiveDate,
}

impl<S: HabitStore> Session<S> {
    /// Create a session for the given store and date
    pub fn new(store: S, today: NaiveDate) -> Self {
        Self { store, today }
    }

    /// The date this session treats as today
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Reconcile every stored habit for today
    ///
    /// Run once before accepting commands so stored current streaks are
    /// trustworthy for the rest of the session.
    pub fn start_of_day(&self) -> Result<usize, StorageError> {
        engine::reconcile_all(&self.store, self.today)
    }

    // Command handlers. Every expected outcome (validation failure, name
    // taken, unknown habit) is a response string; only store failures
    // surface as errors.

    /// The INFO help text
    pub fn info_text(&self) -> String {
        format!(
            "Available commands:\n\
             - CREATE HABIT                     : Create a new habit\n\
             - CHECK OFF                        : Mark a habit as completed for today\n\
             - LIST HABITS                      : List all habit names\n\
             - LIST HABITS BY PERIODICITY       : List habits filtered by periodicity (in days)\n\
             - LIST HABITS WITH LONGEST STREAK  : List habits and their longest streak\n\
             - LIST HABITS WITH CURRENT STREAK  : List habits and their current streak\n\
             - GET LONGEST STREAK               : Get the longest streak for a specific habit\n\
             - GET CURRENT STREAK               : Get the current streak for a specific habit\n\
             - INFO                             : Show this information\n\
             - EXIT                             : Exit the program\n\
             \n\
             Today's date: {}",
            self.today
        )
    }

    /// Create a habit dated today
    pub fn create_habit(&self, name: &str, periodicity: u32) -> Result<String, StorageError> {
        let habit = match Habit::new(name.to_string(), periodicity, self.today) {
            Ok(habit) => habit,
            Err(e) => return Ok(e.to_string()),
        };

        match ops::create_habit(&self.store, &habit)? {
            CreateOutcome::Created(_) => Ok(format!(
                "Habit '{}' with a periodicity of {} days was created successfully on {}.",
                habit.name, habit.periodicity, habit.date_created
            )),
            CreateOutcome::AlreadyExists => Ok(format!(
                "Habit '{}' already exists.",
                habit.name.to_uppercase()
            )),
        }
    }

    /// Check off a habit for today
    pub fn check_off(&self, name: &str) -> Result<String, StorageError> {
        match ops::check_off(&self.store, name, self.today)? {
            CheckOffOutcome::UnknownHabit => Ok(format!(
                "Habit '{}' does not exist.",
                name.to_uppercase()
            )),
            CheckOffOutcome::AlreadyCheckedOff => Ok(format!(
                "Habit '{}' is already checked off for {}.",
                name.to_uppercase(),
                self.today
            )),
            CheckOffOutcome::CheckedOff(_) => Ok(format!(
                "Habit '{}' checked off for {}.",
                name.to_uppercase(),
                self.today
            )),
        }
    }

    /// List every habit name
    pub fn list_habits(&self) -> Result<String, StorageError> {
        let mut names: Vec<String> = ops::all_habit_names(&self.store)?.into_iter().collect();
        names.sort();

        let mut out = String::from("All habits:");
        for name in names {
            out.push_str(&format!("\n- {}", name.to_uppercase()));
        }
        Ok(out)
    }

    /// List habit names with exactly this periodicity
    pub fn list_by_periodicity(&self, periodicity: u32) -> Result<String, StorageError> {
        let mut names: Vec<String> = ops::habits_by_periodicity(&self.store, periodicity)?
            .into_iter()
            .collect();

        if names.is_empty() {
            return Ok(format!(
                "No habits found with periodicity {} days.",
                periodicity
            ));
        }

        names.sort();
        let mut out = format!("Habits with periodicity {} days:", periodicity);
        for name in names {
            out.push_str(&format!("\n- {}", name.to_uppercase()));
        }
        Ok(out)
    }

    /// List every habit with its longest streak
    pub fn list_longest_streaks(&self) -> Result<String, StorageError> {
        let mut out = String::from("Habits and their longest streaks:");
        for (name, streak) in ops::longest_streaks(&self.store)? {
            out.push_str(&format!(
                "\n- {}: Longest streak = {}",
                name.to_uppercase(),
                streak
            ));
        }
        Ok(out)
    }

    /// List every habit with its current streak as of today
    pub fn list_current_streaks(&self) -> Result<String, StorageError> {
        let mut out = format!("Habits and their current streaks on {}:", self.today);
        for (name, streak) in ops::current_streaks(&self.store)? {
            out.push_str(&format!(
                "\n- {}: Current streak = {}",
                name.to_uppercase(),
                streak
            ));
        }
        Ok(out)
    }

    /// Report one habit's longest streak
    pub fn get_longest_streak(&self, name: &str) -> Result<String, StorageError> {
        match ops::longest_streak(&self.store, name)? {
            None => Ok(format!("Habit '{}' does not exist.", name.to_uppercase())),
            Some(streak) => Ok(format!(
                "The longest streak for habit '{}' is: {}",
                name.to_uppercase(),
                streak
            )),
        }
    }

    /// Report one habit's current streak as of today
    pub fn get_current_streak(&self, name: &str) -> Result<String, StorageError> {
        match ops::current_streak(&self.store, name)? {
            None => Ok(format!("Habit '{}' does not exist.", name.to_uppercase())),
            Some(streak) => Ok(format!(
                "The current streak for habit '{}' is: {} on {}",
                name.to_uppercase(),
                streak,
                self.today
            )),
        }
    }

    /// Run the interactive session loop
    ///
    /// Reconciles all habits for today, then reads commands line by line
    /// until EXIT or end of input. A store failure fails only the command
    /// that hit it; the loop keeps accepting input.
    pub async fn run(&self) -> Result<(), AppError> {
        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut stdout = tokio::io::stdout();

        write_line(&mut stdout, "Welcome to Habits!!!").await?;
        write_line(
            &mut stdout,
            "Write INFO for information on how to use the application.",
        )
        .await?;

        match self.start_of_day() {
            Ok(count) => debug!("Startup reconciliation covered {} habits", count),
            Err(e) => {
                error!("Startup reconciliation failed: {}", e);
                write_line(&mut stdout, &format!("Database query failed: {}", e)).await?;
            }
        }

        loop {
            let line = match prompt(&mut reader, &mut stdout, "> ").await? {
                Some(line) => line,
                None => {
                    info!("Session ending (stdin closed)");
                    break;
                }
            };

            let command = match Command::parse(&line) {
                Some(command) => command,
                None => {
                    write_line(&mut stdout, "Invalid command. Write INFO for available commands.")
                        .await?;
                    continue;
                }
            };

            match command {
                Command::Info => {
                    write_line(&mut stdout, &self.info_text()).await?;
                }

                Command::CreateHabit => {
                    let name = match prompt(&mut reader, &mut stdout, "Enter habit name: ").await? {
                        Some(name) => name,
                        None => break,
                    };
                    let periodicity =
                        match prompt_for_periodicity(&mut reader, &mut stdout).await? {
                            Some(periodicity) => periodicity,
                            None => break,
                        };
                    self.respond(&mut stdout, self.create_habit(&name, periodicity))
                        .await?;
                }

                Command::CheckOff => {
                    let name = match prompt(
                        &mut reader,
                        &mut stdout,
                        "Enter habit name to check off: ",
                    )
                    .await?
                    {
                        Some(name) => name,
                        None => break,
                    };
                    self.respond(&mut stdout, self.check_off(&name)).await?;
                }

                Command::ListHabits => {
                    self.respond(&mut stdout, self.list_habits()).await?;
                }

                Command::ListHabitsByPeriodicity => {
                    let line = match prompt(
                        &mut reader,
                        &mut stdout,
                        "Enter periodicity in days to filter habits: ",
                    )
                    .await?
                    {
                        Some(line) => line,
                        None => break,
                    };
                    match line.parse::<u32>() {
                        Ok(periodicity) => {
                            self.respond(&mut stdout, self.list_by_periodicity(periodicity))
                                .await?;
                        }
                        Err(_) => {
                            write_line(&mut stdout, "Please enter a valid integer.").await?;
                        }
                    }
                }

                Command::ListHabitsWithLongestStreak => {
                    self.respond(&mut stdout, self.list_longest_streaks()).await?;
                }

                Command::ListHabitsWithCurrentStreak => {
                    self.respond(&mut stdout, self.list_current_streaks()).await?;
                }

                Command::GetLongestStreak => {
                    let name = match prompt(&mut reader, &mut stdout, "Enter habit name: ").await? {
                        Some(name) => name,
                        None => break,
                    };
                    self.respond(&mut stdout, self.get_longest_streak(&name)).await?;
                }

                Command::GetCurrentStreak => {
                    let name = match prompt(&mut reader, &mut stdout, "Enter habit name: ").await? {
                        Some(name) => name,
                        None => break,
                    };
                    self.respond(&mut stdout, self.get_current_streak(&name)).await?;
                }

                Command::Exit => {
                    write_line(&mut stdout, "Goodbye! See you soon!").await?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Print a handler's response, or report its store error and carry on
    async fn respond(
        &self,
        stdout: &mut Stdout,
        result: Result<String, StorageError>,
    ) -> Result<(), AppError> {
        match result {
            Ok(message) => write_line(stdout, &message).await,
            Err(e) => {
                error!("Command failed: {}", e);
                write_line(stdout, &format!("Database query failed: {}", e)).await
            }
        }
    }
}

/// Write one line to stdout and flush it
async fn write_line(stdout: &mut Stdout, text: &str) -> Result<(), AppError> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

/// Print a prompt without a newline and read the next input line
///
/// Returns the trimmed line, or None when stdin has closed.
async fn prompt(
    reader: &mut BufReader<Stdin>,
    stdout: &mut Stdout,
    text: &str,
) -> Result<Option<String>, AppError> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;

    let mut line = String::new();
    match reader.read_line(&mut line).await {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Prompt for a periodicity until a valid integer is entered
async fn prompt_for_periodicity(
    reader: &mut BufReader<Stdin>,
    stdout: &mut Stdout,
) -> Result<Option<u32>, AppError> {
    loop {
        let line = match prompt(
            reader,
            stdout,
            "Enter periodicity in days (e.g. 1 for daily, 7 for weekly): ",
        )
        .await?
        {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.parse::<u32>() {
            Ok(periodicity) => return Ok(Some(periodicity)),
            Err(_) => {
                write_line(stdout, "Please enter a valid integer for periodicity.").await?;
            }
        }
    }
}

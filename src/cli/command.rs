//! Parsing of interactive commands

/// A command entered at the interactive prompt
///
/// Commands that need more input (a habit name, a periodicity) prompt
/// for it after being selected; the enum only identifies which command
/// was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Info,
    CreateHabit,
    CheckOff,
    ListHabits,
    ListHabitsByPeriodicity,
    ListHabitsWithLongestStreak,
    ListHabitsWithCurrentStreak,
    GetLongestStreak,
    GetCurrentStreak,
    Exit,
}

impl Command {
    /// Parse a line of user input, case-insensitively
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "create habit" => Some(Self::CreateHabit),
            "check off" => Some(Self::CheckOff),
            "list habits" => Some(Self::ListHabits),
            "list habits by periodicity" => Some(Self::ListHabitsByPeriodicity),
            "list habits with longest streak" => Some(Self::ListHabitsWithLongestStreak),
            "list habits with current streak" => Some(Self::ListHabitsWithCurrentStreak),
            "get longest streak" => Some(Self::GetLongestStreak),
            "get current streak" => Some(Self::GetCurrentStreak),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

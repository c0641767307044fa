use std::path::PathBuf;

use thiserror::Error;

/// Main error type for habit tracker operations
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("habit '{0}' already exists")]
    DuplicateName(String),

    #[error("habit index {index} out of range (habit count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("corrupt week record {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corrupt week record {}: habit '{name}' appears more than once", path.display())]
    RepeatedHabit { path: PathBuf, name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl HabitError {
    /// Short machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HabitError::DuplicateName(_) => "duplicate_name",
            HabitError::IndexOutOfRange { .. } => "internal_error",
            HabitError::InvalidArgs(_) => "invalid_args",
            HabitError::Corrupt { .. } => "corrupt_data",
            HabitError::RepeatedHabit { .. } => "corrupt_data",
            HabitError::Io(_) => "io_error",
            HabitError::Json(_) => "internal_error",
            HabitError::TomlParse(_) => "invalid_config",
        }
    }

    /// Process exit code when this error ends the program
    pub fn exit_code(&self) -> i32 {
        match self {
            HabitError::InvalidArgs(_) => 2,
            HabitError::TomlParse(_) => 2,
            HabitError::DuplicateName(_) => 4,
            HabitError::Io(_) => 5,
            HabitError::Corrupt { .. } | HabitError::RepeatedHabit { .. } => 5,
            _ => 1,
        }
    }

    /// Actionable hints for the user
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self {
            HabitError::DuplicateName(_) => vec![
                "Pick a different name, or remove the existing habit first",
            ],
            HabitError::Corrupt { .. } | HabitError::RepeatedHabit { .. } => vec![
                "Fix or move the week file aside; it is never overwritten automatically",
            ],
            HabitError::Io(_) => vec![
                "Check that the data directory exists and is writable",
                "Use --data-dir to point at another location",
            ],
            HabitError::TomlParse(_) => vec![
                "Check config.toml in the data directory",
            ],
            HabitError::InvalidArgs(msg) if msg.contains("color") => vec![
                "Colors: blue, red, green, yellow, white, orange, purple, lightblue, lightgreen",
            ],
            HabitError::InvalidArgs(msg) if msg.contains("week") => vec![
                "Weeks are written like 2024-W10",
            ],
            _ => vec![],
        }
    }

    /// True when the error leaves the in-memory state intact and the session can go on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HabitError::DuplicateName(_)
                | HabitError::InvalidArgs(_)
                | HabitError::Io(_)
                | HabitError::Json(_)
        )
    }
}

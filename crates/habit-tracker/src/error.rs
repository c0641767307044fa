//! Error types for habit-tracker

use libhabit_core::HabitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("{0}")]
    Core(#[from] HabitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TrackerError {
    /// Short machine-readable code, printed with the message
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackerError::Core(e) => e.error_code(),
            TrackerError::Io(_) => "io_error",
            TrackerError::Terminal(_) => "terminal_error",
            TrackerError::Config(_) => "invalid_config",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::Core(e) => e.exit_code(),
            TrackerError::Io(_) | TrackerError::Terminal(_) => 5,
            TrackerError::Config(_) => 2,
        }
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        match self {
            TrackerError::Core(e) => e.suggestions(),
            TrackerError::Io(_) => vec![
                "Check that the data directory and its log file are writable",
                "Use --data-dir to point at another location",
            ],
            TrackerError::Terminal(_) => vec![
                "Make sure the terminal supports raw mode",
                "Use --print for output without the interactive UI",
            ],
            TrackerError::Config(_) => vec!["See --help for accepted values"],
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

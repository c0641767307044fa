use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HabitError;
use crate::types::{default_habits, Color, Habit};

/// File name of the tracker config inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

/// When the active week key is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekPolicy {
    /// Once at session start; all saves go to that week (default)
    #[default]
    Session,
    /// From the clock on every mutation; a new week is loaded when it changes
    Follow,
}

impl WeekPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekPolicy::Session => "session",
            WeekPolicy::Follow => "follow",
        }
    }
}

/// One seed habit in config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTemplate {
    pub name: String,
    pub color: Color,
}

/// Tracker configuration stored in `<data_dir>/config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_policy: Option<WeekPolicy>,
    /// Habits a new week starts with, replacing the built-in list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_habits: Option<Vec<HabitTemplate>>,
}

impl TrackerConfig {
    pub fn week_policy(&self) -> WeekPolicy {
        self.week_policy.unwrap_or_default()
    }

    /// Seed list for new weeks, validated for empty and repeated names
    pub fn seed_habits(&self) -> Result<Vec<Habit>, HabitError> {
        let Some(templates) = &self.default_habits else {
            return Ok(default_habits());
        };
        let mut habits: Vec<Habit> = Vec::with_capacity(templates.len());
        for t in templates {
            let name = t.name.trim();
            if name.is_empty() {
                return Err(HabitError::InvalidArgs(
                    "default habit name must not be empty".to_string(),
                ));
            }
            if habits.iter().any(|h| h.name == name) {
                return Err(HabitError::DuplicateName(name.to_string()));
            }
            habits.push(Habit::new(name, t.color));
        }
        Ok(habits)
    }
}

/// Load config from `<data_dir>/config.toml`; `None` when absent
pub fn load_config(data_dir: &Path) -> Result<Option<TrackerConfig>, HabitError> {
    let config_path = data_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&config_path)?;
    let config: TrackerConfig = toml::from_str(&content)?;
    Ok(Some(config))
}

use serde::{Deserialize, Serialize};

use crate::error::HabitError;

/// Display color tag of a habit
///
/// Unknown names are rejected when a habit is added; there is no silent
/// fallback to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Red,
    Green,
    Yellow,
    White,
    Orange,
    Purple,
    LightBlue,
    LightGreen,
}

impl Color {
    /// Selection order used by the add-habit form
    pub const ALL: [Color; 9] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::White,
        Color::Orange,
        Color::Purple,
        Color::LightBlue,
        Color::LightGreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::LightBlue => "lightblue",
            Color::LightGreen => "lightgreen",
        }
    }

    /// Parse a color name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Result<Self, HabitError> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HabitError::InvalidArgs(format!("unknown color '{}'", wanted)))
    }

    /// Next color in selection order, wrapping around
    pub fn next(&self) -> Self {
        let i = Color::ALL.iter().position(|c| c == self).unwrap_or(0);
        Color::ALL[(i + 1) % Color::ALL.len()]
    }

    /// Previous color in selection order, wrapping around
    pub fn prev(&self) -> Self {
        let i = Color::ALL.iter().position(|c| c == self).unwrap_or(0);
        Color::ALL[(i + Color::ALL.len() - 1) % Color::ALL.len()]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_colors() {
        for color in Color::ALL {
            assert_eq!(Color::parse(color.as_str()).unwrap(), color);
        }
        assert_eq!(Color::parse(" LightBlue ").unwrap(), Color::LightBlue);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Color::parse("pink").unwrap_err();
        assert!(matches!(err, HabitError::InvalidArgs(_)));
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Color::LightGreen.next(), Color::Blue);
        assert_eq!(Color::Blue.prev(), Color::LightGreen);
        assert_eq!(Color::Red.next().prev(), Color::Red);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Color::LightBlue).unwrap();
        assert_eq!(json, "\"lightblue\"");
        let parsed: Color = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(parsed, Color::Orange);
        assert!(serde_json::from_str::<Color>("\"pink\"").is_err());
    }
}

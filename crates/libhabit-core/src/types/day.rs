use serde::{Deserialize, Serialize};

/// One of the seven fixed day columns, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Column order of the grid. Never reordered.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Day for a rendered grid column; column 0 is the name column
    pub fn from_column(col: usize) -> Option<Self> {
        col.checked_sub(1).and_then(|i| Day::ALL.get(i).copied())
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order_is_monday_first() {
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[6], Day::Sunday);
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(Day::from_column(i + 1), Some(*day));
        }
    }

    #[test]
    fn test_from_column() {
        assert_eq!(Day::from_column(0), None);
        assert_eq!(Day::from_column(1), Some(Day::Monday));
        assert_eq!(Day::from_column(7), Some(Day::Sunday));
        assert_eq!(Day::from_column(8), None);
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Day::Friday).unwrap(), "\"Friday\"");
    }
}

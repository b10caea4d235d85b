//! Day labels for the seven columns of the week.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the seven fixed day columns, ordered Monday first.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All day labels in column order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Short label used as the persisted JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl FromStr for Day {
    type Err = String;

    /// Accepts the short label case-insensitively, as well as full day names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Ok(Day::Mon),
            "tue" | "tuesday" => Ok(Day::Tue),
            "wed" | "wednesday" => Ok(Day::Wed),
            "thu" | "thursday" => Ok(Day::Thu),
            "fri" | "friday" => Ok(Day::Fri),
            "sat" | "saturday" => Ok(Day::Sat),
            "sun" | "sunday" => Ok(Day::Sun),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

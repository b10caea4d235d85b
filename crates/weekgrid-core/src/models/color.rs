//! Task color palette.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Color tag of a task block.
///
/// The palette values serialize as the stylesheet class names used by the
/// planner's web front end, so exported files stay interchangeable with it.
/// Values outside the palette are preserved verbatim as [`TaskColor::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskColor {
    #[default]
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
    Orange,
    /// Unrecognized value carried through load and save untouched
    Other(String),
}

impl TaskColor {
    /// Palette entries in cycling order.
    pub const PALETTE: [TaskColor; 6] = [
        TaskColor::Yellow,
        TaskColor::Blue,
        TaskColor::Green,
        TaskColor::Pink,
        TaskColor::Purple,
        TaskColor::Orange,
    ];

    /// Persisted class name.
    pub fn as_str(&self) -> &str {
        match self {
            TaskColor::Yellow => "bg-yellow-200",
            TaskColor::Blue => "bg-blue-200",
            TaskColor::Green => "bg-green-200",
            TaskColor::Pink => "bg-pink-200",
            TaskColor::Purple => "bg-purple-200",
            TaskColor::Orange => "bg-orange-200",
            TaskColor::Other(raw) => raw,
        }
    }

    /// Short human name, `None` for values outside the palette.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            TaskColor::Yellow => Some("yellow"),
            TaskColor::Blue => Some("blue"),
            TaskColor::Green => Some("green"),
            TaskColor::Pink => Some("pink"),
            TaskColor::Purple => Some("purple"),
            TaskColor::Orange => Some("orange"),
            TaskColor::Other(_) => None,
        }
    }

    fn palette_index(&self) -> Option<usize> {
        Self::PALETTE.iter().position(|c| c == self)
    }

    /// Next color in the palette, wrapping around. Unrecognized values restart
    /// the cycle at the first entry.
    pub fn next(&self) -> TaskColor {
        let next = self.palette_index().map_or(0, |i| (i + 1) % Self::PALETTE.len());
        Self::PALETTE[next].clone()
    }
}

impl From<String> for TaskColor {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "bg-yellow-200" => TaskColor::Yellow,
            "bg-blue-200" => TaskColor::Blue,
            "bg-green-200" => TaskColor::Green,
            "bg-pink-200" => TaskColor::Pink,
            "bg-purple-200" => TaskColor::Purple,
            "bg-orange-200" => TaskColor::Orange,
            _ => TaskColor::Other(raw),
        }
    }
}

impl From<TaskColor> for String {
    fn from(color: TaskColor) -> Self {
        match color {
            TaskColor::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TaskColor {
    type Err = String;

    /// Parses a short palette name (`blue`) or a class name (`bg-blue-200`).
    /// Only palette colors are accepted here; arbitrary values can only arrive
    /// through loaded or imported state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        let by_name = Self::PALETTE
            .iter()
            .find(|c| c.name() == Some(lowered.as_str()));
        if let Some(color) = by_name {
            return Ok(color.clone());
        }
        match TaskColor::from(lowered) {
            TaskColor::Other(_) => Err(format!("Invalid color: {s}")),
            known => Ok(known),
        }
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(self.as_str()),
        }
    }
}

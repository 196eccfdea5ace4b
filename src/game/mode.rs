//! Game configuration: word-game modes and code-game difficulties

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of parallel boards in the word game
///
/// Serialized as the board count (`1`, `2`, `4`), which is also how the
/// statistics file keys its records.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum WordMode {
    #[default]
    Mono,
    Duo,
    Quartet,
}

impl WordMode {
    pub const ALL: [Self; 3] = [Self::Mono, Self::Duo, Self::Quartet];

    /// Boards played simultaneously
    #[must_use]
    pub const fn boards(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Duo => 2,
            Self::Quartet => 4,
        }
    }

    /// Attempt budget shared by all boards
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Mono => 6,
            Self::Duo => 7,
            Self::Quartet => 9,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "Mono",
            Self::Duo => "Dueto",
            Self::Quartet => "Quarteto",
        }
    }

    /// Mode with the given board count
    #[must_use]
    pub const fn from_boards(boards: u8) -> Option<Self> {
        match boards {
            1 => Some(Self::Mono),
            2 => Some(Self::Duo),
            4 => Some(Self::Quartet),
            _ => None,
        }
    }
}

impl From<WordMode> for u8 {
    fn from(mode: WordMode) -> Self {
        mode.boards() as u8
    }
}

impl TryFrom<u8> for WordMode {
    type Error = String;

    fn try_from(boards: u8) -> Result<Self, Self::Error> {
        Self::from_boards(boards).ok_or_else(|| format!("Invalid board count: {boards}"))
    }
}

impl FromStr for WordMode {
    type Err = String;

    /// Accepts the board count or the mode name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "mono" | "solo" => Ok(Self::Mono),
            "2" | "dueto" | "duo" => Ok(Self::Duo),
            "4" | "quarteto" | "quartet" => Ok(Self::Quartet),
            other => Err(format!("Unknown mode '{other}' (expected 1, 2 or 4)")),
        }
    }
}

impl fmt::Display for WordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Code game difficulty
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn max_attempts(self) -> usize {
        match self {
            Self::Easy | Self::Hard => 6,
            Self::Medium => 8,
        }
    }

    /// Length of the secret code
    #[must_use]
    pub const fn digits(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium | Self::Hard => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty '{other}' (expected easy, medium or hard)")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Fixed layout parameters for one difficulty tier
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LevelDimensions {
    pub width: usize,
    pub height: usize,
    pub boxes: usize,
    pub wall_rects: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn dimensions(self) -> LevelDimensions {
        match self {
            Difficulty::Easy => LevelDimensions { width: 9, height: 9, boxes: 3, wall_rects: 10 },
            Difficulty::Medium => LevelDimensions { width: 11, height: 9, boxes: 4, wall_rects: 16 },
            Difficulty::Hard => LevelDimensions { width: 13, height: 11, boxes: 5, wall_rects: 24 },
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Unknown tokens fall back to the smallest tier
    pub fn from_token_or_default(token: &str) -> Difficulty {
        token.parse().unwrap_or_else(|err: ParseDifficultyError| {
            warn!(%err, "falling back to {}", Difficulty::default());
            Difficulty::default()
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.token() == s)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

use std::collections::BTreeSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::core::Difficulty;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum UserAction {
    #[serde(rename = "move")]
    Move {
        #[serde(rename = "d")]
        direction: Direction,
    },
    #[serde(rename = "regen")]
    Regenerate {
        #[serde(rename = "level")]
        difficulty: Difficulty,
    },
}

/// One of the two seats taking turns on a board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

/// Seed inputs a caller supplies for layout generation. Never read from ambient storage.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SeedMaterial {
    pub game_id: String,
    pub created_at: u64,
}

/// Grid layout of a puzzle. Cells are row-major indices `y * width + x`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Level {
    pub width: usize,
    pub height: usize,
    pub walls: BTreeSet<usize>,
    pub targets: BTreeSet<usize>,
    pub boxes: Vec<usize>,
    /// Unset only when generation ran out of floor cells
    pub player: Option<usize>,
    pub difficulty: Difficulty,
}

/// Result of resolving a directional request against a level
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveResolution {
    Step { to: usize },
    Push { from: usize, to: usize },
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(Level, MoveResolution),
    Error(crate::core::MoveError),
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl Default for SeedMaterial {
    fn default() -> Self {
        SeedMaterial {
            game_id: "g".to_string(),
            created_at: 0,
        }
    }
}

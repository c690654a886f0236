//! Turn-based board state shared between two seats.
//!
//! `generate`, `is_valid_move`, `apply_move` and `status` are the whole surface
//! the surrounding session layer needs. All of them are pure: `apply_move`
//! returns a new state and leaves its input untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use crate::core::{
    epoch_millis, resolve_move, Difficulty, Level, Mark, MoveError, SeedMaterial, UserAction,
    INITIAL_SALT,
};
use crate::solver::{generate_solvable_level, GenerationConfig};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub level: Level,
    pub seed: SeedMaterial,
    pub start: Mark,
    pub turn: Mark,
    pub winner: Option<Mark>,
    pub moves: u32,
    /// False when the level came from the unverified fallback path
    pub verified: bool,
}

impl BoardState {
    pub fn new(level: Level, seed: SeedMaterial, verified: bool) -> BoardState {
        BoardState {
            level,
            seed,
            start: Mark::X,
            turn: Mark::X,
            winner: None,
            moves: 0,
            verified,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.level.difficulty
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<BoardState> {
        serde_json::from_str(json)
    }
}

pub fn generate(seed: &SeedMaterial, difficulty: Difficulty) -> BoardState {
    generate_with(seed, difficulty, &GenerationConfig::default())
}

pub fn generate_with(seed: &SeedMaterial, difficulty: Difficulty, config: &GenerationConfig) -> BoardState {
    let generated = generate_solvable_level(seed, difficulty, INITIAL_SALT, config);
    debug!(
        game_id = %seed.game_id,
        %difficulty,
        attempts = generated.attempts,
        verified = generated.verified,
        "generated board"
    );
    BoardState::new(generated.level, seed.clone(), generated.verified)
}

/// Why `action` cannot be played on `state`
pub fn check_move(state: &BoardState, action: &UserAction) -> Result<(), MoveError> {
    if state.is_terminal() {
        return Err(MoveError::GameOver);
    }
    match action {
        // the difficulty is already one of the known tiers by construction
        UserAction::Regenerate { .. } => Ok(()),
        UserAction::Move { direction } => resolve_move(&state.level, *direction).map(|_| ()),
    }
}

pub fn is_valid_move(state: &BoardState, action: &UserAction) -> bool {
    check_move(state, action).is_ok()
}

pub fn apply_move(state: &BoardState, action: &UserAction) -> BoardState {
    let salt = epoch_millis().to_string();
    apply_move_with(state, action, &GenerationConfig::default(), &salt)
}

/// `apply_move` with explicit generation settings and the salt a regeneration would use
pub fn apply_move_with(
    state: &BoardState,
    action: &UserAction,
    config: &GenerationConfig,
    regen_salt: &str,
) -> BoardState {
    let mut next = state.clone();
    if next.is_terminal() {
        trace!("ignoring move on solved board");
        return next;
    }

    match *action {
        UserAction::Regenerate { difficulty } => {
            let generated = generate_solvable_level(&next.seed, difficulty, regen_salt, config);
            next.level = generated.level;
            next.verified = generated.verified;
            next.moves += 1;
            next.turn = next.turn.other();
        }
        UserAction::Move { direction } => {
            let resolution = match resolve_move(&next.level, direction) {
                Ok(resolution) => resolution,
                Err(err) => {
                    warn!(?direction, %err, "apply_move called with an illegal move");
                    return next;
                }
            };
            next.level.apply(resolution);
            next.moves += 1;
            if next.level.is_won() {
                next.winner = Some(next.turn);
            } else {
                next.turn = next.turn.other();
            }
        }
    }
    next
}

pub fn status(state: &BoardState) -> String {
    match state.winner {
        Some(winner) => format!("Solved by {winner}!"),
        None => format!("Turn: {} - Sokoban {}", state.turn, state.level.difficulty),
    }
}

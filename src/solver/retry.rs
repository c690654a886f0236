use tracing::{debug, warn};
use crate::core::{generate_level, Difficulty, Level, SeedMaterial};
use crate::solver::search::verify;
use crate::solver::GenerationConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub level: Level,
    /// Candidates generated, including the returned one
    pub attempts: usize,
    /// False when every attempt failed and the last candidate was returned unchecked
    pub verified: bool,
}

/// Generate candidates with salts `{salt_base}:{attempt}` until one is proven solvable.
/// Falls back to the most recent complete candidate rather than failing.
pub fn generate_solvable_level(
    seed: &SeedMaterial,
    difficulty: Difficulty,
    salt_base: &str,
    config: &GenerationConfig,
) -> GeneratedLevel {
    let mut last = None;
    let mut last_complete = None;
    for attempt in 0..config.max_attempts {
        let level = generate_level(seed, difficulty, &format!("{salt_base}:{attempt}"));
        let report = verify(&level, &config.solver);
        debug!(attempt, outcome = ?report.outcome, expansions = report.expansions, "generation attempt");
        if report.is_solved() {
            return GeneratedLevel {
                level,
                attempts: attempt + 1,
                verified: true,
            };
        }
        if level.is_complete() {
            last_complete = Some(level);
        } else {
            last = Some(level);
        }
    }

    let level = match last_complete.or(last) {
        Some(level) => level,
        None => generate_level(seed, difficulty, &format!("{salt_base}:fallback")),
    };
    warn!(
        game_id = %seed.game_id,
        created_at = seed.created_at,
        %difficulty,
        salt_base,
        attempts = config.max_attempts,
        "no solvable level found, using fallback candidate unverified"
    );
    GeneratedLevel {
        level,
        attempts: config.max_attempts.max(1),
        verified: false,
    }
}

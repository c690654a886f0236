mod model_helpers;
mod models;
mod update;
mod bounded_grid;
mod consts;
mod bounds;
mod difficulty;
mod generator;
mod heuristics;
mod random;
mod rng;

pub use models::{Direction, UserAction, Mark, SeedMaterial, Level, MoveResolution, GameUpdate};
pub use consts::*;
pub use bounds::BoundsOriginRoot;
pub use bounded_grid::BoundedGrid;
pub use difficulty::{Difficulty, LevelDimensions, ParseDifficultyError};
pub use generator::generate_level;
pub use heuristics::{is_corner_lock, is_winnable, WinnableState};
pub use model_helpers::epoch_millis;
pub use rng::SeededRng;
pub use update::{resolve_move, step, MoveError};

mod budget;
mod config;
mod models;
mod populate;
mod retry;
mod search;

pub use budget::{BudgetExceeded, BudgetTracker, SearchBudget};
pub use config::{GenerationConfig, NodeIdentity, SolverConfig};
pub use models::{NodeKey, PopulateResult, SearchFrontier, SearchNode, SearchOutcome, SearchReport, SharedLevelState};
pub use populate::get_all_adjacent_nodes;
pub use retry::{generate_solvable_level, GeneratedLevel};
pub use search::{is_solvable, is_solvable_with, verify};

use serde::{Deserialize, Serialize};
use crate::core::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_EXPANSIONS};
use crate::solver::SearchBudget;

/// How the search decides two push states are the same node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeIdentity {
    /// Key on the player's exact cell plus the sorted boxes
    #[default]
    ExactPlayer,
    /// Key on the smallest cell of the player's reachable region plus the sorted boxes.
    /// Collapses every player position within one region into a single node.
    ReachableRegion,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub budget: SearchBudget,
    pub node_identity: NodeIdentity,
    /// Skip pushes that strand a box in a corner lock off target
    pub prune_corner_deadlocks: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub max_attempts: usize,
    pub solver: SolverConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            solver: SolverConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_node_identity(mut self, node_identity: NodeIdentity) -> Self {
        self.node_identity = node_identity;
        self
    }

    pub fn with_corner_pruning(mut self, prune: bool) -> Self {
        self.prune_corner_deadlocks = prune;
        self
    }
}

impl GenerationConfig {
    /// Node-count budget only, so the same inputs always generate the same level
    pub fn deterministic() -> Self {
        GenerationConfig::default().with_budget(SearchBudget::node_limited(DEFAULT_MAX_EXPANSIONS))
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.solver.budget = budget;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

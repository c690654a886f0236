use tracing::debug;
use crate::core::{is_winnable, Level, WinnableState};
use crate::solver::models::{PopulateResult, SearchFrontier, SearchNode, SearchOutcome, SearchReport, SharedLevelState};
use crate::solver::SolverConfig;

/// Breadth-first search over push states under the configured budget.
/// A budget overrun is reported as such, not as proof of unsolvability.
pub fn verify(level: &Level, config: &SolverConfig) -> SearchReport {
    let mut tracker = config.budget.start();

    let start = match SearchNode::from_level(level) {
        Some(node) if level.is_complete() => node,
        _ => {
            return SearchReport {
                outcome: SearchOutcome::Incomplete,
                expansions: 0,
                visited: 0,
                elapsed: tracker.elapsed(),
            };
        }
    };

    if config.prune_corner_deadlocks && is_winnable(level) == WinnableState::WinImpossible {
        debug!("box starts trapped off target, skipping search");
        return SearchReport {
            outcome: SearchOutcome::Exhausted,
            expansions: 0,
            visited: 1,
            elapsed: tracker.elapsed(),
        };
    }

    let shared = SharedLevelState::from_level(level);
    let start = start.canonical(&shared, config.node_identity);
    let mut frontier = SearchFrontier::new(start);

    let outcome = loop {
        if frontier.is_empty() {
            break SearchOutcome::Exhausted;
        }
        if let Err(exceeded) = tracker.charge() {
            break SearchOutcome::BudgetExceeded(exceeded);
        }
        match frontier.populate_step(&shared, config) {
            PopulateResult::Solved => break SearchOutcome::Solved,
            PopulateResult::AllVisited => break SearchOutcome::Exhausted,
            PopulateResult::Populated => {}
        }
    };

    let report = SearchReport {
        outcome,
        expansions: tracker.expansions(),
        visited: frontier.visited.len(),
        elapsed: tracker.elapsed(),
    };
    debug!(
        outcome = ?report.outcome,
        expansions = report.expansions,
        visited = report.visited,
        elapsed_us = report.elapsed.as_micros() as u64,
        "solvability search finished"
    );
    report
}

pub fn is_solvable(level: &Level) -> bool {
    is_solvable_with(level, &SolverConfig::default())
}

pub fn is_solvable_with(level: &Level, config: &SolverConfig) -> bool {
    verify(level, config).is_solved()
}

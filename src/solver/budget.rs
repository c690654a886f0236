use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};
use crate::core::{DEFAULT_MAX_EXPANSIONS, DEFAULT_TIME_LIMIT};

/// Ceiling on one solvability search. Checked once per dequeued node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Nodes the search may expand before giving up
    pub max_expansions: usize,
    /// Wall-clock limit. None bounds the search by node count alone, which keeps
    /// results independent of machine speed.
    pub time_limit: Option<Duration>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetExceeded {
    Time,
    Expansions,
}

/// A started budget
#[derive(Debug)]
pub struct BudgetTracker {
    started: Instant,
    deadline: Option<Instant>,
    max_expansions: usize,
    expansions: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        SearchBudget {
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            time_limit: Some(DEFAULT_TIME_LIMIT),
        }
    }
}

impl SearchBudget {
    pub fn node_limited(max_expansions: usize) -> Self {
        SearchBudget {
            max_expansions,
            time_limit: None,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn start(&self) -> BudgetTracker {
        let started = Instant::now();
        BudgetTracker {
            started,
            deadline: self.time_limit.map(|limit| started + limit),
            max_expansions: self.max_expansions,
            expansions: 0,
        }
    }
}

impl BudgetTracker {
    /// Account for one node expansion, failing once either ceiling is passed
    pub fn charge(&mut self) -> Result<(), BudgetExceeded> {
        if let Some(deadline) = self.deadline {
            if Instant::now() > deadline {
                return Err(BudgetExceeded::Time);
            }
        }
        if self.expansions >= self.max_expansions {
            return Err(BudgetExceeded::Expansions);
        }
        self.expansions += 1;
        Ok(())
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn node_limited_budget_allows_exactly_max_expansions() {
        let mut tracker = SearchBudget::node_limited(3).start();
        assert_eq!(tracker.charge(), Ok(()));
        assert_eq!(tracker.charge(), Ok(()));
        assert_eq!(tracker.charge(), Ok(()));
        assert_eq!(tracker.charge(), Err(BudgetExceeded::Expansions));
        assert_eq!(tracker.expansions(), 3);
    }

    #[test]
    fn zero_time_limit_trips_deadline() {
        let mut tracker = SearchBudget::node_limited(1_000)
            .with_time_limit(Duration::ZERO)
            .start();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(tracker.charge(), Err(BudgetExceeded::Time));
    }
}

use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use crate::core::{BoundedGrid, BoundsOriginRoot};
use crate::solver::BudgetExceeded;

/// Walls and targets of the level under search. Never changes during a search.
#[derive(Clone, Debug)]
pub struct SharedLevelState {
    pub bounds: BoundsOriginRoot,
    pub walls: BoundedGrid<bool>,
    pub targets: BoundedGrid<bool>,
}

/// A push state: player cell plus box cells in their original order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub player: usize,
    pub boxes: Vec<usize>,
}

/// Identity of a search node. Boxes are interchangeable, so they are kept sorted.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct NodeKey {
    pub player: usize,
    pub boxes: Vec<usize>,
}

/// Breadth-first queue plus the keys of every node ever enqueued
#[derive(Clone, Debug)]
pub struct SearchFrontier {
    pub queue: VecDeque<SearchNode>,
    pub visited: HashSet<NodeKey>,
}

pub enum PopulateResult {
    AllVisited,
    Populated,
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved,
    /// Every reachable push state was explored without reaching the goal
    Exhausted,
    /// Gave up; says nothing about solvability
    BudgetExceeded(BudgetExceeded),
    /// The level is missing its player or has mismatched boxes and targets
    Incomplete,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub expansions: usize,
    pub visited: usize,
    pub elapsed: Duration,
}

impl SearchNode {
    pub fn key(&self) -> NodeKey {
        let mut boxes = self.boxes.clone();
        boxes.sort_unstable();
        NodeKey {
            player: self.player,
            boxes,
        }
    }
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        self.outcome == SearchOutcome::Solved
    }
}

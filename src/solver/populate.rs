use std::collections::{HashSet, VecDeque};
use crate::core::{is_corner_lock, BoundedGrid, Direction, Level};
use crate::solver::models::{
    NodeKey, PopulateResult, SearchFrontier, SearchNode, SharedLevelState,
};
use crate::solver::{NodeIdentity, SolverConfig};

/// Order in which pushes are tried on each box
const PUSH_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

impl SharedLevelState {
    pub fn from_level(level: &Level) -> Self {
        let bounds = level.bounds();
        SharedLevelState {
            bounds,
            walls: BoundedGrid::with_marked(bounds, &level.walls, true, false),
            targets: BoundedGrid::with_marked(bounds, &level.targets, true, false),
        }
    }

    pub fn is_wall(&self, cell: usize) -> bool {
        self.walls.get(cell).copied().unwrap_or(true)
    }

    pub fn is_target(&self, cell: usize) -> bool {
        self.targets.get(cell).copied().unwrap_or(false)
    }

    pub fn is_won(&self, boxes: &[usize]) -> bool {
        !boxes.is_empty() && boxes.iter().all(|&b| self.is_target(b))
    }

    /// A cell a box can never leave and which is not a target
    pub fn is_dead_corner(&self, cell: usize) -> bool {
        !self.is_target(cell) && is_corner_lock(self.bounds, cell, |c| self.is_wall(c))
    }

    /// Flood fill from the player over cells that are neither wall nor box
    pub fn reachable_positions(&self, node: &SearchNode) -> BoundedGrid<bool> {
        let mut reachable = BoundedGrid::new(self.bounds, false);
        if !reachable.contains(node.player) {
            return reachable;
        }
        let occupied = BoundedGrid::with_marked(self.bounds, &node.boxes, true, false);

        let mut queue = VecDeque::from([node.player]);
        reachable[node.player] = true;
        while let Some(cell) = queue.pop_front() {
            for dir in Direction::ALL {
                let Some(next) = self.bounds.neighbor(cell, dir) else {
                    continue;
                };
                if reachable[next] || self.walls[next] || occupied[next] {
                    continue;
                }
                reachable[next] = true;
                queue.push_back(next);
            }
        }
        reachable
    }

    pub fn min_reachable_position(&self, node: &SearchNode) -> usize {
        self.reachable_positions(node)
            .iter()
            .find(|(_, reachable)| **reachable)
            .map(|(cell, _)| cell)
            .unwrap_or(node.player)
    }
}

impl SearchNode {
    pub fn from_level(level: &Level) -> Option<SearchNode> {
        Some(SearchNode {
            player: level.player?,
            boxes: level.boxes.clone(),
        })
    }

    /// Rewrite the player cell into the form used for identity under `identity`
    pub fn canonical(mut self, shared: &SharedLevelState, identity: NodeIdentity) -> SearchNode {
        if identity == NodeIdentity::ReachableRegion {
            self.player = shared.min_reachable_position(&self);
        }
        self
    }
}

/// Every push state one legal push away from `node`
pub fn get_all_adjacent_nodes(
    node: &SearchNode,
    shared: &SharedLevelState,
    config: &SolverConfig,
) -> Vec<SearchNode> {
    let reachable = shared.reachable_positions(node);
    let occupied = BoundedGrid::with_marked(shared.bounds, &node.boxes, true, false);

    let mut result = Vec::new();
    for (box_index, &game_box) in node.boxes.iter().enumerate() {
        for dir in PUSH_DIRECTIONS {
            let Some(stand) = shared.bounds.neighbor(game_box, dir.opposite()) else {
                continue;
            };
            let Some(dest) = shared.bounds.neighbor(game_box, dir) else {
                continue;
            };
            if !reachable[stand] || shared.is_wall(dest) || occupied[dest] {
                continue;
            }
            if config.prune_corner_deadlocks && shared.is_dead_corner(dest) {
                continue;
            }

            let mut boxes = node.boxes.clone();
            boxes[box_index] = dest;
            let next = SearchNode {
                player: game_box,
                boxes,
            };
            result.push(next.canonical(shared, config.node_identity));
        }
    }
    result
}

impl SearchFrontier {
    pub fn new(start: SearchNode) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start.key());
        SearchFrontier {
            queue: VecDeque::from([start]),
            visited,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, key: &NodeKey) -> bool {
        self.visited.contains(key)
    }

    /// Take the oldest node, test it, and enqueue its unseen successors
    pub fn populate_step(&mut self, shared: &SharedLevelState, config: &SolverConfig) -> PopulateResult {
        let Some(node) = self.queue.pop_front() else {
            return PopulateResult::AllVisited;
        };
        if shared.is_won(&node.boxes) {
            return PopulateResult::Solved;
        }

        for next in get_all_adjacent_nodes(&node, shared, config) {
            if self.visited.insert(next.key()) {
                self.queue.push_back(next);
            }
        }
        PopulateResult::Populated
    }
}

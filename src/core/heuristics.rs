use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Direction, Level};

#[derive(Eq, PartialEq, Debug)]
pub enum WinnableState {
    WinMaybePossible,
    WinImpossible,
}

/// Clockwise, so consecutive entries are orthogonal neighbours forming an L
const DIRECTIONS_AROUND: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// A cell is a corner lock if two orthogonally adjacent sides are blocked.
/// A box there can never be pushed out again. Off-grid neighbours count as blocked.
pub fn is_corner_lock<F>(bounds: BoundsOriginRoot, cell: usize, is_wall: F) -> bool
where
    F: Fn(usize) -> bool,
{
    let blocked = DIRECTIONS_AROUND.map(|dir| match bounds.neighbor(cell, dir) {
        Some(next) => is_wall(next),
        None => true,
    });

    (0..4).any(|i| blocked[i] && blocked[(i + 1) % 4])
}

pub fn is_winnable(level: &Level) -> WinnableState {
    let total_trapped_boxes = level
        .boxes
        .iter()
        .filter(|&&game_box| is_box_trapped(level, game_box))
        .count();

    let total_free_boxes = level.boxes.len() - total_trapped_boxes;
    let total_targets = level.targets.len();

    if total_free_boxes >= total_targets {
        WinnableState::WinMaybePossible
    } else {
        WinnableState::WinImpossible
    }
}

/// a box is trapped if the player can never move it, and it is not on a target
fn is_box_trapped(level: &Level, game_box: usize) -> bool {
    !level.is_target(game_box) && level.is_corner_lock(game_box)
}

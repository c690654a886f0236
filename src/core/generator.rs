//! Random layout generation.
//!
//! A level is a walled border, a number of hollow wall rectangles, and targets,
//! boxes and a player drawn without replacement from the remaining floor.
//! Nothing here checks solvability; see `solver::generate_solvable_level`.

use std::collections::BTreeSet;
use tracing::trace;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::heuristics::is_corner_lock;
use crate::core::rng::SeededRng;
use crate::core::{Difficulty, Level, SeedMaterial};

/// Build one candidate level. When the floor pool runs dry before every piece is
/// placed the partial level is returned as is; `Level::is_complete` reports it.
pub fn generate_level(seed: &SeedMaterial, difficulty: Difficulty, salt: &str) -> Level {
    let dims = difficulty.dimensions();
    let bounds = BoundsOriginRoot::new(dims.width, dims.height);
    let mut rng = SeededRng::from_key(&seed.layout_key(difficulty, salt));

    let mut walls = BTreeSet::new();
    for index in bounds.iter_indices() {
        if bounds.is_border(index) {
            walls.insert(index);
        }
    }
    for _ in 0..dims.wall_rects {
        carve_hollow_rect(&mut walls, bounds, &mut rng);
    }

    let mut floors: Vec<usize> = (1..bounds.height - 1)
        .flat_map(|y| (1..bounds.width - 1).map(move |x| bounds.index(x, y)))
        .filter(|index| !walls.contains(index))
        .collect();

    let mut targets = BTreeSet::new();
    while targets.len() < dims.boxes && !floors.is_empty() {
        targets.insert(draw(&mut floors, &mut rng));
    }

    let mut boxes = Vec::with_capacity(dims.boxes);
    while boxes.len() < dims.boxes && !floors.is_empty() {
        let cell = draw(&mut floors, &mut rng);
        if targets.contains(&cell) {
            continue;
        }
        // a box starting in a corner can never move
        if is_corner_lock(bounds, cell, |c| walls.contains(&c)) {
            continue;
        }
        boxes.push(cell);
    }

    let mut player = None;
    while player.is_none() && !floors.is_empty() {
        let cell = draw(&mut floors, &mut rng);
        if !targets.contains(&cell) && !boxes.contains(&cell) {
            player = Some(cell);
        }
    }

    let level = Level {
        width: dims.width,
        height: dims.height,
        walls,
        targets,
        boxes,
        player,
        difficulty,
    };
    if !level.is_complete() {
        trace!(%difficulty, salt, "floor pool exhausted before layout was complete");
    }
    level
}

/// Mark only the perimeter of a random 2..=4 sided rectangle inside the border
fn carve_hollow_rect(walls: &mut BTreeSet<usize>, bounds: BoundsOriginRoot, rng: &mut SeededRng) {
    let rect_width = 2 + rng.next_below(3);
    let rect_height = 2 + rng.next_below(3);
    let x0 = 1 + rng.next_below(bounds.width - rect_width - 1);
    let y0 = 1 + rng.next_below(bounds.height - rect_height - 1);
    let x1 = x0 + rect_width - 1;
    let y1 = y0 + rect_height - 1;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let on_edge = y == y0 || y == y1 || x == x0 || x == x1;
            if on_edge {
                walls.insert(bounds.index(x, y));
            }
        }
    }
}

fn draw(floors: &mut Vec<usize>, rng: &mut SeededRng) -> usize {
    let i = rng.next_below(floors.len());
    floors.remove(i)
}

use crate::core::bounds::BoundsOriginRoot;
use crate::core::heuristics::is_corner_lock;
use crate::core::{Difficulty, Direction, Level, Mark, MoveResolution, SeedMaterial, UserAction};

impl Level {
    pub fn empty(width: usize, height: usize, difficulty: Difficulty) -> Level {
        Level {
            width,
            height,
            walls: Default::default(),
            targets: Default::default(),
            boxes: Vec::new(),
            player: None,
            difficulty,
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        BoundsOriginRoot::new(self.width, self.height)
    }

    pub fn is_wall(&self, cell: usize) -> bool {
        self.walls.contains(&cell)
    }

    pub fn is_target(&self, cell: usize) -> bool {
        self.targets.contains(&cell)
    }

    pub fn has_box_at(&self, cell: usize) -> bool {
        self.boxes.contains(&cell)
    }

    pub fn is_corner_lock(&self, cell: usize) -> bool {
        is_corner_lock(self.bounds(), cell, |c| self.is_wall(c))
    }

    /// Every box sits on a target. A level without boxes is never won.
    pub fn is_won(&self) -> bool {
        !self.boxes.is_empty() && self.boxes.iter().all(|b| self.targets.contains(b))
    }

    pub fn count_boxes_on_targets(&self) -> usize {
        self.boxes.iter().filter(|b| self.targets.contains(b)).count()
    }

    /// Generation placed a player and one box per target
    pub fn is_complete(&self) -> bool {
        self.player.is_some() && !self.boxes.is_empty() && self.boxes.len() == self.targets.len()
    }

    /// Walls, targets, boxes and player never share a cell, and every cell is on the grid
    pub fn cells_are_disjoint(&self) -> bool {
        let area = self.bounds().area();
        let mut seen = vec![false; area];
        let cells = self
            .walls
            .iter()
            .chain(self.targets.iter())
            .chain(self.boxes.iter())
            .chain(self.player.iter());
        for &cell in cells {
            if cell >= area || seen[cell] {
                return false;
            }
            seen[cell] = true;
        }
        true
    }

    pub fn border_is_walled(&self) -> bool {
        let bounds = self.bounds();
        bounds
            .iter_indices()
            .filter(|&i| bounds.is_border(i))
            .all(|i| self.is_wall(i))
    }

    pub fn apply(&mut self, resolution: MoveResolution) {
        match resolution {
            MoveResolution::Step { to } => {
                self.player = Some(to);
            }
            MoveResolution::Push { from, to } => {
                if let Some(slot) = self.boxes.iter_mut().find(|b| **b == from) {
                    *slot = to;
                }
                self.player = Some(from);
            }
        }
    }
}

impl MoveResolution {
    pub fn player_destination(&self) -> usize {
        match *self {
            MoveResolution::Step { to } => to,
            MoveResolution::Push { from, .. } => from,
        }
    }

    pub fn is_push(&self) -> bool {
        matches!(self, MoveResolution::Push { .. })
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (dx, dy) with y growing downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl UserAction {
    pub fn all_moves() -> Vec<UserAction> {
        Direction::ALL.iter().map(|&direction| UserAction::Move { direction }).collect()
    }
}

impl From<Direction> for UserAction {
    fn from(direction: Direction) -> Self {
        UserAction::Move { direction }
    }
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl SeedMaterial {
    pub fn new(game_id: impl Into<String>, created_at: u64) -> SeedMaterial {
        SeedMaterial {
            game_id: game_id.into(),
            created_at,
        }
    }

    /// A fresh short id stamped with the current time, for callers without their own
    pub fn random() -> SeedMaterial {
        use rand::distr::{Alphanumeric, SampleString};
        let game_id = Alphanumeric
            .sample_string(&mut rand::rng(), 6)
            .to_lowercase();
        SeedMaterial {
            game_id,
            created_at: epoch_millis(),
        }
    }

    /// Key for the layout stream of one generation attempt
    pub fn layout_key(&self, difficulty: Difficulty, salt: &str) -> String {
        format!("{}:soko:{}:{}:{}", self.game_id, self.created_at, difficulty, salt)
    }
}

pub fn epoch_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

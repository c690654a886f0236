use crate::core::Direction;

/// A bounding box with one corner fixed at 0,0, addressed by row-major cell index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub width: usize,
    pub height: usize,
}

impl BoundsOriginRoot {
    pub fn new(width: usize, height: usize) -> BoundsOriginRoot {
        BoundsOriginRoot { width, height }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.area()
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// The cell one step away in `direction`, or None when that leaves the grid
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        if !self.contains_index(index) {
            return None;
        }
        let (x, y) = self.position(index);
        let (dx, dy) = direction.delta();
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if !self.contains(nx, ny) {
            return None;
        }
        Some(self.index(nx as usize, ny as usize))
    }

    pub fn is_border(&self, index: usize) -> bool {
        let (x, y) = self.position(index);
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    pub fn iter_indices(&self) -> std::ops::Range<usize> {
        0..self.area()
    }
}

use crate::core::bounds::BoundsOriginRoot;

/// Dense per-cell storage over a level's grid
#[derive(Clone, Debug)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area()];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    /// A grid holding `value` at every listed cell and `default` elsewhere.
    /// Cells outside the bounds are ignored.
    pub fn with_marked<'a, I>(bounds: BoundsOriginRoot, marked: I, value: T, default: T) -> Self
    where
        T: Clone,
        I: IntoIterator<Item = &'a usize>,
    {
        let mut grid = BoundedGrid::new(bounds, default);
        for &index in marked {
            if let Some(cell) = grid.get_mut(index) {
                *cell = value.clone();
            }
        }
        grid
    }

    pub fn contains(&self, index: usize) -> bool {
        self.bounds.contains_index(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.cells.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.cells.iter().enumerate()
    }
}

impl<T> std::ops::Index<usize> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl<T> std::ops::IndexMut<usize> for BoundedGrid<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

use crate::world_core::biome::Biome;

pub type HeightGrid = Grid<f64>;
pub type TierAssignment = Grid<Biome>;

/// Dense `width x height` grid addressed as `[x][y]`.
///
/// Cells are stored column by column, so the flat index of `(x, y)` is
/// `x * height + y`, the same order the generator walks them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    values: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    /// Like `filled`, but returns `None` instead of panicking or aborting when
    /// the cell count overflows or cannot be allocated.
    pub fn try_filled(width: usize, height: usize, value: T) -> Option<Self> {
        let total = width.checked_mul(height)?;
        let mut values = Vec::new();
        values.try_reserve_exact(total).ok()?;
        values.resize(total, value);
        Some(Self {
            width,
            height,
            values,
        })
    }
}

impl<T> Grid<T> {
    /// Wraps cells already laid out in `x * height + y` order.
    ///
    /// Returns `None` for a zero dimension or when `values` does not hold
    /// exactly `width * height` cells.
    pub fn from_values(width: usize, height: usize, values: Vec<T>) -> Option<Self> {
        let total = width.checked_mul(height)?;
        (total > 0 && values.len() == total).then_some(Self {
            width,
            height,
            values,
        })
    }

    pub(crate) fn from_column_major(width: usize, height: usize, values: Vec<T>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|idx| &self.values[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).map(move |idx| &mut self.values[idx])
    }

    /// Yields `(x, y, value)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let height = self.height;
        self.values
            .iter()
            .enumerate()
            .map(move |(idx, v)| (idx / height, idx % height, v))
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some(x * self.height + y)
    }
}

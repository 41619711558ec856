#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::world_core::grid::HeightGrid;

/// Rescales every cell by the grid maximum so the range becomes `[0, 1]`.
///
/// The maximum is reduced over the whole grid before any cell is divided.
/// An all-zero grid is returned untouched.
pub fn normalize(mut grid: HeightGrid) -> HeightGrid {
    let max = grid.values().iter().copied().fold(0.0f64, f64::max);
    if max == 0.0 {
        log::debug!("normalize skipped, grid maximum is 0");
        return grid;
    }

    maybe_par_iter_mut!(grid.values_mut()).for_each(|v| *v /= max);
    log::debug!("normalized {}x{} grid by max {max}", grid.width(), grid.height());
    grid
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::world_core::grid::Grid;

    #[test]
    fn maximum_cell_becomes_exactly_one() {
        let grid = Grid::from_values(2, 2, vec![0.2, 0.7, 0.35, 0.0]).unwrap();
        let normalized = normalize(grid);

        assert_eq!(normalized.get(0, 1), Some(&1.0));
        assert_eq!(normalized.get(1, 1), Some(&0.0));
        assert!(normalized
            .values()
            .iter()
            .all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn all_zero_grid_is_left_unchanged() {
        let grid = Grid::filled(3, 3, 0.0f64);
        let normalized = normalize(grid.clone());

        assert_eq!(normalized, grid);
        assert!(normalized.values().iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn shape_is_preserved() {
        let grid = Grid::filled(5, 2, 3.0f64);
        let normalized = normalize(grid);
        assert_eq!((normalized.width(), normalized.height()), (5, 2));
        assert!(normalized.values().iter().all(|v| *v == 1.0));
    }
}

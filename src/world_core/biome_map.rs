#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::world_core::biome::{TierSpec, TierTable};
use crate::world_core::error::ConfigurationError;
use crate::world_core::grid::{Grid, HeightGrid, TierAssignment};
use crate::world_core::layer::Layer;

/// Assigns a tier to every height cell. Cells are classified independently.
pub struct BiomeLayer {
    table: TierTable,
}

impl BiomeLayer {
    pub fn new(specs: &[TierSpec]) -> Result<Self, ConfigurationError> {
        Ok(Self {
            table: TierTable::new(specs)?,
        })
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }
}

impl Layer<&HeightGrid, TierAssignment> for BiomeLayer {
    fn name(&self) -> &'static str {
        "biome"
    }

    fn generate(&self, heights: &HeightGrid) -> TierAssignment {
        let values: Vec<_> = maybe_par_iter!(heights.values())
            .map(|h| self.table.classify(*h))
            .collect();
        Grid::from_column_major(heights.width(), heights.height(), values)
    }
}

pub fn classify_grid(
    heights: &HeightGrid,
    specs: &[TierSpec],
) -> Result<TierAssignment, ConfigurationError> {
    Ok(BiomeLayer::new(specs)?.generate(heights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_core::biome::{classify, Biome};
    use crate::world_core::config::default_tiers;

    #[test]
    fn every_cell_matches_single_value_classification() {
        let heights =
            Grid::from_values(3, 2, vec![0.1, 0.65, 0.7, 0.83, 0.9, 1.0]).unwrap();
        let tiers = classify_grid(&heights, &default_tiers()).unwrap();

        assert_eq!(tiers.width(), 3);
        assert_eq!(tiers.height(), 2);
        for (x, y, h) in heights.iter() {
            assert_eq!(
                tiers.get(x, y).copied(),
                Some(classify(*h, &default_tiers()).unwrap())
            );
        }
        assert_eq!(tiers.get(0, 0), Some(&Biome::Water));
        assert_eq!(tiers.get(2, 1), Some(&Biome::Snow));
    }

    #[test]
    fn empty_table_fails_before_classifying() {
        let heights = Grid::filled(2, 2, 0.5f64);
        assert_eq!(
            classify_grid(&heights, &[]).err(),
            Some(ConfigurationError::EmptyTierTable)
        );
    }
}

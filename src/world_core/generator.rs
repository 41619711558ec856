use std::collections::BTreeMap;

use crate::world_core::biome::{Biome, TierSpec};
use crate::world_core::biome_map::BiomeLayer;
use crate::world_core::config::{GenerationParams, Mode, WorldGenConfig};
use crate::world_core::error::{ConfigurationError, WorldGenError};
use crate::world_core::grid::{HeightGrid, TierAssignment};
use crate::world_core::heightmap::TerrainLayer;
use crate::world_core::layer::Layer;
use crate::world_core::normalize::normalize;
use crate::world_core::save;

/// Heights plus the tier assigned to each of them.
#[derive(Debug, Clone)]
pub struct World {
    pub heights: HeightGrid,
    pub tiers: TierAssignment,
    /// `None` when the heights came from a file.
    pub params: Option<GenerationParams>,
}

impl World {
    /// Tier at `(x, y)`, or `None` outside the grid.
    pub fn tile_info(&self, x: usize, y: usize) -> Option<Biome> {
        self.tiers.get(x, y).copied()
    }

    /// Recomputes the tier assignment against a new table.
    pub fn retier(&mut self, specs: &[TierSpec]) -> Result<(), ConfigurationError> {
        self.tiers = BiomeLayer::new(specs)?.generate(&self.heights);
        Ok(())
    }

    pub fn tier_counts(&self) -> BTreeMap<Biome, usize> {
        let mut counts = BTreeMap::new();
        for biome in self.tiers.values() {
            *counts.entry(*biome).or_insert(0) += 1;
        }
        counts
    }
}

pub struct WorldGenerator {
    terrain_layer: TerrainLayer,
    biome_layer: BiomeLayer,
}

impl WorldGenerator {
    /// Fails with `EmptyTierTable` before any generation happens.
    pub fn new(tiers: &[TierSpec]) -> Result<Self, ConfigurationError> {
        Ok(Self {
            terrain_layer: TerrainLayer::new(),
            biome_layer: BiomeLayer::new(tiers)?,
        })
    }

    /// Raw fractal heights, normalized when `params.normalize` is set.
    pub fn generate_heights(
        &self,
        params: &GenerationParams,
    ) -> Result<HeightGrid, ConfigurationError> {
        params.validate()?;
        let heights = self.terrain_layer.generate(params);
        log::debug!(
            "{} layer produced {}x{} cells with {} octaves",
            self.terrain_layer.name(),
            heights.width(),
            heights.height(),
            params.octaves
        );
        Ok(if params.normalize {
            normalize(heights)
        } else {
            heights
        })
    }

    pub fn generate_world(&self, params: &GenerationParams) -> Result<World, ConfigurationError> {
        let heights = self.generate_heights(params)?;
        let tiers = self.classify(&heights);
        Ok(World {
            heights,
            tiers,
            params: Some(*params),
        })
    }

    pub fn classify(&self, heights: &HeightGrid) -> TierAssignment {
        let tiers = self.biome_layer.generate(heights);
        log::debug!(
            "{} layer classified {} cells",
            self.biome_layer.name(),
            tiers.values().len()
        );
        tiers
    }
}

/// Runs one of the three modes described by `config`.
pub fn run(config: &WorldGenConfig) -> Result<World, WorldGenError> {
    let generator = WorldGenerator::new(&config.tiers)?;
    log::info!("running world generation in {} mode", config.mode);

    match config.mode {
        Mode::Generate => {
            let params = config.generation.resolve()?;
            log::info!("seed {}", params.seed);
            Ok(generator.generate_world(&params)?)
        }
        Mode::Write => {
            let params = config.generation.resolve()?;
            log::info!("seed {}", params.seed);
            let world = generator.generate_world(&params)?;
            save::write(&world.heights, &config.saved_path)?;
            Ok(world)
        }
        Mode::Read => {
            let heights = save::read(&config.saved_path)?;
            let tiers = generator.classify(&heights);
            Ok(World {
                heights,
                tiers,
                params: None,
            })
        }
    }
}

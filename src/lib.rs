pub mod cli;
pub mod world_core;

pub use world_core::biome::{classify, Biome, TierSpec, TierTable};
pub use world_core::biome_map::classify_grid;
pub use world_core::config::{GenerationParams, Mode, WorldGenConfig};
pub use world_core::error::{ConfigurationError, HeightmapError, ParseError, WorldGenError};
pub use world_core::generator::{run, World, WorldGenerator};
pub use world_core::grid::{Grid, HeightGrid, TierAssignment};
pub use world_core::normalize::normalize;

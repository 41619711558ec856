#[macro_use]
mod par;

pub mod biome;
pub mod biome_map;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod heightmap;
pub mod layer;
pub mod normalize;
pub mod save;

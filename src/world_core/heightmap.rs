use noise::{NoiseFn, Perlin};
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use crate::world_core::config::GenerationParams;
use crate::world_core::grid::{Grid, HeightGrid};
use crate::world_core::layer::Layer;

/// Fractal Perlin sampler.
///
/// The permutation table is fixed; the seed only offsets sample
/// coordinates, so one `Heightmap` serves every seed.
pub struct Heightmap {
    perlin: Perlin,
}

impl Default for Heightmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heightmap {
    pub fn new() -> Self {
        Self {
            perlin: Perlin::new(Perlin::DEFAULT_SEED),
        }
    }

    /// 2D Perlin noise remapped from `[-1, 1]` to `[0, 1]`.
    pub fn perlin(&self, x: f64, y: f64) -> f64 {
        ((self.perlin.get([x, y]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Sum of `octaves` layers; each layer doubles the spatial frequency
    /// and halves the weight of the previous one.
    pub fn sample_height(&self, params: &GenerationParams, x: u32, y: u32) -> f64 {
        let x = x as f64;
        let y = y as f64;

        let mut noise = 0.0;
        let mut gain = 1.0;
        for _ in 0..params.octaves {
            noise += self.perlin(
                params.seed + x * gain / params.frequency,
                params.seed + y * gain / params.frequency,
            ) * params.amplitude
                / gain;
            gain *= 2.0;
        }
        noise
    }
}

/// Produces the raw (unnormalized) height field for already validated params.
#[derive(Default)]
pub struct TerrainLayer {
    heightmap: Heightmap,
}

impl TerrainLayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer<&GenerationParams, HeightGrid> for TerrainLayer {
    fn name(&self) -> &'static str {
        "terrain"
    }

    fn generate(&self, params: &GenerationParams) -> HeightGrid {
        let width = params.width as usize;
        let height = params.height as usize;
        let total = width * height;

        let values: Vec<f64> = maybe_par_iter!(0..total)
            .map(|idx| {
                let x = (idx / height) as u32;
                let y = (idx % height) as u32;
                self.heightmap.sample_height(params, x, y)
            })
            .collect();

        Grid::from_column_major(width, height, values)
    }
}

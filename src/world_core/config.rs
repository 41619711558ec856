use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::world_core::biome::{Biome, TierSpec};
use crate::world_core::error::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Generate and classify, nothing is persisted.
    #[default]
    Generate,
    /// Generate, classify and write the heightmap to `saved_path`.
    Write,
    /// Load the heightmap from `saved_path` and classify it.
    Read,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generate" => Ok(Mode::Generate),
            "write" => Ok(Mode::Write),
            "read" => Ok(Mode::Read),
            other => Err(format!(
                "unknown mode {other:?}, expected generate, write or read"
            )),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Generate => "generate",
            Mode::Write => "write",
            Mode::Read => "read",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub mode: Mode,
    pub generation: GenerationConfig,
    pub tiers: Vec<TierSpec>,
    pub saved_path: PathBuf,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            generation: GenerationConfig::default(),
            tiers: default_tiers(),
            saved_path: PathBuf::from("world.txt"),
        }
    }
}

pub fn default_tiers() -> Vec<TierSpec> {
    vec![
        TierSpec::new(0.65, Biome::Water),
        TierSpec::new(0.7, Biome::Beach),
        TierSpec::new(0.82, Biome::Ground),
        TierSpec::new(0.85, Biome::Mountain),
        TierSpec::new(0.95, Biome::Snow),
    ]
}

impl WorldGenConfig {
    pub const DEFAULT_PATH: &'static str = "config.json";

    /// Loads `path`, falling back to defaults when the file is missing or broken.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no {} found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

/// Generation settings as written in the config file.
///
/// `seed` is optional here: when absent a fresh one is drawn for every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: u32,
    pub height: u32,
    pub octaves: u32,
    pub frequency: f64,
    pub amplitude: f64,
    pub seed: Option<f64>,
    pub normalize: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            octaves: 5,
            frequency: 100.0,
            amplitude: 1.0,
            seed: None,
            normalize: true,
        }
    }
}

impl GenerationConfig {
    /// Pins the seed and validates the result.
    pub fn resolve(&self) -> Result<GenerationParams, ConfigurationError> {
        let seed = self.seed.unwrap_or_else(rand::random::<f64>);
        let params = GenerationParams {
            width: self.width,
            height: self.height,
            octaves: self.octaves,
            frequency: self.frequency,
            amplitude: self.amplitude,
            seed,
            normalize: self.normalize,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Largest absolute Perlin sample coordinate generation may reach.
pub const MAX_SAMPLE_COORDINATE: f64 = i32::MAX as f64;

/// Immutable input to a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub width: u32,
    pub height: u32,
    pub octaves: u32,
    pub frequency: f64,
    pub amplitude: f64,
    pub seed: f64,
    pub normalize: bool,
}

impl GenerationParams {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigurationError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        // The last octave's gain must stay finite, otherwise `0 * gain` is NaN.
        if self.octaves == 0 || !self.last_gain().is_finite() {
            return Err(ConfigurationError::InvalidOctaves(self.octaves));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigurationError::InvalidFrequency(self.frequency));
        }
        // Negative amplitudes would break the non-negative height invariant.
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(ConfigurationError::InvalidAmplitude(self.amplitude));
        }
        if !self.seed.is_finite() || self.seed.abs() > MAX_SAMPLE_COORDINATE {
            return Err(ConfigurationError::InvalidSeed(self.seed));
        }
        let max_coordinate = self.max_sample_coordinate();
        if !max_coordinate.is_finite() || max_coordinate > MAX_SAMPLE_COORDINATE {
            return Err(ConfigurationError::SampleRangeTooLarge { max_coordinate });
        }
        Ok(())
    }

    /// `2^(octaves - 1)`, the gain applied in the last octave.
    fn last_gain(&self) -> f64 {
        let exponent = self.octaves.saturating_sub(1).min(i32::MAX as u32) as i32;
        2f64.powi(exponent)
    }

    /// Largest `|seed + cell * gain / frequency|` reached by any octave.
    pub fn max_sample_coordinate(&self) -> f64 {
        let last_cell = self.width.max(self.height).saturating_sub(1) as f64;
        self.seed.abs() + last_cell * self.last_gain() / self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GenerationParams {
        GenerationParams {
            width: 4,
            height: 4,
            octaves: 3,
            frequency: 10.0,
            amplitude: 1.0,
            seed: 0.25,
            normalize: true,
        }
    }

    #[test]
    fn defaults_match_reference_world() {
        let config = WorldGenConfig::default();
        assert_eq!(config.mode, Mode::Generate);
        assert_eq!(config.generation.width, 100);
        assert_eq!(config.generation.octaves, 5);
        assert_eq!(config.generation.frequency, 100.0);
        assert!(config.generation.normalize);
        assert!(config.generation.seed.is_none());
        assert_eq!(config.tiers.len(), 5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "mode": "write", "generation": { "width": 8, "seed": 0.5 } }"#;
        let config: WorldGenConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, Mode::Write);
        assert_eq!(config.generation.width, 8);
        assert_eq!(config.generation.height, 100);
        assert_eq!(config.generation.seed, Some(0.5));
        assert_eq!(config.saved_path, PathBuf::from("world.txt"));
    }

    #[test]
    fn tiers_parse_from_json() {
        let json = r#"{ "tiers": [ { "max_height": 0.3, "id": "snow" }, { "max_height": 0.1, "id": "water" } ] }"#;
        let config: WorldGenConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tiers[0], TierSpec::new(0.3, Biome::Snow));
        assert_eq!(config.tiers[1], TierSpec::new(0.1, Biome::Water));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WorldGenConfig::load(&dir.path().join("absent.json"));
        assert_eq!(config.generation.width, 100);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("READ".parse::<Mode>(), Ok(Mode::Read));
        assert_eq!(" write ".parse::<Mode>(), Ok(Mode::Write));
        assert!("stream".parse::<Mode>().is_err());
    }

    #[test]
    fn resolve_keeps_configured_seed() {
        let config = GenerationConfig {
            seed: Some(0.75),
            ..Default::default()
        };
        assert_eq!(config.resolve().unwrap().seed, 0.75);
    }

    #[test]
    fn resolve_draws_unit_seed_when_absent() {
        let seed = GenerationConfig::default().resolve().unwrap().seed;
        assert!((0.0..1.0).contains(&seed));
    }

    #[test]
    fn validate_rejects_bad_params() {
        assert!(params().validate().is_ok());
        assert_eq!(
            GenerationParams { octaves: 0, ..params() }.validate(),
            Err(ConfigurationError::InvalidOctaves(0))
        );
        assert_eq!(
            GenerationParams { frequency: 0.0, ..params() }.validate(),
            Err(ConfigurationError::InvalidFrequency(0.0))
        );
        assert!(GenerationParams { frequency: f64::NAN, ..params() }
            .validate()
            .is_err());
        assert_eq!(
            GenerationParams { amplitude: -1.0, ..params() }.validate(),
            Err(ConfigurationError::InvalidAmplitude(-1.0))
        );
        assert_eq!(
            GenerationParams { width: 0, ..params() }.validate(),
            Err(ConfigurationError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(GenerationParams { seed: f64::INFINITY, ..params() }
            .validate()
            .is_err());
    }

    #[test]
    fn validate_rejects_params_that_leave_the_sampling_range() {
        assert!(matches!(
            GenerationParams { octaves: 2, frequency: 1e-320, ..params() }.validate(),
            Err(ConfigurationError::SampleRangeTooLarge { .. })
        ));
        assert!(matches!(
            GenerationParams { width: 100, octaves: 5, frequency: 1e-17, ..params() }.validate(),
            Err(ConfigurationError::SampleRangeTooLarge { .. })
        ));
        assert_eq!(
            GenerationParams { seed: 1e19, ..params() }.validate(),
            Err(ConfigurationError::InvalidSeed(1e19))
        );
        assert_eq!(
            GenerationParams { seed: -1e19, ..params() }.validate(),
            Err(ConfigurationError::InvalidSeed(-1e19))
        );
        assert_eq!(
            GenerationParams { octaves: 1025, ..params() }.validate(),
            Err(ConfigurationError::InvalidOctaves(1025))
        );
        assert_eq!(
            GenerationParams { octaves: u32::MAX, ..params() }.validate(),
            Err(ConfigurationError::InvalidOctaves(u32::MAX))
        );
    }

    #[test]
    fn validate_accepts_params_at_the_sampling_bound() {
        // 3 * 2^1 / 3e-9 = 2e9, just under i32::MAX
        let near_bound = GenerationParams { octaves: 2, frequency: 3e-9, ..params() };
        assert!(near_bound.validate().is_ok());
        assert!(near_bound.max_sample_coordinate() <= MAX_SAMPLE_COORDINATE);

        // a single-cell grid only ever samples at the seed
        let single = GenerationParams { width: 1, height: 1, octaves: 1024, ..params() };
        assert!(single.validate().is_ok());
    }
}

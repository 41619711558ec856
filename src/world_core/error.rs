//! Error taxonomy for generation, classification and heightmap persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid generation parameters or tier table, detected before any work starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("octaves must be at least 1, got {0}")]
    InvalidOctaves(u32),
    #[error("frequency must be finite and greater than 0, got {0}")]
    InvalidFrequency(f64),
    #[error("amplitude must be finite and non-negative, got {0}")]
    InvalidAmplitude(f64),
    #[error("seed must be finite and within the sampling range, got {0}")]
    InvalidSeed(f64),
    #[error("sample coordinates reach {max_coordinate}, beyond the sampling range")]
    SampleRangeTooLarge { max_coordinate: f64 },
    #[error("tier table is empty")]
    EmptyTierTable,
    #[error("tier {index} has an invalid max height {value}")]
    InvalidTierHeight { index: usize, value: f64 },
}

/// Malformed heightmap text. Rows and columns are 0-based positions in the file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("bad dimension line {line:?}, expected <width>x<height>")]
    BadDimensions { line: String },
    #[error("bad value {token:?} at row {row}, column {column}")]
    BadValue {
        row: usize,
        column: usize,
        token: String,
    },
}

#[derive(Error, Debug)]
pub enum HeightmapError {
    #[error("heightmap file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("i/o error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum WorldGenError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Heightmap(#[from] HeightmapError),
}

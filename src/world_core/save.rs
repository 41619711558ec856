//! Plain-text heightmap persistence.
//!
//! One line per `y` row holding `width` values, each followed by a single
//! space, then a final `<width>x<height>` line:
//!
//! ```text
//! 0.5 1
//! 2x1
//! ```
//!
//! Values are written with Rust's shortest round-trip float formatting, so
//! reading a written file reproduces every cell exactly.

use std::io::ErrorKind;
use std::path::Path;

use crate::world_core::error::{HeightmapError, ParseError};
use crate::world_core::grid::{Grid, HeightGrid};

/// Upper bound on `width * height` accepted from a dimension line.
pub const MAX_DECLARED_CELLS: usize = 1 << 28;

pub fn encode(grid: &HeightGrid) -> String {
    let mut lines: Vec<String> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .filter_map(|x| grid.get(x, y))
                .map(|v| format!("{v} "))
                .collect()
        })
        .collect();
    lines.push(format!("{}x{}", grid.width(), grid.height()));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Parses heightmap text. The dimension line is authoritative: surplus rows
/// and columns are ignored, missing ones stay at `0.0`.
pub fn decode(text: &str) -> Result<HeightGrid, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(dim_row) = lines.iter().rposition(|line| !line.trim().is_empty()) else {
        return Err(ParseError::BadDimensions {
            line: String::new(),
        });
    };
    let (width, height) = parse_dimensions(lines[dim_row])?;
    let data = &lines[..dim_row];

    if data.len() > height {
        log::warn!(
            "heightmap has {} data rows but declares {height}, ignoring the rest",
            data.len()
        );
    } else if data.len() < height {
        log::warn!(
            "heightmap has {} data rows but declares {height}, missing cells stay 0",
            data.len()
        );
    }

    let mut grid = Grid::try_filled(width, height, 0.0).ok_or_else(|| {
        ParseError::BadDimensions {
            line: lines[dim_row].to_string(),
        }
    })?;
    for (row, line) in data.iter().take(height).enumerate() {
        let mut columns = 0;
        for (column, token) in line.split_whitespace().enumerate() {
            let value = parse_value(token, row, column)?;
            if let Some(cell) = grid.get_mut(column, row) {
                *cell = value;
            }
            columns = column + 1;
        }
        if columns > width {
            log::warn!("row {row} has {columns} values but width is {width}, ignoring the rest");
        }
    }
    Ok(grid)
}

pub fn write(grid: &HeightGrid, path: &Path) -> Result<(), HeightmapError> {
    std::fs::write(path, encode(grid)).map_err(|source| HeightmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {}x{} heightmap to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}

pub fn read(path: &Path) -> Result<HeightGrid, HeightmapError> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => HeightmapError::NotFound {
            path: path.to_path_buf(),
        },
        _ => HeightmapError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let grid = decode(&contents)?;
    log::info!(
        "read {}x{} heightmap from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParseError> {
    let bad = || ParseError::BadDimensions {
        line: line.to_string(),
    };
    let (w, h) = line.trim().split_once('x').ok_or_else(bad)?;
    let width: usize = w.trim().parse().map_err(|_| bad())?;
    let height: usize = h.trim().parse().map_err(|_| bad())?;
    match width.checked_mul(height) {
        Some(cells) if cells > 0 && cells <= MAX_DECLARED_CELLS => Ok((width, height)),
        _ => Err(bad()),
    }
}

fn parse_value(token: &str, row: usize, column: usize) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::BadValue {
            row,
            column,
            token: token.to_string(),
        }),
    }
}

//! MovingAI benchmark map parsing.
//!
//! The format is a four-line header followed by the occupancy rows:
//!
//! ```text
//! type octile
//! height 3
//! width 5
//! map
//! .....
//! ####.
//! .....
//! ```
//!
//! `.` and `G` are walkable, anything else is blocked. All `height` rows and
//! all `width` columns are consumed; short files are rejected rather than
//! silently padded with blocked cells.

use std::fs;
use std::path::Path;

use gridpath_core::Grid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed map header: {0}")]
    Header(String),
    #[error("map row {row} has {found} columns, expected {expected}")]
    ShortRow { row: usize, expected: usize, found: usize },
    #[error("map data ends after {found} of {expected} rows")]
    MissingRows { expected: usize, found: usize },
}

pub fn load_map(path: &Path) -> Result<Grid, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let mut lines = text.lines();

    let mut field = |name: &str| -> Result<String, MapError> {
        let line = lines
            .next()
            .ok_or_else(|| MapError::Header(format!("missing `{name}` line")))?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some(key) if key == name => Ok(parts.collect::<Vec<_>>().join(" ")),
            _ => Err(MapError::Header(format!("expected `{name}`, got `{line}`"))),
        }
    };

    // The type value (`octile`) is recorded but not interpreted; movement
    // semantics are the engine's own.
    let _map_type = field("type")?;
    let height: i32 = field("height")?
        .parse()
        .map_err(|_| MapError::Header("height is not an integer".into()))?;
    let width: i32 = field("width")?
        .parse()
        .map_err(|_| MapError::Header("width is not an integer".into()))?;
    if height <= 0 || width <= 0 {
        return Err(MapError::Header(format!("bad dimensions {width}x{height}")));
    }
    let map_marker = field("map")?;
    if !map_marker.is_empty() {
        return Err(MapError::Header(format!("unexpected tokens after `map`: {map_marker}")));
    }

    let mut cells: Vec<u8> = Vec::with_capacity((width as usize) * (height as usize));
    let mut rows = 0usize;
    for line in lines {
        let row = line.trim_end_matches('\r');
        if row.is_empty() {
            continue;
        }
        if rows == height as usize {
            break;
        }
        if row.len() < width as usize {
            return Err(MapError::ShortRow { row: rows, expected: width as usize, found: row.len() });
        }
        cells.extend(
            row.bytes()
                .take(width as usize)
                .map(|b| u8::from(b == b'.' || b == b'G')),
        );
        rows += 1;
    }
    if rows < height as usize {
        return Err(MapError::MissingRows { expected: height as usize, found: rows });
    }

    // Dimensions and length were validated above.
    Ok(Grid::new(width, height, cells).expect("validated dimensions"))
}

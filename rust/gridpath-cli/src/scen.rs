//! Scenario files and the replay runner.
//!
//! A `.scen` file pairs a map with a batch of queries and their known
//! optimal costs:
//!
//! ```text
//! version 1.0
//! 0 arena.map 49 49 1 11 1 12 1.0
//! ```
//!
//! Columns: bucket, map path (relative to the scenario file), map width,
//! map height, start x/y, goal x/y, optimal path cost.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use gridpath_core::{index_by_width, Grid, SearchOptions, Searcher};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::map::{load_map, MapError};

#[derive(Error, Debug)]
pub enum ScenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario header: {0}")]
    Header(String),
    #[error("scenario line {line}: {message}")]
    Line { line: usize, message: String },
    #[error(transparent)]
    Map(#[from] MapError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioEntry {
    pub bucket: u32,
    pub map: PathBuf,
    pub width: i32,
    pub height: i32,
    pub start: (i32, i32),
    pub goal: (i32, i32),
    pub optimal: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ScenarioReport {
    pub total: usize,
    pub failures: usize,
}

pub fn parse_scenario(text: &str) -> Result<Vec<ScenarioEntry>, ScenError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| ScenError::Header("empty scenario file".into()))?;
    if !header.trim_start().starts_with("version") {
        return Err(ScenError::Header(format!("expected `version`, got `{header}`")));
    }

    let mut entries = Vec::new();
    for (idx, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 9 {
            return Err(ScenError::Line {
                line: idx + 1,
                message: format!("expected 9 columns, found {}", fields.len()),
            });
        }
        let parse_i32 = |s: &str, what: &str| -> Result<i32, ScenError> {
            s.parse().map_err(|_| ScenError::Line {
                line: idx + 1,
                message: format!("{what} `{s}` is not an integer"),
            })
        };
        entries.push(ScenarioEntry {
            bucket: fields[0].parse().map_err(|_| ScenError::Line {
                line: idx + 1,
                message: format!("bucket `{}` is not an integer", fields[0]),
            })?,
            map: PathBuf::from(fields[1]),
            width: parse_i32(fields[2], "width")?,
            height: parse_i32(fields[3], "height")?,
            start: (parse_i32(fields[4], "start x")?, parse_i32(fields[5], "start y")?),
            goal: (parse_i32(fields[6], "goal x")?, parse_i32(fields[7], "goal y")?),
            optimal: fields[8].parse().map_err(|_| ScenError::Line {
                line: idx + 1,
                message: format!("optimal `{}` is not a number", fields[8]),
            })?,
        });
    }
    Ok(entries)
}

/// Replay every query of a scenario file and validate the returned costs.
///
/// A query fails the scenario when it finds no path, or when its cost
/// exceeds the recorded optimal by more than `tolerance`. Undercutting the
/// recorded value is allowed: the engine permits corner-cutting diagonals,
/// which some benchmark optima forbid.
pub fn run_scenario_file(path: &Path, tolerance: f64) -> Result<ScenarioReport, ScenError> {
    let text = fs::read_to_string(path)?;
    let entries = parse_scenario(&text)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut maps: HashMap<PathBuf, Grid> = HashMap::new();
    let mut searcher = Searcher::new();
    let mut report = ScenarioReport::default();
    let options = SearchOptions::default();

    for entry in &entries {
        let map_path = base.join(&entry.map);
        if !maps.contains_key(&map_path) {
            let grid = load_map(&map_path)?;
            if grid.width() != entry.width || grid.height() != entry.height {
                warn!(
                    map = %map_path.display(),
                    scen_dims = ?(entry.width, entry.height),
                    map_dims = ?(grid.width(), grid.height()),
                    "scenario dimensions disagree with map header; using the map's"
                );
            }
            maps.insert(map_path.clone(), grid);
        }
        let grid = &maps[&map_path];

        let start = index_by_width(grid.width(), entry.start.0, entry.start.1);
        let goal = index_by_width(grid.width(), entry.goal.0, entry.goal.1);
        let res = searcher.find_path(grid, start, goal, &options);

        report.total += 1;
        match &res.path {
            None => {
                report.failures += 1;
                error!(
                    map = %entry.map.display(),
                    start = ?entry.start,
                    goal = ?entry.goal,
                    reason = res.reason.as_deref().unwrap_or(""),
                    "no path where the scenario records one"
                );
            }
            Some(_) if res.cost > entry.optimal + tolerance => {
                report.failures += 1;
                error!(
                    map = %entry.map.display(),
                    start = ?entry.start,
                    goal = ?entry.goal,
                    cost = res.cost,
                    optimal = entry.optimal,
                    "path costs more than the recorded optimal"
                );
            }
            Some(_) => {}
        }
    }

    info!(total = report.total, failures = report.failures, "scenario replay finished");
    Ok(report)
}

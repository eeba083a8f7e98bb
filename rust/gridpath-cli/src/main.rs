use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use gridpath_core::{find_path, index_by_width, SearchOptions};

mod map;
mod scen;

#[derive(Parser, Debug)]
#[command(name = "gridpath-cli", version, about = "Jump-point-search queries over MovingAI benchmark maps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single query against a map file
    Query {
        /// Path to the .map file
        #[arg(long, value_name = "PATH")]
        map: PathBuf,
        #[arg(long)]
        start_x: i32,
        #[arg(long)]
        start_y: i32,
        #[arg(long)]
        goal_x: i32,
        #[arg(long)]
        goal_y: i32,
        /// Emit the raw result as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a .scen file and validate every cost against the recorded optimal
    Scenario {
        /// Path to the .scen file
        #[arg(value_name = "SCEN")]
        scen: PathBuf,
        /// Allowed overshoot of the recorded optimal cost
        #[arg(long, default_value_t = 1e-4)]
        tolerance: f64,
    },
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .expect("failed to init EnvFilter");
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query { map, start_x, start_y, goal_x, goal_y, json } => {
            let grid = map::load_map(&map)
                .with_context(|| format!("failed to load map {}", map.display()))?;
            let start = index_by_width(grid.width(), start_x, start_y);
            let goal = index_by_width(grid.width(), goal_x, goal_y);
            let result = find_path(&grid, start, goal, &SearchOptions::default());

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            match &result.path {
                Some(path) => {
                    info!(expanded = result.expanded, "query finished");
                    println!("cost: {:.4}", result.cost);
                    println!("cells (goal first, start excluded): {}", path.len());
                    let rendered: Vec<String> = path
                        .iter()
                        .map(|&i| {
                            let (x, y) = gridpath_core::coord_by_width(grid.width(), i);
                            format!("({x},{y})")
                        })
                        .collect();
                    println!("{}", rendered.join(" "));
                }
                None => {
                    println!("no path ({})", result.reason.as_deref().unwrap_or("unknown"));
                }
            }
        }

        Commands::Scenario { scen, tolerance } => {
            let report = scen::run_scenario_file(&scen, tolerance)
                .with_context(|| format!("failed to replay {}", scen.display()))?;
            println!("{} queries, {} failures", report.total, report.failures);
            if report.failures > 0 {
                bail!("{} of {} scenario queries failed validation", report.failures, report.total);
            }
        }
    }

    Ok(())
}

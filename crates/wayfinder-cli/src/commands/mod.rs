// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. The main.rs dispatches to
// these handlers, keeping the entry point focused on parsing and coordination.

pub mod demo;
pub mod route;

use std::io;

use anyhow::{Context, Result};

use wayfinder_cli::grid::{Connectivity, Tile, TileGrid};
use wayfinder_cli::output::{OutputFormat, RouteReport};
use wayfinder_cli::terminal::ColorPalette;
use wayfinder_lib::{path_cost, Error as SearchError, SearchEngine};

/// Options shared by every search command.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub weight: f64,
    pub format: OutputFormat,
    pub connectivity: Connectivity,
    pub palette: ColorPalette,
}

/// Search `grid` from `from` to `to` and print the result to stdout.
pub fn run_search(grid: &TileGrid, from: Tile, to: Tile, options: &SearchOptions) -> Result<()> {
    let mut engine = SearchEngine::new(options.weight).context("invalid --weight")?;

    tracing::info!(%from, %to, weight = options.weight, "searching");
    let path = engine
        .find_path(grid, &from, &to)
        .ok_or_else(|| SearchError::NoPath {
            start: from.to_string(),
            goal: to.to_string(),
        })?;

    let report = RouteReport {
        weight: options.weight,
        from,
        to,
        steps: path.len().saturating_sub(1),
        cost: path_cost(grid, &path),
        path,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report
        .write(&mut handle, options.format, grid, &options.palette)
        .context("failed to write route output")?;
    Ok(())
}

//! Route command handler for computing paths across a map file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use wayfinder_cli::grid::{Tile, TileGrid};

use super::{run_search, SearchOptions};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// ASCII map file.
    pub map: PathBuf,
    /// Start tile; defaults to the map's `S` marker.
    pub from: Option<Tile>,
    /// Goal tile; defaults to the map's `G` marker.
    pub to: Option<Tile>,
}

/// Handle the route subcommand.
pub fn handle_route_command(args: &RouteCommandArgs, options: &SearchOptions) -> Result<()> {
    let grid = TileGrid::from_path(&args.map)?.with_connectivity(options.connectivity);

    let from = args
        .from
        .or(grid.start())
        .context("no start tile: pass --from or mark one with 'S' in the map")?;
    let to = args
        .to
        .or(grid.goal())
        .context("no goal tile: pass --to or mark one with 'G' in the map")?;

    run_search(&grid, from, to, options)
}

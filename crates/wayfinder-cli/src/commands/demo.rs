//! Demo command handler: search the built-in sample map.

use anyhow::{Context, Result};

use wayfinder_cli::grid::TileGrid;

use super::{run_search, SearchOptions};

/// Handle the demo subcommand.
pub fn handle_demo_command(options: &SearchOptions) -> Result<()> {
    let grid = TileGrid::sample()?.with_connectivity(options.connectivity);
    let from = grid.start().context("sample map has no start marker")?;
    let to = grid.goal().context("sample map has no goal marker")?;
    run_search(&grid, from, to, options)
}

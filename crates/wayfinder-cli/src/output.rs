//! Output formatting for search results.
//!
//! This module provides formatters for rendering a [`RouteReport`] as a
//! drawn map with a short summary, or as JSON for scripts.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::grid::{Tile, TileGrid};
use crate::render::render_grid;
use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rendered map followed by a summary.
    #[default]
    Text,
    /// Machine-readable JSON document.
    Json,
}

/// Outcome of one search on a tile grid.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub weight: f64,
    pub from: Tile,
    pub to: Tile,
    /// Number of moves, one less than the number of tiles on the path.
    pub steps: usize,
    pub cost: f64,
    pub path: Vec<Tile>,
}

impl RouteReport {
    /// Write the report in `format` to `writer`.
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        format: OutputFormat,
        grid: &TileGrid,
        palette: &ColorPalette,
    ) -> io::Result<()> {
        match format {
            OutputFormat::Text => self.write_text(writer, grid, palette),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    fn write_text<W: Write>(
        &self,
        writer: &mut W,
        grid: &TileGrid,
        palette: &ColorPalette,
    ) -> io::Result<()> {
        write!(writer, "{}", render_grid(grid, Some(&self.path), palette))?;
        writeln!(writer)?;
        writeln!(writer, "from: {}", self.from)?;
        writeln!(writer, "to: {}", self.to)?;
        writeln!(writer, "weight: {}", self.weight)?;
        writeln!(writer, "steps: {}", self.steps)?;
        writeln!(writer, "cost: {:.3}", self.cost)?;
        Ok(())
    }

    fn write_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)
    }
}

//! ASCII rendering of tile grids and search results.

use std::collections::HashSet;

use crate::grid::{Tile, TileGrid};
use crate::terminal::ColorPalette;

/// Draw `grid` row by row, overlaying `path` when one is given.
///
/// Glyphs: `#` wall, `.` floor, `*` path, `S` first path tile (or the map's
/// start marker), `G` last path tile (or the map's goal marker). Every row
/// ends with a newline.
pub fn render_grid(grid: &TileGrid, path: Option<&[Tile]>, palette: &ColorPalette) -> String {
    let path = path.unwrap_or(&[]);
    let start = path.first().copied().or(grid.start());
    let goal = path.last().copied().or(grid.goal());
    let on_path: HashSet<Tile> = path.iter().copied().collect();

    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = Tile::new(x, y);
            let (color, glyph) = if Some(tile) == start {
                (palette.start, 'S')
            } else if Some(tile) == goal {
                (palette.goal, 'G')
            } else if on_path.contains(&tile) {
                (palette.path, '*')
            } else if grid.is_wall(tile) {
                (palette.wall, '#')
            } else {
                ("", '.')
            };

            if color.is_empty() {
                out.push(glyph);
            } else {
                out.push_str(color);
                out.push(glyph);
                out.push_str(palette.reset);
            }
        }
        out.push('\n');
    }
    out
}

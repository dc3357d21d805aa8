//! Tile grid adapter for the Wayfinder search engine.
//!
//! A [`TileGrid`] stores its dimensions and wall set and implements
//! [`Graph`] over [`Tile`] coordinates. Maps can be built programmatically
//! with [`TileGrid::set_wall`] or parsed from ASCII text:
//!
//! | char      | meaning              |
//! |-----------|----------------------|
//! | `#`       | wall                 |
//! | `.` / ` ` | floor                |
//! | `S`       | floor, default start |
//! | `G`       | floor, default goal  |

use std::collections::HashSet;
use std::f64::consts::SQRT_2;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use thiserror::Error;

use wayfinder_lib::Graph;

/// Built-in map used by the `demo` command.
const SAMPLE_MAP: &str = "\
S...#.......
.##.#.####..
.#..#....#..
.#.###.#.#..
.#.....#.#..
.#####.#.###
.......#...G
############
";

/// Raised when a tile coordinate string is not of the form `X,Y`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid tile coordinate '{input}': expected X,Y")]
pub struct InvalidTile {
    pub input: String,
}

/// Grid coordinate; `x` grows to the right and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Tile {
    type Err = InvalidTile;

    /// Parse `x,y`, optionally wrapped in parentheses.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || InvalidTile {
            input: value.to_string(),
        };
        let trimmed = value
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (x, y) = trimmed.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// Movement model used when enumerating neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// North, east, south, west.
    #[default]
    Four,
    /// Four-way plus diagonals. A diagonal step is only allowed when both
    /// orthogonal tiles it passes between are open.
    Eight,
}

/// Rectangular grid of floor and wall tiles.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: i32,
    height: i32,
    walls: HashSet<Tile>,
    connectivity: Connectivity,
    start: Option<Tile>,
    goal: Option<Tile>,
}

impl TileGrid {
    /// Create an open grid with no walls.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            walls: HashSet::new(),
            connectivity: Connectivity::default(),
            start: None,
            goal: None,
        }
    }

    /// The built-in demo map.
    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE_MAP).context("built-in sample map is invalid")
    }

    /// Parse an ASCII map.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let rows = match rows.iter().rposition(|row| !row.is_empty()) {
            Some(last) => &rows[..=last],
            None => bail!("map is empty"),
        };

        let width = rows[0].chars().count();
        let mut grid = Self::new(to_coordinate(width)?, to_coordinate(rows.len())?);

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                bail!(
                    "map row {} has {} columns, expected {}",
                    y + 1,
                    row_width,
                    width
                );
            }

            for (x, cell) in row.chars().enumerate() {
                let tile = Tile::new(to_coordinate(x)?, to_coordinate(y)?);
                match cell {
                    '#' => grid.set_wall(tile),
                    '.' | ' ' => {}
                    'S' => {
                        if let Some(existing) = grid.start.replace(tile) {
                            bail!("map has more than one start: {existing} and {tile}");
                        }
                    }
                    'G' => {
                        if let Some(existing) = grid.goal.replace(tile) {
                            bail!("map has more than one goal: {existing} and {tile}");
                        }
                    }
                    other => bail!("unexpected character '{other}' at {tile}"),
                }
            }
        }

        tracing::debug!(
            width = grid.width,
            height = grid.height,
            walls = grid.walls.len(),
            "parsed map"
        );
        Ok(grid)
    }

    /// Load and parse an ASCII map file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read map from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid map in {}", path.display()))
    }

    /// Builder-style connectivity override.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Start marker from the parsed map, if any.
    pub fn start(&self) -> Option<Tile> {
        self.start
    }

    /// Goal marker from the parsed map, if any.
    pub fn goal(&self) -> Option<Tile> {
        self.goal
    }

    /// Place a wall. Tiles outside the grid are ignored.
    pub fn set_wall(&mut self, tile: Tile) {
        if self.contains(tile) {
            self.walls.insert(tile);
        }
    }

    /// Remove a wall, if present.
    pub fn clear_wall(&mut self, tile: Tile) {
        self.walls.remove(&tile);
    }

    pub fn is_wall(&self, tile: Tile) -> bool {
        self.walls.contains(&tile)
    }

    pub fn contains(&self, tile: Tile) -> bool {
        (0..self.width).contains(&tile.x) && (0..self.height).contains(&tile.y)
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, tile: Tile) -> bool {
        self.contains(tile) && !self.is_wall(tile)
    }
}

impl Graph<Tile> for TileGrid {
    fn reachable(&self, src: &Tile, dest: &Tile) -> bool {
        self.is_open(*src) && self.is_open(*dest)
    }

    fn connections(&self, node: &Tile) -> Vec<Tile> {
        const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

        let mut neighbours: Vec<Tile> = ORTHOGONAL
            .iter()
            .map(|&(dx, dy)| node.offset(dx, dy))
            .filter(|tile| self.is_open(*tile))
            .collect();

        if self.connectivity == Connectivity::Eight {
            neighbours.extend(
                DIAGONAL
                    .iter()
                    .filter(|&&(dx, dy)| {
                        self.is_open(node.offset(dx, 0)) && self.is_open(node.offset(0, dy))
                    })
                    .map(|&(dx, dy)| node.offset(dx, dy))
                    .filter(|tile| self.is_open(*tile)),
            );
        }

        neighbours
    }

    fn edge_cost(&self, src: &Tile, dest: &Tile) -> f64 {
        if src.x != dest.x && src.y != dest.y {
            SQRT_2
        } else {
            1.0
        }
    }

    fn heuristic_estimate(&self, node: &Tile, dest: &Tile) -> f64 {
        let dx = f64::from((node.x - dest.x).abs());
        let dy = f64::from((node.y - dest.y).abs());
        match self.connectivity {
            Connectivity::Four => dx + dy,
            Connectivity::Eight => dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy),
        }
    }
}

fn to_coordinate(value: usize) -> Result<i32> {
    i32::try_from(value).context("map is too large")
}

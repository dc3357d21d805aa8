//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for rendered maps. Callers pick a [`ColorPalette`] once and pass it to the
//! renderer, which keeps color decisions out of the drawing code.

/// ANSI escape codes for map glyphs.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the start tile.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the goal tile.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";
    /// Bright bold cyan for path tiles.
    pub const PATH: &str = "\x1b[1;96m";
    /// Gray for walls.
    pub const GRAY: &str = "\x1b[90m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub path: &'static str,
    pub wall: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::TAG_START,
            goal: colors::TAG_GOAL,
            path: colors::PATH,
            wall: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            goal: "",
            path: "",
            wall: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

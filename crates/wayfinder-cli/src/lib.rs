//! Wayfinder CLI library.
//!
//! This crate provides the tile-grid sample built on top of `wayfinder-lib`:
//! grid storage and wall placement, ASCII map parsing and rendering, terminal
//! styling, and output formatting.

pub mod grid;
pub mod output;
pub mod render;
pub mod terminal;

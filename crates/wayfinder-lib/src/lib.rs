//! Wayfinder library entry points.
//!
//! This crate exposes a weighted A* search engine over caller-defined graphs.
//! Callers describe their graph by implementing [`Graph`] and run searches
//! through a [`SearchEngine`]. Higher-level consumers (the tile-grid CLI)
//! should only depend on the items exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod queue;
pub mod search;

pub use error::{Error, Result};
pub use graph::{path_cost, Graph, NodeId};
pub use queue::BucketQueue;
pub use search::{SearchEngine, SearchObserver};

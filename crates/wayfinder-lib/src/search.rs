//! Weighted A* search engine.
//!
//! The engine orders its open set by `f = (1 - w) * g + w * h`, where `g` is
//! the accumulated cost from the source, `h` the graph's heuristic estimate to
//! the destination, and `w` the greediness weight chosen at construction:
//!
//! - `w = 0` orders purely by accumulated cost (Dijkstra-like);
//! - `w = 1` orders purely by heuristic estimate (greedy best-first);
//! - values in between interpolate linearly.
//!
//! The open set has no decrease-key. Improved nodes are re-inserted and stale
//! entries re-read their cost from the closed set when extracted. The search
//! stops as soon as the destination enters the closed set, so the returned
//! path is best-effort rather than provably shortest.
//!
//! # Example
//!
//! ```ignore
//! use wayfinder_lib::SearchEngine;
//!
//! let mut engine = SearchEngine::new(0.5)?;
//! if let Some(path) = engine.find_path(&graph, &start, &goal) {
//!     println!("{} steps", path.len() - 1);
//! }
//! ```

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::queue::BucketQueue;

/// Receives events from a running search.
///
/// All methods default to no-ops, and `()` implements the trait, so callers
/// only override what they want to inspect.
pub trait SearchObserver<T> {
    /// `node` was pushed onto the open set with `priority`.
    fn enqueued(&mut self, _node: &T, _priority: f64) {}

    /// `node` was taken off the open set; `cost` is its current closed-set cost.
    fn expanded(&mut self, _node: &T, _cost: f64) {}

    /// The closed-set record of `node` was created or overwritten.
    fn recorded(&mut self, _node: &T, _predecessor: &T, _cost: f64) {}
}

impl<T> SearchObserver<T> for () {}

/// Best-known route to a visited node.
#[derive(Debug, Clone)]
struct ClosedEntry<T> {
    predecessor: T,
    cost: f64,
}

/// Reusable weighted A* engine.
///
/// Searches take `&mut self`: an instance can run any number of searches one
/// after another but never two at once. Use one instance per thread for
/// parallel searches.
#[derive(Debug, Clone)]
pub struct SearchEngine<T> {
    weight: f64,
    closed: HashMap<T, ClosedEntry<T>>,
    open: BucketQueue<T>,
}

impl<T: NodeId> SearchEngine<T> {
    /// Create an engine with greediness `weight` in `[0, 1]`.
    ///
    /// Returns [`Error::InvalidArgument`] for any other value, NaN included.
    pub fn new(weight: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(Error::InvalidArgument {
                name: "weight",
                value: weight,
            });
        }

        Ok(Self::with_weight(weight))
    }

    /// Engine ordering purely by accumulated cost (`w = 0`).
    pub fn dijkstra() -> Self {
        Self::with_weight(0.0)
    }

    /// Engine ordering purely by heuristic estimate (`w = 1`).
    pub fn greedy() -> Self {
        Self::with_weight(1.0)
    }

    fn with_weight(weight: f64) -> Self {
        Self {
            weight,
            closed: HashMap::new(),
            open: BucketQueue::new(),
        }
    }

    /// Greediness weight this engine was built with.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Open-set priority for accumulated cost `g` and heuristic estimate `h`.
    pub fn priority(&self, g: f64, h: f64) -> f64 {
        (1.0 - self.weight) * g + self.weight * h
    }

    /// Find a path from `source` to `destination`.
    ///
    /// Returns the nodes from `source` to `destination` inclusive, or `None`
    /// when `graph.reachable(source, destination)` is false or the search
    /// exhausts the open set without recording the destination.
    pub fn find_path<G>(&mut self, graph: &G, source: &T, destination: &T) -> Option<Vec<T>>
    where
        G: Graph<T> + ?Sized,
    {
        self.find_path_observed(graph, source, destination, &mut ())
    }

    /// Same as [`find_path`](Self::find_path), reporting search events to `observer`.
    pub fn find_path_observed<G, O>(
        &mut self,
        graph: &G,
        source: &T,
        destination: &T,
        observer: &mut O,
    ) -> Option<Vec<T>>
    where
        G: Graph<T> + ?Sized,
        O: SearchObserver<T> + ?Sized,
    {
        if !graph.reachable(source, destination) {
            tracing::debug!("destination rejected by reachability pre-check");
            return None;
        }

        let stats = self.search(graph, source, destination, observer);
        let path = self.reconstruct_path(source, destination);

        tracing::debug!(
            weight = self.weight,
            expansions = stats.expansions,
            insertions = stats.insertions,
            closed = self.closed.len(),
            found = path.is_some(),
            "search finished"
        );

        self.reset();
        path
    }

    fn search<G, O>(
        &mut self,
        graph: &G,
        source: &T,
        destination: &T,
        observer: &mut O,
    ) -> SearchStats
    where
        G: Graph<T> + ?Sized,
        O: SearchObserver<T> + ?Sized,
    {
        let mut stats = SearchStats::default();

        self.closed.insert(
            source.clone(),
            ClosedEntry {
                predecessor: source.clone(),
                cost: 0.0,
            },
        );
        observer.recorded(source, source, 0.0);
        self.open.insert(source.clone(), 0.0);
        observer.enqueued(source, 0.0);
        stats.insertions += 1;

        while !self.closed.contains_key(destination) && !self.open.is_empty() {
            let Some(current) = self.open.extract_min() else {
                break;
            };
            // Stale entries still carry the latest cost: it lives in the closed set.
            let Some(current_cost) = self.closed.get(&current).map(|entry| entry.cost) else {
                continue;
            };
            observer.expanded(&current, current_cost);
            stats.expansions += 1;
            tracing::trace!(cost = current_cost, "expanding node");

            for next in graph.connections(&current) {
                let tentative = current_cost + graph.edge_cost(&current, &next);
                let improved = match self.closed.get(&next) {
                    Some(entry) => entry.cost > tentative,
                    None => true,
                };
                if !improved {
                    continue;
                }

                observer.recorded(&next, &current, tentative);
                let estimate = graph.heuristic_estimate(&next, destination);
                let priority = self.priority(tentative, estimate);
                self.closed.insert(
                    next.clone(),
                    ClosedEntry {
                        predecessor: current.clone(),
                        cost: tentative,
                    },
                );
                observer.enqueued(&next, priority);
                self.open.insert(next, priority);
                stats.insertions += 1;
            }
        }

        stats
    }

    fn reconstruct_path(&self, source: &T, destination: &T) -> Option<Vec<T>> {
        self.closed.get(destination)?;

        let mut path = vec![destination.clone()];
        let mut current = destination;
        while current != source {
            // A chain longer than the closed set means predecessors loop back on
            // themselves, which only negative edge costs can produce.
            if path.len() > self.closed.len() {
                tracing::warn!(
                    closed = self.closed.len(),
                    "predecessor chain does not reach the source; discarding path"
                );
                return None;
            }
            current = &self.closed.get(current)?.predecessor;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }

    fn reset(&mut self) {
        self.closed.clear();
        self.open.clear();
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct SearchStats {
    expansions: usize,
    insertions: usize,
}

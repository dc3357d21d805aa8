#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use wayfinder_lib::Graph;

/// Explicit directed graph over string labels for integration tests.
///
/// Connections are enumerated in the order edges were added. Every call to
/// `connections` is counted so tests can assert how much of the graph a
/// search touched.
#[derive(Debug, Default)]
pub struct LabelGraph {
    edges: Vec<(&'static str, &'static str, f64)>,
    heuristics: HashMap<&'static str, f64>,
    blocked_pairs: HashSet<(&'static str, &'static str)>,
    enumerations: Cell<usize>,
}

impl LabelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: &'static str, to: &'static str, cost: f64) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    /// Add edges in both directions with the same cost.
    pub fn link(self, a: &'static str, b: &'static str, cost: f64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    pub fn heuristic(mut self, node: &'static str, value: f64) -> Self {
        self.heuristics.insert(node, value);
        self
    }

    /// Make `reachable(from, to)` report `false` for this exact pair.
    pub fn block(mut self, from: &'static str, to: &'static str) -> Self {
        self.blocked_pairs.insert((from, to));
        self
    }

    pub fn enumerations(&self) -> usize {
        self.enumerations.get()
    }
}

impl Graph<&'static str> for LabelGraph {
    fn reachable(&self, src: &&'static str, dest: &&'static str) -> bool {
        !self.blocked_pairs.contains(&(*src, *dest))
    }

    fn connections(&self, node: &&'static str) -> Vec<&'static str> {
        self.enumerations.set(self.enumerations.get() + 1);
        self.edges
            .iter()
            .filter(|(from, _, _)| from == node)
            .map(|(_, to, _)| *to)
            .collect()
    }

    fn edge_cost(&self, src: &&'static str, dest: &&'static str) -> f64 {
        self.edges
            .iter()
            .find(|(from, to, _)| from == src && to == dest)
            .map(|(_, _, cost)| *cost)
            .unwrap_or(f64::INFINITY)
    }

    fn heuristic_estimate(&self, node: &&'static str, _dest: &&'static str) -> f64 {
        self.heuristics.get(node).copied().unwrap_or(0.0)
    }
}

/// Open rectangular grid with four-way movement, unit costs, and a
/// Manhattan-distance heuristic.
#[derive(Debug, Clone, Copy)]
pub struct OpenGrid {
    pub width: i32,
    pub height: i32,
}

impl OpenGrid {
    fn contains(&self, (x, y): (i32, i32)) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

impl Graph<(i32, i32)> for OpenGrid {
    fn reachable(&self, src: &(i32, i32), dest: &(i32, i32)) -> bool {
        self.contains(*src) && self.contains(*dest)
    }

    fn connections(&self, &(x, y): &(i32, i32)) -> Vec<(i32, i32)> {
        [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)]
            .into_iter()
            .filter(|tile| self.contains(*tile))
            .collect()
    }

    fn edge_cost(&self, _src: &(i32, i32), _dest: &(i32, i32)) -> f64 {
        1.0
    }

    fn heuristic_estimate(&self, node: &(i32, i32), dest: &(i32, i32)) -> f64 {
        f64::from((node.0 - dest.0).abs() + (node.1 - dest.1).abs())
    }
}

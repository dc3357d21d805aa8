use std::hash::Hash;

/// Capability bound for node identities.
///
/// The engine never inspects a node; it only clones, compares, and hashes it
/// to key the closed set. Every `Clone + Eq + Hash` type qualifies.
pub trait NodeId: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> NodeId for T {}

/// Graph structure queried by the search engine.
///
/// Implementations act as pure oracles: the engine borrows the graph
/// immutably for the duration of one search and may call each method many
/// times with the same arguments.
pub trait Graph<T: NodeId> {
    /// Whether a search from `src` to `dest` is worth attempting at all.
    ///
    /// The engine consults this once per search, for the `(source,
    /// destination)` pair only. Returning `false` ends the search before any
    /// connection is enumerated.
    fn reachable(&self, src: &T, dest: &T) -> bool;

    /// Outward connections of `node`, in a stable order.
    fn connections(&self, node: &T) -> Vec<T>;

    /// Cost of traversing the edge from `src` to `dest`. Expected to be
    /// non-negative; not enforced.
    fn edge_cost(&self, src: &T, dest: &T) -> f64;

    /// Estimated remaining cost from `node` to `dest`.
    fn heuristic_estimate(&self, node: &T, dest: &T) -> f64;
}

impl<T: NodeId, G: Graph<T> + ?Sized> Graph<T> for &G {
    fn reachable(&self, src: &T, dest: &T) -> bool {
        (**self).reachable(src, dest)
    }

    fn connections(&self, node: &T) -> Vec<T> {
        (**self).connections(node)
    }

    fn edge_cost(&self, src: &T, dest: &T) -> f64 {
        (**self).edge_cost(src, dest)
    }

    fn heuristic_estimate(&self, node: &T, dest: &T) -> f64 {
        (**self).heuristic_estimate(node, dest)
    }
}

/// Sum of edge costs along `path` as reported by `graph`.
///
/// Empty and single-node paths cost `0.0`.
pub fn path_cost<T: NodeId, G: Graph<T> + ?Sized>(graph: &G, path: &[T]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge_cost(&pair[0], &pair[1]))
        .sum()
}

//! Read-only graph view consumed by the centrality algorithms.
//!
//! # Overview
//!
//! The algorithms never own or mutate a graph. They only need:
//!
//! - a dense vertex index `0..n`,
//! - a dense edge index `0..m` that doubles as the edge's map key,
//! - out-edge iteration (all incident edges when the graph is undirected),
//! - the directedness flag.
//!
//! [`GraphView`] captures exactly that. It is implemented for
//! [`petgraph::Graph`] in [`petgraph_view`]; other storage only needs the
//! same five methods.

mod petgraph_view;

/// Dense edge index in `0..edge_count()`.
pub type EdgeId = usize;

/// An edge with its stored endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub id: EdgeId,
    pub source: usize,
    pub target: usize,
}

/// Read-only access to a graph snapshot.
///
/// Implementations must be `Sync`: every source vertex is processed on a
/// separate rayon task that borrows the same view.
pub trait GraphView: Sync {
    /// Number of vertices; vertex indices are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Number of edges; edge indices are `0..edge_count()`.
    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Edges leaving `v`, each paired with the vertex at the other end.
    ///
    /// For undirected graphs every incident edge is reported, so the
    /// neighbourhood is symmetric.
    fn out_edges(&self, v: usize) -> impl Iterator<Item = (EdgeId, usize)> + '_;

    /// Every edge with its stored `(source, target)` endpoints.
    fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_;
}

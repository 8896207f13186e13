//! Cross-source reduction of betweenness contributions.
//!
//! Sources are independent, so they are spread over the rayon pool with
//! `fold`: each split of the source range owns a [`Worker`] (forward-pass
//! buffers, dependency scratch, and a private [`Accumulator`]). Partial
//! accumulators are then summed elementwise with `reduce`. No slot is ever
//! written by two threads, so no locking or atomics are involved.
//!
//! Rayon splits the range adaptively and steals work, which matters here:
//! sources on the periphery of a graph finish much faster than central ones.

use rayon::prelude::*;
use tracing::debug;

use crate::centrality::dependency::back_propagate;
use crate::centrality::paths::SourcePaths;
use crate::graph::GraphView;
use crate::property::{Distance, Float};

/// Raw (unnormalized) vertex and edge betweenness, always in `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    pub(crate) vertices: Vec<f64>,
    pub(crate) edges: Vec<f64>,
}

impl Accumulator {
    #[must_use]
    pub fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: vec![0.0; vertex_count],
            edges: vec![0.0; edge_count],
        }
    }

    /// Elementwise sum of two partial results.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.vertices.iter_mut().zip(&other.vertices) {
            *a += b;
        }
        for (a, b) in self.edges.iter_mut().zip(&other.edges) {
            *a += b;
        }
        self
    }

    /// Undirected pairs are visited from both ends; count each once.
    pub fn halve(&mut self) {
        self.vertices.par_iter_mut().for_each(|x| *x *= 0.5);
        self.edges.par_iter_mut().for_each(|x| *x *= 0.5);
    }

    #[must_use]
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Add the vertex totals into a caller-owned map.
    pub fn add_vertices_into<T: Float>(&self, out: &mut [T]) {
        add_into(&self.vertices, out);
    }

    /// Add the edge totals into a caller-owned map.
    pub fn add_edges_into<T: Float>(&self, out: &mut [T]) {
        add_into(&self.edges, out);
    }
}

pub(crate) fn add_into<T: Float>(src: &[f64], out: &mut [T]) {
    out.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(o, &s)| *o += T::from_f64(s));
}

/// Per-task state reused across the sources one rayon split handles.
struct Worker<D> {
    paths: SourcePaths<D>,
    delta: Vec<f64>,
    acc: Accumulator,
}

impl<D: Distance> Worker<D> {
    fn new(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            paths: SourcePaths::new(vertex_count),
            delta: vec![0.0; vertex_count],
            acc: Accumulator::new(vertex_count, edge_count),
        }
    }
}

/// Upper bound on rayon splits per worker thread; each split allocates its
/// own [`Worker`].
const SPLITS_PER_THREAD: usize = 4;

/// Minimum sources one split must own so that at most
/// `threads * SPLITS_PER_THREAD` splits exist.
fn sources_per_split(sources: usize, threads: usize) -> usize {
    sources
        .div_ceil(threads.max(1) * SPLITS_PER_THREAD)
        .max(1)
}

/// Run Brandes over every source of `g` and return the summed contributions.
///
/// `forward` runs the forward pass for one source into the worker's
/// buffers; it decides between BFS and Dijkstra.
pub(crate) fn accumulate_all<G, D, F>(g: &G, forward: F) -> Accumulator
where
    G: GraphView,
    D: Distance,
    F: Fn(usize, &mut SourcePaths<D>) + Sync,
{
    let n = g.vertex_count();
    let m = g.edge_count();

    let threads = rayon::current_num_threads();
    let acc = (0..n)
        .into_par_iter()
        .with_min_len(sources_per_split(n, threads))
        .fold(
            || Worker::<D>::new(n, m),
            |mut worker, s| {
                forward(s, &mut worker.paths);
                back_propagate(&worker.paths, &mut worker.delta, &mut worker.acc);
                worker
            },
        )
        .map(|worker| worker.acc)
        .reduce(|| Accumulator::new(n, m), Accumulator::merge);

    debug!(sources = n, threads, "accumulation complete");
    acc
}

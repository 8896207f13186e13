//! Single-source shortest-path accumulation (the forward pass).
//!
//! For one source `s` this computes, for every vertex `v`:
//!
//! - `dist(v)`: hop count (BFS) or weight sum (Dijkstra), or
//!   [`Distance::UNREACHED`];
//! - `sigma(v)`: the number of distinct shortest `s → v` paths;
//! - the edges `(u → v)` lying on at least one shortest path.
//!
//! Vertices are also recorded in the order they are finalised, which is
//! non-decreasing in distance. The backward pass walks that order in
//! reverse.
//!
//! [`SourcePaths`] is reused across sources by one worker; [`SourcePaths::reset`]
//! clears only the slots the previous source touched.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use fixedbitset::FixedBitSet;

use crate::graph::{EdgeId, GraphView};
use crate::property::{Distance, Float};

/// Per-source forward-pass state.
#[derive(Debug, Clone)]
pub struct SourcePaths<D> {
    source: usize,
    dist: Vec<D>,
    sigma: Vec<f64>,
    /// `preds[w]` = `(edge, v)` for every shortest-path edge `v → w`.
    preds: Vec<Vec<(EdgeId, usize)>>,
    order: Vec<usize>,
    queue: VecDeque<usize>,
    heap: BinaryHeap<MinScored<D>>,
    finished: FixedBitSet,
}

impl<D: Distance> SourcePaths<D> {
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            source: 0,
            dist: vec![D::UNREACHED; vertex_count],
            sigma: vec![0.0; vertex_count],
            preds: vec![Vec::new(); vertex_count],
            order: Vec::with_capacity(vertex_count),
            queue: VecDeque::new(),
            heap: BinaryHeap::new(),
            finished: FixedBitSet::with_capacity(vertex_count),
        }
    }

    /// Forget the previous source and seed `source`.
    fn reset(&mut self, source: usize) {
        for &v in &self.order {
            self.dist[v] = D::UNREACHED;
            self.sigma[v] = 0.0;
            self.preds[v].clear();
        }
        self.order.clear();
        self.queue.clear();
        self.heap.clear();
        self.finished.clear();

        self.source = source;
        self.dist[source] = D::ZERO;
        self.sigma[source] = 1.0;
    }

    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source, `None` when unreachable.
    #[must_use]
    pub fn distance(&self, v: usize) -> Option<D> {
        let d = self.dist[v];
        self.is_reachable(v).then_some(d)
    }

    #[must_use]
    pub fn sigma(&self, v: usize) -> f64 {
        self.sigma[v]
    }

    #[must_use]
    pub fn is_reachable(&self, v: usize) -> bool {
        self.sigma[v] > 0.0
    }

    /// Shortest-path edges into `w` as `(edge, predecessor)` pairs.
    #[must_use]
    pub fn predecessors(&self, w: usize) -> &[(EdgeId, usize)] {
        &self.preds[w]
    }

    /// Reached vertices in non-decreasing distance order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

/// Unweighted forward pass: breadth-first search from `source`.
pub fn breadth_first<G: GraphView>(g: &G, source: usize, paths: &mut SourcePaths<usize>) {
    paths.reset(source);
    paths.queue.push_back(source);

    while let Some(u) = paths.queue.pop_front() {
        paths.order.push(u);
        let next = paths.dist[u] + 1;

        for (e, v) in g.out_edges(u) {
            if paths.dist[v] == usize::UNREACHED {
                paths.dist[v] = next;
                paths.queue.push_back(v);
            }
            if paths.dist[v] == next {
                paths.sigma[v] += paths.sigma[u];
                paths.preds[v].push((e, u));
            }
        }
    }
}

/// Weighted forward pass: Dijkstra from `source`.
///
/// `weights[e]` must be non-negative and not NaN; callers validate this.
/// Distance ties are detected by exact equality. Edges into vertices that
/// are already finalised are skipped, so a zero-weight edge between two
/// equidistant vertices never adds a predecessor behind the backward pass.
/// An edge whose distance sum is infinite (an `inf` weight, or finite
/// weights overflowing `T`) does not reach its target. Every vertex with
/// non-zero sigma therefore ends up in [`SourcePaths::order`], which is
/// what [`SourcePaths::reset`] relies on.
#[allow(clippy::float_cmp)]
pub fn dijkstra<G: GraphView, T: Float>(
    g: &G,
    source: usize,
    weights: &[T],
    paths: &mut SourcePaths<T>,
) {
    paths.reset(source);
    paths.heap.push(MinScored(T::ZERO, source));

    while let Some(MinScored(_, u)) = paths.heap.pop() {
        if paths.finished.put(u) {
            // Stale heap entry.
            continue;
        }
        paths.order.push(u);
        let du = paths.dist[u];

        for (e, v) in g.out_edges(u) {
            if paths.finished.contains(v) {
                continue;
            }
            let alt = du + weights[e];
            if alt == T::UNREACHED {
                // Infinite weight or overflowing sum: not a path.
                continue;
            }
            let dv = paths.dist[v];
            if alt < dv {
                paths.dist[v] = alt;
                paths.sigma[v] = paths.sigma[u];
                paths.preds[v].clear();
                paths.preds[v].push((e, u));
                paths.heap.push(MinScored(alt, v));
            } else if alt == dv {
                paths.sigma[v] += paths.sigma[u];
                paths.preds[v].push((e, u));
            }
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first.
#[derive(Debug, Clone, Copy)]
struct MinScored<D>(D, usize);

impl<D: PartialOrd> PartialEq for MinScored<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<D: PartialOrd> Eq for MinScored<D> {}

impl<D: PartialOrd> PartialOrd for MinScored<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: PartialOrd> Ord for MinScored<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.1.cmp(&self.1))
    }
}

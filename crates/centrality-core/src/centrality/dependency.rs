//! Dependency back-propagation (the backward pass).
//!
//! Walks the forward pass's visitation order in reverse (farthest vertex
//! first). For each vertex `w` and each shortest-path edge `v → w`:
//!
//! ```text
//! c           = sigma(v) / sigma(w) * (1 + delta(w))
//! delta(v)   += c
//! edge_bc[e] += c
//! ```
//!
//! and once all of `w`'s predecessors are credited, `vertex_bc[w] += delta(w)`
//! unless `w` is the source. Reverse visitation order guarantees every
//! successor of `w` has already been folded into `delta(w)`.

use crate::centrality::aggregate::Accumulator;
use crate::centrality::paths::SourcePaths;
use crate::property::Distance;

/// Fold one source's dependencies into `acc`.
///
/// `delta` is scratch space of length `vertex_count`, all zero on entry;
/// it is returned to all zero.
pub(crate) fn back_propagate<D: Distance>(
    paths: &SourcePaths<D>,
    delta: &mut [f64],
    acc: &mut Accumulator,
) {
    let source = paths.source();

    for &w in paths.order().iter().rev() {
        let sigma_w = paths.sigma(w);
        if sigma_w <= 0.0 {
            continue;
        }
        let coeff = (1.0 + delta[w]) / sigma_w;

        for &(e, v) in paths.predecessors(w) {
            let c = paths.sigma(v) * coeff;
            delta[v] += c;
            acc.edges[e] += c;
        }

        if w != source {
            acc.vertices[w] += delta[w];
        }
    }

    for &v in paths.order() {
        delta[v] = 0.0;
    }
}

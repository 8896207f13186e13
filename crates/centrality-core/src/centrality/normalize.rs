//! Size and directedness normalization.
//!
//! ```text
//! vfactor = n > 2 ? 1 / ((n-1)(n-2)) : 1
//! efactor = n > 1 ? 1 / (n(n-1))     : 1
//! undirected: both factors doubled
//! ```
//!
//! Each slot is scaled independently, so both loops run as rayon
//! `par_iter_mut` without synchronization. Callers must only normalize
//! after aggregation has fully completed.

use rayon::prelude::*;

use crate::property::Float;

/// Scale factors applied to vertex and edge betweenness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factors {
    pub vertex: f64,
    pub edge: f64,
}

/// Normalization factors for a graph with `n` vertices.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn normalization_factors(n: usize, directed: bool) -> Factors {
    let nf = n as f64;
    let mut vertex = if n > 2 {
        1.0 / ((nf - 1.0) * (nf - 2.0))
    } else {
        1.0
    };
    let mut edge = if n > 1 { 1.0 / (nf * (nf - 1.0)) } else { 1.0 };
    if !directed {
        vertex *= 2.0;
        edge *= 2.0;
    }
    Factors { vertex, edge }
}

/// Multiply every slot of `values` by `factor`.
pub fn scale<T: Float>(values: &mut [T], factor: f64) {
    let factor = T::from_f64(factor);
    values.par_iter_mut().for_each(|x| *x *= factor);
}

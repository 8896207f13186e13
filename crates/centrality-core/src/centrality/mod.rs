//! Betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a vertex (or edge) lies on
//! shortest paths between other pairs of vertices:
//!
//! ```text
//! C_B(v) = sum over s != v != t of sigma_st(v) / sigma_st
//! ```
//!
//! # Algorithm
//!
//! Brandes (2001), one independent pass per source vertex `s`:
//!
//! 1. [`paths`]: BFS (unweighted) or Dijkstra (weighted) from `s`, recording
//!    distances, shortest-path counts and shortest-path predecessor edges.
//! 2. `dependency`: accumulate dependencies in reverse visitation order
//!    (farthest vertices first) and credit vertices and edges.
//! 3. [`aggregate`]: sum the per-source credits across rayon workers.
//! 4. For undirected graphs, halve the totals (each pair was seen from both
//!    ends).
//! 5. [`normalize`] (optional): rescale by graph size and directedness.
//!
//! [`dominance`] derives the central point dominance from the result.
//!
//! Complexity: `O(VE)` unweighted, `O(VE + V^2 log V)` weighted.
//!
//! # Output maps
//!
//! [`compute_betweenness`] *adds* into caller-owned `float` or `double`
//! maps; callers zero them first. All validation happens before the first
//! write, so a failed call leaves both maps untouched. [`betweenness`]
//! allocates fresh `double` maps instead.

pub mod aggregate;
mod dependency;
pub mod dominance;
pub mod normalize;
pub mod paths;

use tracing::{debug, instrument};

use crate::error::{CentralityError, MapKind};
use crate::graph::GraphView;
use crate::property::{EdgeMap, Float, Key, PropertyMap, ValueType, Values, VertexMap};

pub use aggregate::Accumulator;
pub use normalize::{Factors, normalization_factors};

use aggregate::accumulate_all;
use paths::{SourcePaths, breadth_first, dijkstra};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Vertex and edge betweenness allocated by [`betweenness`].
#[derive(Debug, Clone, PartialEq)]
pub struct Betweenness {
    /// One `double` per vertex.
    pub vertex: VertexMap,
    /// One `double` per edge.
    pub edge: EdgeMap,
}

impl Betweenness {
    /// Central point dominance of [`Self::vertex`].
    #[must_use]
    pub fn central_point_dominance(&self) -> f64 {
        self.vertex
            .to_f64_vec()
            .map_or(0.0, |scores| dominance::dominance(&scores))
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Add vertex and edge betweenness of `g` into `vertex_out` and `edge_out`.
///
/// With `weight` set, shortest paths minimise the weight sum (Dijkstra);
/// otherwise every edge counts as one hop. Weights are converted to the
/// value type of `edge_out` first, and distances accumulate in that type.
/// With `normalize`, every slot of both maps is scaled by
/// [`normalization_factors`] once accumulation is complete.
///
/// # Errors
///
/// Returns an error, before touching either output map, if
/// - an output map is not `float`/`double` ([`CentralityError::PropertyType`]),
/// - a map's length does not match the graph ([`CentralityError::SizeMismatch`]),
/// - the weight map is not scalar, or holds a negative or NaN weight
///   ([`CentralityError::NegativeWeight`]).
#[instrument(
    skip_all,
    fields(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        directed = g.is_directed(),
        weighted = weight.is_some(),
        normalize = normalize,
    )
)]
pub fn compute_betweenness<G: GraphView>(
    g: &G,
    weight: Option<&EdgeMap>,
    edge_out: &mut EdgeMap,
    vertex_out: &mut VertexMap,
    normalize: bool,
) -> Result<(), CentralityError> {
    let mut edge_slots = FloatSlots::of(edge_out, MapKind::EdgeBetweenness)?;
    let mut vertex_slots = FloatSlots::of(vertex_out, MapKind::VertexBetweenness)?;
    edge_slots.check_len(g.edge_count(), MapKind::EdgeBetweenness)?;
    vertex_slots.check_len(g.vertex_count(), MapKind::VertexBetweenness)?;
    let weights = weight.map(|w| validated_weights(g, w)).transpose()?;

    let mut acc = match (&weights, &edge_slots) {
        (None, _) => accumulate_all(g, |s, paths: &mut SourcePaths<usize>| {
            breadth_first(g, s, paths);
        }),
        (Some(w), FloatSlots::F32(_)) => weighted::<G, f32>(g, w),
        (Some(w), FloatSlots::F64(_)) => weighted::<G, f64>(g, w),
    };

    if !g.is_directed() {
        acc.halve();
    }

    vertex_slots.add(acc.vertices());
    edge_slots.add(acc.edges());

    if normalize {
        let factors = normalization_factors(g.vertex_count(), g.is_directed());
        vertex_slots.scale(factors.vertex);
        edge_slots.scale(factors.edge);
        debug!(vfactor = factors.vertex, efactor = factors.edge, "normalized");
    }

    Ok(())
}

/// Compute betweenness into freshly allocated `double` maps.
///
/// # Errors
///
/// Returns an error if the weight map is not scalar, does not match the
/// graph, or holds a negative or NaN weight.
pub fn betweenness<G: GraphView>(
    g: &G,
    weight: Option<&EdgeMap>,
    normalize: bool,
) -> Result<Betweenness, CentralityError> {
    let mut vertex = VertexMap::for_graph(g, ValueType::Float64);
    let mut edge = EdgeMap::for_graph(g, ValueType::Float64);
    compute_betweenness(g, weight, &mut edge, &mut vertex, normalize)?;
    Ok(Betweenness { vertex, edge })
}

/// Central point dominance of `g` given its vertex betweenness.
///
/// Meaningful on normalized betweenness, where the result lies in `[0, 1]`.
/// Any scalar map is accepted. Returns `0` for graphs with at most one
/// vertex.
///
/// # Errors
///
/// Returns an error if `vertex_betweenness` is a string map or does not
/// have one entry per vertex.
#[instrument(skip_all, fields(vertices = g.vertex_count()))]
pub fn central_point_dominance<G: GraphView>(
    g: &G,
    vertex_betweenness: &VertexMap,
) -> Result<f64, CentralityError> {
    let scores = vertex_betweenness
        .to_f64_vec()
        .ok_or(CentralityError::PropertyType {
            map: MapKind::VertexBetweenness,
            expected: "scalar",
            found: vertex_betweenness.value_type(),
        })?;
    vertex_betweenness.check_len(g, MapKind::VertexBetweenness)?;
    Ok(dominance::dominance(&scores))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn weighted<G: GraphView, T: Float>(g: &G, weights: &[f64]) -> Accumulator {
    let weights: Vec<T> = weights.iter().map(|&w| T::from_f64(w)).collect();
    accumulate_all(g, |s, paths: &mut SourcePaths<T>| {
        dijkstra(g, s, &weights, paths);
    })
}

/// Read the weight map as `f64`, rejecting strings, size mismatches and
/// negative or NaN weights.
fn validated_weights<G: GraphView>(g: &G, weight: &EdgeMap) -> Result<Vec<f64>, CentralityError> {
    let values = weight.to_f64_vec().ok_or(CentralityError::PropertyType {
        map: MapKind::Weight,
        expected: "scalar",
        found: weight.value_type(),
    })?;
    weight.check_len(g, MapKind::Weight)?;
    if let Some((edge, &w)) = values
        .iter()
        .enumerate()
        .find(|&(_, w)| w.is_nan() || *w < 0.0)
    {
        return Err(CentralityError::NegativeWeight { edge, weight: w });
    }
    Ok(values)
}

/// Mutable view of a validated floating-point output map.
enum FloatSlots<'a> {
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
}

impl<'a> FloatSlots<'a> {
    fn of<K: Key>(map: &'a mut PropertyMap<K>, kind: MapKind) -> Result<Self, CentralityError> {
        let found = map.value_type();
        match map.values_mut() {
            Values::Float32(v) => Ok(Self::F32(v)),
            Values::Float64(v) => Ok(Self::F64(v)),
            _ => Err(CentralityError::PropertyType {
                map: kind,
                expected: "floating point",
                found,
            }),
        }
    }

    fn check_len(&self, expected: usize, map: MapKind) -> Result<(), CentralityError> {
        let found = match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        };
        if found == expected {
            Ok(())
        } else {
            Err(CentralityError::SizeMismatch {
                map,
                expected,
                found,
            })
        }
    }

    fn add(&mut self, totals: &[f64]) {
        match self {
            Self::F32(v) => aggregate::add_into(totals, v),
            Self::F64(v) => aggregate::add_into(totals, v),
        }
    }

    fn scale(&mut self, factor: f64) {
        match self {
            Self::F32(v) => normalize::scale(v, factor),
            Self::F64(v) => normalize::scale(v, factor),
        }
    }
}

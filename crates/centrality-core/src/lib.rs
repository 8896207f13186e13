#![forbid(unsafe_code)]
//! centrality-core library.
//!
//! Betweenness centrality (vertex and edge, weighted and unweighted) via
//! Brandes' algorithm, the size/directedness normalization pass, and the
//! central point dominance index derived from vertex betweenness.
//!
//! # Conventions
//!
//! - **Errors**: Algorithm entry points return [`error::CentralityError`];
//!   configuration loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Parallelism**: Sources are processed on the ambient `rayon` pool. Run
//!   inside [`config::ComputeConfig::thread_pool`] to pin the worker count.
//!
//! # Example
//!
//! ```rust
//! use centrality_core::centrality::{betweenness, central_point_dominance};
//! use petgraph::graph::UnGraph;
//!
//! // Star: vertex 0 in the middle of four leaves.
//! let g = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (0, 3), (0, 4)]);
//! let bc = betweenness(&g, None, true).expect("double maps are valid outputs");
//!
//! let center = bc.vertex.get(0).expect("vertex 0 exists");
//! assert!((center - 1.0).abs() < 1e-12);
//! let cpd = central_point_dominance(&g, &bc.vertex).expect("scalar map");
//! assert!((cpd - 1.0).abs() < 1e-12);
//! ```

pub mod centrality;
pub mod config;
pub mod error;
pub mod graph;
pub mod property;

pub use centrality::{
    Betweenness, Factors, betweenness, central_point_dominance, compute_betweenness,
    normalization_factors,
};
pub use error::{CentralityError, ErrorCode};
pub use graph::{EdgeId, EdgeRef, GraphView};
pub use property::{EdgeMap, Float, PropertyMap, ValueType, Values, VertexMap};

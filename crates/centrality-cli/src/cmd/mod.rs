pub mod betweenness;
pub mod completions;
pub mod dominance;

use std::path::Path;

use anyhow::Context;
use centrality_core::{
    Betweenness, CentralityError, EdgeMap, EdgeRef, GraphView, VertexMap, betweenness,
    central_point_dominance, config::CentralityConfig,
};

use crate::input::{EdgeList, LoadedGraph, read_edge_list};
use crate::output::OutputMode;

/// Settings shared by every command invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub output: OutputMode,
    pub config: CentralityConfig,
}

/// An edge-list file ready for the centrality routines.
pub struct Loaded {
    pub list: EdgeList,
    pub graph: LoadedGraph,
    pub weights: Option<EdgeMap>,
}

impl Loaded {
    /// Read `file`, building a directed graph unless `undirected` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if
    /// `weighted` is set and an edge lacks a weight.
    pub fn open(file: &Path, undirected: bool, weighted: bool) -> anyhow::Result<Self> {
        let list = read_edge_list(file)?;
        let weights = if weighted {
            Some(
                list.weight_map()
                    .with_context(|| format!("Failed to parse {}", file.display()))?,
            )
        } else {
            None
        };
        let graph = list.to_graph(!undirected);
        Ok(Self {
            list,
            graph,
            weights,
        })
    }

    pub const fn is_directed(&self) -> bool {
        matches!(self.graph, LoadedGraph::Directed(_))
    }

    /// Edges in id order, matching the slots of an edge map.
    pub fn edges(&self) -> Vec<EdgeRef> {
        match &self.graph {
            LoadedGraph::Directed(g) => GraphView::edges(g).collect(),
            LoadedGraph::Undirected(g) => GraphView::edges(g).collect(),
        }
    }

    pub fn betweenness(&self, normalize: bool) -> Result<Betweenness, CentralityError> {
        match &self.graph {
            LoadedGraph::Directed(g) => betweenness(g, self.weights.as_ref(), normalize),
            LoadedGraph::Undirected(g) => betweenness(g, self.weights.as_ref(), normalize),
        }
    }

    pub fn dominance(&self, scores: &VertexMap) -> Result<f64, CentralityError> {
        match &self.graph {
            LoadedGraph::Directed(g) => central_point_dominance(g, scores),
            LoadedGraph::Undirected(g) => central_point_dominance(g, scores),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open(text: &str, undirected: bool, weighted: bool) -> anyhow::Result<Loaded> {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("graph.txt");
        std::fs::write(&path, text).expect("write graph");
        Loaded::open(&path, undirected, weighted)
    }

    #[test]
    fn edges_keep_file_orientation_and_order() {
        let loaded = open("a hub\nhub b\nlonely\n", true, false).expect("valid input");
        let labels = loaded.list.labels();
        let edges: Vec<_> = loaded
            .edges()
            .iter()
            .map(|e| (e.id, labels[e.source].as_str(), labels[e.target].as_str()))
            .collect();
        assert_eq!(edges, [(0, "a", "hub"), (1, "hub", "b")]);
        assert!(!loaded.is_directed());
    }

    #[test]
    fn weighted_open_requires_every_weight() {
        let err = open("a b 1\nb c\n", false, true)
            .err()
            .expect("missing weight");
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn infinite_weight_token_makes_edge_impassable() {
        let loaded = open("a b 1\nb c inf\n", false, true).expect("valid input");
        let bc = loaded.betweenness(false).expect("valid weights");
        assert_eq!(bc.vertex.to_f64_vec(), Some(vec![0.0, 0.0, 0.0]));
        assert_eq!(bc.edge.to_f64_vec(), Some(vec![1.0, 0.0]));
    }
}

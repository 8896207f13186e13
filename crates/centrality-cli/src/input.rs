//! Whitespace-separated edge-list reader.
//!
//! One record per line: `SOURCE TARGET [WEIGHT]`. A line holding a single
//! label declares an isolated vertex. Blank lines and anything after `#`
//! are ignored. Vertices are indexed in order of first appearance.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use centrality_core::EdgeMap;
use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use thiserror::Error;

/// A malformed record, reported with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("line {line}: expected `SOURCE TARGET [WEIGHT]`, found {fields} fields")]
    FieldCount { line: usize, fields: usize },

    #[error("line {line}: invalid weight `{token}`")]
    InvalidWeight { line: usize, token: String },

    #[error("line {line}: edge has no weight but --weighted was given")]
    MissingWeight { line: usize },
}

#[derive(Debug, Clone, PartialEq)]
struct Record {
    source: usize,
    target: usize,
    weight: Option<f64>,
    line: usize,
}

/// Parsed edge list, independent of edge direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    labels: Vec<String>,
    records: Vec<Record>,
}

/// An edge list materialized as a petgraph graph.
pub enum LoadedGraph {
    Directed(DiGraph<String, ()>),
    Undirected(UnGraph<String, ()>),
}

impl EdgeList {
    /// Vertex labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edge_count(&self) -> usize {
        self.records.len()
    }

    /// Build the graph; edge ids follow file order.
    pub fn to_graph(&self, directed: bool) -> LoadedGraph {
        if directed {
            LoadedGraph::Directed(self.fill(DiGraph::with_capacity(
                self.labels.len(),
                self.records.len(),
            )))
        } else {
            LoadedGraph::Undirected(self.fill(UnGraph::with_capacity(
                self.labels.len(),
                self.records.len(),
            )))
        }
    }

    fn fill<Ty: petgraph::EdgeType>(
        &self,
        mut g: petgraph::Graph<String, (), Ty>,
    ) -> petgraph::Graph<String, (), Ty> {
        for label in &self.labels {
            g.add_node(label.clone());
        }
        for r in &self.records {
            g.add_edge(NodeIndex::new(r.source), NodeIndex::new(r.target), ());
        }
        g
    }

    /// Collect the weight column into a `double` edge map.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingWeight`] for the first edge without one.
    pub fn weight_map(&self) -> Result<EdgeMap, InputError> {
        let weights = self
            .records
            .iter()
            .map(|r| r.weight.ok_or(InputError::MissingWeight { line: r.line }))
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(EdgeMap::from(weights))
    }
}

#[derive(Default)]
struct Interner {
    index: HashMap<String, usize>,
    labels: Vec<String>,
}

impl Interner {
    fn intern(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.labels.len();
        self.index.insert(label.to_string(), i);
        self.labels.push(label.to_string());
        i
    }
}

/// Parse edge-list text.
///
/// # Errors
///
/// Returns an [`InputError`] naming the first malformed line.
pub fn parse_edge_list(text: &str) -> Result<EdgeList, InputError> {
    let mut interner = Interner::default();
    let mut records = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split_once('#').map_or(raw, |(before, _)| before);
        let fields: Vec<&str> = content.split_whitespace().collect();

        match fields.as_slice() {
            [] => {}
            [label] => {
                interner.intern(label);
            }
            [source, target, rest @ ..] if rest.len() <= 1 => {
                let weight = rest
                    .first()
                    .map(|token| {
                        token.parse::<f64>().map_err(|_| InputError::InvalidWeight {
                            line,
                            token: (*token).to_string(),
                        })
                    })
                    .transpose()?;
                records.push(Record {
                    source: interner.intern(source),
                    target: interner.intern(target),
                    weight,
                    line,
                });
            }
            _ => {
                return Err(InputError::FieldCount {
                    line,
                    fields: fields.len(),
                });
            }
        }
    }

    Ok(EdgeList {
        labels: interner.labels,
        records,
    })
}

/// Read and parse an edge-list file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed line.
pub fn read_edge_list(path: &Path) -> anyhow::Result<EdgeList> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let list =
        parse_edge_list(&text).with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        vertices = list.labels.len(),
        edges = list.records.len(),
        "edge list loaded"
    );
    Ok(list)
}

//! `centrality betweenness`: per-vertex scores, optionally per-edge scores
//! and the central point dominance.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use super::{Loaded, RunContext};
use crate::output::{format_score, pretty_kv, pretty_rule, pretty_section, render_mode};

/// Arguments for `centrality betweenness`.
#[derive(Args, Debug, Default)]
pub struct BetweennessArgs {
    /// Edge-list file: one `SOURCE TARGET [WEIGHT]` record per line.
    pub file: PathBuf,

    /// Treat every edge as undirected.
    #[arg(long)]
    pub undirected: bool,

    /// Use the third column as edge weight (shortest paths by total weight).
    #[arg(long)]
    pub weighted: bool,

    /// Scale scores by the pair count (overrides `compute.normalize`).
    #[arg(long, conflicts_with = "raw")]
    pub normalize: bool,

    /// Report raw pair counts (overrides `compute.normalize`).
    #[arg(long)]
    pub raw: bool,

    /// Also report per-edge scores.
    #[arg(long)]
    pub edges: bool,

    /// Also report the central point dominance.
    #[arg(long)]
    pub dominance: bool,
}

impl BetweennessArgs {
    /// Effective normalization: flags first, then the config default.
    pub const fn normalize(&self, config_default: bool) -> bool {
        if self.raw {
            false
        } else {
            self.normalize || config_default
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VertexScore {
    pub label: String,
    pub betweenness: f64,
}

#[derive(Debug, Serialize)]
pub struct EdgeScore {
    pub source: String,
    pub target: String,
    pub betweenness: f64,
}

/// Report payload for `centrality betweenness`.
#[derive(Debug, Serialize)]
pub struct BetweennessReport {
    pub directed: bool,
    pub weighted: bool,
    pub normalized: bool,
    pub vertices: Vec<VertexScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub central_point_dominance: Option<f64>,
}

/// Execute `centrality betweenness`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the weights are
/// rejected, or writing the report fails.
pub fn run_betweenness(args: &BetweennessArgs, ctx: &RunContext) -> anyhow::Result<()> {
    let report = build_report(args, ctx)?;
    let precision = ctx.config.output.precision;
    render_mode(
        ctx.output,
        &report,
        |r, w| render_text(r, precision, w),
        |r, w| render_pretty(r, precision, w),
    )
}

fn build_report(args: &BetweennessArgs, ctx: &RunContext) -> anyhow::Result<BetweennessReport> {
    let loaded = Loaded::open(&args.file, args.undirected, args.weighted)?;
    let normalized = args.normalize(ctx.config.compute.normalize);

    let pool = ctx.config.compute.thread_pool()?;
    let bc = pool.install(|| loaded.betweenness(normalized))?;

    let labels = loaded.list.labels();
    let vertex_scores = bc.vertex.to_f64_vec().unwrap_or_default();
    let vertices = labels
        .iter()
        .zip(vertex_scores)
        .map(|(label, betweenness)| VertexScore {
            label: label.clone(),
            betweenness,
        })
        .collect();

    let edges = args.edges.then(|| {
        loaded
            .edges()
            .into_iter()
            .zip(bc.edge.to_f64_vec().unwrap_or_default())
            .map(|(edge, betweenness)| EdgeScore {
                source: labels[edge.source].clone(),
                target: labels[edge.target].clone(),
                betweenness,
            })
            .collect()
    });

    let central_point_dominance = if args.dominance {
        Some(loaded.dominance(&bc.vertex)?)
    } else {
        None
    };

    info!(
        vertices = labels.len(),
        edges = loaded.list.edge_count(),
        normalized,
        "betweenness computed"
    );

    Ok(BetweennessReport {
        directed: loaded.is_directed(),
        weighted: args.weighted,
        normalized,
        vertices,
        edges,
        central_point_dominance,
    })
}

fn render_text(report: &BetweennessReport, precision: usize, w: &mut dyn Write) -> io::Result<()> {
    for v in &report.vertices {
        writeln!(w, "{}\t{}", v.label, format_score(v.betweenness, precision))?;
    }
    if let Some(edges) = &report.edges {
        for e in edges {
            writeln!(
                w,
                "{}\t{}\t{}",
                e.source,
                e.target,
                format_score(e.betweenness, precision)
            )?;
        }
    }
    if let Some(cpd) = report.central_point_dominance {
        writeln!(w, "central_point_dominance\t{}", format_score(cpd, precision))?;
    }
    Ok(())
}

fn render_pretty(report: &BetweennessReport, precision: usize, w: &mut dyn Write) -> io::Result<()> {
    let label_width = report
        .vertices
        .iter()
        .map(|v| v.label.len())
        .max()
        .unwrap_or(0)
        .max("vertex".len());

    pretty_kv(w, "graph", if report.directed { "directed" } else { "undirected" })?;
    pretty_kv(w, "weighted", report.weighted.to_string())?;
    pretty_kv(w, "normalized", report.normalized.to_string())?;
    writeln!(w)?;

    pretty_section(w, "Vertex betweenness")?;
    writeln!(w, "{:<label_width$}  score", "vertex")?;
    for v in &report.vertices {
        writeln!(
            w,
            "{:<label_width$}  {}",
            v.label,
            format_score(v.betweenness, precision)
        )?;
    }

    if let Some(edges) = &report.edges {
        writeln!(w)?;
        pretty_section(w, "Edge betweenness")?;
        for e in edges {
            writeln!(
                w,
                "{} -> {}  {}",
                e.source,
                e.target,
                format_score(e.betweenness, precision)
            )?;
        }
    }

    if let Some(cpd) = report.central_point_dominance {
        writeln!(w)?;
        pretty_rule(w)?;
        pretty_kv(w, "central point dominance", format_score(cpd, precision))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> BetweennessReport {
        BetweennessReport {
            directed: false,
            weighted: false,
            normalized: true,
            vertices: vec![
                VertexScore {
                    label: "hub".to_string(),
                    betweenness: 1.0,
                },
                VertexScore {
                    label: "a".to_string(),
                    betweenness: 0.0,
                },
            ],
            edges: Some(vec![EdgeScore {
                source: "hub".to_string(),
                target: "a".to_string(),
                betweenness: 0.4,
            }]),
            central_point_dominance: Some(1.0),
        }
    }

    #[test]
    fn raw_flag_beats_config_default() {
        let args = BetweennessArgs {
            raw: true,
            ..BetweennessArgs::default()
        };
        assert!(!args.normalize(true));

        let args = BetweennessArgs {
            normalize: true,
            ..BetweennessArgs::default()
        };
        assert!(args.normalize(false));
        assert!(BetweennessArgs::default().normalize(true));
        assert!(!BetweennessArgs::default().normalize(false));
    }

    #[test]
    fn text_rows_are_tab_separated() {
        let mut buf = Vec::new();
        render_text(&report(), 2, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(
            text,
            "hub\t1.00\na\t0.00\nhub\ta\t0.40\ncentral_point_dominance\t1.00\n"
        );
    }

    #[test]
    fn json_omits_unrequested_sections() {
        let mut r = report();
        r.edges = None;
        r.central_point_dominance = None;
        let json = serde_json::to_value(&r).expect("serialize");
        assert!(json.get("edges").is_none());
        assert!(json.get("central_point_dominance").is_none());
        assert_eq!(json["vertices"][0]["label"], "hub");
    }

    #[test]
    fn pretty_output_has_sections() {
        let mut buf = Vec::new();
        render_pretty(&report(), 3, &mut buf).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Vertex betweenness"));
        assert!(text.contains("Edge betweenness"));
        assert!(text.contains("hub -> a  0.400"));
        assert!(text.contains("central point dominance:"));
    }
}

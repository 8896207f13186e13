//! `centrality dominance`: central point dominance of an edge-list graph.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use super::{Loaded, RunContext};
use crate::output::{format_score, pretty_kv, render_mode};

/// Arguments for `centrality dominance`.
#[derive(Args, Debug)]
pub struct DominanceArgs {
    /// Edge-list file: one `SOURCE TARGET [WEIGHT]` record per line.
    pub file: PathBuf,

    /// Treat every edge as undirected.
    #[arg(long)]
    pub undirected: bool,

    /// Use the third column as edge weight.
    #[arg(long)]
    pub weighted: bool,
}

/// Report payload for `centrality dominance`.
#[derive(Debug, Serialize)]
pub struct DominanceReport {
    pub directed: bool,
    pub weighted: bool,
    pub vertices: usize,
    pub central_point_dominance: f64,
}

/// Execute `centrality dominance`.
///
/// Dominance is always taken over normalized scores, so the config's
/// `compute.normalize` does not apply here.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the weights are
/// rejected, or writing the report fails.
pub fn run_dominance(args: &DominanceArgs, ctx: &RunContext) -> anyhow::Result<()> {
    let loaded = Loaded::open(&args.file, args.undirected, args.weighted)?;
    let pool = ctx.config.compute.thread_pool()?;
    let bc = pool.install(|| loaded.betweenness(true))?;
    let cpd = loaded.dominance(&bc.vertex)?;

    info!(vertices = loaded.list.labels().len(), dominance = cpd, "dominance computed");

    let report = DominanceReport {
        directed: loaded.is_directed(),
        weighted: args.weighted,
        vertices: loaded.list.labels().len(),
        central_point_dominance: cpd,
    };
    let precision = ctx.config.output.precision;
    render_mode(
        ctx.output,
        &report,
        |r, w| writeln!(w, "{}", format_score(r.central_point_dominance, precision)),
        |r, w| render_pretty(r, precision, w),
    )
}

fn render_pretty(report: &DominanceReport, precision: usize, w: &mut dyn Write) -> io::Result<()> {
    pretty_kv(w, "graph", if report.directed { "directed" } else { "undirected" })?;
    pretty_kv(w, "vertices", report.vertices.to_string())?;
    pretty_kv(
        w,
        "central point dominance",
        format_score(report.central_point_dominance, precision),
    )
}

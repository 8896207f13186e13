#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;

use std::env;
use std::path::PathBuf;
use std::process;

use centrality_core::{
    CentralityError, ErrorCode,
    config::{CentralityConfig, resolve_config},
};
use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "centrality: betweenness centrality for edge-list graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to `FORMAT`, then pretty on a TTY and text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Config file (defaults to ./centrality.toml, then the user config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads for the computation (overrides `compute.threads`).
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute betweenness centrality",
        long_about = "Compute vertex (and optionally edge) betweenness centrality of an edge-list graph.",
        after_help = "EXAMPLES:\n    # Normalized vertex scores of an undirected graph\n    centrality betweenness graph.txt --undirected\n\n    # Raw weighted scores with edge scores\n    centrality betweenness graph.txt --weighted --raw --edges\n\n    # Emit machine-readable output\n    centrality betweenness graph.txt --dominance --format json"
    )]
    Betweenness(cmd::betweenness::BetweennessArgs),

    #[command(
        about = "Compute central point dominance",
        long_about = "Compute the central point dominance of an edge-list graph from its normalized betweenness.",
        after_help = "EXAMPLES:\n    # Dominance of an undirected graph\n    centrality dominance graph.txt --undirected"
    )]
    Dominance(cmd::dominance::DominanceArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash completions\n    centrality completions bash > /etc/bash_completion.d/centrality"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CENTRALITY_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "centrality=debug,info"
        } else {
            "centrality=info,warn"
        })
    });

    let format = env::var("CENTRALITY_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Map a failure to its machine-readable code by walking the cause chain.
fn error_code(err: &anyhow::Error) -> ErrorCode {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<CentralityError>() {
            return e.code();
        }
        if cause.is::<input::InputError>() || cause.is::<std::io::Error>() {
            return ErrorCode::InputParseError;
        }
        if cause.is::<toml::de::Error>() {
            return ErrorCode::ConfigParseError;
        }
    }
    ErrorCode::InternalUnexpected
}

fn effective_config(cli: &Cli) -> anyhow::Result<CentralityConfig> {
    let cwd = env::current_dir()?;
    let mut config = resolve_config(cli.config.as_deref(), &cwd)?;
    if cli.threads.is_some() {
        config.compute.threads = cli.threads;
    }
    debug!(?config, "configuration resolved");
    Ok(config)
}

fn run(cli: &Cli, output: OutputMode) -> anyhow::Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match &cli.command {
        Commands::Betweenness(args) => {
            let ctx = cmd::RunContext {
                output,
                config: effective_config(cli)?,
            };
            cmd::betweenness::run_betweenness(args, &ctx)
        }
        Commands::Dominance(args) => {
            let ctx = cmd::RunContext {
                output,
                config: effective_config(cli)?,
            };
            cmd::dominance::run_dominance(args, &ctx)
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = resolve_output_mode(cli.format);

    if let Err(err) = run(&cli, output) {
        let code = error_code(&err);
        debug!(code = code.code(), error = ?err, "command failed");
        render_error(
            output,
            &CliError::new(format!("{err:#}"), code.hint(), code.code()),
        )?;
        process::exit(1);
    }
    Ok(())
}

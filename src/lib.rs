// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod matrix;
pub mod query;
pub mod types;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{QueryConfig, default_config_path, load_or_default};
use crate::dag::{Graph, ensure_acyclic};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::matrix::load_matrix;
use crate::query::{BatchOptions, evaluate_batch, write_report};

/// Everything needed to evaluate a batch: the graph, the queries in external
/// numbering, and how to run them.
#[derive(Debug, Clone)]
pub struct Session {
    pub matrix_path: PathBuf,
    pub graph: Graph,
    pub queries: Vec<QueryConfig>,
    pub options: BatchOptions,
}

/// High-level entry point used by `main.rs`.
///
/// Prints one verdict per query on stdout and returns the number of queries
/// that failed.
pub fn run(args: CliArgs) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&args, &RealFileSystem, &mut out)
}

/// [`run`] with an explicit filesystem and output sink.
pub fn run_with<W: Write>(args: &CliArgs, fs: &dyn FileSystem, out: &mut W) -> Result<usize> {
    let session = prepare(args, fs)?;

    if args.dry_run {
        print_dry_run(&session, out)?;
        return Ok(0);
    }

    let outcomes = evaluate_batch(&session.graph, &session.queries, session.options);
    let failed = write_report(&outcomes, out)?;
    out.flush()?;

    info!(
        total = outcomes.len(),
        failed,
        "finished evaluating queries"
    );
    Ok(failed)
}

/// Load config and matrix, build the graph and resolve the query list.
///
/// This wires together:
/// - config loading (explicit `--config`, `Dsep.toml`, or built-in defaults)
/// - matrix ingestion and graph construction
/// - the optional acyclicity check
/// - CLI overrides for queries, index base and parallelism
///
/// Any error here is a configuration problem and no query is evaluated.
pub fn prepare(args: &CliArgs, fs: &dyn FileSystem) -> Result<Session> {
    let (config_path, required) = match &args.config {
        Some(path) => (PathBuf::from(path), true),
        None => (default_config_path(), false),
    };
    let (cfg, config_root) = load_or_default(fs, &config_path, required)?;

    let matrix_path = match &args.input {
        Some(path) => PathBuf::from(path),
        None => resolve_relative(&cfg.config.matrix, config_root.as_deref()),
    };
    let matrix_file = load_matrix(fs, &matrix_path)?;
    let graph = Graph::from_matrix(&matrix_file.matrix);
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built graph"
    );

    if args.check_acyclic || cfg.config.check_acyclic {
        ensure_acyclic(&graph)?;
    }

    let index_base = args.index_base.unwrap_or(cfg.config.index_base);
    let offset = index_base.offset(matrix_file.detected_base);

    let queries = match &args.query {
        Some(values) => vec![QueryConfig::Values(values.clone())],
        None => cfg.query,
    };
    if queries.is_empty() {
        warn!("no queries to evaluate");
    }

    Ok(Session {
        matrix_path,
        graph,
        queries,
        options: BatchOptions {
            offset,
            parallel: args.parallel || cfg.config.parallel,
        },
    })
}

/// Anchor a relative path from the config file at the config's directory.
fn resolve_relative(path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

/// Dry-run output: graph summary and resolved queries.
fn print_dry_run<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "dsep dry-run")?;
    writeln!(out, "  matrix = {}", session.matrix_path.display())?;
    writeln!(
        out,
        "  nodes = {}, edges = {}",
        session.graph.len(),
        session.graph.edge_count()
    )?;
    writeln!(out, "  index offset = {}", session.options.offset)?;
    writeln!(out, "  parallel = {}", session.options.parallel)?;
    writeln!(out)?;

    writeln!(out, "queries ({}):", session.queries.len())?;
    for q in &session.queries {
        writeln!(out, "  - {q}")?;
    }

    debug!("dry-run complete (no evaluation)");
    Ok(())
}

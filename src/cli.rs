// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::IndexBase;

/// Command-line arguments for `dsep`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dsep",
    version,
    about = "Decide d-separation queries over a DAG given as an adjacency matrix.",
    long_about = None
)]
pub struct CliArgs {
    /// Adjacency matrix file. Overrides `[config].matrix`.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Dsep.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Query in the form: START END [OBSERVED...].
    ///
    /// When omitted, the queries from the config file are run.
    #[arg(long = "q", value_name = "INT", num_args = 1.., allow_negative_numbers = true)]
    pub query: Option<Vec<i64>>,

    /// Numbering of node labels in queries.
    ///
    /// `auto` follows the matrix file's index column (one-based if absent).
    #[arg(long, value_enum, value_name = "BASE")]
    pub index_base: Option<IndexBase>,

    /// Reject matrices that contain a directed cycle before evaluating.
    #[arg(long)]
    pub check_acyclic: bool,

    /// Evaluate queries in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DSEP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and validate the matrix and queries, print them, evaluate nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

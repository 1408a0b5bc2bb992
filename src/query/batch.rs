// src/query/batch.rs

use std::io::Write;

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::config::QueryConfig;
use crate::dag::Graph;
use crate::errors::Result;
use crate::query::external::ExternalQuery;
use crate::types::render_verdict;

/// How a batch is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Subtracted from every external label to get a node index.
    pub offset: i64,
    /// Fan queries out over the rayon pool.
    pub parallel: bool,
}

/// Result of one query in a batch.
#[derive(Debug)]
pub struct QueryOutcome {
    pub input: QueryConfig,
    /// `Ok(true)` when d-separated. An error aborts only this query.
    pub result: Result<bool>,
}

impl QueryOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// `TRUE` / `FALSE`, or `None` if the query failed.
    pub fn verdict(&self) -> Option<&'static str> {
        self.result.as_ref().ok().map(|&sep| render_verdict(sep))
    }
}

/// Evaluate every query against `graph`, in input order.
///
/// Malformed queries, bad indices and engine errors are captured in the
/// corresponding [`QueryOutcome`]; they never stop the other queries.
pub fn evaluate_batch(
    graph: &Graph,
    queries: &[QueryConfig],
    options: BatchOptions,
) -> Vec<QueryOutcome> {
    info!(
        queries = queries.len(),
        nodes = graph.len(),
        parallel = options.parallel,
        "evaluating queries"
    );

    let run = |input: &QueryConfig| QueryOutcome {
        input: input.clone(),
        result: evaluate_one(graph, input, options.offset),
    };

    if options.parallel {
        queries.par_iter().map(run).collect()
    } else {
        queries.iter().map(run).collect()
    }
}

fn evaluate_one(graph: &Graph, input: &QueryConfig, offset: i64) -> Result<bool> {
    let external = ExternalQuery::try_from(input)?;
    let query = external.reindex(offset, graph.len())?;
    let separated = query.evaluate(graph)?;
    debug!(query = %external, separated, "query evaluated");
    Ok(separated)
}

/// Write one `TRUE` / `FALSE` line per successful query to `out` and log
/// the failed ones. Returns the number of failed queries.
pub fn write_report<W: Write>(outcomes: &[QueryOutcome], out: &mut W) -> std::io::Result<usize> {
    let mut failed = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(separated) => writeln!(out, "{}", render_verdict(*separated))?,
            Err(e) => {
                failed += 1;
                error!(query = %outcome.input, error = %e, "query failed");
            }
        }
    }
    Ok(failed)
}

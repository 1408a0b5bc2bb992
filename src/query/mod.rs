// src/query/mod.rs

//! Query ingestion and batch evaluation.
//!
//! - [`external`] turns user-facing queries (file numbering, possibly
//!   malformed) into zero-based [`crate::dag::Query`] values.
//! - [`batch`] evaluates many queries against one graph, isolating failures
//!   per query, and renders the `TRUE` / `FALSE` report.

pub mod batch;
pub mod external;

pub use batch::{BatchOptions, QueryOutcome, evaluate_batch, write_report};
pub use external::ExternalQuery;

// src/dag/mod.rs

//! DAG representation and the d-separation engine.
//!
//! - [`graph`] holds the immutable node arena built from an adjacency matrix.
//! - [`ancestors`] computes the ancestor closure of an observed set.
//! - [`separation`] runs the direction-tagged trail search.
//! - [`validate`] offers an optional acyclicity check for callers that want
//!   one; the engine itself never runs it.

pub mod ancestors;
pub mod graph;
pub mod separation;
pub mod validate;

pub use ancestors::ancestor_closure;
pub use graph::{Graph, Node};
pub use separation::{Query, is_d_separated};
pub use validate::ensure_acyclic;

// src/dag/separation.rs

//! D-separation via a direction-tagged trail search (Bayes-Ball).
//!
//! The search walks the graph from `start`, tagging every visit with the
//! [`Direction`] it arrived from. The tag decides which of the three path
//! shapes is being traversed at a node:
//!
//! - chain / fork through an unobserved node: the trail passes.
//! - chain / fork through an observed node: blocked.
//! - collider (arrived `Down`, leaving `Up`): passes only if the node is
//!   observed or is an ancestor of an observed node.
//!
//! `start` and `end` are d-separated iff no trail reaches `end` while `end`
//! is unobserved.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::dag::ancestors::ancestor_closure;
use crate::dag::graph::Graph;
use crate::errors::{DsepError, Result};
use crate::types::{Direction, NodeIndex};

/// A d-separation query over zero-based node indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub start: NodeIndex,
    pub end: NodeIndex,
    pub observed: BTreeSet<NodeIndex>,
}

impl Query {
    pub fn new(
        start: NodeIndex,
        end: NodeIndex,
        observed: impl IntoIterator<Item = NodeIndex>,
    ) -> Self {
        Self {
            start,
            end,
            observed: observed.into_iter().collect(),
        }
    }

    /// Evaluate this query against `graph`; see [`is_d_separated`].
    pub fn evaluate(&self, graph: &Graph) -> Result<bool> {
        is_d_separated(graph, self.start, self.end, &self.observed)
    }
}

/// Returns `true` if `start` and `end` are d-separated given `observed`.
///
/// Every index must name a node of `graph`, otherwise
/// [`DsepError::IndexOutOfRange`] is returned. The graph is assumed to be
/// acyclic; on cyclic input the search still terminates but the verdict has
/// no meaning.
///
/// A node is never separated from itself unless it is observed: with
/// `start == end` the very first visit terminates the search.
pub fn is_d_separated(
    graph: &Graph,
    start: NodeIndex,
    end: NodeIndex,
    observed: &BTreeSet<NodeIndex>,
) -> Result<bool> {
    for &index in [start, end].iter().chain(observed.iter()) {
        ensure_in_range(graph, index)?;
    }

    let obs_anc = ancestor_closure(graph, observed);

    let mut trail: Vec<(NodeIndex, Direction)> = vec![(start, Direction::Up)];
    let mut visited: HashSet<(NodeIndex, Direction)> = HashSet::new();

    while let Some((node, direction)) = trail.pop() {
        if !visited.insert((node, direction)) {
            continue;
        }

        let is_observed = observed.contains(&node);

        if node == end && !is_observed {
            debug!(start, end, visited = visited.len(), "active trail found");
            return Ok(false);
        }

        match direction {
            // Arrived from a child: an unobserved node lets the trail go both
            // ways; an observed one blocks it.
            Direction::Up => {
                if !is_observed {
                    push_all(&mut trail, graph.parents_of(node), Direction::Up);
                    push_all(&mut trail, graph.children_of(node), Direction::Down);
                }
            }
            // Arrived from a parent.
            Direction::Down => {
                if !is_observed {
                    push_all(&mut trail, graph.children_of(node), Direction::Down);
                }
                // v-structure opened by conditioning on the node or a descendant.
                if is_observed || obs_anc.contains(&node) {
                    push_all(&mut trail, graph.parents_of(node), Direction::Up);
                }
            }
        }
    }

    debug!(start, end, visited = visited.len(), "no active trail");
    Ok(true)
}

fn push_all(
    trail: &mut Vec<(NodeIndex, Direction)>,
    nodes: &[NodeIndex],
    direction: Direction,
) {
    trail.extend(nodes.iter().map(|&n| (n, direction)));
}

fn ensure_in_range(graph: &Graph, index: NodeIndex) -> Result<()> {
    if graph.contains(index) {
        Ok(())
    } else {
        Err(DsepError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            node_count: graph.len(),
        })
    }
}

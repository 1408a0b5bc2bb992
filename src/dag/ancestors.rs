// src/dag/ancestors.rs

//! Ancestor closure of an observed set.

use std::collections::HashSet;

use crate::dag::graph::Graph;
use crate::types::NodeIndex;

/// Every node reachable by following parent edges from any node in
/// `observed`.
///
/// Observed nodes are only included when they are themselves an ancestor of
/// another observed node. An empty `observed` yields an empty set.
pub fn ancestor_closure<'a, I>(graph: &Graph, observed: I) -> HashSet<NodeIndex>
where
    I: IntoIterator<Item = &'a NodeIndex>,
{
    // Start from the direct parents of every observed node and walk upwards.
    let mut stack: Vec<NodeIndex> = observed
        .into_iter()
        .flat_map(|&o| graph.parents_of(o).iter().copied())
        .collect();
    let mut ancestors: HashSet<NodeIndex> = HashSet::new();

    while let Some(current) = stack.pop() {
        if !ancestors.insert(current) {
            continue;
        }
        stack.extend(graph.parents_of(current).iter().copied());
    }

    ancestors
}

// src/dag/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::Graph;
use crate::errors::{DsepError, Result};
use crate::types::NodeIndex;

/// Check that `graph` has no directed cycle.
///
/// The separation engine assumes acyclic input and never calls this; the
/// driver runs it only when asked to.
pub fn ensure_acyclic(graph: &Graph) -> Result<()> {
    let mut g: DiGraphMap<NodeIndex, ()> =
        DiGraphMap::with_capacity(graph.len(), graph.edge_count());

    for node in graph.nodes() {
        g.add_node(node.index());
    }
    for (from, to) in graph.edges() {
        g.add_edge(from, to, ());
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&g, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(DsepError::DagCycle(format!(
            "cycle detected in adjacency matrix involving node {}",
            cycle.node_id()
        ))),
    }
}

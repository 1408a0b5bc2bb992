// src/dag/graph.rs

use crate::matrix::AdjacencyMatrix;
use crate::types::NodeIndex;

/// A single node: its index plus immediate parents and children.
///
/// Neighbours are stored as indices into the owning [`Graph`]'s node array,
/// never as separate node values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    index: NodeIndex,
    /// Nodes `p` with an edge `p -> self`.
    parents: Vec<NodeIndex>,
    /// Nodes `c` with an edge `self -> c`.
    children: Vec<NodeIndex>,
}

impl Node {
    fn new(index: NodeIndex) -> Self {
        Self {
            index,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn parents(&self) -> &[NodeIndex] {
        &self.parents
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// Immutable directed graph over nodes `0..N`.
///
/// Acyclicity is assumed, not checked; see [`crate::dag::ensure_acyclic`]
/// for callers that want to verify it up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Build a graph from a square adjacency matrix.
    ///
    /// Every set entry `(i, j)` is visited exactly once and contributes
    /// `j` to `i`'s children and `i` to `j`'s parents.
    pub fn from_matrix(matrix: &AdjacencyMatrix) -> Self {
        let mut graph = Self::with_nodes(matrix.size());
        for (from, to) in matrix.edges() {
            graph.link(from, to);
        }
        graph
    }

    /// Build a graph with `size` nodes from an edge list.
    ///
    /// Duplicate edges are collapsed. Panics if an endpoint is `>= size`;
    /// go through [`AdjacencyMatrix::from_edges`] for a checked variant.
    pub fn from_edges(size: usize, edges: &[(NodeIndex, NodeIndex)]) -> Self {
        let mut graph = Self::with_nodes(size);
        for &(from, to) in edges {
            if !graph.nodes[from].children.contains(&to) {
                graph.link(from, to);
            }
        }
        graph
    }

    fn with_nodes(size: usize) -> Self {
        Self {
            nodes: (0..size).map(Node::new).collect(),
        }
    }

    fn link(&mut self, from: NodeIndex, to: NodeIndex) {
        self.nodes[from].children.push(to);
        self.nodes[to].parents.push(from);
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `index` names a node of this graph.
    pub fn contains(&self, index: NodeIndex) -> bool {
        index < self.nodes.len()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Immediate parents of a node; empty for unknown indices.
    pub fn parents_of(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes
            .get(index)
            .map(|n| n.parents.as_slice())
            .unwrap_or(&[])
    }

    /// Immediate children of a node; empty for unknown indices.
    pub fn children_of(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes
            .get(index)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }

    /// All edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.children.iter().map(move |&c| (n.index, c)))
    }
}

impl From<&AdjacencyMatrix> for Graph {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        Graph::from_matrix(matrix)
    }
}

#![allow(dead_code)]

use dsep::dag::Graph;
use dsep::matrix::AdjacencyMatrix;

/// Builder for small DAGs used across tests.
///
/// Produces either an in-memory [`Graph`] or the text of a matrix file in
/// the format `dsep` reads (header line, optional index column).
#[derive(Debug, Clone)]
pub struct DagBuilder {
    size: usize,
    edges: Vec<(usize, usize)>,
    index_column: Option<i64>,
}

impl DagBuilder {
    /// A graph with `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            edges: Vec::new(),
            index_column: None,
        }
    }

    /// Add edge `from -> to` (zero-based).
    pub fn edge(mut self, from: usize, to: usize) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Add a chain `nodes[0] -> nodes[1] -> ...`.
    pub fn chain(mut self, nodes: &[usize]) -> Self {
        for pair in nodes.windows(2) {
            self.edges.push((pair[0], pair[1]));
        }
        self
    }

    /// Emit a leading index column whose labels start at `first_label`.
    pub fn with_index_column(mut self, first_label: i64) -> Self {
        self.index_column = Some(first_label);
        self
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn build_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(self.size, &self.edges)
            .expect("DagBuilder edges must fit the declared size")
    }

    pub fn build(&self) -> Graph {
        Graph::from_matrix(&self.build_matrix())
    }

    /// Text of a matrix file for this graph.
    pub fn to_matrix_text(&self) -> String {
        let matrix = self.build_matrix();
        let mut text = String::new();

        // Header row: column labels.
        let first = self.index_column.unwrap_or(1);
        let labels: Vec<String> = (0..self.size)
            .map(|i| (first + i as i64).to_string())
            .collect();
        text.push_str(&labels.join(" "));
        text.push('\n');

        for row in 0..self.size {
            let mut fields = Vec::with_capacity(self.size + 1);
            if let Some(first) = self.index_column {
                fields.push((first + row as i64).to_string());
            }
            for col in 0..self.size {
                fields.push(if matrix.get(row, col) { "1" } else { "0" }.to_string());
            }
            text.push_str(&fields.join(" "));
            text.push('\n');
        }
        text
    }
}

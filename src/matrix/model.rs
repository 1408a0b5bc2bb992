// src/matrix/model.rs

use crate::errors::{DsepError, Result};
use crate::types::NodeIndex;

/// Square boolean adjacency matrix: entry `(i, j)` set means edge `i -> j`.
///
/// Squareness is enforced at construction, so anything holding an
/// `AdjacencyMatrix` can build a graph from it without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    /// Row-major, `size * size` entries.
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Build a matrix from rows, rejecting anything that is not `N x N`.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DsepError::ConfigError(format!(
                    "adjacency matrix is not square: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Build an `size x size` matrix with the given edges set.
    pub fn from_edges(size: usize, edges: &[(NodeIndex, NodeIndex)]) -> Result<Self> {
        let mut cells = vec![false; size * size];
        for &(from, to) in edges {
            if from >= size || to >= size {
                return Err(DsepError::ConfigError(format!(
                    "edge {from} -> {to} does not fit a {size}x{size} matrix"
                )));
            }
            cells[from * size + to] = true;
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether edge `from -> to` is present. Out-of-range indices read as absent.
    pub fn get(&self, from: NodeIndex, to: NodeIndex) -> bool {
        from < self.size && to < self.size && self.cells[from * self.size + to]
    }

    /// All `(from, to)` pairs with a set entry, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(pos, _)| (pos / size, pos % size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = AdjacencyMatrix::from_rows(vec![vec![false, true], vec![false]]).unwrap_err();
        match err {
            DsepError::ConfigError(msg) => assert!(msg.contains("not square")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn rejects_more_columns_than_rows() {
        let rows = vec![vec![false, true, false], vec![false, false, false]];
        assert!(AdjacencyMatrix::from_rows(rows).is_err());
    }

    #[test]
    fn edges_are_listed_row_major() {
        let m = AdjacencyMatrix::from_edges(3, &[(2, 0), (0, 1), (0, 2)]).unwrap();
        let edges: Vec<_> = m.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (2, 0)]);
        assert!(m.get(2, 0));
        assert!(!m.get(1, 0));
        assert!(!m.get(7, 0));
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        assert!(AdjacencyMatrix::from_edges(2, &[(0, 2)]).is_err());
    }
}

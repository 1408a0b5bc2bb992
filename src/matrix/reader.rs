// src/matrix/reader.rs

//! Text format for adjacency matrices.
//!
//! ```text
//!    1 2 3
//! 1  0 0 1
//! 2  0 0 1
//! 3  0 0 0
//! ```
//!
//! - The first line is a header and is always skipped.
//! - Blank lines and lines starting with `#` are ignored.
//! - Fields are separated by whitespace and/or commas.
//! - Rows may carry a leading index column; it is detected when the first
//!   data row has exactly one more field than there are data rows. Its first
//!   label tells us whether the file numbers nodes from 0 or from 1.

use std::path::Path;

use tracing::debug;

use crate::errors::{DsepError, Result};
use crate::fs::FileSystem;
use crate::matrix::model::AdjacencyMatrix;
use crate::types::IndexBase;

/// A parsed matrix file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFile {
    pub matrix: AdjacencyMatrix,
    /// Base implied by the index column, or `None` if the file has none.
    pub detected_base: Option<IndexBase>,
}

/// Read and parse a matrix file through the given filesystem.
pub fn load_matrix(fs: &dyn FileSystem, path: &Path) -> Result<MatrixFile> {
    let contents = fs.read_to_string(path).map_err(|e| {
        DsepError::ConfigError(format!("cannot read matrix file {}: {e:#}", path.display()))
    })?;
    let parsed = parse_matrix(&contents).map_err(|e| match e {
        DsepError::ConfigError(msg) => {
            DsepError::ConfigError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;
    debug!(
        path = %path.display(),
        nodes = parsed.matrix.size(),
        base = ?parsed.detected_base,
        "loaded adjacency matrix"
    );
    Ok(parsed)
}

/// Parse the textual matrix format described in the module docs.
pub fn parse_matrix(contents: &str) -> Result<MatrixFile> {
    let rows = contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(lineno, line)| parse_row(lineno + 1, line))
        .collect::<Result<Vec<_>>>()?;

    let Some(first) = rows.first() else {
        return Err(DsepError::ConfigError(
            "matrix file contains no rows after the header".to_string(),
        ));
    };

    let row_count = rows.len();
    let has_index_column = first.len() == row_count + 1;
    let detected_base = if has_index_column {
        Some(if first[0] == 0.0 {
            IndexBase::Zero
        } else {
            IndexBase::One
        })
    } else {
        None
    };

    let width = first.len();
    let mut matrix_rows = Vec::with_capacity(row_count);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(DsepError::ConfigError(format!(
                "matrix row {} has {} fields, expected {}",
                i + 1,
                row.len(),
                width
            )));
        }
        let values = if has_index_column { &row[1..] } else { &row[..] };
        let cells = values
            .iter()
            .enumerate()
            .map(|(j, v)| to_cell(*v, i, j))
            .collect::<Result<Vec<_>>>()?;
        matrix_rows.push(cells);
    }

    let matrix = AdjacencyMatrix::from_rows(matrix_rows)?;
    Ok(MatrixFile {
        matrix,
        detected_base,
    })
}

fn parse_row(lineno: usize, line: &str) -> Result<Vec<f64>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                DsepError::ConfigError(format!(
                    "line {lineno}: '{field}' is not a number"
                ))
            })
        })
        .collect()
}

fn to_cell(value: f64, row: usize, col: usize) -> Result<bool> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(DsepError::ConfigError(format!(
            "matrix entry ({row}, {col}) must be 0 or 1, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;

    #[test]
    fn strips_index_column_and_detects_one_based_labels() {
        let text = "  1 2 3\n1 0 0 1\n2 0 0 1\n3 0 0 0\n";
        let parsed = parse_matrix(text).unwrap();
        assert_eq!(parsed.detected_base, Some(IndexBase::One));
        assert_eq!(parsed.matrix.size(), 3);
        let edges: Vec<_> = parsed.matrix.edges().collect();
        assert_eq!(edges, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn detects_zero_based_labels() {
        let text = "x 0 1\n0 0 1\n1 0 0\n";
        let parsed = parse_matrix(text).unwrap();
        assert_eq!(parsed.detected_base, Some(IndexBase::Zero));
        assert!(parsed.matrix.get(0, 1));
    }

    #[test]
    fn accepts_plain_matrix_with_commas_and_floats() {
        let text = "a,b\n0.0, 1.0\n\n0,0\n";
        let parsed = parse_matrix(text).unwrap();
        assert_eq!(parsed.detected_base, None);
        assert_eq!(parsed.matrix.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn header_only_file_is_a_config_error() {
        let err = parse_matrix("1 2 3\n").unwrap_err();
        assert!(matches!(err, DsepError::ConfigError(_)));
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        // Two rows of four fields: neither N nor N + 1 columns.
        let text = "h\n0 1 0 0\n0 0 0 0\n";
        let err = parse_matrix(text).unwrap_err();
        match err {
            DsepError::ConfigError(msg) => assert!(msg.contains("not square")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let text = "h\n0 1\n0\n";
        assert!(matches!(
            parse_matrix(text),
            Err(DsepError::ConfigError(_))
        ));
    }

    #[test]
    fn non_binary_and_non_numeric_entries_are_rejected() {
        assert!(matches!(
            parse_matrix("h\n0 2\n0 0\n"),
            Err(DsepError::ConfigError(_))
        ));
        assert!(matches!(
            parse_matrix("h\n0 x\n0 0\n"),
            Err(DsepError::ConfigError(_))
        ));
    }

    #[test]
    fn load_matrix_reads_through_filesystem_and_names_the_file() {
        let fs = MockFileSystem::new();
        fs.add_file("dag.txt", "h\n0 1\n0 0\n");
        fs.add_file("bad.txt", "h\n0 1 1\n");

        let parsed = load_matrix(&fs, Path::new("dag.txt")).unwrap();
        assert_eq!(parsed.matrix.size(), 2);

        match load_matrix(&fs, Path::new("bad.txt")) {
            Err(DsepError::ConfigError(msg)) => assert!(msg.contains("bad.txt")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
        match load_matrix(&fs, Path::new("missing.txt")) {
            Err(DsepError::ConfigError(msg)) => {
                assert!(msg.contains("cannot read matrix file"));
                assert!(msg.contains("missing.txt"));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }
}

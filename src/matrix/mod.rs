// src/matrix/mod.rs

//! Adjacency matrix ingestion.
//!
//! - [`model`] holds the validated square [`AdjacencyMatrix`].
//! - [`reader`] parses the text file format (header line, optional index
//!   column) into a matrix plus the index base its labels use.

pub mod model;
pub mod reader;

pub use model::AdjacencyMatrix;
pub use reader::{MatrixFile, load_matrix, parse_matrix};

// tests/error_handling.rs

use std::collections::BTreeSet;
use std::io::Write;

use dsep::dag::{Graph, is_d_separated};
use dsep::errors::DsepError;
use dsep::fs::RealFileSystem;
use tempfile::NamedTempFile;

mod common;
use common::{args, path_str};

fn matrix_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();
    file
}

#[test]
fn test_non_square_matrix_is_a_configuration_error() {
    // Two rows of four fields: neither N nor N + 1 columns.
    let file = matrix_file("h\n0 1 0 0\n0 0 1 0\n");
    let path = path_str(file.path());

    let result = dsep::prepare(&args(&["--input", &path, "--q", "1", "2"]), &RealFileSystem);

    match result {
        Err(DsepError::ConfigError(msg)) => assert!(msg.contains("not square")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_cyclic_matrix_rejected_only_when_checked() {
    let file = matrix_file("h\n1 0 1\n2 1 0\n");
    let path = path_str(file.path());

    let unchecked = dsep::prepare(&args(&["--input", &path, "--q", "1", "2"]), &RealFileSystem);
    assert!(unchecked.is_ok());

    let checked = dsep::prepare(
        &args(&["--input", &path, "--q", "1", "2", "--check-acyclic"]),
        &RealFileSystem,
    );
    match checked {
        Err(DsepError::DagCycle(msg)) => assert!(msg.contains("cycle detected")),
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let result = dsep::prepare(&args(&["--config", &path_str(&missing)]), &RealFileSystem);
    assert!(result.is_err());
}

#[test]
fn test_engine_reports_out_of_range_instead_of_a_verdict() {
    let graph = Graph::from_edges(2, &[(0, 1)]);
    let observed: BTreeSet<usize> = [5].into_iter().collect();
    match is_d_separated(&graph, 0, 1, &observed) {
        Err(DsepError::IndexOutOfRange { index, node_count }) => {
            assert_eq!(index, 5);
            assert_eq!(node_count, 2);
        }
        other => panic!("Expected IndexOutOfRange, got: {:?}", other),
    }
}

#[test]
fn test_malformed_cli_query_fails_only_that_query() {
    let file = matrix_file("h\n0 1\n0 0\n");
    let path = path_str(file.path());

    let (result, stdout) = common::run_capture(&args(&["--input", &path, "--q", "1"]));
    assert_eq!(result.unwrap(), 1);
    assert!(stdout.is_empty());
}

#[test]
fn test_unreadable_matrix_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = path_str(&dir.path().join("absent.txt"));

    match dsep::prepare(&args(&["--input", &missing, "--q", "1", "2"]), &RealFileSystem) {
        Err(DsepError::ConfigError(msg)) => assert!(msg.contains("absent.txt")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

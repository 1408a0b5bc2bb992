// src/config/model.rs

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::types::IndexBase;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [config]
/// matrix = "dag.txt"
/// index_base = "auto"
/// check_acyclic = false
/// parallel = false
///
/// [[query]]
/// start = 61
/// end = 68
/// observed = [4, 19, 90]
///
/// # or the compact CLI-style form: start end observed...
/// # query = [[61, 68, 4, 19, 90]]
/// ```
///
/// All sections are optional. When `query` is absent, the two demo queries
/// from [`default_queries`] are used.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default = "default_queries")]
    pub query: Vec<QueryConfig>,
}

impl Default for RawConfigFile {
    fn default() -> Self {
        Self {
            config: ConfigSection::default(),
            query: default_queries(),
        }
    }
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub query: Vec<QueryConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(config: ConfigSection, query: Vec<QueryConfig>) -> Self {
        Self { config, query }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    /// Path to the adjacency matrix file.
    ///
    /// Relative paths are resolved against the config file's directory.
    #[serde(default = "default_matrix_path")]
    pub matrix: PathBuf,

    /// How node labels in queries are numbered.
    #[serde(default)]
    pub index_base: IndexBase,

    /// Reject cyclic matrices before running any query.
    #[serde(default)]
    pub check_acyclic: bool,

    /// Evaluate queries on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

fn default_matrix_path() -> PathBuf {
    PathBuf::from("dag.txt")
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            matrix: default_matrix_path(),
            index_base: IndexBase::default(),
            check_acyclic: false,
            parallel: false,
        }
    }
}

/// One query in external (file) numbering.
///
/// Either a table with named fields, or a flat list `start end observed...`
/// as typed on the command line. The flat form is checked for arity when
/// the query is resolved, not at load time, so one bad entry does not sink
/// the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QueryConfig {
    // Listed first: a struct variant would also accept a short array.
    Values(Vec<i64>),
    Fields {
        start: i64,
        end: i64,
        #[serde(default)]
        observed: Vec<i64>,
    },
}

impl fmt::Display for QueryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryConfig::Values(values) => write!(f, "{values:?}"),
            QueryConfig::Fields {
                start,
                end,
                observed,
            } => write!(f, "{start} {end} {observed:?}"),
        }
    }
}

/// Demo queries run when neither the command line nor the config file
/// supplies any.
pub fn default_queries() -> Vec<QueryConfig> {
    vec![
        QueryConfig::Fields {
            start: 61,
            end: 68,
            observed: vec![4, 19, 90],
        },
        QueryConfig::Fields {
            start: 55,
            end: 27,
            observed: vec![4, 8, 9, 12, 29, 32, 40, 44, 45, 48, 50, 52],
        },
    ]
}

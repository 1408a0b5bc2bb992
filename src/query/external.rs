// src/query/external.rs

use std::fmt;

use crate::config::QueryConfig;
use crate::dag::Query;
use crate::errors::{DsepError, Result};
use crate::types::NodeIndex;

/// Minimum number of integers in a flat query: `start end`.
pub const MIN_QUERY_VALUES: usize = 2;

/// A query in external numbering, as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalQuery {
    pub start: i64,
    pub end: i64,
    pub observed: Vec<i64>,
}

impl ExternalQuery {
    /// Parse a flat `start end observed...` list.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        match values {
            [start, end, observed @ ..] => Ok(Self {
                start: *start,
                end: *end,
                observed: observed.to_vec(),
            }),
            _ => Err(DsepError::MalformedQuery(format!(
                "expected at least {} integers (start end [observed...]), got {}",
                MIN_QUERY_VALUES,
                values.len()
            ))),
        }
    }

    /// Map to zero-based indices: `internal = external - offset`.
    ///
    /// Labels below `offset` or at/after `node_count` after shifting are
    /// reported as [`DsepError::IndexOutOfRange`].
    pub fn reindex(&self, offset: i64, node_count: usize) -> Result<Query> {
        let shift = |label: i64| -> Result<NodeIndex> {
            let Some(index) = label.checked_sub(offset) else {
                return Err(DsepError::IndexOutOfRange {
                    index: label,
                    node_count,
                });
            };
            match NodeIndex::try_from(index) {
                Ok(i) if i < node_count => Ok(i),
                _ => Err(DsepError::IndexOutOfRange { index, node_count }),
            }
        };

        let observed = self
            .observed
            .iter()
            .map(|&o| shift(o))
            .collect::<Result<Vec<_>>>()?;

        Ok(Query::new(shift(self.start)?, shift(self.end)?, observed))
    }
}

impl TryFrom<&QueryConfig> for ExternalQuery {
    type Error = DsepError;

    fn try_from(cfg: &QueryConfig) -> std::result::Result<Self, Self::Error> {
        match cfg {
            QueryConfig::Values(values) => ExternalQuery::from_values(values),
            QueryConfig::Fields {
                start,
                end,
                observed,
            } => Ok(ExternalQuery {
                start: *start,
                end: *end,
                observed: observed.clone(),
            }),
        }
    }
}

impl fmt::Display for ExternalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)?;
        if !self.observed.is_empty() {
            write!(f, " |")?;
            for o in &self.observed {
                write!(f, " {o}")?;
            }
        }
        Ok(())
    }
}

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Internal, zero-based node index.
pub type NodeIndex = usize;

/// Direction in which the trail search most recently entered a node.
///
/// - `Up`: arrived from a child, moving towards parents (also the tag of the
///   starting node).
/// - `Down`: arrived from a parent, moving towards children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Numbering used for node labels in matrix files and queries.
///
/// - `Auto`: take the base from the matrix file's index column (first label
///   `0` means zero-based), falling back to one-based when there is none.
/// - `Zero` / `One`: force the base regardless of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    Auto,
    Zero,
    One,
}

impl Default for IndexBase {
    fn default() -> Self {
        IndexBase::Auto
    }
}

impl IndexBase {
    /// Offset subtracted from external labels, once `Auto` has been resolved.
    ///
    /// `detected` is the base found in the matrix file, if any.
    pub fn offset(self, detected: Option<IndexBase>) -> i64 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
            IndexBase::Auto => match detected {
                Some(IndexBase::Zero) => 0,
                _ => 1,
            },
        }
    }
}

/// Textual rendering of a separation verdict (`TRUE` / `FALSE`).
pub fn render_verdict(separated: bool) -> &'static str {
    if separated { "TRUE" } else { "FALSE" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_base_follows_detected_labels() {
        assert_eq!(IndexBase::Auto.offset(Some(IndexBase::Zero)), 0);
        assert_eq!(IndexBase::Auto.offset(Some(IndexBase::One)), 1);
        assert_eq!(IndexBase::Auto.offset(None), 1);
        assert_eq!(IndexBase::Zero.offset(Some(IndexBase::One)), 0);
    }

    #[test]
    fn verdicts_render_uppercase() {
        assert_eq!(render_verdict(true), "TRUE");
        assert_eq!(render_verdict(false), "FALSE");
    }
}

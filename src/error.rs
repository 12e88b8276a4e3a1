//! Error types for treealign

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treealign operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading inputs or aligning trees
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Cell count mismatch: a {rows}x{cols} table needs {} cells, found {found}", rows * cols)]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("Node {node} out of range for a tree of {len} nodes")]
    NodeOutOfRange { node: usize, len: usize },

    #[error("Worker error: {0}")]
    Worker(String),
}

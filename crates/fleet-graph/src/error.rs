//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `fleet-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("adjacency parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("a path must contain at least one node")]
    EmptyPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;

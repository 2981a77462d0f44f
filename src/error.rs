//! Error types shared by the reduction and search layers

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ReduceError>;

/// Errors raised by the reduction pipeline and the cover search.
///
/// An exhausted exact-size search is not an error: it is reported as
/// `Ok(None)` by [`crate::search::CoverSearch::find_cover_of_size`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// Token count is zero or not a multiple of three
    #[error("malformed 3-CNF: {tokens} literal(s), expected a positive multiple of 3")]
    MalformedCnf { tokens: usize },

    /// Variables are numbered from 1, so a literal can never be 0
    #[error("literal at position {position} is 0")]
    ZeroLiteral { position: usize },

    /// Variable number above [`crate::sat::cnf::MAX_VARIABLE`]
    #[error("literal {literal} at position {position} is out of range")]
    LiteralOutOfRange { position: usize, literal: i32 },

    /// Adjacency relation is not square, not symmetric or not 0/1
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// A cover or clique vector does not match the graph it is applied to
    #[error("vector of length {actual} does not match {expected} vertices")]
    CoverLength { expected: usize, actual: usize },

    /// The cooperative deadline passed before the search finished
    #[error("search stopped after {elapsed_ms} ms")]
    SearchTimeout { elapsed_ms: u64 },

    /// Token-level failure while reading an input batch
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// Reasons a grid may be rejected while being built.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GridInvalidReason {
    /// A declared dimension was zero.
    ZeroDimension,
    /// A row did not have the declared width.
    RowLengthMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// The declared width.
        expected: usize,
        /// The number of cells actually supplied.
        found: usize,
    },
    /// More rows were supplied than the declared height allows.
    TooManyRows,
    /// Fewer rows were supplied than the declared height.
    #[allow(missing_docs)]
    MissingRows { expected: usize, found: usize },
}

impl Display for GridInvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "grid dimensions must be positive"),
            Self::RowLengthMismatch { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::TooManyRows => write!(f, "more rows than the declared height"),
            Self::MissingRows { expected, found } => write!(f, "expected {expected} rows, got {found}"),
        }
    }
}

/// Everything that can go wrong while indexing, searching or reading queries.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum WordSearchError {
    /// The grid was not a non-empty rectangle.
    #[error("invalid grid format: {}", .reasons.iter().join("; "))]
    InvalidGridFormat { reasons: Vec<GridInvalidReason> },

    /// A word was empty or contained whitespace.
    #[error("invalid word format: {word:?}")]
    InvalidWordFormat { word: String },

    /// The input text did not follow the query format.
    #[error("invalid input on line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    /// A search visited more partial paths than its budget allows.
    #[error("search budget of {budget} nodes exhausted after exploring {explored}")]
    ResourceExhausted { explored: u64, budget: u64 },

    /// A word was longer than the search depth guard.
    #[error("word of length {depth} exceeds the search depth limit of {limit}")]
    DepthExceeded { depth: usize, limit: usize },

    /// The input file could not be read.
    #[error("unable to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl WordSearchError {
    pub(crate) fn invalid_input(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput { line, reason: reason.into() }
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, WordSearchError>;

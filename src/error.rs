//! Error types for the solver
//!
//! Cache exhaustion is the only failure a running search can hit; everything
//! else (passes, terminal positions) is ordinary control flow.

use crate::game_repr::Side;

/// Errors raised while building positions or searching them
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The transposition table could not grow any further
    #[error("transposition table exhausted after {entries} entries")]
    CacheExhausted { entries: usize },

    /// A recorded play is not legal in the position it is applied to
    #[error("illegal move {cell} for {side:?} at ply {ply}")]
    IllegalMove { ply: usize, cell: usize, side: Side },
}

/// Errors raised when parsing a board from text
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Wrong number of cell symbols
    #[error("expected {expected} cells, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Symbol other than `B`, `W` or `.`
    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),
}

/// Result type for search operations
pub type SolverResult<T> = Result<T, SearchError>;

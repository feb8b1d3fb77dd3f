//! Reaction parsing error types

use feynman_types::Side;

/// Errors raised while parsing or normalizing a reaction string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Reaction must contain '->' to separate initial and final particles")]
    MissingArrow,

    #[error("Reaction must contain exactly one '->', found {count}")]
    MultipleArrows { count: usize },

    #[error("The {0} state of the reaction is empty")]
    EmptySide(Side),

    #[error("Unknown particle symbol '{symbol}' at column {col}")]
    UnknownSymbol { symbol: String, col: usize },
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

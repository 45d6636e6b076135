//! Error types for board geometry and move generation.

use std::fmt;

use super::{PieceKind, Square};

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside `0..64`
    OutOfRange { index: i64 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfRange { index } => {
                write!(f, "Square index {index} out of range (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move generation failures.
///
/// Both variants signal a broken internal invariant rather than bad input:
/// generation over a well-formed board never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// A precomputed table has no candidates for this kind on this square
    MissingTableEntry { kind: PieceKind, square: Square },
    /// A piece was handed to a generator built for another kind
    WrongPieceKind {
        expected: PieceKind,
        found: PieceKind,
    },
}

impl fmt::Display for MoveGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenError::MissingTableEntry { kind, square } => {
                write!(f, "No precomputed candidates for {kind:?} on {square}")
            }
            MoveGenError::WrongPieceKind { expected, found } => {
                write!(f, "Expected a {expected:?}, found a {found:?}")
            }
        }
    }
}

impl std::error::Error for MoveGenError {}

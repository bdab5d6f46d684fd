//! Error types for board construction.

use std::fmt;

/// Error type for FEN parsing failures.
///
/// Every variant carries the byte index in the FEN string where the problem
/// was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// A required field is absent
    MissingField { field: &'static str, index: usize },
    /// A `/` appeared before the current rank held eight squares
    UnexpectedRankSeparator { index: usize },
    /// A rank describes more than eight squares
    RankOverflow { index: usize, char: char },
    /// Invalid piece character in the placement field
    InvalidPiece { index: usize, char: char },
    /// The placement field ended before all 64 squares were described
    IncompletePlacement { index: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { index: usize, found: String },
    /// Unknown, repeated or out-of-order castling character
    InvalidCastling { index: usize, char: char },
    /// Invalid en passant square
    InvalidEnPassant { index: usize, found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { index: usize, found: String },
    /// Full-move number is not a positive integer
    InvalidFullmoveNumber { index: usize, found: String },
    /// Extra input after the sixth field
    TrailingInput { index: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MissingField { field, index } => {
                write!(f, "Malformed FEN: expected {field} at index {index}")
            }
            FenError::UnexpectedRankSeparator { index } => {
                write!(f, "Malformed FEN: unexpected '/' at index {index}")
            }
            FenError::RankOverflow { index, char } => {
                write!(f, "Malformed FEN: too many squares in rank at index {index}: '{char}'")
            }
            FenError::InvalidPiece { index, char } => {
                write!(f, "Malformed FEN: invalid piece character '{char}' at index {index}")
            }
            FenError::IncompletePlacement { index } => {
                write!(f, "Malformed FEN: missing squares in placement at index {index}")
            }
            FenError::InvalidSideToMove { index, found } => {
                write!(
                    f,
                    "Malformed FEN: invalid side to move '{found}' at index {index}, expected 'w' or 'b'"
                )
            }
            FenError::InvalidCastling { index, char } => {
                write!(
                    f,
                    "Malformed FEN: invalid castling identifier or sequence '{char}' at index {index}"
                )
            }
            FenError::InvalidEnPassant { index, found } => {
                write!(f, "Malformed FEN: invalid en passant square '{found}' at index {index}")
            }
            FenError::InvalidHalfmoveClock { index, found } => {
                write!(f, "Malformed FEN: invalid half-move clock '{found}' at index {index}")
            }
            FenError::InvalidFullmoveNumber { index, found } => {
                write!(f, "Malformed FEN: invalid full-move number '{found}' at index {index}")
            }
            FenError::TrailingInput { index } => {
                write!(f, "Malformed FEN: unexpected input at index {index}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index outside 0..64
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

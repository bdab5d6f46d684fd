//! Core chess types.
//!
//! This module contains the fundamental value types used by the board:
//! - `Piece` and `Color` - chess piece kinds and sides
//! - `Square` - a board square (a8 = 0 .. h1 = 63)
//! - `Move`, `MoveFlags` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::{
    ALL_CASTLING_RIGHTS, CASTLE_BLACK_LONG, CASTLE_BLACK_SHORT, CASTLE_WHITE_LONG,
    CASTLE_WHITE_SHORT,
};

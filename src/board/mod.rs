//! Chess board representation and game rules.
//!
//! The board is an 8x8 mailbox: one `Option<(Color, Piece)>` per square,
//! indexed a8 = 0 through h1 = 63. Edge detection for piece steps goes through
//! a padded 10x12 board (see `tables`). Move generation is pseudo-legal;
//! [`Board::make_move`] rejects moves that leave the mover in check and
//! castles that are blocked or pass through attacked squares.
//!
//! # Example
//! ```
//! use mailbox_chess::board::Board;
//!
//! let mut board = Board::new();
//! let mut legal = 0;
//! for mv in board.generate_moves() {
//!     if board.make_move(mv) {
//!         legal += 1;
//!         board.undo_move();
//!     }
//! }
//! assert_eq!(legal, 20);
//! ```

mod attacks;
mod display;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod state;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, SquareError};
pub use fen::FenMode;
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveFlags, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    ALL_CASTLING_RIGHTS, CASTLE_BLACK_LONG, CASTLE_BLACK_SHORT, CASTLE_WHITE_LONG,
    CASTLE_WHITE_SHORT,
};

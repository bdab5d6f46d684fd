//! Precomputed move and attack tables.
//!
//! Board-edge detection uses a 10x12 padded board: every real square maps to an
//! interior cell, and the two-cell border maps back to `None`. Adding a piece
//! step to a padded coordinate and looking the result up is enough to know
//! whether the step left the board, so rays need no file or rank checks.

use once_cell::sync::Lazy;

use super::{
    Piece, Square, ALL_CASTLING_RIGHTS, CASTLE_BLACK_LONG, CASTLE_BLACK_SHORT, CASTLE_WHITE_LONG,
    CASTLE_WHITE_SHORT,
};

const PADDED_WIDTH: usize = 10;
const PADDED_SIZE: usize = 120;
/// Padded coordinate of a8.
const PADDED_ORIGIN: usize = 21;

/// Real square -> padded coordinate.
pub(crate) static MAILBOX64: Lazy<[u8; 64]> = Lazy::new(|| {
    let mut table = [0u8; 64];
    for (sq, slot) in table.iter_mut().enumerate() {
        *slot = (PADDED_ORIGIN + (sq / 8) * PADDED_WIDTH + sq % 8) as u8;
    }
    table
});

/// Padded coordinate -> real square, `None` on the border.
pub(crate) static MAILBOX: Lazy<[Option<Square>; PADDED_SIZE]> = Lazy::new(|| {
    let mut table = [None; PADDED_SIZE];
    for (sq, &padded) in MAILBOX64.iter().enumerate() {
        table[padded as usize] = Some(Square::from_index(sq));
    }
    table
});

/// Rights left intact by a move touching each square.
///
/// Only the king and rook home squares clear anything; a move from or to one
/// of them drops the rights that depend on that piece.
pub(crate) static CASTLE_MASK: Lazy<[u8; 64]> = Lazy::new(|| {
    let mut table = [ALL_CASTLING_RIGHTS; 64];
    table[Square::A8.index()] &= !CASTLE_BLACK_LONG;
    table[Square::E8.index()] &= !(CASTLE_BLACK_LONG | CASTLE_BLACK_SHORT);
    table[Square::H8.index()] &= !CASTLE_BLACK_SHORT;
    table[Square::A1.index()] &= !CASTLE_WHITE_LONG;
    table[Square::E1.index()] &= !(CASTLE_WHITE_LONG | CASTLE_WHITE_SHORT);
    table[Square::H1.index()] &= !CASTLE_WHITE_SHORT;
    table
});

const KNIGHT_OFFSETS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
const BISHOP_OFFSETS: [i8; 4] = [-11, -9, 9, 11];
const ROOK_OFFSETS: [i8; 4] = [-10, -1, 1, 10];
const ROYAL_OFFSETS: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// Single-step deltas in padded space. Pawns have none; they are generated
/// and detected separately.
#[inline]
pub(crate) fn offsets(piece: Piece) -> &'static [i8] {
    match piece {
        Piece::Pawn => &[],
        Piece::Knight => &KNIGHT_OFFSETS,
        Piece::Bishop => &BISHOP_OFFSETS,
        Piece::Rook => &ROOK_OFFSETS,
        Piece::Queen | Piece::King => &ROYAL_OFFSETS,
    }
}

/// Square one padded step of `delta` away from `from`, or `None` off the board.
#[inline]
pub(crate) fn step(from: Square, delta: i8) -> Option<Square> {
    let padded = i16::from(MAILBOX64[from.index()]) + i16::from(delta);
    MAILBOX[padded as usize]
}

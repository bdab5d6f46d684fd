//! Pseudo-legal move generation.
//!
//! Generated moves follow piece movement and occupancy rules only. King
//! safety, and every castling condition other than the right itself, is
//! checked by [`Board::make_move`].

mod pawns;
mod pieces;
mod special;

use super::{Board, Color, Move, MoveFlags, MoveList, Piece, Square};

impl Board {
    /// Generate all pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_moves_into(&mut moves);
        moves
    }

    /// Generate pseudo-legal moves into a reused buffer. The buffer is
    /// cleared first.
    pub fn generate_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let side = self.side_to_move;
        for from in Square::all() {
            match self.piece_at(from) {
                Some((color, Piece::Pawn)) if color == side => {
                    self.generate_pawn_moves(from, moves);
                }
                Some((color, piece)) if color == side => {
                    self.generate_piece_moves(from, piece, moves);
                }
                _ => {}
            }
        }
        self.generate_castles(moves);
        self.generate_en_passant(moves);
    }

    /// Generate the moves that do not leave the mover's king attacked.
    ///
    /// Each candidate is made and taken back, so the board ends unchanged.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut legal = MoveList::new();
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                legal.push(mv);
                self.undo_move();
            }
        }
        legal
    }

    /// Add a move, expanding pawn moves onto the last rank into the four
    /// promotions.
    fn push_move(&self, moves: &mut MoveList, from: Square, to: Square, flags: MoveFlags) {
        if flags.intersects(MoveFlags::PAWN_MOVE) && is_last_rank(to, self.side_to_move) {
            for piece in Piece::PROMOTIONS {
                moves.push(Move::new_promotion(from, to, piece, flags));
            }
        } else {
            moves.push(Move::new(from, to, flags));
        }
    }
}

fn is_last_rank(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.index() <= Square::H8.index(),
        Color::Black => sq.index() >= Square::A1.index(),
    }
}

use super::history::UndoRecord;
use super::tables::CASTLE_MASK;
use super::{Board, Move, MoveFlags, Piece, Square};

/// Squares involved in one castling move, keyed by the king's destination.
struct CastlePath {
    rook_from: Square,
    rook_to: Square,
    /// Squares between king and rook that must be empty
    between: &'static [Square],
    /// Squares the king passes through or lands on, which must not be attacked
    king_path: &'static [Square],
}

fn castle_path(king_to: Square) -> Option<CastlePath> {
    match king_to {
        Square::G1 => Some(CastlePath {
            rook_from: Square::H1,
            rook_to: Square::F1,
            between: &[Square::F1, Square::G1],
            king_path: &[Square::F1, Square::G1],
        }),
        Square::C1 => Some(CastlePath {
            rook_from: Square::A1,
            rook_to: Square::D1,
            between: &[Square::B1, Square::C1, Square::D1],
            king_path: &[Square::D1, Square::C1],
        }),
        Square::G8 => Some(CastlePath {
            rook_from: Square::H8,
            rook_to: Square::F8,
            between: &[Square::F8, Square::G8],
            king_path: &[Square::F8, Square::G8],
        }),
        Square::C8 => Some(CastlePath {
            rook_from: Square::A8,
            rook_to: Square::D8,
            between: &[Square::B8, Square::C8, Square::D8],
            king_path: &[Square::D8, Square::C8],
        }),
        _ => None,
    }
}

impl Board {
    /// Make a pseudo-legal move.
    ///
    /// Returns `false` and leaves the board unchanged when the move is
    /// illegal: a castle out of, through or into check or across an occupied
    /// square, or any move that leaves the mover's king attacked. On `true`
    /// the move is committed and can be taken back with [`Board::undo_move`].
    pub fn make_move(&mut self, mv: Move) -> bool {
        let side = self.side_to_move;
        let enemy = side.opposite();
        let from = mv.from();
        let to = mv.to();

        let Some((mover_color, mover)) = self.piece_at(from) else {
            return false;
        };
        if mover_color != side {
            return false;
        }

        if mv.is_castling() {
            let Some(path) = castle_path(to) else {
                return false;
            };
            if mover != Piece::King || self.piece_at(path.rook_from) != Some((side, Piece::Rook)) {
                return false;
            }
            if self.is_in_check(side) {
                return false;
            }
            if path.between.iter().any(|&sq| !self.is_empty(sq)) {
                return false;
            }
            if path
                .king_path
                .iter()
                .any(|&sq| self.is_square_attacked(sq, enemy))
            {
                return false;
            }
            self.set_piece(path.rook_to, side, Piece::Rook);
            self.clear_square(path.rook_from);
        }

        let en_passant_victim = if mv.is_en_passant() {
            to.offset(-side.forward())
                .filter(|&sq| self.piece_at(sq) == Some((enemy, Piece::Pawn)))
        } else {
            None
        };

        self.history.push(UndoRecord {
            mv,
            captured: self.piece_at(to),
            en_passant_victim,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            ply: self.ply,
        });

        self.castling_rights
            .restrict(CASTLE_MASK[from.index()] & CASTLE_MASK[to.index()]);

        self.en_passant = if mv.is_double_pawn_push() {
            to.offset(-side.forward())
        } else {
            None
        };

        if mv
            .flags()
            .intersects(MoveFlags::CAPTURE | MoveFlags::PAWN_MOVE)
        {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        let placed = match mv.promotion() {
            Some(piece) if mv.is_promotion() => piece,
            _ => mover,
        };
        self.set_piece(to, side, placed);
        self.clear_square(from);

        if let Some(victim) = en_passant_victim {
            self.clear_square(victim);
        }

        self.ply = self.ply.saturating_add(1);
        self.swap_sides();

        if self.is_in_check(side) {
            self.undo_move();
            return false;
        }
        true
    }

    /// Take back the most recently committed move.
    ///
    /// Returns the move taken back, or `None` (leaving the board untouched)
    /// when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        self.swap_sides();
        let side = self.side_to_move;
        let enemy = side.opposite();

        self.castling_rights = record.castling_rights;
        self.en_passant = record.en_passant;
        self.halfmove_clock = record.halfmove_clock;
        self.ply = record.ply;

        let mv = record.mv;
        let from = mv.from();
        let to = mv.to();

        let moved = if mv.is_promotion() {
            Some(Piece::Pawn)
        } else {
            self.piece_on(to)
        };
        if let Some(piece) = moved {
            self.set_piece(from, side, piece);
        }

        match record.captured {
            Some((color, piece)) => self.set_piece(to, color, piece),
            None => self.clear_square(to),
        }

        if mv.is_castling() {
            if let Some(path) = castle_path(to) {
                self.set_piece(path.rook_from, side, Piece::Rook);
                self.clear_square(path.rook_to);
            }
        }
        if let Some(victim) = record.en_passant_victim {
            self.set_piece(victim, enemy, Piece::Pawn);
        }

        Some(mv)
    }
}

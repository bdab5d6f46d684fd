use super::super::{Board, Color, MoveFlags, MoveList, Piece, Square};

impl Board {
    /// One castling candidate per right still held. Occupancy, attacks and
    /// check are left to `make_move`.
    pub(crate) fn generate_castles(&self, moves: &mut MoveList) {
        let side = self.side_to_move;
        let (king, short, long) = match side {
            Color::White => (Square::E1, Square::G1, Square::C1),
            Color::Black => (Square::E8, Square::G8, Square::C8),
        };
        if self.castling_rights.has(side, true) {
            self.push_move(moves, king, short, MoveFlags::CASTLE);
        }
        if self.castling_rights.has(side, false) {
            self.push_move(moves, king, long, MoveFlags::CASTLE);
        }
    }

    /// Captures onto the en passant square by the side to move's pawns.
    pub(crate) fn generate_en_passant(&self, moves: &mut MoveList) {
        let Some(target) = self.en_passant else {
            return;
        };
        let side = self.side_to_move;
        let behind = -side.forward();
        let file = target.file();

        // A capturing pawn stands one rank behind the target on a neighbouring file.
        let origins = [(file != 0, behind - 1), (file != 7, behind + 1)];
        for (on_board, delta) in origins {
            if !on_board {
                continue;
            }
            if let Some(from) = target.offset(delta) {
                if self.piece_at(from) == Some((side, Piece::Pawn)) {
                    self.push_move(
                        moves,
                        from,
                        target,
                        MoveFlags::CAPTURE | MoveFlags::EN_PASSANT | MoveFlags::PAWN_MOVE,
                    );
                }
            }
        }
    }
}

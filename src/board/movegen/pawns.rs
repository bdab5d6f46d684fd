use super::super::{Board, Color, MoveFlags, MoveList, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let side = self.side_to_move;
        let forward = side.forward();
        self.generate_pawn_captures(from, moves);

        let Some(single) = from.offset(forward) else {
            return;
        };
        if !self.is_empty(single) {
            return;
        }
        self.push_move(moves, from, single, MoveFlags::PAWN_MOVE);

        if is_starting_rank(from, side) {
            if let Some(double) = single.offset(forward) {
                if self.is_empty(double) {
                    self.push_move(
                        moves,
                        from,
                        double,
                        MoveFlags::DOUBLE_PUSH | MoveFlags::PAWN_MOVE,
                    );
                }
            }
        }
    }

    fn generate_pawn_captures(&self, from: Square, moves: &mut MoveList) {
        let forward = self.side_to_move.forward();
        let enemy = self.opponent();
        let file = from.file();

        let diagonals = [(file != 0, forward - 1), (file != 7, forward + 1)];
        for (on_board, delta) in diagonals {
            if !on_board {
                continue;
            }
            if let Some(to) = from.offset(delta) {
                if self.color_on(to) == Some(enemy) {
                    self.push_move(moves, from, to, MoveFlags::CAPTURE | MoveFlags::PAWN_MOVE);
                }
            }
        }
    }
}

fn is_starting_rank(sq: Square, color: Color) -> bool {
    match color {
        Color::White => sq.rank() == 1,
        Color::Black => sq.rank() == 6,
    }
}

use super::super::tables::{offsets, step};
use super::super::{Board, MoveFlags, MoveList, Piece, Square};

impl Board {
    /// Knight, bishop, rook, queen and king moves. Rays stop at the first
    /// occupied square, which is included as a capture if it holds an enemy.
    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        let side = self.side_to_move;
        for &delta in offsets(piece) {
            let mut current = from;
            while let Some(to) = step(current, delta) {
                match self.color_on(to) {
                    None => {
                        self.push_move(moves, from, to, MoveFlags::QUIET);
                        if !piece.is_slider() {
                            break;
                        }
                        current = to;
                    }
                    Some(color) => {
                        if color != side {
                            self.push_move(moves, from, to, MoveFlags::CAPTURE);
                        }
                        break;
                    }
                }
            }
        }
    }
}

//! Attack detection.

use super::tables::{offsets, step};
use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if any piece of color `by` attacks `target`.
    ///
    /// Pinned pieces still count as attackers; this is a pure geometry test.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        Square::all().any(|from| match self.piece_at(from) {
            Some((color, piece)) if color == by => self.attacks_from(from, piece, by, target),
            _ => false,
        })
    }

    /// Returns true if `color`'s king is attacked. A side without a king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opposite()))
    }

    fn attacks_from(&self, from: Square, piece: Piece, color: Color, target: Square) -> bool {
        if piece == Piece::Pawn {
            return pawn_attacks(from, color, target);
        }

        offsets(piece).iter().any(|&delta| {
            let mut current = from;
            while let Some(next) = step(current, delta) {
                if next == target {
                    return true;
                }
                if !self.is_empty(next) || !piece.is_slider() {
                    break;
                }
                current = next;
            }
            false
        })
    }
}

/// Pawn diagonals. A pawn on the a-file has no left diagonal and one on the
/// h-file no right diagonal, which keeps the index arithmetic from wrapping.
pub(crate) fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
    let forward = color.forward();
    let file = from.file();
    (file != 0 && from.offset(forward - 1) == Some(target))
        || (file != 7 && from.offset(forward + 1) == Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_do_not_wrap() {
        assert!(pawn_attacks(sq("a2"), Color::White, sq("b3")));
        assert!(!pawn_attacks(sq("a2"), Color::White, sq("h4")));
        assert!(!pawn_attacks(sq("h2"), Color::White, sq("a2")));
        assert!(pawn_attacks(sq("h7"), Color::Black, sq("g6")));
        assert!(!pawn_attacks(sq("h7"), Color::Black, sq("a5")));
        assert!(!pawn_attacks(sq("e2"), Color::White, sq("e3")));
    }

    #[test]
    fn test_start_position_attacks() {
        let board = Board::new();
        assert!(board.is_square_attacked(sq("e3"), Color::White));
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        assert!(board.is_square_attacked(sq("f6"), Color::Black));
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn test_slider_blocked() {
        let board = Board::from_fen("4k3/8/8/8/4p3/8/8/4R1K1 w - - 0 1");
        assert!(board.is_square_attacked(sq("e4"), Color::White));
        assert!(!board.is_square_attacked(sq("e5"), Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn test_knight_and_king_reach() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        assert!(board.is_square_attacked(sq("b3"), Color::White));
        assert!(board.is_square_attacked(sq("c2"), Color::White));
        assert!(!board.is_square_attacked(sq("c3"), Color::White));
        assert!(board.is_square_attacked(sq("d2"), Color::White));
        assert!(!board.is_square_attacked(sq("e3"), Color::White));
    }

    #[test]
    fn test_check_detection() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1");
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn test_no_king_is_never_in_check() {
        let board = Board::empty();
        assert!(!board.is_in_check(Color::White));
    }
}

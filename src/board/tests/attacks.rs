//! Attack detection tests.

use crate::board::{Board, Color, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_start_position_attacks() {
    let board = Board::new();
    // Every third-rank square is covered by white, every sixth-rank square by black.
    for file in 0..8 {
        let third = Square::from_file_rank(file, 2).unwrap();
        let sixth = Square::from_file_rank(file, 5).unwrap();
        assert!(board.is_square_attacked(third, Color::White), "{third}");
        assert!(board.is_square_attacked(sixth, Color::Black), "{sixth}");
        assert!(!board.is_square_attacked(third, Color::Black), "{third}");
    }
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_slider_blocked() {
    let board = Board::from_fen("4k3/8/8/8/1b6/2P5/8/4K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("c3"), Color::Black));
    assert!(!board.is_square_attacked(sq("d2"), Color::Black));
    assert!(!board.is_in_check(Color::White));

    let open = Board::from_fen("4k3/8/8/8/1b6/8/8/4K3 w - - 0 1");
    assert!(open.is_in_check(Color::White));
}

#[test]
fn test_knight_does_not_wrap() {
    // g3 and h4 are a1 - 10 and a1 - 17 as square indices.
    let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("b3"), Color::White));
    assert!(board.is_square_attacked(sq("c2"), Color::White));
    assert!(!board.is_square_attacked(sq("g3"), Color::White));
    assert!(!board.is_square_attacked(sq("h4"), Color::White));
}

#[test]
fn test_pawn_attacks_by_color() {
    let board = Board::from_fen("4k3/8/8/3p4/3P4/8/8/4K3 w - - 0 1");
    assert!(board.is_square_attacked(sq("c5"), Color::White));
    assert!(board.is_square_attacked(sq("e5"), Color::White));
    assert!(!board.is_square_attacked(sq("d5"), Color::White));
    assert!(board.is_square_attacked(sq("c4"), Color::Black));
    assert!(board.is_square_attacked(sq("e4"), Color::Black));
    assert!(!board.is_square_attacked(sq("c3"), Color::Black));
}

#[test]
fn test_kings_attack_adjacent_squares() {
    let board = Board::from_fen("8/8/8/3k4/8/8/8/K7 w - - 0 1");
    for s in ["c4", "d4", "e4", "c5", "e5", "c6", "d6", "e6"] {
        assert!(board.is_square_attacked(sq(s), Color::Black), "{s}");
    }
    assert!(!board.is_square_attacked(sq("d3"), Color::Black));
    assert!(board.is_square_attacked(sq("b2"), Color::White));
}

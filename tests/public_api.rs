use mailbox_chess::{Board, Color, FenError, FenMode, Move, MoveFlags, Piece, Square};

#[test]
fn play_and_take_back_a_game() {
    let mut board = Board::new();
    let line = ["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6", "d5c6", "d8d2"];
    for text in line {
        let mv = board
            .legal_moves()
            .into_iter()
            .find(|m| m.to_string() == text)
            .unwrap_or_else(|| panic!("{text} should be legal"));
        assert!(board.make_move(mv));
    }
    assert!(board.is_in_check(Color::White));
    assert_eq!(board.last_move().map(|m| m.to_string()), Some("d8d2".to_string()));
    assert_eq!(board.history_len(), line.len());

    while board.undo_move().is_some() {}
    assert_eq!(board, Board::new());
}

#[test]
fn white_promotes_and_castles() {
    let mut board: Board = "4k3/1P6/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
    let promote = Move::new_promotion(
        "b7".parse().unwrap(),
        "b8".parse().unwrap(),
        Piece::Queen,
        MoveFlags::PAWN_MOVE,
    );
    assert!(board.make_move(promote));
    assert_eq!(board.to_string().lines().nth(1), Some("8 | . | Q | . | . | k | . | . | . |"));

    assert!(board.make_move(Move::new(Square::E8, Square::D7, MoveFlags::QUIET)));
    assert!(board.make_move(Move::new(Square::E1, Square::G1, MoveFlags::CASTLE)));
    assert_eq!(board.to_fen(), "1Q6/3k4/8/8/8/8/8/5RK1 b - - 2 2");
}

#[test]
fn fen_modes() {
    let fen = "4k3/8/8/8/8/8/8/4K3 w -";
    assert!(matches!(
        Board::try_from_fen(fen),
        Err(FenError::MissingField { .. })
    ));
    assert!(matches!(
        Board::try_from_fen_with(fen, FenMode::Lenient),
        Err(FenError::MissingField { .. })
    ));
    let board = Board::try_from_fen_with("4k3/8/8/8/8/8/8/4K3 b - -", FenMode::Lenient).unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.ply(), 1);
}

#[test]
fn perft_start_position() {
    let mut board = Board::new();
    let counts: Vec<u64> = (1..=3).map(|depth| board.perft(depth)).collect();
    assert_eq!(counts, vec![20, 400, 8902]);
}

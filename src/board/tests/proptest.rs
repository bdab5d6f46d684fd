//! Property-based tests using proptest.

use crate::board::{Board, Move};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random pseudo-legal moves, keeping the ones
/// `make_move` accepts.
fn random_playout(board: &mut Board, rng: &mut StdRng, num_moves: usize) -> Vec<Move> {
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = board.generate_moves();
        let Some(&mv) = moves.as_slice().choose(rng) else {
            break;
        };
        if board.make_move(mv) {
            played.push(mv);
        }
    }
    played
}

proptest! {
    /// Property: make_move followed by undo_move restores board state exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = board.clone();
        let initial_fen = board.to_fen();

        let played = random_playout(&mut board, &mut rng, num_moves);
        prop_assert_eq!(board.history_len(), played.len());

        for mv in played.iter().rev() {
            prop_assert_eq!(board.undo_move(), Some(*mv));
        }

        prop_assert_eq!(&board, &initial);
        prop_assert_eq!(board.to_fen(), initial_fen);
    }

    /// Property: a rejected move leaves the board untouched
    #[test]
    fn prop_rejected_move_is_noop(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let before = board.clone();
        let history = board.history_len();
        for mv in board.generate_moves() {
            if board.make_move(mv) {
                board.undo_move();
            }
            prop_assert_eq!(&board, &before);
            prop_assert_eq!(board.history_len(), history);
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let fen = board.to_fen();
        let restored = Board::from_fen(&fen);
        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.to_fen(), fen);
    }

    /// Property: moves start on the mover's pieces and never land on them
    #[test]
    fn prop_moves_respect_ownership(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let side = board.side_to_move();
        for mv in board.generate_moves() {
            prop_assert_eq!(board.color_on(mv.from()), Some(side));
            // Castling candidates ignore occupancy until made.
            if mv.is_castling() {
                continue;
            }
            prop_assert_ne!(board.color_on(mv.to()), Some(side));
            prop_assert_eq!(mv.is_capture(), mv.is_en_passant() || board.color_on(mv.to()).is_some());
        }
    }

    /// Property: both search disciplines count the same leaves
    #[test]
    fn prop_perft_disciplines_agree(seed in seed_strategy(), num_moves in 1..=16usize) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let copying = board.perft_copying(2);
        prop_assert_eq!(board.perft(2), copying);
    }
}

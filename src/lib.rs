pub mod board;
pub mod perft;
pub mod suite;

pub use board::{Board, Color, FenError, FenMode, Move, MoveFlags, MoveList, Piece, Square};
pub use suite::{run_suite, SuiteConfig, SuiteReport};

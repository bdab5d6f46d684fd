use super::history::UndoStack;
use super::{CastlingRights, Color, Move, Piece, Square};

/// A chess position plus the undo history of the plies made on it.
#[derive(Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) ply: u32,
    pub(crate) history: UndoStack,
}

impl Board {
    /// The standard starting position.
    pub const STARTING_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square::from_index(file), Color::Black, *piece);
            board.set_piece(Square::from_index(8 + file), Color::Black, Piece::Pawn);
            board.set_piece(Square::from_index(48 + file), Color::White, Piece::Pawn);
            board.set_piece(Square::from_index(56 + file), Color::White, *piece);
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, white to move and no rights.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            ply: 0,
            history: UndoStack::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn opponent(&self) -> Color {
        self.side_to_move.opposite()
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant this move.
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last capture or pawn move.
    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Plies since the start of the game, as given by the FEN move number.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.ply / 2 + 1
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Number of plies that can currently be taken back.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recently committed move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.mv)
    }

    /// First square holding `color`'s king, scanning from a8.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
    }

    #[inline]
    pub(crate) fn swap_sides(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Copies the position only; the copy starts with an empty undo history.
impl Clone for Board {
    fn clone(&self) -> Self {
        Board {
            squares: self.squares,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            ply: self.ply,
            history: UndoStack::new(),
        }
    }
}

/// Positions compare equal regardless of their undo history.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.ply == other.ply
    }
}

impl Eq for Board {}

use std::str::FromStr;

use log::debug;

use super::error::FenError;
use super::{
    Board, CastlingRights, Color, Piece, Square, CASTLE_BLACK_LONG, CASTLE_BLACK_SHORT,
    CASTLE_WHITE_LONG, CASTLE_WHITE_SHORT,
};

/// How forgiving the FEN parser is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FenMode {
    /// All six fields, castling letters at most once each and in `KQkq` order,
    /// nothing after the full-move number.
    #[default]
    Strict,
    /// Castling letters in any order (repeats allowed), missing clocks
    /// default to `0 1`, trailing input is ignored.
    Lenient,
}

/// Whitespace-separated fields of a FEN string, with their byte offsets.
struct Fields<'a> {
    fen: &'a str,
    pos: usize,
}

impl<'a> Fields<'a> {
    fn new(fen: &'a str) -> Self {
        Fields { fen, pos: 0 }
    }

    fn next_field(&mut self) -> Option<(usize, &'a str)> {
        let rest = &self.fen[self.pos..];
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            self.pos = self.fen.len();
            return None;
        }
        let start = self.pos + (rest.len() - trimmed.len());
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        self.pos = start + len;
        Some((start, &self.fen[start..start + len]))
    }

    fn require(&mut self, field: &'static str) -> Result<(usize, &'a str), FenError> {
        self.next_field().ok_or(FenError::MissingField {
            field,
            index: self.fen.len(),
        })
    }
}

impl Board {
    /// Parse a position from strict FEN.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Self::try_from_fen_with(fen, FenMode::Strict)
    }

    /// Parse a position from FEN using the given strictness.
    pub fn try_from_fen_with(fen: &str, mode: FenMode) -> Result<Self, FenError> {
        parse_fen(fen, mode).inspect_err(|err| debug!("rejected FEN {fen:?}: {err}"))
    }

    /// Parse a position from strict FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank_start in (0..64).step_by(8) {
            let mut row = String::new();
            let mut empty = 0;
            for index in rank_start..rank_start + 8 {
                if let Some((color, piece)) = self.squares[index] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let rights = self.castling_rights;
        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if rights.has(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number()
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

fn parse_fen(fen: &str, mode: FenMode) -> Result<Board, FenError> {
    let mut board = Board::empty();
    let mut fields = Fields::new(fen);

    let (start, placement) = fields.require("piece placement")?;
    parse_placement(&mut board, start, placement)?;

    let (start, side) = fields.require("side to move")?;
    board.side_to_move = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                index: start,
                found: other.to_string(),
            })
        }
    };

    let (start, castling) = fields.require("castling availability")?;
    board.castling_rights = parse_castling(start, castling, mode)?;

    let (start, ep) = fields.require("en passant square")?;
    board.en_passant = parse_en_passant(&board, start, ep)?;

    board.halfmove_clock = match (fields.next_field(), mode) {
        (Some((start, text)), _) => text.parse().map_err(|_| FenError::InvalidHalfmoveClock {
            index: start,
            found: text.to_string(),
        })?,
        (None, FenMode::Lenient) => 0,
        (None, FenMode::Strict) => {
            return Err(FenError::MissingField {
                field: "half-move clock",
                index: fen.len(),
            })
        }
    };

    match (fields.next_field(), mode) {
        (Some((start, text)), _) => {
            let invalid = || FenError::InvalidFullmoveNumber {
                index: start,
                found: text.to_string(),
            };
            let number: u32 = text.parse().map_err(|_| invalid())?;
            if number == 0 {
                return Err(invalid());
            }
            let black = u32::from(board.side_to_move == Color::Black);
            board.ply = (number - 1)
                .checked_mul(2)
                .and_then(|ply| ply.checked_add(black))
                .ok_or_else(invalid)?;
        }
        (None, FenMode::Lenient) => {
            board.ply = u32::from(board.side_to_move == Color::Black);
        }
        (None, FenMode::Strict) => {
            return Err(FenError::MissingField {
                field: "full-move number",
                index: fen.len(),
            })
        }
    }

    if mode == FenMode::Strict {
        if let Some((start, _)) = fields.next_field() {
            return Err(FenError::TrailingInput { index: start });
        }
    }

    Ok(board)
}

/// Fill the board from rank 8 down to rank 1.
fn parse_placement(board: &mut Board, start: usize, text: &str) -> Result<(), FenError> {
    let mut rank = 0;
    let mut file = 0;
    for (offset, c) in text.char_indices() {
        let index = start + offset;
        match c {
            '/' => {
                if file != 8 || rank == 7 {
                    return Err(FenError::UnexpectedRankSeparator { index });
                }
                rank += 1;
                file = 0;
            }
            '1'..='8' => {
                let skip = c as usize - '0' as usize;
                if file + skip > 8 {
                    return Err(FenError::RankOverflow { index, char: c });
                }
                file += skip;
            }
            _ => {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { index, char: c })?;
                if file >= 8 {
                    return Err(FenError::RankOverflow { index, char: c });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square::from_index(rank * 8 + file), color, piece);
                file += 1;
            }
        }
    }
    if rank != 7 || file != 8 {
        return Err(FenError::IncompletePlacement {
            index: start + text.len(),
        });
    }
    Ok(())
}

fn parse_castling(start: usize, text: &str, mode: FenMode) -> Result<CastlingRights, FenError> {
    if text == "-" {
        return Ok(CastlingRights::none());
    }
    let mut bits = 0u8;
    // Position of the previous letter in `KQkq`, for the strict ordering check.
    let mut previous: Option<usize> = None;
    for (offset, c) in text.char_indices() {
        let invalid = FenError::InvalidCastling {
            index: start + offset,
            char: c,
        };
        let (order, bit) = match c {
            'K' => (0, CASTLE_WHITE_SHORT),
            'Q' => (1, CASTLE_WHITE_LONG),
            'k' => (2, CASTLE_BLACK_SHORT),
            'q' => (3, CASTLE_BLACK_LONG),
            _ => return Err(invalid),
        };
        if mode == FenMode::Strict && previous.is_some_and(|p| p >= order) {
            return Err(invalid);
        }
        previous = Some(order);
        bits |= bit;
    }
    Ok(CastlingRights::from_u8(bits))
}

/// The target must sit behind a pawn the opponent just pushed: rank 6 when
/// white is to move, rank 3 when black is. The target itself is empty and the
/// pushed pawn stands in front of it.
fn parse_en_passant(board: &Board, start: usize, text: &str) -> Result<Option<Square>, FenError> {
    if text == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        index: start,
        found: text.to_string(),
    };
    let sq: Square = text.parse().map_err(|_| invalid())?;
    let side = board.side_to_move;
    let expected_rank = match side {
        Color::White => 5,
        Color::Black => 2,
    };
    if sq.rank() != expected_rank || !board.is_empty(sq) {
        return Err(invalid());
    }
    let pushed = sq.offset(-side.forward()).and_then(|pawn| board.piece_at(pawn));
    if pushed != Some((side.opposite(), Piece::Pawn)) {
        return Err(invalid());
    }
    Ok(Some(sq))
}

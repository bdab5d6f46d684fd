use std::fmt;

use super::Board;

const RULE: &str = "  +---+---+---+---+---+---+---+---+";

/// Renders an 8x8 diagram from white's side, followed by the FEN.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        for (row, squares) in self.squares.chunks(8).enumerate() {
            write!(f, "{} |", 8 - row)?;
            for square in squares {
                let ch = match square {
                    Some((color, piece)) => piece.to_fen_char(*color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{RULE}")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{}", self.to_fen())
    }
}

//! Move types and move list.

use std::fmt;
use std::ops::{BitOr, Index};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// Move flag bits.
///
/// `PAWN_MOVE` is set on every pawn move, including captures and en passant.
/// Move generation uses it to decide whether a move must be expanded into
/// promotions, and `make_move` resets the halfmove clock on `CAPTURE | PAWN_MOVE`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1);
    pub const CASTLE: MoveFlags = MoveFlags(2);
    pub const EN_PASSANT: MoveFlags = MoveFlags(4);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(8);
    pub const PAWN_MOVE: MoveFlags = MoveFlags(16);
    pub const PROMOTION: MoveFlags = MoveFlags(32);

    /// Returns true if any bit of `other` is set in `self`
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: MoveFlags) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> MoveFlags {
        MoveFlags(bits & 0x3f)
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        self.union(rhs)
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveFlags({:#08b})", self.0)
    }
}

/// A move as produced by the generator.
///
/// Moves are plain values and are only checked for king safety when they are
/// passed to [`Board::make_move`](crate::board::Board::make_move).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promote: Option<Piece>,
    flags: MoveFlags,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            promote: None,
            flags,
        }
    }

    /// Create a finalized promotion; the `PROMOTION` bit is added to `flags`
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            promote: Some(piece),
            flags: flags.union(MoveFlags::PROMOTION),
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promote
    }

    /// Returns true if the destination held an enemy piece, or for en passant
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flags.intersects(MoveFlags::CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flags.intersects(MoveFlags::CASTLE)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flags.intersects(MoveFlags::EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags.intersects(MoveFlags::DOUBLE_PUSH)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_move(self) -> bool {
        self.flags.intersects(MoveFlags::PAWN_MOVE)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flags.intersects(MoveFlags::PROMOTION)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promote {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promote {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

const EMPTY_MOVE: Move = Move::new(Square::A8, Square::A8, MoveFlags::QUIET);

/// List of moves with fixed-size backing array.
///
/// Positions with more than `MAX_MOVES` candidates move the whole list to the
/// heap.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
    spilled: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
            spilled: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
        } else {
            if self.spilled.is_empty() {
                self.spilled.extend_from_slice(&self.moves);
            }
            self.spilled.push(mv);
        }
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.spilled.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        if self.len > MAX_MOVES {
            &self.spilled
        } else {
            &self.moves[..self.len]
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.as_slice()[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.as_slice()[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(MoveFlags::CAPTURE.bits(), 1);
        assert_eq!(MoveFlags::CASTLE.bits(), 2);
        assert_eq!(MoveFlags::EN_PASSANT.bits(), 4);
        assert_eq!(MoveFlags::DOUBLE_PUSH.bits(), 8);
        assert_eq!(MoveFlags::PAWN_MOVE.bits(), 16);
        assert_eq!(MoveFlags::PROMOTION.bits(), 32);
        let ep = MoveFlags::CAPTURE | MoveFlags::EN_PASSANT | MoveFlags::PAWN_MOVE;
        assert_eq!(ep.bits(), 21);
    }

    #[test]
    fn test_promotion_sets_flag() {
        let mv = Move::new_promotion(
            sq("a7"),
            sq("b8"),
            Piece::Queen,
            MoveFlags::CAPTURE | MoveFlags::PAWN_MOVE,
        );
        assert!(mv.is_promotion());
        assert!(mv.is_capture());
        assert!(mv.is_pawn_move());
        assert_eq!(mv.flags().bits(), 49);
        assert_eq!(mv.to_string(), "a7b8q");
    }

    #[test]
    fn test_display() {
        let mv = Move::new(sq("g1"), sq("f3"), MoveFlags::QUIET);
        assert_eq!(mv.to_string(), "g1f3");
        assert_eq!(format!("{mv:?}"), "Move(g1f3)");
    }

    #[test]
    fn test_move_list_push_and_clear() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(sq("e2"), sq("e4"), MoveFlags::DOUBLE_PUSH | MoveFlags::PAWN_MOVE);
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert!(list.contains(&mv));
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_list_grows_past_capacity() {
        let mut list = MoveList::new();
        let quiet = Move::new(sq("a1"), sq("a2"), MoveFlags::QUIET);
        let last = Move::new(sq("h7"), sq("h8"), MoveFlags::QUIET);
        for _ in 0..MAX_MOVES {
            list.push(quiet);
        }
        list.push(last);
        assert_eq!(list.len(), MAX_MOVES + 1);
        assert_eq!(list[MAX_MOVES], last);
        assert_eq!(list.clone().into_iter().count(), MAX_MOVES + 1);

        list.clear();
        assert!(list.is_empty());
        list.push(last);
        assert_eq!(list.as_slice(), &[last]);
    }
}

//! Square type and utilities.
//!
//! Squares are numbered rank-major from the black side: a8 = 0, h8 = 7,
//! a1 = 56, h1 = 63. The file is always `index & 7`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);

    /// Create a square from an index, returning `None` outside 0..64
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from an index known to be in range.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        Square(index as u8)
    }

    /// Create a square from a file (0 = a) and a rank (0 = rank 1)
    #[must_use]
    pub const fn from_file_rank(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(((7 - rank) * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Iterate over all squares in index order (a8 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        7 - (self.0 >> 3) as usize
    }

    /// Square reached by adding `delta` to the index, if still on the board.
    ///
    /// This does not detect file wrap-around; callers guard the file themselves.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: i8) -> Option<Self> {
        let idx = self.0 as i16 + delta as i16;
        if idx >= 0 && idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() as u8 + b'a') as char,
            self.rank() + 1
        )
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };
        Square::from_file_rank(file, rank).ok_or_else(invalid)
    }
}

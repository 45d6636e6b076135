//! Square index type.
//!
//! Squares are numbered row-major from the top-left corner: index 0 is a8,
//! index 7 is h8 and index 63 is h1. A `Square` can only hold an index in
//! `0..64`, so every table lookup keyed by a `Square` is in bounds.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::geometry::{is_valid, NUM_SQUARES, NUM_SQUARES_PER_ROW};

/// A square on the board, stored as its row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Create a square from an index, rejecting anything outside `0..64`.
    pub fn new(index: usize) -> Result<Self, SquareError> {
        match i32::try_from(index) {
            Ok(idx) if is_valid(idx) => Ok(Square(idx as u8)),
            _ => Err(SquareError::OutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
            }),
        }
    }

    /// Create a square from an index known to be valid at compile time.
    ///
    /// # Panics
    /// Panics if `idx >= 64`.
    #[must_use]
    pub const fn from_index_const(idx: usize) -> Self {
        assert!(idx < NUM_SQUARES, "square index out of range");
        Square(idx as u8)
    }

    /// Create a square from a (row, column) pair, row 0 being the eighth rank.
    #[must_use]
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < NUM_SQUARES_PER_ROW && column < NUM_SQUARES_PER_ROW {
            Some(Square((row * NUM_SQUARES_PER_ROW + column) as u8))
        } else {
            None
        }
    }

    /// Row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row from the top of the board (0 = rank 8, 7 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / NUM_SQUARES_PER_ROW
    }

    /// Column from the left edge (0 = file a, 7 = file h)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % NUM_SQUARES_PER_ROW
    }

    /// Add a raw index offset. Returns `None` when the result leaves `0..64`.
    ///
    /// Only the index range is checked; horizontal wraparound across the
    /// left or right edge is the caller's concern.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < NUM_SQUARES as i16 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.column() as u8 + b'a') as char;
        let rank = NUM_SQUARES_PER_ROW - self.row();
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        if is_valid(index) {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfRange {
                index: i64::from(index),
            })
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(usize::from(index))
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> Self {
        sq.0
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

        let column = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => NUM_SQUARES_PER_ROW - 1 - (b - b'1') as usize,
            _ => return Err(invalid()),
        };

        Square::from_row_column(row, column).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Square::new(63).is_ok());
        assert_eq!(
            Square::new(64),
            Err(SquareError::OutOfRange { index: 64 })
        );
        assert_eq!(
            Square::try_from(-1),
            Err(SquareError::OutOfRange { index: -1 })
        );
    }

    #[test]
    fn test_constructors_agree_with_is_valid() {
        for index in -70..70 {
            assert_eq!(Square::try_from(index).is_ok(), is_valid(index), "{index}");
            if let Ok(idx) = usize::try_from(index) {
                assert_eq!(Square::new(idx).is_ok(), is_valid(index), "{index}");
            }
        }
        assert_eq!(Square::try_from(63i32).map(Square::index), Ok(63));
        assert!(Square::new(usize::MAX).is_err());
    }

    #[test]
    fn test_layout_corners() {
        assert_eq!(Square::from_index_const(0).to_string(), "a8");
        assert_eq!(Square::from_index_const(7).to_string(), "h8");
        assert_eq!(Square::from_index_const(56).to_string(), "a1");
        assert_eq!(Square::from_index_const(63).to_string(), "h1");
    }

    #[test]
    fn test_parse_matches_display() {
        for sq in Square::all() {
            let parsed: Square = sq.to_string().parse().unwrap();
            assert_eq!(parsed, sq);
        }
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_in_range() {
        let a8 = Square::from_index_const(0);
        assert_eq!(a8.offset(-1), None);
        assert_eq!(a8.offset(9), Some(Square::from_index_const(9)));
        let h1 = Square::from_index_const(63);
        assert_eq!(h1.offset(1), None);
        assert_eq!(h1.offset(-8).map(Square::index), Some(55));
    }

    #[test]
    fn test_row_and_column() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.column(), 4);
        assert_eq!(e4.index(), 36);
    }
}

//! King castle state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const CASTLED: u8 = 1 << 0;
pub(crate) const KING_SIDE_CAPABLE: u8 = 1 << 1;
pub(crate) const QUEEN_SIDE_CAPABLE: u8 = 1 << 2;

/// Castle flags carried by a king, represented as a bitmask.
///
/// Non-king pieces always carry `KingCastling::none()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KingCastling(u8);

impl KingCastling {
    /// No flags set: not castled, no castle available
    #[must_use]
    pub const fn none() -> Self {
        KingCastling(0)
    }

    /// Build from the three flags
    #[must_use]
    pub const fn new(castled: bool, king_side_capable: bool, queen_side_capable: bool) -> Self {
        let mut bits = 0;
        if castled {
            bits |= CASTLED;
        }
        if king_side_capable {
            bits |= KING_SIDE_CAPABLE;
        }
        if queen_side_capable {
            bits |= QUEEN_SIDE_CAPABLE;
        }
        KingCastling(bits)
    }

    #[inline]
    #[must_use]
    pub const fn is_castled(self) -> bool {
        self.0 & CASTLED != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_king_side_capable(self) -> bool {
        self.0 & KING_SIDE_CAPABLE != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_queen_side_capable(self) -> bool {
        self.0 & QUEEN_SIDE_CAPABLE != 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

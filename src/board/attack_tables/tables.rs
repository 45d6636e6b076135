//! Raw index offsets for every piece kind.
//!
//! Offsets are in row-major index units: -8 is one row towards rank 8,
//! +1 is one column towards file h.

pub(crate) const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];

pub(crate) const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];

pub(crate) const QUEEN_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Pawn offsets before applying the color's direction: single step, jump,
/// and the two diagonals.
pub(crate) const PAWN_STEP: i8 = 8;
pub(crate) const PAWN_JUMP: i8 = 16;
pub(crate) const PAWN_OFFSETS: [i8; 4] = [PAWN_STEP, PAWN_JUMP, 7, 9];

//! Piece kinds, colors and immutable piece values.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::KingCastling;
use super::moves::Move;
use super::square::Square;
use crate::board::geometry::{is_in_row, NUM_SQUARES_PER_ROW};
use crate::board::moved_cache::MovedPieceCache;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece types in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Every kind whose post-move identity is served by the moved-piece cache
    pub const NON_KING: [PieceKind; 5] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Parse a piece kind from a character (case-insensitive: p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Returns true if this piece moves along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char().to_ascii_uppercase())
    }
}

/// Promotion choices in order of typical preference (queen first)
pub(crate) const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index direction of a forward pawn step (-1 for White, +1 for Black).
    ///
    /// White starts on the high indices and advances towards index 0.
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => NUM_SQUARES_PER_ROW - 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_pawn_promotion_square(self, sq: Square) -> bool {
        is_in_row(sq, self.promotion_row())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// An immutable piece standing on a square.
///
/// Moving a piece never mutates it: [`Piece::move_piece`] yields the value
/// that stands on the destination.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    first_move: bool,
    castling: KingCastling,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece::with_first_move(kind, color, square, true)
    }

    #[must_use]
    pub const fn with_first_move(
        kind: PieceKind,
        color: Color,
        square: Square,
        first_move: bool,
    ) -> Self {
        Piece {
            kind,
            color,
            square,
            first_move,
            castling: KingCastling::none(),
        }
    }

    /// An unmoved, uncastled king.
    #[must_use]
    pub const fn king(
        color: Color,
        square: Square,
        king_side_capable: bool,
        queen_side_capable: bool,
    ) -> Self {
        Piece::king_with_state(
            color,
            square,
            true,
            false,
            king_side_capable,
            queen_side_capable,
        )
    }

    #[must_use]
    pub const fn king_with_state(
        color: Color,
        square: Square,
        first_move: bool,
        castled: bool,
        king_side_capable: bool,
        queen_side_capable: bool,
    ) -> Self {
        Piece {
            kind: PieceKind::King,
            color,
            square,
            first_move,
            castling: KingCastling::new(castled, king_side_capable, queen_side_capable),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Still eligible for first-move-only privileges (pawn jump, castling)
    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> KingCastling {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn is_castled(&self) -> bool {
        self.castling.is_castled()
    }

    #[inline]
    #[must_use]
    pub const fn is_king_side_castle_capable(&self) -> bool {
        self.castling.is_king_side_capable()
    }

    #[inline]
    #[must_use]
    pub const fn is_queen_side_castle_capable(&self) -> bool {
        self.castling.is_queen_side_capable()
    }

    /// True when `other` belongs to the opposing side and may be captured.
    #[inline]
    #[must_use]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// The piece that stands on the destination after `mv`.
    ///
    /// Non-king results are read from the moved-piece cache; a promotion
    /// reads the promoted kind. Kings are built directly since their castle
    /// state depends on the move itself.
    #[must_use]
    pub fn move_piece(&self, mv: &Move, cache: &MovedPieceCache) -> Piece {
        let kind = mv.promotion().unwrap_or(self.kind);
        match cache.get_moved(kind, self.color, mv.to()) {
            Some(moved) => *moved,
            None => Piece::king_with_state(
                self.color,
                mv.to(),
                false,
                mv.is_castling_move(),
                false,
                false,
            ),
        }
    }

    /// Character for board diagrams: uppercase for White
    #[must_use]
    pub fn to_diagram_char(&self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.color == other.color
            && self.square == other.square
            && self.first_move == other.first_move
            && (self.kind != PieceKind::King || self.is_castled() == other.is_castled())
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.color.hash(state);
        self.square.hash(state);
        self.first_move.hash(state);
        if self.kind == PieceKind::King {
            self.is_castled().hash(state);
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram_char())
    }
}

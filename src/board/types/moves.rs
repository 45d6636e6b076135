//! Move values and the fixed-capacity move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// What kind of move a [`Move`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain move to an empty square
    Quiet,
    /// Move onto an enemy piece
    Capture,
    /// Pawn double step on its first move
    PawnJump,
    /// Pawn capture of a pawn that just jumped past it
    EnPassant,
    /// Pawn reaching the last row; may also capture
    Promotion(PieceKind),
    CastleKingSide,
    CastleQueenSide,
}

/// A candidate move produced by a generator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    #[inline]
    const fn build(piece: Piece, to: Square, captured: Option<Piece>, kind: MoveKind) -> Self {
        Move {
            from: piece.square(),
            to,
            piece,
            captured,
            kind,
        }
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(piece: Piece, to: Square) -> Self {
        Move::build(piece, to, None, MoveKind::Quiet)
    }

    /// Create a capture of `captured`, which stands on `to`
    #[inline]
    #[must_use]
    pub const fn capture(piece: Piece, to: Square, captured: Piece) -> Self {
        Move::build(piece, to, Some(captured), MoveKind::Capture)
    }

    /// Create a pawn double step
    #[inline]
    #[must_use]
    pub const fn pawn_jump(piece: Piece, to: Square) -> Self {
        Move::build(piece, to, None, MoveKind::PawnJump)
    }

    /// Create an en passant capture; `captured` stands beside the mover, not on `to`
    #[inline]
    #[must_use]
    pub const fn en_passant(piece: Piece, to: Square, captured: Piece) -> Self {
        Move::build(piece, to, Some(captured), MoveKind::EnPassant)
    }

    /// Create a promotion, optionally capturing on the promotion square
    #[inline]
    #[must_use]
    pub const fn promote(
        piece: Piece,
        to: Square,
        promote_to: PieceKind,
        captured: Option<Piece>,
    ) -> Self {
        Move::build(piece, to, captured, MoveKind::Promotion(promote_to))
    }

    /// Create a castle move for `king`. Checking that the castle is
    /// available is left to the caller.
    #[inline]
    #[must_use]
    pub const fn castle(king: Piece, to: Square, king_side: bool) -> Self {
        let kind = if king_side {
            MoveKind::CastleKingSide
        } else {
            MoveKind::CastleQueenSide
        };
        Move::build(king, to, None, kind)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece being moved, as it stood before the move
    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn captured_piece(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece.color()
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling_move(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingSide | MoveKind::CastleQueenSide
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_jump(&self) -> bool {
        matches!(self.kind, MoveKind::PawnJump)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}{}", self.piece, self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={promo}")?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured}")?;
        }
        if self.is_castling_move() {
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
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Capacity of a single piece's move list: a central queen reaches 27 squares.
pub(crate) const MAX_MOVES: usize = 32;
pub(crate) const EMPTY_MOVE: Move = Move::quiet(
    Piece::new(PieceKind::Pawn, Color::White, Square::from_index_const(0)),
    Square::from_index_const(0),
);

/// One piece's moves, stored inline in a fixed-size array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
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
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    /// Returns true if some move in the list ends on `sq`
    #[must_use]
    pub fn contains_destination(&self, sq: Square) -> bool {
        self.iter().any(|mv| mv.to() == sq)
    }

    /// Number of capturing moves in the list
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.iter().filter(|mv| mv.is_capture()).count()
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
            let mv = self.list.moves[self.idx];
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
        &self.moves[idx]
    }
}

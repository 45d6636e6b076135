//! Canonical "already moved" piece values.
//!
//! For every non-king kind, color and square there is exactly one piece value
//! with its first-move privileges spent. Applying a move reads the result from
//! here instead of building a new value.

use super::geometry::NUM_SQUARES;
use super::{Color, Piece, PieceKind, Square};

const CACHED_KINDS: usize = PieceKind::NON_KING.len();

/// Moved-piece flyweights indexed by `[kind][color][square]`.
#[derive(Debug)]
pub struct MovedPieceCache {
    pieces: Box<[[[Piece; NUM_SQUARES]; 2]; CACHED_KINDS]>,
}

impl MovedPieceCache {
    #[must_use]
    pub fn new() -> Self {
        let pieces = Box::new(std::array::from_fn(|kind_idx| {
            let kind = PieceKind::NON_KING[kind_idx];
            std::array::from_fn(|color_idx| {
                let color = Color::BOTH[color_idx];
                std::array::from_fn(|sq_idx| {
                    Piece::with_first_move(kind, color, Square::from_index_const(sq_idx), false)
                })
            })
        }));
        MovedPieceCache { pieces }
    }

    /// The moved piece of `kind` and `color` standing on `square`.
    ///
    /// Returns `None` for kings, whose post-move state depends on the move.
    #[inline]
    #[must_use]
    pub fn get_moved(&self, kind: PieceKind, color: Color, square: Square) -> Option<&Piece> {
        if kind == PieceKind::King {
            return None;
        }
        Some(&self.pieces[kind.index()][color.index()][square.index()])
    }

    /// Number of cached values
    #[must_use]
    pub fn len(&self) -> usize {
        CACHED_KINDS * Color::BOTH.len() * NUM_SQUARES
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MovedPieceCache {
    fn default() -> Self {
        Self::new()
    }
}

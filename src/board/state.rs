//! Board snapshots.
//!
//! Move generation only needs to ask "what stands on this square?", which is
//! the [`PieceLookup`] trait. [`Board`] is an immutable snapshot built from
//! shared empty tiles plus one occupied tile per piece.

use std::borrow::Cow;
use std::fmt;

use super::error::MoveGenError;
use super::geometry::{NUM_SQUARES, NUM_SQUARES_PER_ROW};
use super::movegen::generate_moves;
use super::tile::Tile;
use super::{Color, Move, MoveTables, Piece, PieceKind, Square};

/// Read access to board occupancy.
///
/// Generators only read through this trait and never keep references into
/// the container past a single call.
pub trait PieceLookup {
    /// The piece on `square`, if any.
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// The pawn that just made a double step and may be captured en passant.
    fn en_passant_pawn(&self) -> Option<Piece> {
        None
    }
}

impl PieceLookup for [Option<Piece>; NUM_SQUARES] {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self[square.index()]
    }
}

/// An immutable position snapshot.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Cow<'static, Tile>>,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// Build a snapshot; a later piece on the same square replaces an earlier one.
    pub(crate) fn from_pieces(pieces: &[Piece], en_passant_pawn: Option<Piece>) -> Self {
        let mut occupants: [Option<Piece>; NUM_SQUARES] = [None; NUM_SQUARES];
        for piece in pieces {
            occupants[piece.square().index()] = Some(*piece);
        }
        let tiles = Square::all()
            .map(|sq| Tile::create(sq, occupants[sq.index()]))
            .collect();
        Board {
            tiles,
            en_passant_pawn,
        }
    }

    /// A board with no pieces on it
    #[must_use]
    pub fn empty() -> Self {
        Board::from_pieces(&[], None)
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, sq: Square) -> &Tile {
        &self.tiles[sq.index()]
    }

    /// Every piece on the board, in square order.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles.iter().filter_map(|tile| tile.piece())
    }

    /// Every piece of one color, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.all_pieces().filter(move |piece| piece.color() == color)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces(color)
            .find(|piece| piece.kind() == PieceKind::King)
    }

    /// Every pseudo-legal move of one side: the moves of each of its pieces
    /// concatenated in square order.
    pub fn pseudo_legal_moves(
        &self,
        color: Color,
        tables: &MoveTables,
    ) -> Result<Vec<Move>, MoveGenError> {
        let mut moves = Vec::new();
        for piece in self.pieces(color) {
            moves.extend(generate_moves(piece, self, tables)?);
        }
        Ok(moves)
    }
}

impl PieceLookup for Board {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tile(square).piece().copied()
    }

    fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tile) in self.tiles.iter().enumerate() {
            let c = tile.piece().map_or('-', Piece::to_diagram_char);
            write!(f, "{c:>3}")?;
            if (idx + 1) % NUM_SQUARES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

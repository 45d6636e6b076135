//! Board tiles and the shared empty-tile registry.
//!
//! Empty tiles are flyweights: one value per square, built once and
//! borrowed by every board snapshot. Occupied tiles are owned by the
//! snapshot that holds them.

use std::borrow::Cow;

use once_cell::sync::Lazy;

use super::geometry::NUM_SQUARES;
use super::{Piece, Square};

/// One square of a board snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

impl Tile {
    /// Create a tile: the shared empty flyweight when `piece` is `None`,
    /// otherwise a fresh occupied tile.
    #[must_use]
    pub fn create(square: Square, piece: Option<Piece>) -> Cow<'static, Tile> {
        TileRegistry::shared().tile(square, piece)
    }

    #[inline]
    #[must_use]
    pub fn square(&self) -> Square {
        match self {
            Tile::Empty(sq) | Tile::Occupied(sq, _) => *sq,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    #[inline]
    #[must_use]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

/// The 64 empty tiles, built once.
#[derive(Debug)]
pub struct TileRegistry {
    empty: [Tile; NUM_SQUARES],
}

static SHARED_TILES: Lazy<TileRegistry> = Lazy::new(TileRegistry::new);

impl TileRegistry {
    #[must_use]
    pub fn new() -> Self {
        TileRegistry {
            empty: std::array::from_fn(|idx| Tile::Empty(Square::from_index_const(idx))),
        }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn shared() -> &'static TileRegistry {
        &SHARED_TILES
    }

    /// The empty flyweight for `square`.
    #[inline]
    #[must_use]
    pub fn empty(&self, square: Square) -> &Tile {
        &self.empty[square.index()]
    }

    #[must_use]
    pub fn tile(&self, square: Square, piece: Option<Piece>) -> Cow<'_, Tile> {
        match piece {
            Some(piece) => Cow::Owned(Tile::Occupied(square, piece)),
            None => Cow::Borrowed(self.empty(square)),
        }
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

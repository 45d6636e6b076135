//! Precomputed movement tables.
//!
//! Sliding pieces (bishop, rook, queen) read per-square [`Ray`]s; leaping
//! pieces (king, knight) and pawns read per-square offset lists. Everything
//! is built once by [`MoveTables::new`] and is read-only afterwards, so one
//! instance can serve any number of threads.

mod offsets;
mod rays;
pub(crate) mod tables;

pub use offsets::OffsetTable;
pub use rays::{Ray, RayTable};

use once_cell::sync::Lazy;

use self::tables::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_OFFSETS, QUEEN_DIRECTIONS,
    ROOK_DIRECTIONS,
};
use super::moved_cache::MovedPieceCache;
use super::{Color, PieceKind};

static SHARED_TABLES: Lazy<MoveTables> = Lazy::new(MoveTables::new);

/// Every table move generation reads from.
#[derive(Debug)]
pub struct MoveTables {
    bishop: RayTable,
    rook: RayTable,
    queen: RayTable,
    knight: OffsetTable,
    king: OffsetTable,
    pawn: [OffsetTable; 2],
    moved: MovedPieceCache,
}

impl MoveTables {
    /// Build every table.
    #[must_use]
    pub fn new() -> Self {
        let pawn = Color::BOTH.map(|color| {
            let offsets = PAWN_OFFSETS.map(|offset| offset * color.direction());
            OffsetTable::new(PieceKind::Pawn, &offsets)
        });
        let tables = MoveTables {
            bishop: RayTable::new(PieceKind::Bishop, &BISHOP_DIRECTIONS),
            rook: RayTable::new(PieceKind::Rook, &ROOK_DIRECTIONS),
            queen: RayTable::new(PieceKind::Queen, &QUEEN_DIRECTIONS),
            knight: OffsetTable::new(PieceKind::Knight, &KNIGHT_OFFSETS),
            king: OffsetTable::new(PieceKind::King, &KING_OFFSETS),
            pawn,
            moved: MovedPieceCache::new(),
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "move tables built: {} bishop / {} rook / {} queen ray squares, {} knight / {} king offsets, {} moved pieces",
            tables.bishop.total_squares(),
            tables.rook.total_squares(),
            tables.queen.total_squares(),
            tables.knight.total_offsets(),
            tables.king.total_offsets(),
            tables.moved.len()
        );

        tables
    }

    /// The process-wide instance, built on first use.
    #[must_use]
    pub fn shared() -> &'static MoveTables {
        &SHARED_TABLES
    }

    /// Ray table for a sliding kind, `None` for the others.
    #[must_use]
    pub fn ray_table(&self, kind: PieceKind) -> Option<&RayTable> {
        match kind {
            PieceKind::Bishop => Some(&self.bishop),
            PieceKind::Rook => Some(&self.rook),
            PieceKind::Queen => Some(&self.queen),
            _ => None,
        }
    }

    /// Offset table for a leaping kind or a pawn of `color`, `None` for sliders.
    #[must_use]
    pub fn offset_table(&self, kind: PieceKind, color: Color) -> Option<&OffsetTable> {
        match kind {
            PieceKind::Knight => Some(&self.knight),
            PieceKind::King => Some(&self.king),
            PieceKind::Pawn => Some(&self.pawn[color.index()]),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn moved_pieces(&self) -> &MovedPieceCache {
        &self.moved
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

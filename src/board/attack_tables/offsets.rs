//! Precomputed single-step offsets for leaping pieces and pawns.

use crate::board::error::MoveGenError;
use crate::board::geometry::is_edge_exclusion;
use crate::board::{PieceKind, Square};

/// Per-square list of offsets that land on the board without wrapping.
#[derive(Clone, Debug)]
pub struct OffsetTable {
    kind: PieceKind,
    offsets: Vec<Vec<i8>>,
}

impl OffsetTable {
    #[must_use]
    pub fn new(kind: PieceKind, candidates: &[i8]) -> Self {
        let offsets = Square::all()
            .map(|start| {
                candidates
                    .iter()
                    .copied()
                    .filter(|&offset| {
                        !is_edge_exclusion(start, offset) && start.offset(offset).is_some()
                    })
                    .collect()
            })
            .collect();
        OffsetTable { kind, offsets }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Surviving offsets for `sq`, in candidate order.
    pub fn offsets(&self, sq: Square) -> Result<&[i8], MoveGenError> {
        match self.offsets.get(sq.index()) {
            Some(offsets) if !offsets.is_empty() => Ok(offsets.as_slice()),
            _ => {
                #[cfg(feature = "logging")]
                log::warn!("offset table for {:?} has no entry on {}", self.kind, sq);
                Err(MoveGenError::MissingTableEntry {
                    kind: self.kind,
                    square: sq,
                })
            }
        }
    }

    /// Destinations reachable from `sq`, paired with the offset that reaches them.
    pub fn destinations(
        &self,
        sq: Square,
    ) -> Result<impl Iterator<Item = (i8, Square)> + '_, MoveGenError> {
        let offsets = self.offsets(sq)?;
        Ok(offsets
            .iter()
            .filter_map(move |&offset| sq.offset(offset).map(|dest| (offset, dest))))
    }

    /// Total number of stored offsets across all squares
    #[must_use]
    pub fn total_offsets(&self) -> usize {
        self.offsets.iter().map(Vec::len).sum()
    }
}

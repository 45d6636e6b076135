//! Precomputed rays for sliding pieces.

use crate::board::error::MoveGenError;
use crate::board::geometry::{is_edge_exclusion, NUM_SQUARES};
use crate::board::{PieceKind, Square};

/// Squares reachable from a start square along one direction, nearest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ray {
    direction: i8,
    squares: Vec<Square>,
}

impl Ray {
    /// Walk from `start` along `direction` until the next step would leave
    /// the board or wrap an edge. The start square itself is not included.
    #[must_use]
    pub fn walk(start: Square, direction: i8) -> Self {
        let mut squares = Vec::new();
        let mut current = start;
        loop {
            if is_edge_exclusion(current, direction) {
                break;
            }
            match current.offset(direction) {
                Some(next) => {
                    squares.push(next);
                    current = next;
                }
                None => break,
            }
        }
        Ray { direction, squares }
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> i8 {
        self.direction
    }

    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Per-square rays for one sliding kind.
#[derive(Clone, Debug)]
pub struct RayTable {
    kind: PieceKind,
    rays: Vec<Vec<Ray>>,
}

impl RayTable {
    /// Build the table for `kind` moving along `directions`. Empty rays are
    /// dropped, so a square's list only holds directions with room to move.
    #[must_use]
    pub fn new(kind: PieceKind, directions: &[i8]) -> Self {
        let rays: Vec<Vec<Ray>> = Square::all()
            .map(|start| {
                directions
                    .iter()
                    .map(|&dir| Ray::walk(start, dir))
                    .filter(|ray| !ray.is_empty())
                    .collect()
            })
            .collect();
        debug_assert_eq!(rays.len(), NUM_SQUARES);
        RayTable { kind, rays }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rays starting at `sq`, in direction order.
    pub fn rays(&self, sq: Square) -> Result<&[Ray], MoveGenError> {
        match self.rays.get(sq.index()) {
            Some(rays) if !rays.is_empty() => Ok(rays.as_slice()),
            _ => {
                #[cfg(feature = "logging")]
                log::warn!("ray table for {:?} has no entry on {}", self.kind, sq);
                Err(MoveGenError::MissingTableEntry {
                    kind: self.kind,
                    square: sq,
                })
            }
        }
    }

    /// Total number of squares across every ray of every start square
    #[must_use]
    pub fn total_squares(&self) -> usize {
        self.rays.iter().flatten().map(Ray::len).sum()
    }
}

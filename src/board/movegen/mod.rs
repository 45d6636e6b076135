//! Table-driven move generation.
//!
//! Each generator is a pure function of (piece, board, tables). Sliders walk
//! their rays until blocked; leapers test each precomputed offset on its own;
//! pawns mix forward steps, diagonal captures, jumps and promotions.

mod leapers;
mod pawns;
mod sliders;

pub use leapers::generate_leaping_moves;
pub use pawns::generate_pawn_moves;
pub use sliders::generate_sliding_moves;

use super::error::MoveGenError;
use super::{MoveList, MoveTables, Piece, PieceKind, PieceLookup};

/// Generate the pseudo-legal moves of `piece` on `board`.
///
/// Moves that leave the mover's own king in check are not filtered, and
/// castling is never produced here.
pub fn generate_moves<B: PieceLookup + ?Sized>(
    piece: &Piece,
    board: &B,
    tables: &MoveTables,
) -> Result<MoveList, MoveGenError> {
    let kind = piece.kind();
    let missing = || MoveGenError::MissingTableEntry {
        kind,
        square: piece.square(),
    };

    let moves = match kind {
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let table = tables.ray_table(kind).ok_or_else(missing)?;
            generate_sliding_moves(piece, board, table)?
        }
        PieceKind::Knight | PieceKind::King => {
            let table = tables
                .offset_table(kind, piece.color())
                .ok_or_else(missing)?;
            generate_leaping_moves(piece, board, table)?
        }
        PieceKind::Pawn => generate_pawn_moves(piece, board, tables)?,
    };

    #[cfg(feature = "logging")]
    log::trace!(
        "{:?} {:?} on {}: {} moves",
        piece.color(),
        kind,
        piece.square(),
        moves.len()
    );

    Ok(moves)
}

impl Piece {
    /// Pseudo-legal moves of this piece; see [`generate_moves`].
    pub fn generate_moves<B: PieceLookup + ?Sized>(
        &self,
        board: &B,
        tables: &MoveTables,
    ) -> Result<MoveList, MoveGenError> {
        generate_moves(self, board, tables)
    }
}

/// Reject a piece handed to a generator for another kind.
fn ensure_kind(piece: &Piece, expected: PieceKind) -> Result<(), MoveGenError> {
    if piece.kind() == expected {
        Ok(())
    } else {
        Err(MoveGenError::WrongPieceKind {
            expected,
            found: piece.kind(),
        })
    }
}

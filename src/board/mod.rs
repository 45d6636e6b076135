//! Pseudo-legal move generation over immutable board snapshots.
//!
//! Movement is driven by tables computed once per process: per-square rays
//! for sliding pieces, per-square offset lists for leaping pieces and pawns,
//! and a cache of "already moved" piece values. Generating the moves of a
//! piece is then a table lookup plus an occupancy scan.
//!
//! # Example
//! ```
//! use chess_movegen::board::{BoardBuilder, Color, MoveTables, Piece, PieceKind, Square};
//!
//! let tables = MoveTables::shared();
//! let e4: Square = "e4".parse().unwrap();
//! let king = Piece::king(Color::White, e4, false, false);
//! let board = BoardBuilder::new().piece(king).build();
//! let moves = king.generate_moves(&board, tables).unwrap();
//! assert_eq!(moves.len(), 8);
//! ```

mod attack_tables;
mod builder;
mod error;
pub mod geometry;
mod movegen;
mod moved_cache;
pub mod prelude;
mod state;
mod tile;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveGenError, SquareError};
pub use state::{Board, PieceLookup};
pub use tile::{Tile, TileRegistry};
pub use types::{
    Color, KingCastling, Move, MoveKind, MoveList, MoveListIntoIter, Piece, PieceKind, Square,
};

// Tables and generators
pub use attack_tables::{MoveTables, OffsetTable, Ray, RayTable};
pub use moved_cache::MovedPieceCache;
pub use movegen::{
    generate_leaping_moves, generate_moves, generate_pawn_moves, generate_sliding_moves,
};

pub(crate) use types::PROMOTION_PIECES;

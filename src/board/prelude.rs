//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//! ```

pub use super::{
    generate_moves, Board, BoardBuilder, Color, Move, MoveGenError, MoveKind, MoveList,
    MoveTables, Piece, PieceKind, PieceLookup, Square, SquareError,
};

//! Core chess types.
//!
//! This module contains the value types every other component passes around:
//! - `PieceKind`, `Color` and the immutable `Piece` value
//! - `Square` - row-major board index, valid by construction
//! - `Move` and `MoveList` - generated move records
//! - `KingCastling` - castle flags carried by kings

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::KingCastling;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;

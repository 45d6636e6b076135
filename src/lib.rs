pub mod board;

pub use board::{generate_moves, Board, Color, Move, MoveTables, Piece, PieceKind, Square};

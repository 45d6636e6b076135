//! Fluent builder for constructing board snapshots.
//!
//! # Example
//! ```
//! use chess_movegen::board::{BoardBuilder, Color, Piece, PieceKind, PieceLookup, Square};
//!
//! let e4: Square = "e4".parse().unwrap();
//! let board = BoardBuilder::new()
//!     .place(PieceKind::Bishop, Color::White, e4)
//!     .build();
//! assert!(board.piece_at(e4).is_some());
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for constructing `Board` snapshots.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for color in Color::BOTH {
            let back_row = match color {
                Color::White => 7,
                Color::Black => 0,
            };
            let pawn_row = color.pawn_start_row();
            for (column, &kind) in BACK_RANK.iter().enumerate() {
                let Some(sq) = Square::from_row_column(back_row, column) else {
                    continue;
                };
                let piece = if kind == PieceKind::King {
                    Piece::king(color, sq, true, true)
                } else {
                    Piece::new(kind, color, sq)
                };
                builder.pieces.push(piece);
            }
            for column in 0..8 {
                if let Some(sq) = Square::from_row_column(pawn_row, column) {
                    builder.pieces.push(Piece::new(PieceKind::Pawn, color, sq));
                }
            }
        }
        builder
    }

    /// Place an existing piece value.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.pieces.push(piece);
        self
    }

    /// Place a fresh (first-move) piece.
    #[must_use]
    pub fn place(self, kind: PieceKind, color: Color, square: Square) -> Self {
        let piece = if kind == PieceKind::King {
            Piece::king(color, square, false, false)
        } else {
            Piece::new(kind, color, square)
        };
        self.piece(piece)
    }

    /// Mark `pawn` as capturable en passant. The pawn is also placed.
    #[must_use]
    pub fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self.piece(pawn)
    }

    /// Build the board.
    #[must_use]
    pub fn build(&self) -> Board {
        Board::from_pieces(&self.pieces, self.en_passant_pawn)
    }
}

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `sliders.rs` - Bishop, rook and queen rays against occupancy
//! - `leapers.rs` - King and knight offsets against occupancy
//! - `pawns.rs` - Steps, jumps, captures, en passant and promotion
//! - `move_application.rs` - Post-move piece identity and the moved-piece cache
//! - `proptest.rs` - Property-based tests over random sparse boards

mod leapers;
mod sliders;

use crate::board::{Board, BoardBuilder, Color, Move, MoveList, MoveTables, Piece, PieceKind, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn tables() -> &'static MoveTables {
    MoveTables::shared()
}

/// Board holding exactly `pieces`.
pub(super) fn board_with(pieces: &[Piece]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, piece| builder.piece(*piece))
        .build()
}

pub(super) fn moves_of(piece: Piece, board: &Board) -> MoveList {
    piece.generate_moves(board, tables()).unwrap()
}

pub(super) fn destinations(moves: &MoveList) -> Vec<String> {
    moves.iter().map(|mv| mv.to().to_string()).collect()
}

/// (row, column) steps for each kind, independent of the index offsets the
/// tables are built from.
pub(super) fn geometric_steps(kind: PieceKind) -> &'static [(i32, i32)] {
    const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
    const ALL: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
    const KNIGHT: [(i32, i32); 8] = [
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ];
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Queen | PieceKind::King => &ALL,
        PieceKind::Knight => &KNIGHT,
        PieceKind::Pawn => &[],
    }
}

/// Destinations of `kind` from `from` on an empty board, by row/column arithmetic.
pub(super) fn geometric_destinations(kind: PieceKind, from: Square) -> Vec<Square> {
    let on_board = |r: i32, c: i32| (0..8).contains(&r) && (0..8).contains(&c);
    let mut out = Vec::new();
    for &(dr, dc) in geometric_steps(kind) {
        let (mut r, mut c) = (from.row() as i32 + dr, from.column() as i32 + dc);
        while on_board(r, c) {
            if let Some(dest) = Square::from_row_column(r as usize, c as usize) {
                out.push(dest);
            }
            if !kind.is_slider() {
                break;
            }
            r += dr;
            c += dc;
        }
    }
    out.sort();
    out
}

pub(super) fn sorted_destinations(moves: &MoveList) -> Vec<Square> {
    let mut out: Vec<Square> = moves.iter().map(Move::to).collect();
    out.sort();
    out
}

#[test]
fn test_empty_board_matches_geometry_for_every_kind_and_square() {
    let empty = Board::empty();
    for kind in PieceKind::ALL.into_iter().filter(|&k| k != PieceKind::Pawn) {
        for from in Square::all() {
            for color in Color::BOTH {
                let piece = Piece::new(kind, color, from);
                let moves = moves_of(piece, &empty);
                assert_eq!(
                    sorted_destinations(&moves),
                    geometric_destinations(kind, from),
                    "{kind:?} on {from}"
                );
                assert_eq!(moves.capture_count(), 0);
            }
        }
    }
}

#[test]
fn test_starting_position_has_twenty_moves_per_side() {
    let board = BoardBuilder::starting_position().build();
    for color in Color::BOTH {
        let moves = board.pseudo_legal_moves(color, tables()).unwrap();
        assert_eq!(moves.len(), 20, "{color}");
        assert!(moves.iter().all(|mv| !mv.is_capture()));
        let jumps = moves.iter().filter(|mv| mv.is_pawn_jump()).count();
        assert_eq!(jumps, 8);
    }
}

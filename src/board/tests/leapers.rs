//! King and knight generation.

use super::{board_with, destinations, moves_of, sq, tables};
use crate::board::{generate_leaping_moves, Board, Color, MoveGenError, Piece, PieceKind};

#[test]
fn test_king_in_center_has_eight_quiet_moves() {
    let king = Piece::king(Color::White, sq("e4"), false, false);
    let moves = moves_of(king, &Board::empty());
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.capture_count(), 0);
}

#[test]
fn test_king_in_each_corner_has_three_moves() {
    for corner in ["a1", "a8", "h1", "h8"] {
        let king = Piece::king(Color::Black, sq(corner), false, false);
        assert_eq!(moves_of(king, &Board::empty()).len(), 3, "{corner}");
    }
}

#[test]
fn test_king_on_first_column_does_not_wrap() {
    let king = Piece::king(Color::White, sq("a5"), false, false);
    let moves = moves_of(king, &Board::empty());
    assert_eq!(destinations(&moves), ["a6", "b6", "b5", "a4", "b4"]);
}

#[test]
fn test_king_captures_enemy_and_skips_friend() {
    let king = Piece::king(Color::White, sq("e1"), true, true);
    let friend = Piece::new(PieceKind::Queen, Color::White, sq("d1"));
    let enemy = Piece::new(PieceKind::Bishop, Color::Black, sq("f2"));
    let moves = moves_of(king, &board_with(&[king, friend, enemy]));

    assert!(!moves.contains_destination(sq("d1")));
    assert_eq!(moves.capture_count(), 1);
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|mv| !mv.is_castling_move()));
}

#[test]
fn test_knight_occupancy_does_not_suppress_other_destinations() {
    let knight = Piece::new(PieceKind::Knight, Color::White, sq("d4"));
    let empty_moves = moves_of(knight, &Board::empty());
    assert_eq!(empty_moves.len(), 8);

    let friend = Piece::new(PieceKind::Pawn, Color::White, sq("e6"));
    let enemy = Piece::new(PieceKind::Pawn, Color::Black, sq("c2"));
    let moves = moves_of(knight, &board_with(&[knight, friend, enemy]));
    assert_eq!(moves.len(), 7);
    assert_eq!(moves.capture_count(), 1);
    for dest in ["b5", "b3", "c6", "e2", "f5", "f3"] {
        assert!(moves.contains_destination(sq(dest)), "{dest}");
    }
}

#[test]
fn test_knight_in_corner_and_beside_edge() {
    let corner = Piece::new(PieceKind::Knight, Color::Black, sq("h8"));
    assert_eq!(
        destinations(&moves_of(corner, &Board::empty())),
        ["f7", "g6"]
    );

    let b4 = Piece::new(PieceKind::Knight, Color::Black, sq("b4"));
    let moves = moves_of(b4, &Board::empty());
    assert_eq!(moves.len(), 6);
    assert!(!moves.contains_destination(sq("h5")));
    assert!(!moves.contains_destination(sq("h3")));
}

#[test]
fn test_knight_table_rejects_king() {
    let king = Piece::king(Color::White, sq("e1"), false, false);
    let table = tables()
        .offset_table(PieceKind::Knight, Color::White)
        .unwrap();
    assert_eq!(
        generate_leaping_moves(&king, &Board::empty(), table).unwrap_err(),
        MoveGenError::WrongPieceKind {
            expected: PieceKind::Knight,
            found: PieceKind::King,
        }
    );
}

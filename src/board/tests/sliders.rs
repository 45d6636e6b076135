//! Sliding piece generation.

use super::{board_with, destinations, moves_of, sq, tables};
use crate::board::{
    generate_sliding_moves, Board, Color, MoveGenError, MoveKind, Piece, PieceKind,
};

fn bishop(color: Color, at: &str) -> Piece {
    Piece::new(PieceKind::Bishop, color, sq(at))
}

#[test]
fn test_bishop_second_row_second_column_on_empty_board() {
    let b7 = bishop(Color::White, "b7");
    let rays = tables()
        .ray_table(PieceKind::Bishop)
        .unwrap()
        .rays(b7.square())
        .unwrap();
    assert_eq!(rays.len(), 4);
    let combined: usize = rays.iter().map(|ray| ray.len()).sum();
    // NW 1 + NE 1 + SW 1 + SE 6
    assert_eq!(combined, 9);

    let moves = moves_of(b7, &Board::empty());
    assert_eq!(moves.len(), combined);
    assert_eq!(moves.capture_count(), 0);
}

#[test]
fn test_corner_bishop_single_ray_of_seven() {
    let h8 = bishop(Color::Black, "h8");
    let moves = moves_of(h8, &Board::empty());
    assert_eq!(
        destinations(&moves),
        ["g7", "f6", "e5", "d4", "c3", "b2", "a1"]
    );
}

#[test]
fn test_enumeration_follows_direction_order() {
    let c1 = bishop(Color::White, "c1");
    let moves = moves_of(c1, &Board::empty());
    assert_eq!(
        destinations(&moves),
        ["b2", "a3", "d2", "e3", "f4", "g5", "h6"]
    );
}

#[test]
fn test_enemy_three_squares_away_is_captured_and_ends_ray() {
    let c1 = bishop(Color::White, "c1");
    let enemy = Piece::new(PieceKind::Knight, Color::Black, sq("f4"));
    let moves = moves_of(c1, &board_with(&[c1, enemy]));

    let on_diagonal: Vec<_> = moves
        .iter()
        .filter(|mv| ["d2", "e3", "f4", "g5", "h6"].contains(&mv.to().to_string().as_str()))
        .collect();
    assert_eq!(on_diagonal.len(), 3);
    assert_eq!(on_diagonal[0].kind(), MoveKind::Quiet);
    assert_eq!(on_diagonal[1].kind(), MoveKind::Quiet);
    assert_eq!(on_diagonal[2].kind(), MoveKind::Capture);
    assert_eq!(on_diagonal[2].to(), sq("f4"));
    assert_eq!(on_diagonal[2].captured_piece(), Some(enemy));
    assert!(!moves.contains_destination(sq("g5")));
    assert!(!moves.contains_destination(sq("h6")));
}

#[test]
fn test_friend_two_squares_away_blocks_without_capture() {
    let c1 = bishop(Color::White, "c1");
    let friend = Piece::new(PieceKind::Pawn, Color::White, sq("e3"));
    let moves = moves_of(c1, &board_with(&[c1, friend]));

    assert!(moves.contains_destination(sq("d2")));
    assert!(!moves.contains_destination(sq("e3")));
    assert!(!moves.contains_destination(sq("f4")));
    assert_eq!(moves.capture_count(), 0);
    // The other ray is untouched.
    assert_eq!(destinations(&moves), ["b2", "a3", "d2"]);
}

#[test]
fn test_rook_boxed_in_by_friends_has_no_moves() {
    let rook = Piece::new(PieceKind::Rook, Color::Black, sq("d5"));
    let mut pieces = vec![rook];
    for at in ["d6", "d4", "c5", "e5"] {
        pieces.push(Piece::new(PieceKind::Pawn, Color::Black, sq(at)));
    }
    let moves = moves_of(rook, &board_with(&pieces));
    assert!(moves.is_empty());
}

#[test]
fn test_queen_surrounded_by_enemies_captures_each_once() {
    let queen = Piece::new(PieceKind::Queen, Color::White, sq("e4"));
    let mut pieces = vec![queen];
    for at in ["d5", "e5", "f5", "d4", "f4", "d3", "e3", "f3"] {
        pieces.push(Piece::new(PieceKind::Rook, Color::Black, sq(at)));
    }
    let moves = moves_of(queen, &board_with(&pieces));
    assert_eq!(moves.len(), 8);
    assert_eq!(moves.capture_count(), 8);
}

#[test]
fn test_rook_on_edge_does_not_wrap_to_next_row() {
    let rook = Piece::new(PieceKind::Rook, Color::White, sq("h4"));
    let moves = moves_of(rook, &Board::empty());
    assert!(!moves.contains_destination(sq("a3")));
    assert!(!moves.contains_destination(sq("a5")));
    assert_eq!(moves.len(), 14);
}

#[test]
fn test_generation_does_not_touch_board() {
    let queen = Piece::new(PieceKind::Queen, Color::Black, sq("d8"));
    let board = board_with(&[queen]);
    let before = board.to_string();
    let first = moves_of(queen, &board);
    let second = moves_of(queen, &board);
    assert_eq!(board.to_string(), before);
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn test_wrong_table_is_rejected() {
    let knight = Piece::new(PieceKind::Knight, Color::White, sq("b1"));
    let table = tables().ray_table(PieceKind::Bishop).unwrap();
    let err = generate_sliding_moves(&knight, &Board::empty(), table).unwrap_err();
    assert_eq!(
        err,
        MoveGenError::WrongPieceKind {
            expected: PieceKind::Bishop,
            found: PieceKind::Knight,
        }
    );
}

use super::super::attack_tables::OffsetTable;
use super::super::error::MoveGenError;
use super::super::{Move, MoveList, Piece, PieceLookup};
use super::ensure_kind;

/// Test each precomputed offset of a king or knight independently.
pub fn generate_leaping_moves<B: PieceLookup + ?Sized>(
    piece: &Piece,
    board: &B,
    table: &OffsetTable,
) -> Result<MoveList, MoveGenError> {
    ensure_kind(piece, table.kind())?;
    let mut moves = MoveList::new();

    for (_, to) in table.destinations(piece.square())? {
        match board.piece_at(to) {
            None => moves.push(Move::quiet(*piece, to)),
            Some(occupant) if piece.is_enemy_of(&occupant) => {
                moves.push(Move::capture(*piece, to, occupant));
            }
            Some(_) => {}
        }
    }

    Ok(moves)
}

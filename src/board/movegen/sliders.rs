use super::super::attack_tables::RayTable;
use super::super::error::MoveGenError;
use super::super::{Move, MoveList, Piece, PieceLookup};
use super::ensure_kind;

/// Walk every ray of `piece` against the board.
///
/// Empty squares yield quiet moves and the walk continues; the first occupied
/// square ends the ray, yielding a capture when it holds an enemy.
pub fn generate_sliding_moves<B: PieceLookup + ?Sized>(
    piece: &Piece,
    board: &B,
    table: &RayTable,
) -> Result<MoveList, MoveGenError> {
    ensure_kind(piece, table.kind())?;
    let mut moves = MoveList::new();

    for ray in table.rays(piece.square())? {
        for &to in ray.squares() {
            match board.piece_at(to) {
                None => moves.push(Move::quiet(*piece, to)),
                Some(occupant) => {
                    if piece.is_enemy_of(&occupant) {
                        moves.push(Move::capture(*piece, to, occupant));
                    }
                    break;
                }
            }
        }
    }

    Ok(moves)
}

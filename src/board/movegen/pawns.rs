use super::super::attack_tables::tables::{PAWN_JUMP, PAWN_STEP};
use super::super::attack_tables::MoveTables;
use super::super::error::MoveGenError;
use super::super::{Move, MoveList, Piece, PieceKind, PieceLookup, Square, PROMOTION_PIECES};
use super::ensure_kind;

/// Pawn moves: single step, first-move jump from the start row, diagonal
/// captures (including en passant) and promotions on the last row.
///
/// A pawn standing on its own promotion row has no moves.
pub fn generate_pawn_moves<B: PieceLookup + ?Sized>(
    pawn: &Piece,
    board: &B,
    tables: &MoveTables,
) -> Result<MoveList, MoveGenError> {
    ensure_kind(pawn, PieceKind::Pawn)?;
    let color = pawn.color();
    let dir = color.direction();
    let from = pawn.square();
    let mut moves = MoveList::new();
    // Nothing lies beyond the promotion row, so the table holds no entry there.
    if from.row() == color.promotion_row() {
        return Ok(moves);
    }
    let table = tables
        .offset_table(PieceKind::Pawn, color)
        .ok_or(MoveGenError::MissingTableEntry {
            kind: PieceKind::Pawn,
            square: from,
        })?;

    for (offset, to) in table.destinations(from)? {
        // Offsets are stored already signed for the pawn's color.
        match offset * dir {
            PAWN_STEP => {
                if board.piece_at(to).is_none() {
                    push_advance(&mut moves, pawn, to, None);
                }
            }
            PAWN_JUMP => {
                let on_start_row = from.row() == color.pawn_start_row();
                if !on_start_row || !pawn.is_first_move() || board.piece_at(to).is_some() {
                    continue;
                }
                let between = from.offset(PAWN_STEP * dir);
                if between.is_some_and(|sq| board.piece_at(sq).is_none()) {
                    moves.push(Move::pawn_jump(*pawn, to));
                }
            }
            _ => match board.piece_at(to) {
                Some(occupant) if pawn.is_enemy_of(&occupant) => {
                    push_advance(&mut moves, pawn, to, Some(occupant));
                }
                Some(_) => {}
                None => {
                    if let Some(victim) = en_passant_victim(pawn, board, to) {
                        moves.push(Move::en_passant(*pawn, to, victim));
                    }
                }
            },
        }
    }

    Ok(moves)
}

/// A forward move or capture; expands into one move per promotion kind when
/// `to` is on the pawn's last row.
fn push_advance(moves: &mut MoveList, pawn: &Piece, to: Square, captured: Option<Piece>) {
    if pawn.color().is_pawn_promotion_square(to) {
        for kind in PROMOTION_PIECES {
            moves.push(Move::promote(*pawn, to, kind, captured));
        }
        return;
    }
    match captured {
        Some(victim) => moves.push(Move::capture(*pawn, to, victim)),
        None => moves.push(Move::quiet(*pawn, to)),
    }
}

/// The board's en passant pawn, if it is an enemy standing directly behind
/// the empty diagonal target `to` (that is, beside the capturing pawn).
fn en_passant_victim<B: PieceLookup + ?Sized>(
    pawn: &Piece,
    board: &B,
    to: Square,
) -> Option<Piece> {
    let candidate = board.en_passant_pawn()?;
    let behind = to.offset(-PAWN_STEP * pawn.color().direction())?;
    let is_victim = candidate.kind() == PieceKind::Pawn
        && pawn.is_enemy_of(&candidate)
        && candidate.square() == behind;
    is_victim.then_some(candidate)
}

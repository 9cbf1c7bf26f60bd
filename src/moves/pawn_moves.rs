//! Pawn geometry.
//!
//! Pawns are the one piece whose attack pattern differs from its movement
//! pattern: they push straight ahead but attack the two forward diagonals.
//! Attack detection must use the diagonals even when the target is empty.

use crate::game_state::chess_types::*;

/// The forward diagonals a pawn of `color` standing on `from` attacks.
pub fn pawn_attacks(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    pawn_attacks(color, from).any(|sq| sq == target)
}

/// Movement geometry: pushes, the double step from the home row, captures onto
/// enemy pieces and the en-passant capture for the side to move.
pub fn pawn_pseudo_legal(state: &GameState, pawn: Piece, from: Square, to: Square) -> bool {
    let board = &state.board;
    let dir = pawn.color.pawn_direction();
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    if d_col == 0 {
        if d_row == dir {
            return board.is_empty(to);
        }
        if d_row == 2 * dir && from.row() == pawn.color.pawn_home_row() {
            let skipped = from.offset(dir, 0);
            return board.is_empty(to) && skipped.is_some_and(|sq| board.is_empty(sq));
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == dir {
        if let Some(target) = board.piece_at(to) {
            return target.color != pawn.color;
        }
        return pawn.color == state.turn && state.en_passant_target == Some(to);
    }

    false
}

/// Every square a pawn could possibly move to, before any occupancy check.
pub fn pawn_candidates(color: Color, from: Square) -> Vec<Square> {
    let dir = color.pawn_direction();
    let mut candidates: Vec<Square> = pawn_attacks(color, from).collect();
    candidates.extend(from.offset(dir, 0));
    if from.row() == color.pawn_home_row() {
        candidates.extend(from.offset(2 * dir, 0));
    }
    candidates
}

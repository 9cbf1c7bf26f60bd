use crate::game_state::chess_rules::BISHOP_DIRECTIONS;
use crate::game_state::chess_types::{Board, Square};

/// Diagonal geometry with a clear path. Destination occupancy is the caller's concern.
#[inline]
pub fn bishop_attacks(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row == d_col && d_row != 0 && board.is_path_clear(from, to)
}

#[inline]
pub fn bishop_targets(board: &Board, from: Square) -> Vec<Square> {
    board.ray_targets(from, &BISHOP_DIRECTIONS)
}

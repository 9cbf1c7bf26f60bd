use crate::game_state::chess_rules::ROOK_DIRECTIONS;
use crate::game_state::chess_types::{Board, Square};

/// Straight-line geometry with a clear path. Destination occupancy is the caller's concern.
#[inline]
pub fn rook_attacks(board: &Board, from: Square, to: Square) -> bool {
    let same_line = from.row() == to.row() || from.col() == to.col();
    same_line && from != to && board.is_path_clear(from, to)
}

#[inline]
pub fn rook_targets(board: &Board, from: Square) -> Vec<Square> {
    board.ray_targets(from, &ROOK_DIRECTIONS)
}

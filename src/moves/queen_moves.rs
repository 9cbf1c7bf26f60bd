use crate::game_state::chess_rules::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(board: &Board, from: Square, to: Square) -> bool {
    rook_attacks(board, from, to) || bishop_attacks(board, from, to)
}

pub fn queen_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut targets = board.ray_targets(from, &ROOK_DIRECTIONS);
    targets.extend(board.ray_targets(from, &BISHOP_DIRECTIONS));
    targets
}

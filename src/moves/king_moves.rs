//! King step geometry. The two-column castling shift is handled in
//! `move_generation::legal_moves_king`, since it depends on game state.

use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::Square;

pub fn king_targets(from: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

#[inline]
pub fn king_attacks(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

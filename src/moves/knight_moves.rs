use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Square;

/// L-shaped jumps from `from` that stay on the board.
pub fn knight_targets(from: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

/// Knights ignore obstruction, so this is pure geometry.
#[inline]
pub fn knight_attacks(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

//! Square conversions for algebraic coordinates.
//!
//! Parses human-readable names (e.g. `e4`) into the board's row/column
//! squares; `Square`'s `Display` goes the other way. Only single squares are
//! handled; move notation is left to callers.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(name.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(name.to_owned()));
    }

    let row = (b'8' - rank) as i8;
    let col = (file - b'a') as i8;
    Square::new(row, col)
}

//! Attack and check oracle.
//!
//! Attack detection ignores whose turn it is and never considers castling or
//! en passant: a square is attacked when some piece of the attacking color
//! could capture on it under the basic movement rules.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Does `piece` on `from` attack `target`?
pub fn piece_attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, target),
        PieceKind::Knight => knight_attacks(from, target),
        PieceKind::Bishop => bishop_attacks(board, from, target),
        PieceKind::Rook => rook_attacks(board, from, target),
        PieceKind::Queen => queen_attacks(board, from, target),
        PieceKind::King => king_attacks(from, target),
    }
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .any(|(from, piece)| piece_attacks(board, piece, from, square))
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king_sq = board.find_king(color)?;
    Ok(is_square_attacked(board, king_sq, color.opposite()))
}

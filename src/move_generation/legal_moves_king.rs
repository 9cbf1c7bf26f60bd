//! Castling rules.
//!
//! A king's two-column shift along its back rank is only ever castling. The
//! shift is legal when the right is still held, king and rook stand on their
//! home squares, the squares between them are empty, and no square the king
//! occupies or crosses (start, middle, end) is attacked.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::king_home;
use crate::move_generation::legal_move_checks::is_square_attacked;

/// The castling side a king move from `from` to `to` would be, by geometry alone.
pub fn castle_side_for(color: Color, from: Square, to: Square) -> Option<CastleSide> {
    if from != king_home(color) || to.row() != from.row() {
        return None;
    }
    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| side.king_target_col() == to.col())
}

/// King destinations for castling on either side, for move enumeration.
pub fn castling_candidates(color: Color, from: Square) -> Vec<Square> {
    if from != king_home(color) {
        return Vec::new();
    }
    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .map(|side| Square::at(from.row(), side.king_target_col()))
        .collect()
}

pub fn is_castling_legal(state: &GameState, color: Color, side: CastleSide) -> ChessResult<bool> {
    if !state.castling_rights.has(color, side) {
        return Ok(false);
    }

    let board = &state.board;
    let row = color.back_row();
    let king_from = king_home(color);
    let rook_from = Square::at(row, side.rook_col());
    if board.piece_at(king_from) != Some(Piece::new(color, PieceKind::King))
        || board.piece_at(rook_from) != Some(Piece::new(color, PieceKind::Rook))
    {
        return Ok(false);
    }

    let enemy = color.opposite();
    if is_square_attacked(board, board.find_king(color)?, enemy) {
        return Ok(false);
    }

    if !board.is_path_clear(king_from, rook_from) {
        return Ok(false);
    }

    let (low, high) = if side.king_target_col() > king_from.col() {
        (king_from.col(), side.king_target_col())
    } else {
        (side.king_target_col(), king_from.col())
    };
    let transit_attacked =
        (low..=high).any(|col| is_square_attacked(board, Square::at(row, col), enemy));
    Ok(!transit_attacked)
}

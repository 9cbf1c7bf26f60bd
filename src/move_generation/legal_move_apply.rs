//! Board effects of a move.
//!
//! `apply_board_effects` is shared by the self-check filter (on a scratch
//! copy), by legal-move enumeration and by the game state machine, so a move
//! is simulated exactly the way it is later committed: castling relocates the
//! rook and en passant removes the captured pawn in every path.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::castle_side_for;
use crate::moves::move_descriptions::{ChessMove, SpecialMove};

/// Classify the move of the piece on `from` to `to`. Returns `None` when `from`
/// is empty. The move is assumed to be pseudo-legal; nothing is validated.
pub fn describe_move(state: &GameState, from: Square, to: Square) -> Option<ChessMove> {
    let board = &state.board;
    let piece = board.piece_at(from)?;
    let mut captured = board.piece_at(to).map(|p| p.kind);

    let special = match piece.kind {
        PieceKind::King => castle_side_for(piece.color, from, to)
            .map_or(SpecialMove::None, SpecialMove::Castle),
        PieceKind::Pawn if from.col() != to.col() && captured.is_none() => {
            captured = Some(PieceKind::Pawn);
            SpecialMove::EnPassant
        }
        PieceKind::Pawn if (to.row() as i8 - from.row() as i8).abs() == 2 => {
            SpecialMove::DoublePawnPush
        }
        _ => SpecialMove::None,
    };

    Some(ChessMove {
        from,
        to,
        piece,
        captured,
        promotion: None,
        special,
    })
}

/// Move the piece, relocate the castling rook and remove an en-passant
/// victim. Places the promoted piece when `mv.promotion` is set; otherwise a
/// pawn reaching its last rank stays a pawn.
pub fn apply_board_effects(board: &mut Board, mv: &ChessMove) {
    match mv.special {
        SpecialMove::Castle(side) => {
            let row = mv.from.row();
            if let Some(rook) = board.remove(Square::at(row, side.rook_col())) {
                board.place(Square::at(row, side.rook_target_col()), rook);
            }
        }
        SpecialMove::EnPassant => {
            board.remove(mv.en_passant_victim());
        }
        SpecialMove::None | SpecialMove::DoublePawnPush => {}
    }

    board.remove(mv.from);
    board.place(mv.to, mv.piece_after());
}

/// Simulate `mv` on a copy of the board and report whether the mover's own
/// king would stand in check afterwards.
pub fn leaves_king_in_check(state: &GameState, mv: &ChessMove) -> ChessResult<bool> {
    let mut scratch = state.board;
    apply_board_effects(&mut scratch, mv);
    is_king_in_check(&scratch, mv.piece.color)
}

/// Full successor state of a complete move (promotion included), as used by
/// enumeration. The game state machine stages promotions instead.
pub fn play_move(state: &GameState, mv: &ChessMove) -> GameState {
    let mut next = state.clone();
    apply_board_effects(&mut next.board, mv);
    next.finalize_move(mv.piece_after(), mv.from, mv.to);
    next
}

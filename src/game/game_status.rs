//! Termination detection for the side to move.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{Color, GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check but has a way out.
    Check(Color),
    /// The given side is mated and has lost.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

/// Classify `state` from the point of view of the side to move.
///
/// While a promotion is pending the turn has not passed yet, so the position
/// is reported as `Ongoing`.
pub fn evaluate_status(state: &GameState) -> ChessResult<GameStatus> {
    if state.pending_promotion.is_some() {
        return Ok(GameStatus::Ongoing);
    }

    let side = state.turn;
    let in_check = is_king_in_check(&state.board, side)?;
    let can_move = has_any_legal_move(state, side)?;
    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(side),
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(side),
        (false, true) => GameStatus::Ongoing,
    })
}

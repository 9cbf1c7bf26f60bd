//! Move legality engine.
//!
//! `pseudo_legal` answers the geometry question for one piece; `is_legal_move`
//! adds ownership of the destination and the self-check filter. Enumeration
//! produces candidate squares from movement patterns and runs every one of
//! them through `is_legal_move`, so "list the moves" and "is this move legal"
//! cannot disagree.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{describe_move, leaves_king_in_check, play_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::{
    castle_side_for, castling_candidates, is_castling_legal,
};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::moves::bishop_moves::{bishop_attacks, bishop_targets};
use crate::moves::king_moves::{king_attacks, king_targets};
use crate::moves::knight_moves::{knight_attacks, knight_targets};
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::{pawn_candidates, pawn_pseudo_legal};
use crate::moves::queen_moves::{queen_attacks, queen_targets};
use crate::moves::rook_moves::{rook_attacks, rook_targets};

/// Geometry and obstruction for `piece` moving from `from` to `to`.
///
/// Does not look at what stands on `to` (except for pawns, whose movement
/// depends on it) and does not consider self-check.
pub fn pseudo_legal(state: &GameState, piece: Piece, from: Square, to: Square) -> ChessResult<bool> {
    let board = &state.board;
    let geometric = match piece.kind {
        PieceKind::Pawn => pawn_pseudo_legal(state, piece, from, to),
        PieceKind::Knight => knight_attacks(from, to),
        PieceKind::Bishop => bishop_attacks(board, from, to),
        PieceKind::Rook => rook_attacks(board, from, to),
        PieceKind::Queen => queen_attacks(board, from, to),
        PieceKind::King => {
            if king_attacks(from, to) {
                true
            } else if let Some(side) = castle_side_for(piece.color, from, to) {
                return is_castling_legal(state, piece.color, side);
            } else {
                false
            }
        }
    };
    Ok(geometric)
}

/// Full legality of moving whatever stands on `from` to `to`, independent of
/// whose turn it is.
pub fn is_legal_move(state: &GameState, from: Square, to: Square) -> ChessResult<bool> {
    Ok(legal_move(state, from, to)?.is_some())
}

/// The described move when it is legal.
pub fn legal_move(state: &GameState, from: Square, to: Square) -> ChessResult<Option<ChessMove>> {
    let Some(piece) = state.board.piece_at(from) else {
        return Ok(None);
    };
    if state
        .board
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return Ok(None);
    }
    if !pseudo_legal(state, piece, from, to)? {
        return Ok(None);
    }

    let Some(mv) = describe_move(state, from, to) else {
        return Ok(None);
    };
    if leaves_king_in_check(state, &mv)? {
        return Ok(None);
    }
    Ok(Some(mv))
}

/// Squares the piece on `from` may legally move to, in board order.
pub fn legal_destinations(state: &GameState, from: Square) -> ChessResult<Vec<Square>> {
    Ok(legal_moves_from(state, from)?
        .into_iter()
        .map(|mv| mv.to)
        .collect())
}

pub fn has_any_legal_move(state: &GameState, color: Color) -> ChessResult<bool> {
    for (from, _) in state.board.pieces(color) {
        for to in candidate_destinations(&state.board, from) {
            if legal_move(state, from, to)?.is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn legal_moves_from(state: &GameState, from: Square) -> ChessResult<Vec<ChessMove>> {
    let mut candidates = candidate_destinations(&state.board, from);
    candidates.sort_unstable();
    candidates.dedup();

    let mut moves = Vec::with_capacity(candidates.len());
    for to in candidates {
        if let Some(mv) = legal_move(state, from, to)? {
            moves.push(mv);
        }
    }
    Ok(moves)
}

/// Superset of the destinations the piece on `from` could reach.
fn candidate_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    match piece.kind {
        PieceKind::Pawn => pawn_candidates(piece.color, from),
        PieceKind::Knight => knight_targets(from).collect(),
        PieceKind::Bishop => bishop_targets(board, from),
        PieceKind::Rook => rook_targets(board, from),
        PieceKind::Queen => queen_targets(board, from),
        PieceKind::King => {
            let mut targets: Vec<Square> = king_targets(from).collect();
            targets.extend(castling_candidates(piece.color, from));
            targets
        }
    }
}

/// Enumerates every legal move of the side to move, one entry per promotion choice.
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        let side = game_state.turn;
        let origins: Vec<Square> = game_state.board.pieces(side).map(|(sq, _)| sq).collect();

        let mut generated = Vec::with_capacity(64);
        for from in origins {
            for mv in legal_moves_from(game_state, from)? {
                let promotes =
                    mv.piece.kind == PieceKind::Pawn && mv.to.row() == side.promotion_row();
                if promotes {
                    for kind in PieceKind::PROMOTIONS {
                        let promoted = ChessMove {
                            promotion: Some(kind),
                            ..mv
                        };
                        generated.push(generate(game_state, promoted)?);
                    }
                } else {
                    generated.push(generate(game_state, mv)?);
                }
            }
        }
        Ok(generated)
    }
}

fn generate(game_state: &GameState, chess_move: ChessMove) -> ChessResult<GeneratedMove> {
    let game_after_move = play_move(game_state, &chess_move);
    let gives_check = is_king_in_check(&game_after_move.board, game_after_move.turn)?;
    Ok(GeneratedMove {
        chess_move,
        game_after_move,
        gives_check,
    })
}

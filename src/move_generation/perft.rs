//! Perft: leaf counts of the legal move tree.
//!
//! Published reference counts make perft the standard acceptance test for a
//! legality engine. Besides nodes, the leaf moves are classified so that a
//! mismatch can be narrowed down to captures, en passant, castling,
//! promotions or checks.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Perft with the engine's own legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        let chess_move = &mv.chess_move;
        counts.nodes += 1;
        if chess_move.is_capture() {
            counts.captures += 1;
        }
        if chess_move.is_en_passant() {
            counts.en_passant += 1;
        }
        if chess_move.is_castle() {
            counts.castles += 1;
        }
        if chess_move.promotion.is_some() {
            counts.promotions += 1;
        }
        if mv.gives_check {
            counts.checks += 1;
            if generator
                .generate_legal_moves(&mv.game_after_move)?
                .is_empty()
            {
                counts.checkmates += 1;
            }
        }
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}

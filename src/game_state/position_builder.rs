//! Structured construction of arbitrary positions.
//!
//! The builder is how tests, benchmarks and puzzle setups reach positions
//! other than the initial one. `build` runs `validate_position`, which checks
//! everything the rest of the engine takes for granted: one king per color and
//! no king that could be captured on the next move.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::king_home;
use crate::move_generation::legal_move_checks::is_king_in_check;

#[derive(Debug, Clone)]
pub struct PositionBuilder {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::empty()
    }
}

impl PositionBuilder {
    /// Empty board, White to move, no castling rights.
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            turn: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
        }
    }

    /// Place a piece, replacing anything already on the square.
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place(square, Piece::new(color, kind));
        self
    }

    pub fn turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }

    pub fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    pub fn en_passant_target(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    pub fn build(self) -> ChessResult<GameState> {
        let state = GameState {
            board: self.board,
            turn: self.turn,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            last_move: None,
            pending_promotion: None,
        };
        validate_position(&state)?;
        Ok(state)
    }
}

/// Reject states no sequence of legal moves can produce.
///
/// A state with a pending promotion is checked as the mover left it: the
/// promoting pawn may stand on the last rank and the turn has not passed yet.
pub fn validate_position(state: &GameState) -> ChessResult<()> {
    let board = &state.board;
    for color in [Color::White, Color::Black] {
        let kings = board.count(Piece::new(color, PieceKind::King));
        if kings != 1 {
            return Err(ChessError::InvalidPosition(format!(
                "expected one {color} king, found {kings}"
            )));
        }
    }

    // The side that moved last must not have left its king en prise.
    let last_mover = match state.pending_promotion {
        Some(pending) => pending.color,
        None => state.turn.opposite(),
    };
    if is_king_in_check(board, last_mover)? {
        return Err(ChessError::InvalidPosition(format!(
            "{last_mover} king is in check but {} is to move",
            state.turn
        )));
    }

    let promoting = state.pending_promotion.map(|pending| pending.square);
    if let Some((square, _)) = board.occupied().find(|(sq, piece)| {
        piece.kind == PieceKind::Pawn
            && (sq.row() == 0 || sq.row() == 7)
            && Some(*sq) != promoting
    }) {
        return Err(ChessError::InvalidPosition(format!(
            "pawn on {square} stands on a back rank"
        )));
    }

    for color in [Color::White, Color::Black] {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if state.castling_rights.has(color, side) && !castle_pieces_home(board, color, side) {
                return Err(ChessError::InvalidPosition(format!(
                    "{color} cannot keep {side:?} castling without king and rook at home"
                )));
            }
        }
    }

    if let Some(target) = state.en_passant_target {
        validate_en_passant(board, state.turn, target)?;
    }
    Ok(())
}

fn castle_pieces_home(board: &Board, color: Color, side: CastleSide) -> bool {
    let rook_home = Square::at(color.back_row(), side.rook_col());
    board.piece_at(king_home(color)) == Some(Piece::new(color, PieceKind::King))
        && board.piece_at(rook_home) == Some(Piece::new(color, PieceKind::Rook))
}

// The target sits between the empty start square and the pawn that just
// double-stepped.
fn validate_en_passant(board: &Board, turn: Color, target: Square) -> ChessResult<()> {
    let just_moved = turn.opposite();
    let expected_row = (just_moved.pawn_home_row() as i8 + just_moved.pawn_direction()) as u8;
    if target.row() != expected_row {
        return Err(ChessError::InvalidPosition(format!(
            "en-passant target {target} does not match {turn} to move"
        )));
    }

    let pawn_square = target.offset(just_moved.pawn_direction(), 0);
    let pawn_present = pawn_square.and_then(|sq| board.piece_at(sq))
        == Some(Piece::new(just_moved, PieceKind::Pawn));
    let start_square = target.offset(-just_moved.pawn_direction(), 0);
    let start_empty = start_square.is_some_and(|sq| board.is_empty(sq));
    if !pawn_present || !start_empty || !board.is_empty(target) {
        return Err(ChessError::InvalidPosition(format!(
            "en-passant target {target} has no double-stepped {just_moved} pawn in front"
        )));
    }
    Ok(())
}

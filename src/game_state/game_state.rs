//! Authoritative game state.
//!
//! `GameState` is the unit of snapshot/restore: a plain value with structural
//! equality, so an undo can be verified by comparing two states directly.
//! `finalize_move` is the single place where the turn changes hands.

use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub last_move: Option<LastMove>,
    pub pending_promotion: Option<PendingPromotion>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, White to move, all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            last_move: None,
            pending_promotion: None,
        }
    }

    /// Complete a move whose board effects are already applied.
    ///
    /// `moved` is the piece now standing on `to` (the promoted piece after a
    /// promotion). Updates castling rights, the en-passant target and the last
    /// move, then flips the turn.
    pub fn finalize_move(&mut self, moved: Piece, from: Square, to: Square) {
        self.update_castling_rights(moved, from, to);

        let advanced = (to.row() as i8 - from.row() as i8).abs();
        self.en_passant_target = if moved.kind == PieceKind::Pawn && advanced == 2 {
            Some(Square::at((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        self.last_move = Some(LastMove { from, to });
        self.pending_promotion = None;
        self.turn = self.turn.opposite();
    }

    fn update_castling_rights(&mut self, moved: Piece, from: Square, to: Square) {
        let mover = moved.color;
        if moved.kind == PieceKind::King {
            self.castling_rights.revoke_all(mover);
        }

        // Leaving a home corner. Keyed on the square, so a rook that comes
        // back later does not restore anything.
        if let Some(side) = corner_side(mover, from) {
            log::trace!("{mover} loses {side:?} castling: piece left {from}");
            self.castling_rights.revoke(mover, side);
        }

        // Landing on an enemy corner captures the rook there, if any.
        let enemy = mover.opposite();
        if let Some(side) = corner_side(enemy, to) {
            log::trace!("{enemy} loses {side:?} castling: {to} was taken");
            self.castling_rights.revoke(enemy, side);
        }
    }
}

/// The castling side whose rook starts on `square`, if `square` is one of
/// `color`'s home corners.
fn corner_side(color: Color, square: Square) -> Option<CastleSide> {
    if square.row() != color.back_row() {
        return None;
    }
    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| side.rook_col() == square.col())
}

/// Home square of `color`'s king.
#[inline]
pub fn king_home(color: Color) -> Square {
    Square::at(color.back_row(), KING_HOME_COL)
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::at(row, col)
    }

    #[test]
    fn new_game_matches_initial_lifecycle() {
        let game = GameState::new_game();
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.en_passant_target, None);
        assert_eq!(game.last_move, None);
        assert_eq!(game.pending_promotion, None);
    }

    #[test]
    fn double_pawn_step_sets_en_passant_target() {
        let mut game = GameState::new_game();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        game.finalize_move(pawn, sq(6, 4), sq(4, 4));
        assert_eq!(game.en_passant_target, Some(sq(5, 4)));
        assert_eq!(game.turn, Color::Black);
        assert_eq!(
            game.last_move,
            Some(LastMove {
                from: sq(6, 4),
                to: sq(4, 4)
            })
        );

        let knight = Piece::new(Color::Black, PieceKind::Knight);
        game.finalize_move(knight, sq(0, 6), sq(2, 5));
        assert_eq!(game.en_passant_target, None);
        assert_eq!(game.turn, Color::White);
    }

    #[test]
    fn king_move_revokes_both_sides() {
        let mut game = GameState::new_game();
        game.finalize_move(Piece::new(Color::White, PieceKind::King), sq(7, 4), sq(6, 4));
        assert_eq!(game.castling_rights.sides(Color::White), CastleSides::NONE);
        assert_eq!(game.castling_rights.sides(Color::Black), CastleSides::BOTH);
    }

    #[test]
    fn rook_leaving_corner_revokes_that_side_only() {
        let mut game = GameState::new_game();
        game.finalize_move(Piece::new(Color::Black, PieceKind::Rook), sq(0, 0), sq(2, 0));
        assert!(!game.castling_rights.has(Color::Black, CastleSide::QueenSide));
        assert!(game.castling_rights.has(Color::Black, CastleSide::KingSide));

        // Returning to a8 does not give the right back.
        game.finalize_move(Piece::new(Color::Black, PieceKind::Rook), sq(2, 0), sq(0, 0));
        assert!(!game.castling_rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn rook_off_its_corner_does_not_touch_rights() {
        let mut game = GameState::new_game();
        game.finalize_move(Piece::new(Color::White, PieceKind::Rook), sq(4, 7), sq(4, 3));
        assert_eq!(game.castling_rights, CastlingRights::ALL);
    }

    #[test]
    fn capture_on_enemy_corner_revokes_enemy_side() {
        let mut game = GameState::new_game();
        game.finalize_move(Piece::new(Color::White, PieceKind::Bishop), sq(1, 6), sq(0, 7));
        assert!(!game.castling_rights.has(Color::Black, CastleSide::KingSide));
        assert!(game.castling_rights.has(Color::Black, CastleSide::QueenSide));
        assert_eq!(game.castling_rights.sides(Color::White), CastleSides::BOTH);
    }
}

//! Game state machine.
//!
//! `ChessGame` owns one `GameState` and its undo history. Requests are handled
//! synchronously and either commit completely (snapshot included) or leave
//! the game exactly as it was.
//!
//! ```text
//! AwaitingSelection --select own piece--> AwaitingDestination
//! AwaitingDestination --legal target--> commit --> AwaitingSelection
//!                                              \-> AwaitingPromotionChoice (pawn on last rank)
//! AwaitingDestination --anything else--> AwaitingSelection (selection cleared)
//! AwaitingPromotionChoice --resolve_promotion--> AwaitingSelection
//! ```
//!
//! The selection layer is optional: `apply_move` goes straight to a commit.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game::game_status::{evaluate_status, GameStatus};
use crate::game::move_outcome::{MoveOutcome, Rejection};
use crate::game_state::chess_types::*;
use crate::game_state::position_builder::validate_position;
use crate::move_generation::legal_move_apply::apply_board_effects;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{legal_destinations, legal_move};

/// Where the game stands with respect to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    AwaitingSelection,
    AwaitingDestination(Square),
    AwaitingPromotionChoice(PendingPromotion),
}

/// Answer to `select_square`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// A piece of the side to move is now selected.
    Selected { from: Square, destinations: Vec<Square> },
    /// The selected piece was sent to the square; carries the move result.
    Moved(MoveOutcome),
    /// The square was not a legal destination; nothing is selected any more.
    SelectionCleared,
    /// Nothing to do: no own piece there, or a promotion is pending.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ChessGame {
    state: GameState,
    history: UndoStack,
    selected: Option<Square>,
}

impl ChessGame {
    /// A new game from the standard initial position.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
            history: UndoStack::new(),
            selected: None,
        }
    }

    /// A game starting from an arbitrary position, typically built with
    /// `PositionBuilder`. Hand-made states go through the same checks as the
    /// builder, so a game never starts without both kings or with a king that
    /// can be captured.
    pub fn from_state(state: GameState) -> ChessResult<Self> {
        validate_position(&state)?;
        Ok(Self {
            state,
            history: UndoStack::new(),
            selected: None,
        })
    }

    /// Back to the initial position; history is discarded.
    pub fn reset(&mut self) {
        log::debug!("new game, dropping {} moves of history", self.history.len());
        self.state = GameState::new_game();
        self.history.clear();
        self.selected = None;
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.turn
    }

    /// Independent copy of the board for rendering.
    #[inline]
    pub fn snapshot_board(&self) -> Board {
        self.state.board
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.state.pending_promotion
    }

    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.state.last_move
    }

    /// Number of moves that can be undone.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn phase(&self) -> InteractionPhase {
        match (self.state.pending_promotion, self.selected) {
            (Some(pending), _) => InteractionPhase::AwaitingPromotionChoice(pending),
            (None, Some(from)) => InteractionPhase::AwaitingDestination(from),
            (None, None) => InteractionPhase::AwaitingSelection,
        }
    }

    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        is_king_in_check(&self.state.board, color)
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> ChessResult<bool> {
        Ok(legal_move(&self.state, from, to)?.is_some())
    }

    /// Legal destinations of the piece on `from`, whoever's turn it is.
    pub fn legal_destinations(&self, from: Square) -> ChessResult<Vec<Square>> {
        legal_destinations(&self.state, from)
    }

    pub fn game_status(&self) -> ChessResult<GameStatus> {
        evaluate_status(&self.state)
    }

    /// Validate and commit a move for the side to move.
    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        if self.state.pending_promotion.is_some() {
            return Ok(reject(Rejection::PromotionPending, from, to));
        }
        let Some(piece) = self.state.board.piece_at(from) else {
            return Ok(reject(Rejection::EmptySquare, from, to));
        };
        if piece.color != self.state.turn {
            return Ok(reject(Rejection::NotYourTurn, from, to));
        }
        let Some(mv) = legal_move(&self.state, from, to)? else {
            return Ok(reject(Rejection::IllegalMove, from, to));
        };

        // Nothing below can fail.
        self.selected = None;
        self.history.push(HistorySnapshot::capture(&self.state));
        apply_board_effects(&mut self.state.board, &mv);

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            log::debug!("{} pawn {from}->{to} awaits promotion", piece.color);
            self.state.pending_promotion = Some(PendingPromotion {
                square: to,
                color: piece.color,
                from,
            });
            return Ok(MoveOutcome::PromotionRequired {
                square: to,
                color: piece.color,
            });
        }

        self.state.finalize_move(piece, from, to);
        log::debug!("{} {:?} {mv}", piece.color, piece.kind);
        Ok(MoveOutcome::Committed {
            moved_piece: piece,
            from,
            to,
        })
    }

    /// Replace the pending pawn with `kind` and complete the move.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> ChessResult<MoveOutcome> {
        let Some(pending) = self.state.pending_promotion else {
            return Err(ChessError::InvalidState("no promotion is pending"));
        };
        if !kind.is_promotion_target() {
            return Err(ChessError::InvalidPromotionKind(kind));
        }

        let promoted = Piece::new(pending.color, kind);
        self.state.board.place(pending.square, promoted);
        self.state.finalize_move(promoted, pending.from, pending.square);
        log::debug!("{} pawn promoted to {kind:?} on {}", pending.color, pending.square);
        Ok(MoveOutcome::Committed {
            moved_piece: promoted,
            from: pending.from,
            to: pending.square,
        })
    }

    /// Restore the state before the most recent player move. Returns `false`
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.state = snapshot.into_state();
        self.selected = None;
        log::debug!("undo, {} moves left in history", self.history.len());
        true
    }

    /// Click-style input: pick a piece, then a destination.
    pub fn select_square(&mut self, square: Square) -> ChessResult<SelectionOutcome> {
        if self.state.pending_promotion.is_some() {
            return Ok(SelectionOutcome::Ignored);
        }

        if let Some(from) = self.selected {
            if legal_move(&self.state, from, square)?.is_some() {
                let outcome = self.apply_move(from, square)?;
                return Ok(SelectionOutcome::Moved(outcome));
            }
            self.selected = None;
            return Ok(SelectionOutcome::SelectionCleared);
        }

        match self.state.board.piece_at(square) {
            Some(piece) if piece.color == self.state.turn => {
                let destinations = legal_destinations(&self.state, square)?;
                self.selected = Some(square);
                Ok(SelectionOutcome::Selected {
                    from: square,
                    destinations,
                })
            }
            _ => Ok(SelectionOutcome::Ignored),
        }
    }
}

fn reject(reason: Rejection, from: Square, to: Square) -> MoveOutcome {
    log::trace!("rejected {from}->{to}: {reason:?}");
    MoveOutcome::Rejected(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ErrorKind;
    use crate::game_state::position_builder::PositionBuilder;
    use crate::utils::algebraic::algebraic_to_square;
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn play(game: &mut ChessGame, from: &str, to: &str) -> MoveOutcome {
        game.apply_move(sq(from), sq(to)).expect("move request should not error")
    }

    fn assert_committed(outcome: MoveOutcome) {
        assert!(
            matches!(outcome, MoveOutcome::Committed { .. }),
            "expected a committed move, got {outcome:?}"
        );
    }

    fn piece(color: Color, kind: PieceKind) -> Option<Piece> {
        Some(Piece::new(color, kind))
    }

    #[test]
    fn pawn_capture_after_opening_pushes() {
        let mut game = ChessGame::new();
        assert_committed(play(&mut game, "e2", "e4"));
        assert_committed(play(&mut game, "d7", "d5"));

        let outcome = play(&mut game, "e4", "d5");
        assert_eq!(
            outcome,
            MoveOutcome::Committed {
                moved_piece: Piece::new(Color::White, PieceKind::Pawn),
                from: sq("e4"),
                to: sq("d5"),
            }
        );
        let board = game.snapshot_board();
        assert_eq!(board.piece_at(sq("d5")), piece(Color::White, PieceKind::Pawn));
        assert!(board.is_empty(sq("e4")));
        assert_eq!(board.count(Piece::new(Color::Black, PieceKind::Pawn)), 7);
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn rejections_leave_state_untouched() {
        let mut game = ChessGame::new();
        let before = game.state().clone();

        assert_eq!(
            play(&mut game, "e4", "e5"),
            MoveOutcome::Rejected(Rejection::EmptySquare)
        );
        assert_eq!(
            play(&mut game, "e7", "e5"),
            MoveOutcome::Rejected(Rejection::NotYourTurn)
        );
        assert_eq!(
            play(&mut game, "e2", "e5"),
            MoveOutcome::Rejected(Rejection::IllegalMove)
        );
        assert_eq!(Rejection::IllegalMove.kind(), ErrorKind::IllegalMove);
        assert_eq!(game.state(), &before);
        assert_eq!(game.history_len(), 0);
    }

    #[test]
    fn kingside_castling_relocates_rook() {
        let state = PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("h1"), Color::White, PieceKind::Rook)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .castling_rights(CastlingRights::new(
                CastleSides {
                    king_side: true,
                    queen_side: false,
                },
                CastleSides::NONE,
            ))
            .build()
            .expect("position should build");
        let mut game = ChessGame::from_state(state).expect("position is valid");
        let before = game.state().clone();

        assert_eq!(game.is_legal_move(sq("e1"), sq("g1")), Ok(true));
        assert_committed(play(&mut game, "e1", "g1"));
        let board = game.snapshot_board();
        assert_eq!(board.piece_at(sq("g1")), piece(Color::White, PieceKind::King));
        assert_eq!(board.piece_at(sq("f1")), piece(Color::White, PieceKind::Rook));
        assert!(board.is_empty(sq("h1")));
        assert_eq!(
            game.state().castling_rights.sides(Color::White),
            CastleSides::NONE
        );

        assert!(game.undo());
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn castling_rights_lost_after_king_or_rook_moves() {
        let state = PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("h1"), Color::White, PieceKind::Rook)
            .piece(sq("a1"), Color::White, PieceKind::Rook)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("a7"), Color::Black, PieceKind::Pawn)
            .castling_rights(CastlingRights::new(CastleSides::BOTH, CastleSides::NONE))
            .build()
            .expect("position should build");

        // Rook goes out and back: king side stays lost.
        let mut game = ChessGame::from_state(state.clone()).expect("position is valid");
        assert_committed(play(&mut game, "h1", "h2"));
        assert_committed(play(&mut game, "a7", "a6"));
        assert_committed(play(&mut game, "h2", "h1"));
        assert_committed(play(&mut game, "a6", "a5"));
        assert_eq!(game.is_legal_move(sq("e1"), sq("g1")), Ok(false));
        assert_eq!(game.is_legal_move(sq("e1"), sq("c1")), Ok(true));

        // King goes out and back: both sides lost.
        let mut game = ChessGame::from_state(state).expect("position is valid");
        assert_committed(play(&mut game, "e1", "f1"));
        assert_committed(play(&mut game, "a7", "a6"));
        assert_committed(play(&mut game, "f1", "e1"));
        assert_committed(play(&mut game, "a6", "a5"));
        assert_eq!(game.is_legal_move(sq("e1"), sq("g1")), Ok(false));
        assert_eq!(game.is_legal_move(sq("e1"), sq("c1")), Ok(false));
    }

    #[test]
    fn en_passant_only_on_the_immediate_reply() {
        let state = PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("d5"), Color::White, PieceKind::Pawn)
            .piece(sq("e7"), Color::Black, PieceKind::Pawn)
            .piece(sq("h2"), Color::White, PieceKind::Pawn)
            .piece(sq("h7"), Color::Black, PieceKind::Pawn)
            .turn(Color::Black)
            .build()
            .expect("position should build");

        let mut game = ChessGame::from_state(state).expect("position is valid");
        assert_committed(play(&mut game, "e7", "e5"));
        assert_eq!(game.state().en_passant_target, Some(sq("e6")));
        assert_eq!(game.is_legal_move(sq("d5"), sq("e6")), Ok(true));

        // Capture now: the pawn on e5 disappears, not anything on e6.
        let mut capture = game.clone();
        assert_committed(play(&mut capture, "d5", "e6"));
        let board = capture.snapshot_board();
        assert!(board.is_empty(sq("e5")));
        assert_eq!(board.piece_at(sq("e6")), piece(Color::White, PieceKind::Pawn));

        // Wait a move pair instead: the chance is gone.
        assert_committed(play(&mut game, "h2", "h3"));
        assert_committed(play(&mut game, "h7", "h6"));
        assert_eq!(game.state().en_passant_target, None);
        assert_eq!(game.is_legal_move(sq("d5"), sq("e6")), Ok(false));
        assert_eq!(
            play(&mut game, "d5", "e6"),
            MoveOutcome::Rejected(Rejection::IllegalMove)
        );
    }

    #[test]
    fn undo_restores_en_passant_capture() {
        let state = PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e8"), Color::Black, PieceKind::King)
            .piece(sq("d5"), Color::White, PieceKind::Pawn)
            .piece(sq("e5"), Color::Black, PieceKind::Pawn)
            .en_passant_target(sq("e6"))
            .build()
            .expect("position should build");
        let mut game = ChessGame::from_state(state).expect("position is valid");
        let before = game.state().clone();

        assert_committed(play(&mut game, "d5", "e6"));
        assert!(game.undo());
        assert_eq!(game.state(), &before);
    }

    fn promotion_position() -> GameState {
        PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .piece(sq("b7"), Color::White, PieceKind::Pawn)
            .piece(sq("a8"), Color::Black, PieceKind::Rook)
            .build()
            .expect("position should build")
    }

    #[test]
    fn promotion_is_staged_until_resolved() {
        let mut game = ChessGame::from_state(promotion_position()).expect("position is valid");

        let outcome = play(&mut game, "b7", "a8");
        assert_eq!(
            outcome,
            MoveOutcome::PromotionRequired {
                square: sq("a8"),
                color: Color::White
            }
        );
        assert_eq!(game.current_turn(), Color::White);
        assert_eq!(game.game_status(), Ok(GameStatus::Ongoing));
        assert!(matches!(
            game.phase(),
            InteractionPhase::AwaitingPromotionChoice(_)
        ));

        // Everything but the promotion choice is refused.
        assert_eq!(
            play(&mut game, "e1", "e2"),
            MoveOutcome::Rejected(Rejection::PromotionPending)
        );
        assert_eq!(Rejection::PromotionPending.kind(), ErrorKind::InvalidState);
        assert_eq!(
            game.select_square(sq("e1")),
            Ok(SelectionOutcome::Ignored)
        );
        let err = game
            .resolve_promotion(PieceKind::King)
            .expect_err("king is not a promotion choice");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(game.pending_promotion().is_some());

        let outcome = game
            .resolve_promotion(PieceKind::Queen)
            .expect("queen is a promotion choice");
        assert_eq!(
            outcome,
            MoveOutcome::Committed {
                moved_piece: Piece::new(Color::White, PieceKind::Queen),
                from: sq("b7"),
                to: sq("a8"),
            }
        );
        assert_eq!(
            game.snapshot_board().piece_at(sq("a8")),
            piece(Color::White, PieceKind::Queen)
        );
        assert_eq!(game.current_turn(), Color::Black);
        assert_eq!(game.pending_promotion(), None);
        assert_eq!(
            game.last_move(),
            Some(LastMove {
                from: sq("b7"),
                to: sq("a8")
            })
        );
        assert_eq!(game.history_len(), 1);
        // Queen on a8 checks h8 along the back rank.
        assert_eq!(game.game_status(), Ok(GameStatus::Check(Color::Black)));
    }

    #[test]
    fn resolve_without_pending_promotion_is_invalid_state() {
        let mut game = ChessGame::new();
        let err = game
            .resolve_promotion(PieceKind::Queen)
            .expect_err("nothing to promote");
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn undo_while_promotion_pending_restores_pre_move_state() {
        let mut game = ChessGame::from_state(promotion_position()).expect("position is valid");
        let before = game.state().clone();

        play(&mut game, "b7", "b8");
        assert!(game.pending_promotion().is_some());
        assert!(game.undo());
        assert_eq!(game.state(), &before);
        assert_eq!(game.phase(), InteractionPhase::AwaitingSelection);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = ChessGame::new();
        assert!(!game.undo());
        assert_eq!(game.state(), &GameState::new_game());
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut game = ChessGame::new();
        assert_committed(play(&mut game, "f2", "f3"));
        assert_committed(play(&mut game, "e7", "e5"));
        assert_committed(play(&mut game, "g2", "g4"));
        assert_committed(play(&mut game, "d8", "h4"));
        assert_eq!(game.is_in_check(Color::White), Ok(true));
        assert_eq!(game.game_status(), Ok(GameStatus::Checkmate(Color::White)));
    }

    #[test]
    fn stalemate_after_quiet_queen_move() {
        let state = PositionBuilder::empty()
            .piece(sq("h8"), Color::Black, PieceKind::King)
            .piece(sq("g6"), Color::White, PieceKind::King)
            .piece(sq("e6"), Color::White, PieceKind::Queen)
            .build()
            .expect("position should build");
        let mut game = ChessGame::from_state(state).expect("position is valid");
        assert_eq!(game.game_status(), Ok(GameStatus::Ongoing));
        assert_committed(play(&mut game, "e6", "f7"));
        assert_eq!(game.is_in_check(Color::Black), Ok(false));
        assert_eq!(game.game_status(), Ok(GameStatus::Stalemate));
    }

    #[test]
    fn selection_flow_commits_or_clears() {
        let mut game = ChessGame::new();
        assert_eq!(game.select_square(sq("e7")), Ok(SelectionOutcome::Ignored));
        assert_eq!(game.select_square(sq("e4")), Ok(SelectionOutcome::Ignored));

        match game.select_square(sq("e2")).expect("selection") {
            SelectionOutcome::Selected { from, destinations } => {
                assert_eq!(from, sq("e2"));
                assert_eq!(destinations, vec![sq("e4"), sq("e3")]);
            }
            other => panic!("expected a selection, got {other:?}"),
        }
        assert_eq!(game.phase(), InteractionPhase::AwaitingDestination(sq("e2")));

        assert_eq!(
            game.select_square(sq("e5")),
            Ok(SelectionOutcome::SelectionCleared)
        );
        assert_eq!(game.phase(), InteractionPhase::AwaitingSelection);
        assert_eq!(game.history_len(), 0);

        game.select_square(sq("g1")).expect("selection");
        let moved = game.select_square(sq("f3")).expect("move");
        assert!(matches!(
            moved,
            SelectionOutcome::Moved(MoveOutcome::Committed { .. })
        ));
        assert_eq!(game.phase(), InteractionPhase::AwaitingSelection);
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn from_state_rejects_broken_positions() {
        let mut no_king = GameState::new_game();
        no_king.board.remove(sq("e8"));
        let err = ChessGame::from_state(no_king).expect_err("black king is missing");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        // White to move with the black king already attacked.
        let mut exposed = GameState::new_game();
        exposed.board.remove(sq("e7"));
        exposed
            .board
            .place(sq("e4"), Piece::new(Color::White, PieceKind::Rook));
        let err = ChessGame::from_state(exposed).expect_err("black king could be taken");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn king_is_never_capturable() {
        let attacked = PositionBuilder::empty()
            .piece(sq("e1"), Color::White, PieceKind::King)
            .piece(sq("e4"), Color::White, PieceKind::Rook)
            .piece(sq("e8"), Color::Black, PieceKind::King);
        assert!(attacked.clone().build().is_err());

        // With Black to move the check is real and must be answered.
        let state = attacked
            .turn(Color::Black)
            .build()
            .expect("black to move in check is valid");
        let mut game = ChessGame::from_state(state).expect("position is valid");
        assert_eq!(game.game_status(), Ok(GameStatus::Check(Color::Black)));
        assert_eq!(
            play(&mut game, "e8", "e7"),
            MoveOutcome::Rejected(Rejection::IllegalMove)
        );
        assert_committed(play(&mut game, "e8", "d7"));

        let black_king = sq("d7");
        for (from, _) in game.state().board.pieces(Color::White) {
            let targets = game.legal_destinations(from).expect("destinations");
            assert!(!targets.contains(&black_king), "{from} reaches the king");
        }
        assert_eq!(
            game.state()
                .board
                .count(Piece::new(Color::Black, PieceKind::King)),
            1
        );
    }

    #[test]
    fn reset_discards_history() {
        let mut game = ChessGame::new();
        play(&mut game, "e2", "e4");
        game.select_square(sq("e7")).expect("selection");
        game.reset();
        assert_eq!(game.history_len(), 0);
        assert!(!game.undo());
        assert_eq!(game.phase(), InteractionPhase::AwaitingSelection);
        assert_eq!(game.state(), &GameState::new_game());
    }

    #[test]
    fn random_playouts_round_trip_through_undo() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..8 {
            let mut game = ChessGame::new();
            for _ in 0..80 {
                if game.game_status().expect("status").is_over() {
                    break;
                }

                let side = game.current_turn();
                let mut moves = Vec::new();
                for (from, _) in game.state().board.pieces(side) {
                    for to in game.legal_destinations(from).expect("destinations") {
                        moves.push((from, to));
                    }
                }
                let &(from, to) = moves.choose(&mut rng).expect("side to move has a move");

                let before = game.state().clone();
                let depth = game.history_len();
                let mut outcome = game.apply_move(from, to).expect("legal move applies");
                assert!(!outcome.is_rejected(), "{from}->{to} was listed as legal");
                assert_eq!(game.history_len(), depth + 1);

                if let MoveOutcome::PromotionRequired { .. } = outcome {
                    let kind = *PieceKind::PROMOTIONS.choose(&mut rng).expect("four choices");
                    outcome = game.resolve_promotion(kind).expect("pending promotion resolves");
                }
                assert!(matches!(outcome, MoveOutcome::Committed { .. }));
                assert_eq!(game.history_len(), depth + 1);

                for color in [Color::White, Color::Black] {
                    let king = Piece::new(color, PieceKind::King);
                    assert_eq!(game.state().board.count(king), 1);
                }
                assert_eq!(game.is_in_check(side), Ok(false), "{side} left its king en prise");

                let mut undone = game.clone();
                assert!(undone.undo());
                assert_eq!(undone.state(), &before);
            }
        }
    }
}

//! Chess rules engine.
//!
//! Holds a position, answers "may this piece go there", applies moves with all
//! their side effects (castling, en passant, promotion), detects check,
//! checkmate and stalemate, and supports unlimited undo. No AI, no clocks,
//! no notation beyond coordinate squares.
//!
//! The front door is [`game::chess_game::ChessGame`]; the lower modules are
//! public for tools (perft, custom positions) that need them.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position_builder;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod chess_game;
    pub mod game_status;
    pub mod move_outcome;
}

pub mod utils {
    pub mod algebraic;
}

pub use chess_errors::{ChessError, ChessResult, ErrorKind};
pub use game::chess_game::{ChessGame, InteractionPhase, SelectionOutcome};
pub use game::game_status::GameStatus;
pub use game::move_outcome::{MoveOutcome, Rejection};
pub use game_state::chess_types::{Board, Color, GameState, Piece, PieceKind, Square};
pub use game_state::position_builder::PositionBuilder;

//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board construction,
//! coordinate parsing, promotion handling and every query that needs to locate
//! a king. Illegal moves are deliberately *not* errors: they are an expected,
//! frequent answer and are reported through `MoveOutcome::Rejected` instead.
//!
//! Usage guidelines:
//! - `InvalidArgument` and `InvalidState` failures leave the game untouched and
//!   are safe to show to a user.
//! - `InvariantViolation` means a board has no king. `ChessGame` only accepts
//!   validated positions, so it shows up when the lower-level move functions
//!   are handed a hand-edited board.

use thiserror::Error;

use crate::game_state::chess_types::PieceKind;

pub type ChessResult<T> = Result<T, ChessError>;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    IllegalMove,
    InvalidState,
    InvariantViolation,
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Raw coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    OffBoardSquare { row: i8, col: i8 },

    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// Promotion may only produce a knight, bishop, rook or queen.
    #[error("a pawn cannot promote to {0:?}")]
    InvalidPromotionKind(PieceKind),

    /// A position handed to the builder breaks a rule of the game.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The request does not fit the current phase of the game.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Internal corruption, for example a board without a king.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl ChessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChessError::OffBoardSquare { .. }
            | ChessError::InvalidAlgebraicSquare(_)
            | ChessError::InvalidPromotionKind(_)
            | ChessError::InvalidPosition(_) => ErrorKind::InvalidArgument,
            ChessError::InvalidState(_) => ErrorKind::InvalidState,
            ChessError::InvariantViolation(_) => ErrorKind::InvariantViolation,
        }
    }
}

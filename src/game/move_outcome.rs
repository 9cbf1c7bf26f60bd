use crate::chess_errors::ErrorKind;
use crate::game_state::chess_types::{Color, Piece, Square};

/// Why `apply_move` refused a request. The game is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A promotion choice must be resolved first.
    PromotionPending,
    EmptySquare,
    NotYourTurn,
    IllegalMove,
}

impl Rejection {
    pub fn kind(self) -> ErrorKind {
        match self {
            Rejection::PromotionPending => ErrorKind::InvalidState,
            Rejection::EmptySquare | Rejection::NotYourTurn | Rejection::IllegalMove => {
                ErrorKind::IllegalMove
            }
        }
    }
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected(Rejection),
    /// The move is complete and the turn has passed. After a promotion
    /// `moved_piece` is the promoted piece.
    Committed {
        moved_piece: Piece,
        from: Square,
        to: Square,
    },
    /// The pawn is on its last rank; call `resolve_promotion` next.
    PromotionRequired { square: Square, color: Color },
}

impl MoveOutcome {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

//! Structured move descriptions.
//!
//! A `ChessMove` records everything needed to replay a move on a board and to
//! classify it afterwards (captures, castling, en passant, promotion). It is
//! produced by `describe_move` and legal-move enumeration and is never built
//! from text.

use std::fmt;

use crate::game_state::chess_types::*;

/// Side effects beyond moving one piece from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    None,
    DoublePawnPush,
    /// Capture of the pawn standing beside the mover, on the mover's origin row.
    EnPassant,
    Castle(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub special: SpecialMove,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.special, SpecialMove::Castle(_))
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.special == SpecialMove::EnPassant
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// The piece standing on `to` once the move, including any promotion, is done.
    #[inline]
    pub fn piece_after(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.piece.color, kind),
            None => self.piece,
        }
    }
}

/// Coordinate form, e.g. `e7e8q`; meant for logs.
impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        match self.promotion {
            Some(PieceKind::Knight) => write!(f, "n"),
            Some(PieceKind::Bishop) => write!(f, "b"),
            Some(PieceKind::Rook) => write!(f, "r"),
            Some(PieceKind::Queen) => write!(f, "q"),
            _ => Ok(()),
        }
    }
}

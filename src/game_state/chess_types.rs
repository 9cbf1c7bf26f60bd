//! Value types shared by every part of the rules engine.
//!
//! Squares use the board's internal row/column indexing: row 0 is Black's
//! back rank (rank 8), row 7 is White's back rank (rank 1), and columns 0..7
//! map to files a..h.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::{HistorySnapshot, UndoStack};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may turn into.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A colored piece. Pieces never change in place; promotion swaps in a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Unicode glyph, used by the text diagram.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

/// An on-board coordinate. Off-board values cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Validate raw coordinates.
    pub fn new(row: i8, col: i8) -> ChessResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::OffBoardSquare { row, col })
        }
    }

    /// Callers guarantee `row < 8 && col < 8`.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square shifted by `(d_row, d_col)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Column of the rook this side castles with.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on.
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
}

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleSides {
    pub king_side: bool,
    pub queen_side: bool,
}

impl CastleSides {
    pub const BOTH: CastleSides = CastleSides {
        king_side: true,
        queen_side: true,
    };
    pub const NONE: CastleSides = CastleSides {
        king_side: false,
        queen_side: false,
    };
}

/// Castling availability for both colors. Rights are only ever revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    sides: [CastleSides; 2],
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        sides: [CastleSides::BOTH, CastleSides::BOTH],
    };
    pub const NONE: CastlingRights = CastlingRights {
        sides: [CastleSides::NONE, CastleSides::NONE],
    };

    pub const fn new(white: CastleSides, black: CastleSides) -> Self {
        Self {
            sides: [white, black],
        }
    }

    #[inline]
    pub const fn sides(&self, color: Color) -> CastleSides {
        self.sides[color.index()]
    }

    #[inline]
    pub const fn has(&self, color: Color, side: CastleSide) -> bool {
        let sides = self.sides[color.index()];
        match side {
            CastleSide::KingSide => sides.king_side,
            CastleSide::QueenSide => sides.queen_side,
        }
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        let sides = &mut self.sides[color.index()];
        match side {
            CastleSide::KingSide => sides.king_side = false,
            CastleSide::QueenSide => sides.queen_side = false,
        }
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.sides[color.index()] = CastleSides::NONE;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Origin and destination of the most recently finalized move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

/// A pawn that reached its last rank and waits for the promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingPromotion {
    pub square: Square,
    pub color: Color,
    /// Where the pawn came from, so finalizing can record the whole move.
    pub from: Square,
}

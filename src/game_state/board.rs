//! Mailbox board: an 8x8 grid of optional pieces.
//!
//! Placement and removal are unconditional; legality lives in
//! `move_generation`. The only board-level rule is the one-king-per-color
//! invariant, which `find_king` reports on.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces. Only reachable through the position builder.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial arrangement.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.place(Square::at(color.back_row(), col), Piece::new(color, *kind));
                board.place(
                    Square::at(color.pawn_home_row(), col),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever stood there.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Every occupied square with its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares holding pieces of `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.occupied().filter(|(_, p)| *p == piece).count()
    }

    pub fn find_king(&self, color: Color) -> ChessResult<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.occupied()
            .find(|(_, piece)| *piece == king)
            .map(|(sq, _)| sq)
            .ok_or_else(|| {
                log::warn!("board has no {color} king");
                ChessError::InvariantViolation(format!("no {color} king on the board"))
            })
    }

    /// Squares reachable by sliding from `from` along each direction, up to and
    /// including the first occupied square.
    pub fn ray_targets(&self, from: Square, directions: &[(i8, i8)]) -> Vec<Square> {
        let mut targets = Vec::with_capacity(14);
        for &(d_row, d_col) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_row, d_col) {
                targets.push(next);
                if !self.is_empty(next) {
                    break;
                }
                current = next;
            }
        }
        targets
    }

    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a row, column or diagonal; anything else is
    /// reported as blocked.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
        if !aligned || from == to {
            return false;
        }

        let step = (d_row.signum(), d_col.signum());
        let mut current = from;
        loop {
            current = match current.offset(step.0, step.1) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}

/// Text diagram with White at the bottom, for logs and test failures.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8u8 {
            let rank = 8 - row;
            write!(f, "{rank} ")?;
            for col in 0..8u8 {
                let glyph = self
                    .piece_at(Square::at(row, col))
                    .map_or('·', Piece::glyph);
                write!(f, "{glyph}")?;
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, "  a b c d e f g h")
    }
}

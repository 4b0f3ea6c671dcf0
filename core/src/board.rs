/// Board representation as an 8x8 grid of square states.
/// The board owns all piece placement; pieces are derived from it on demand.
use crate::error::{BoardError, MoveError};
use crate::types::*;
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Array-based board representation indexed by `[row][col]`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates the standard starting position: white on rows 0-2, red on rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !is_dark_square(row, col) {
                    continue;
                }
                let square = match row {
                    0..=2 => Square::WhiteMan,
                    5..=7 => Square::RedMan,
                    _ => Square::DarkEmpty,
                };
                board.squares[row as usize][col as usize] = square;
            }
        }

        board
    }

    /// Creates a board with the light/dark pattern laid out and no pieces.
    pub fn empty() -> Self {
        let mut squares = [[Square::LightEmpty; SIZE]; SIZE];
        for (row, cells) in squares.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if (row + col) % 2 == 1 {
                    *cell = Square::DarkEmpty;
                }
            }
        }
        Self { squares }
    }

    /// Gets the square at the given coordinate.
    /// Off-board coordinates read as `Square::LightEmpty`, which is never a valid target.
    pub fn piece_at(&self, row: i8, col: i8) -> Square {
        if on_board(row, col) {
            self.squares[row as usize][col as usize]
        } else {
            Square::LightEmpty
        }
    }

    /// Places a square value directly. Light squares only accept `LightEmpty`.
    pub fn set_square(&mut self, row: i8, col: i8, square: Square) -> Result<(), BoardError> {
        if !on_board(row, col) {
            return Err(BoardError::OffBoard { row, col });
        }
        if !is_dark_square(row, col) {
            if square == Square::LightEmpty {
                return Ok(());
            }
            return Err(BoardError::LightSquare { row, col });
        }

        // Dark squares never become light again.
        let square = if square == Square::LightEmpty {
            Square::DarkEmpty
        } else {
            square
        };
        self.squares[row as usize][col as usize] = square;
        Ok(())
    }

    /// Moves a piece one diagonal step, crowning a man that reaches its promotion row.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let (from_row, from_col) = mv.from();
        let piece = self.piece_at(from_row, from_col);
        let side = piece.side().ok_or(MoveError::NoPiece {
            row: from_row,
            col: from_col,
        })?;

        if mv.row_delta().abs() != 1 || mv.col_delta().abs() != 1 {
            return Err(MoveError::NotAStep { mv });
        }
        if !piece.is_king() && mv.row_delta() != side.forward() {
            return Err(MoveError::Backwards { mv });
        }
        if self.piece_at(mv.to_row(), mv.to_col()) != Square::DarkEmpty {
            return Err(MoveError::BlockedDestination { mv });
        }

        self.relocate(mv, piece, side);
        Ok(())
    }

    /// Performs a jump, clearing the captured square between origin and destination.
    ///
    /// `has_already_jumped` is true when the piece is continuing a chain in the
    /// current turn, which lets a man capture backwards. The direction check uses
    /// the piece as it stood before this jump, so a man crowned here is treated as
    /// a man.
    pub fn apply_jump(&mut self, mv: Move, has_already_jumped: bool) -> Result<(), MoveError> {
        let (from_row, from_col) = mv.from();
        let piece = self.piece_at(from_row, from_col);
        let side = piece.side().ok_or(MoveError::NoPiece {
            row: from_row,
            col: from_col,
        })?;

        if mv.row_delta().abs() != 2 || mv.col_delta().abs() != 2 {
            return Err(MoveError::NotAJump { mv });
        }
        if !piece.is_king() && !has_already_jumped && mv.row_delta() != 2 * side.forward() {
            return Err(MoveError::Backwards { mv });
        }
        if self.piece_at(mv.to_row(), mv.to_col()) != Square::DarkEmpty {
            return Err(MoveError::BlockedDestination { mv });
        }
        let (mid_row, mid_col) = mv.jumped_square();
        if !self.piece_at(mid_row, mid_col).is_opponent_of(side) {
            return Err(MoveError::NothingToCapture { mv });
        }

        self.squares[mid_row as usize][mid_col as usize] = Square::DarkEmpty;
        self.relocate(mv, piece, side);
        Ok(())
    }

    /// Returns every piece of `side`, scanning rows then columns.
    pub fn players_pieces(&self, side: Side) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let square = self.piece_at(row, col);
                if square.side() == Some(side) {
                    pieces.push(Piece::new(square, row, col));
                }
            }
        }
        pieces
    }

    /// Counts the squares holding exactly `square`.
    pub fn count(&self, square: Square) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&cell| cell == square)
            .count()
    }

    /// Iterates over `(row, col, square)` for all 64 cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Square)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &square)| (row as i8, col as i8, square))
        })
    }

    fn relocate(&mut self, mv: Move, piece: Square, side: Side) {
        let landed = if mv.to_row() == side.promotion_row() {
            piece.crowned()
        } else {
            piece
        };
        self.squares[mv.from_row() as usize][mv.from_col() as usize] = Square::DarkEmpty;
        self.squares[mv.to_row() as usize][mv.to_col() as usize] = landed;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}  ")?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, " {row} ")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {:<3}", self.piece_at(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Plain-text board diagrams.
//!
//! Eight lines of eight whitespace-separated tokens, row 0 first:
//! `.` or `-` empty, `r`/`w` men, `R`/`W` (or `RK`/`WK`) kings.
//! Blank lines and lines starting with `#` are ignored.

use crate::board::Board;
use crate::error::DiagramError;
use crate::types::{Square, BOARD_SIZE};
use std::str::FromStr;

/// Common layouts in diagram form.
pub mod layouts {
    pub const STARTING: &str = "\
. w . w . w . w
w . w . w . w .
. w . w . w . w
. . . . . . . .
. . . . . . . .
r . r . r . r .
. r . r . r . r
r . r . r . r .";

    /// One red man facing a white man it can capture.
    pub const SINGLE_JUMP: &str = "\
. . . . . . . .
. . . . . . . .
. . . w . . . .
. . . . r . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .";
}

impl Board {
    /// Parses a diagram into a board.
    pub fn from_diagram(text: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(DiagramError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != BOARD_SIZE as usize {
                return Err(DiagramError::ColumnCount {
                    row,
                    count: tokens.len(),
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                let square = parse_token(token).ok_or_else(|| DiagramError::UnknownToken {
                    row,
                    col,
                    token: token.to_string(),
                })?;
                if square.is_piece() {
                    board.set_square(row as i8, col as i8, square)?;
                }
            }
        }

        Ok(board)
    }

    /// Writes the board as a diagram that `from_diagram` reads back.
    pub fn to_diagram(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            let tokens: Vec<&str> = (0..BOARD_SIZE)
                .map(|col| token_for(self.piece_at(row, col)))
                .collect();
            out.push_str(&tokens.join(" "));
            if row < BOARD_SIZE - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

fn parse_token(token: &str) -> Option<Square> {
    match token {
        "." | "-" => Some(Square::DarkEmpty),
        "r" => Some(Square::RedMan),
        "w" => Some(Square::WhiteMan),
        "R" | "RK" => Some(Square::RedKing),
        "W" | "WK" => Some(Square::WhiteKing),
        _ => None,
    }
}

fn token_for(square: Square) -> &'static str {
    match square {
        Square::LightEmpty | Square::DarkEmpty => ".",
        Square::RedMan => "r",
        Square::WhiteMan => "w",
        Square::RedKing => "R",
        Square::WhiteKing => "W",
    }
}

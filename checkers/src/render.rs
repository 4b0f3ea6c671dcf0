use checkers_core::{Board, Square, BOARD_SIZE};
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    tty::IsTty,
    ExecutableCommand,
};
use std::io::{self, Write};

/// Prints boards to the terminal, coloured when stdout is a terminal.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(plain: bool) -> Self {
        Self {
            color: !plain && io::stdout().is_tty(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn draw<W: Write + ?Sized>(&self, out: &mut W, board: &Board) -> io::Result<()> {
        if !self.color {
            write!(out, "\n{board}")?;
            return Ok(());
        }

        write!(out, "\n   ")?;
        for col in 0..BOARD_SIZE {
            write!(out, " {col}  ")?;
        }
        writeln!(out)?;

        for row in 0..BOARD_SIZE {
            write!(out, " {row} ")?;
            for col in 0..BOARD_SIZE {
                let square = board.piece_at(row, col);
                out.execute(SetForegroundColor(color_of(square)))?;
                write!(out, " {:<3}", square.glyph())?;
                out.execute(ResetColor)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn color_of(square: Square) -> Color {
    match square {
        Square::RedMan | Square::RedKing => Color::Red,
        Square::WhiteMan | Square::WhiteKing => Color::White,
        Square::DarkEmpty => Color::DarkGrey,
        Square::LightEmpty => Color::Reset,
    }
}

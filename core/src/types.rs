use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Represents one of the two players in checkers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Side {
    Red,
    White,
}

impl Side {
    /// Returns the opposite side.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::White,
            Side::White => Side::Red,
        }
    }

    /// Returns the row delta of a forward step for men of this side.
    /// Red moves towards row 0, white towards row 7.
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::White => 1,
        }
    }

    /// Returns the row on which men of this side are crowned.
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Red => 0,
            Side::White => BOARD_SIZE - 1,
        }
    }

    /// Returns the square value of an uncrowned piece of this side.
    pub const fn man(self) -> Square {
        match self {
            Side::Red => Square::RedMan,
            Side::White => Square::WhiteMan,
        }
    }

    /// Returns the square value of a crowned piece of this side.
    pub const fn king(self) -> Square {
        match self {
            Side::Red => Square::RedKing,
            Side::White => Square::WhiteKing,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::White => write!(f, "White"),
        }
    }
}

/// State of a single cell of the board.
/// Light squares are dead space and never hold a piece.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Square {
    #[default]
    LightEmpty,
    DarkEmpty,
    RedMan,
    WhiteMan,
    RedKing,
    WhiteKing,
}

impl Square {
    /// Returns the owner of the piece on this square, if any.
    pub const fn side(self) -> Option<Side> {
        match self {
            Square::RedMan | Square::RedKing => Some(Side::Red),
            Square::WhiteMan | Square::WhiteKing => Some(Side::White),
            Square::LightEmpty | Square::DarkEmpty => None,
        }
    }

    /// Returns true if this square holds a piece of either side.
    pub const fn is_piece(self) -> bool {
        self.side().is_some()
    }

    /// Returns true if this square holds a king.
    pub const fn is_king(self) -> bool {
        matches!(self, Square::RedKing | Square::WhiteKing)
    }

    /// Returns true if this square is a playable cell.
    pub const fn is_dark(self) -> bool {
        !matches!(self, Square::LightEmpty)
    }

    /// Returns the crowned version of a man; every other value is unchanged.
    pub const fn crowned(self) -> Self {
        match self {
            Square::RedMan => Square::RedKing,
            Square::WhiteMan => Square::WhiteKing,
            other => other,
        }
    }

    /// Returns true if this square holds a piece belonging to the opponent of `side`.
    pub fn is_opponent_of(self, side: Side) -> bool {
        self.side() == Some(side.opponent())
    }

    /// Glyph used by the board printer.
    pub const fn glyph(self) -> &'static str {
        match self {
            Square::LightEmpty | Square::DarkEmpty => "-",
            Square::RedMan => "R",
            Square::WhiteMan => "W",
            Square::RedKing => "RK",
            Square::WhiteKing => "WK",
        }
    }
}

/// Returns true if `(row, col)` lies on the board.
pub const fn on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// Returns true if `(row, col)` is one of the 32 playable squares.
pub const fn is_dark_square(row: i8, col: i8) -> bool {
    on_board(row, col) && (row + col) % 2 == 1
}

/// A candidate transition from one square to another.
/// A move is a plain descriptor and does not validate itself.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    from_row: i8,
    from_col: i8,
    to_row: i8,
    to_col: i8,
}

impl Move {
    /// Creates a move between two coordinates.
    pub const fn new(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    pub const fn from_row(self) -> i8 {
        self.from_row
    }

    pub const fn from_col(self) -> i8 {
        self.from_col
    }

    pub const fn to_row(self) -> i8 {
        self.to_row
    }

    pub const fn to_col(self) -> i8 {
        self.to_col
    }

    /// Origin as a `(row, col)` pair.
    pub const fn from(self) -> (i8, i8) {
        (self.from_row, self.from_col)
    }

    /// Destination as a `(row, col)` pair.
    pub const fn to(self) -> (i8, i8) {
        (self.to_row, self.to_col)
    }

    /// Returns true if the move spans two rows, i.e. it is a capture.
    pub const fn is_jump(self) -> bool {
        let delta = self.to_row - self.from_row;
        delta == 2 || delta == -2
    }

    /// Returns the square strictly between origin and destination of a jump.
    pub const fn jumped_square(self) -> (i8, i8) {
        (
            (self.from_row + self.to_row) / 2,
            (self.from_col + self.to_col) / 2,
        )
    }

    pub const fn row_delta(self) -> i8 {
        self.to_row - self.from_row
    }

    pub const fn col_delta(self) -> i8 {
        self.to_col - self.from_col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) -> ({},{})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// A piece located on the board, derived from a board scan.
/// `has_just_jumped` is per-turn state and is never stored in the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: Square,
    pub row: i8,
    pub col: i8,
    pub has_just_jumped: bool,
}

impl Piece {
    pub const fn new(kind: Square, row: i8, col: i8) -> Self {
        Self {
            kind,
            row,
            col,
            has_just_jumped: false,
        }
    }

    /// Marks the piece as being in the middle of a jump chain.
    pub const fn jumped(self) -> Self {
        Self {
            has_just_jumped: true,
            ..self
        }
    }

    pub const fn is_king(self) -> bool {
        self.kind.is_king()
    }

    /// Owner of the piece.
    pub fn side(self) -> Side {
        match self.kind {
            Square::WhiteMan | Square::WhiteKing => Side::White,
            _ => Side::Red,
        }
    }

    /// Returns true if the piece may travel in both row directions.
    pub const fn moves_backwards(self) -> bool {
        self.is_king() || self.has_just_jumped
    }
}

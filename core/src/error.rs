//! Error types for board mutation and board construction.

use crate::types::Move;
use thiserror::Error;

/// Reasons a move or jump cannot be applied to a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square holds no piece
    #[error("no piece to move at ({row},{col})")]
    NoPiece { row: i8, col: i8 },

    /// The destination is off the board, light, or occupied
    #[error("destination of {mv} is not an empty dark square")]
    BlockedDestination { mv: Move },

    /// The displacement is not a single diagonal step
    #[error("{mv} is not a one-square diagonal step")]
    NotAStep { mv: Move },

    /// The displacement is not a two-square diagonal
    #[error("{mv} is not a two-square diagonal jump")]
    NotAJump { mv: Move },

    /// A man tried to travel away from its promotion row
    #[error("{mv} moves a man backwards")]
    Backwards { mv: Move },

    /// The square being jumped does not hold an opponent piece
    #[error("{mv} does not jump over an opponent piece")]
    NothingToCapture { mv: Move },

    /// The move is not in the legal set for the side to move
    #[error("{mv} is not a legal move")]
    Illegal { mv: Move },

    /// A simple move was offered while a capture is available
    #[error("{mv} is not allowed: a jump must be taken")]
    JumpRequired { mv: Move },

    /// A follow-up that does not continue the current jump chain
    #[error("{mv} does not continue the current jump chain")]
    NotInChain { mv: Move },

    /// The chain opened by `mv` ended while the piece could still capture
    #[error("jump chain opened by {mv} ended with captures remaining")]
    ChainAbandoned { mv: Move },
}

/// Errors raised when placing pieces directly on a board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("({row},{col}) is off the board")]
    OffBoard { row: i8, col: i8 },

    #[error("({row},{col}) is a light square and cannot hold a piece")]
    LightSquare { row: i8, col: i8 },
}

/// Errors raised while reading a board diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 squares, got {count}")]
    ColumnCount { row: usize, count: usize },

    #[error("row {row}, column {col}: unknown token '{token}'")]
    UnknownToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

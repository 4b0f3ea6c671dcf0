//! Multi-jump sequencing for a single piece within one turn.

use crate::board::Board;
use crate::error::MoveError;
use crate::move_gen::generate_legal_jumps;
use crate::types::{Move, Piece};
use std::collections::BTreeSet;
use tracing::trace;

/// The piece currently capturing, threaded through consecutive jumps.
///
/// Only this piece is considered for follow-up captures, and it is treated as
/// having just jumped so that a man may continue backwards. A man that is
/// crowned during the turn stops immediately.
#[derive(Clone, Debug)]
pub struct JumpChain {
    piece: Piece,
    started_as_man: bool,
    crowned: bool,
    path: Vec<Move>,
}

impl JumpChain {
    /// Applies the opening jump of a turn and starts tracking the jumping piece.
    pub fn start(board: &mut Board, jump: Move) -> Result<Self, MoveError> {
        let (row, col) = jump.from();
        let kind = board.piece_at(row, col);
        if !kind.is_piece() {
            return Err(MoveError::NoPiece { row, col });
        }
        let piece = Piece::new(kind, row, col);
        if !generate_legal_jumps(board, &[piece]).contains(&jump) {
            return Err(MoveError::Illegal { mv: jump });
        }

        let mut chain = Self {
            piece,
            started_as_man: !kind.is_king(),
            crowned: false,
            path: Vec::new(),
        };
        chain.apply(board, jump)?;
        Ok(chain)
    }

    /// Follow-up jumps available to the chaining piece. Empty once the chain is over.
    pub fn next_jumps(&self, board: &Board) -> BTreeSet<Move> {
        if self.crowned {
            return BTreeSet::new();
        }
        generate_legal_jumps(board, &[self.piece])
    }

    /// Applies a follow-up jump.
    pub fn advance(&mut self, board: &mut Board, jump: Move) -> Result<(), MoveError> {
        if !self.next_jumps(board).contains(&jump) {
            return Err(MoveError::NotInChain { mv: jump });
        }
        self.apply(board, jump)
    }

    /// Returns true when no further capture may be made this turn.
    pub fn is_finished(&self, board: &Board) -> bool {
        self.next_jumps(board).is_empty()
    }

    /// True if a man was crowned during this chain.
    pub fn crowned(&self) -> bool {
        self.crowned
    }

    /// Jumps applied so far, in order.
    pub fn path(&self) -> &[Move] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Move> {
        self.path
    }

    fn apply(&mut self, board: &mut Board, jump: Move) -> Result<(), MoveError> {
        board.apply_jump(jump, self.piece.has_just_jumped)?;

        let landed = board.piece_at(jump.to_row(), jump.to_col());
        self.crowned = self.started_as_man && landed.is_king();
        self.piece = Piece::new(landed, jump.to_row(), jump.to_col()).jumped();
        self.path.push(jump);
        trace!(%jump, crowned = self.crowned, "jump applied");
        Ok(())
    }
}

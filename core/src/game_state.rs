/// Game state snapshot: a board layout paired with the side to move.
/// This module provides the interface the search and the game loop share.
use crate::board::Board;
use crate::chain::JumpChain;
use crate::error::MoveError;
use crate::move_gen::{all_candidate_moves, has_any_move, legal_jumps, legal_turn_moves};
use crate::types::*;
use std::collections::BTreeSet;

/// Immutable snapshot of a game between turns.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    /// Independent copy of the board layout
    pub board: Board,
    /// Which side is to move
    pub side_to_move: Side,
}

/// A completed turn: the resulting state and the moves that produced it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Turn {
    pub state: GameState,
    pub path: Vec<Move>,
}

impl Turn {
    /// True if the turn captured at least one piece.
    pub fn is_capture(&self) -> bool {
        self.path.first().is_some_and(|mv| mv.is_jump())
    }
}

impl GameState {
    /// Creates a new game in the starting position, red to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::Red,
        }
    }

    /// Wraps an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
        }
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Applies exactly one move on a copy of the board and passes the turn.
    /// Jumps are not chained; the search advances one move per ply.
    pub fn successor(&self, mv: Move) -> Result<Self, MoveError> {
        let mut board = self.board.clone();
        if mv.is_jump() {
            board.apply_jump(mv, false)?;
        } else {
            board.apply_move(mv)?;
        }
        Ok(Self {
            board,
            side_to_move: self.side_to_move.opponent(),
        })
    }

    /// Moves the side to move may choose from, with jumps forced.
    pub fn legal_turn_moves(&self) -> BTreeSet<Move> {
        legal_turn_moves(&self.board, self.side_to_move)
    }

    /// True if the side to move has no legal move left and has lost.
    pub fn is_game_over(&self) -> bool {
        !has_any_move(&self.board, self.side_to_move)
    }

    /// Plays a full turn for the side to move.
    ///
    /// A jump opens a chain: `choose` is called with the follow-up jumps of the
    /// capturing piece until none remain or the piece was crowned. Returning
    /// `None` while jumps remain is an error. Simple moves are refused while
    /// any jump is available.
    pub fn play_turn<F>(&self, mv: Move, choose: F) -> Result<Turn, MoveError>
    where
        F: FnMut(&Board, &BTreeSet<Move>) -> Option<Move>,
    {
        self.play(mv, choose, true)
    }

    /// Plays a full turn from any candidate the search may return.
    ///
    /// The search only forces a jump when one of its best moves is a jump, so
    /// a simple move is accepted here even while a jump is available.
    pub fn play_search_turn<F>(&self, mv: Move, choose: F) -> Result<Turn, MoveError>
    where
        F: FnMut(&Board, &BTreeSet<Move>) -> Option<Move>,
    {
        self.play(mv, choose, false)
    }

    fn play<F>(&self, mv: Move, mut choose: F, force_jumps: bool) -> Result<Turn, MoveError>
    where
        F: FnMut(&Board, &BTreeSet<Move>) -> Option<Move>,
    {
        let side = self.side_to_move;
        let mut board = self.board.clone();

        let jumps = legal_jumps(&board, side);
        let path = if mv.is_jump() {
            if !jumps.contains(&mv) {
                return Err(MoveError::Illegal { mv });
            }
            let mut chain = JumpChain::start(&mut board, mv)?;
            loop {
                let next = chain.next_jumps(&board);
                if next.is_empty() {
                    break;
                }
                let follow_up = choose(&board, &next).ok_or(MoveError::ChainAbandoned { mv })?;
                chain.advance(&mut board, follow_up)?;
            }
            chain.into_path()
        } else {
            if force_jumps && !jumps.is_empty() {
                return Err(MoveError::JumpRequired { mv });
            }
            if !all_candidate_moves(&board, side).contains(&mv) {
                return Err(MoveError::Illegal { mv });
            }
            board.apply_move(mv)?;
            vec![mv]
        };

        Ok(Turn {
            state: Self {
                board,
                side_to_move: side.opponent(),
            },
            path,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(_: &Board, options: &BTreeSet<Move>) -> Option<Move> {
        options.iter().next().copied()
    }

    #[test]
    fn test_starting_position() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Side::Red);
        assert!(!state.is_game_over());
        assert_eq!(state.legal_turn_moves().len(), 7);
    }

    #[test]
    fn test_successor_flips_turn_and_copies_board() {
        let state = GameState::new();
        let next = state.successor(Move::new(5, 2, 4, 3)).unwrap();

        assert_eq!(next.side_to_move(), Side::White);
        assert_eq!(next.board.piece_at(4, 3), Square::RedMan);
        assert_eq!(state.board.piece_at(4, 3), Square::DarkEmpty);
    }

    #[test]
    fn test_successor_does_not_chain() {
        let mut board = Board::empty();
        board.set_square(6, 1, Square::RedMan).unwrap();
        board.set_square(5, 2, Square::WhiteMan).unwrap();
        board.set_square(3, 4, Square::WhiteMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        let next = state.successor(Move::new(6, 1, 4, 3)).unwrap();
        assert_eq!(next.board.piece_at(4, 3), Square::RedMan);
        assert_eq!(next.board.piece_at(3, 4), Square::WhiteMan);
        assert_eq!(next.side_to_move(), Side::White);
    }

    #[test]
    fn test_play_turn_simple_move() {
        let state = GameState::new();
        let turn = state.play_turn(Move::new(5, 0, 4, 1), first).unwrap();

        assert_eq!(turn.path, vec![Move::new(5, 0, 4, 1)]);
        assert!(!turn.is_capture());
        assert_eq!(turn.state.side_to_move(), Side::White);
    }

    #[test]
    fn test_play_turn_runs_chain() {
        let mut board = Board::empty();
        board.set_square(6, 1, Square::RedMan).unwrap();
        board.set_square(5, 2, Square::WhiteMan).unwrap();
        board.set_square(3, 4, Square::WhiteMan).unwrap();
        board.set_square(0, 7, Square::WhiteMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        let turn = state.play_turn(Move::new(6, 1, 4, 3), first).unwrap();
        assert_eq!(
            turn.path,
            vec![Move::new(6, 1, 4, 3), Move::new(4, 3, 2, 5)]
        );
        assert!(turn.is_capture());
        assert_eq!(turn.state.board.count(Square::WhiteMan), 1);
        assert_eq!(turn.state.side_to_move(), Side::White);
    }

    #[test]
    fn test_play_turn_rejects_abandoned_chain() {
        let mut board = Board::empty();
        board.set_square(6, 1, Square::RedMan).unwrap();
        board.set_square(5, 2, Square::WhiteMan).unwrap();
        board.set_square(3, 4, Square::WhiteMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        let opening = Move::new(6, 1, 4, 3);
        assert_eq!(
            state.play_turn(opening, |_, _| None),
            Err(MoveError::ChainAbandoned { mv: opening })
        );
    }

    #[test]
    fn test_play_turn_forces_jump() {
        let mut board = Board::empty();
        board.set_square(3, 4, Square::RedMan).unwrap();
        board.set_square(2, 3, Square::WhiteMan).unwrap();
        board.set_square(6, 1, Square::RedMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        assert_eq!(
            state.play_turn(Move::new(6, 1, 5, 0), first),
            Err(MoveError::JumpRequired {
                mv: Move::new(6, 1, 5, 0)
            })
        );
        assert!(state.play_turn(Move::new(3, 4, 1, 2), first).is_ok());
    }

    #[test]
    fn test_play_search_turn_allows_skipping_jump() {
        let mut board = Board::empty();
        board.set_square(3, 4, Square::RedMan).unwrap();
        board.set_square(2, 3, Square::WhiteMan).unwrap();
        board.set_square(6, 1, Square::RedMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        let turn = state.play_search_turn(Move::new(6, 1, 5, 0), first).unwrap();
        assert_eq!(turn.state.board.piece_at(5, 0), Square::RedMan);
        assert_eq!(turn.state.board.piece_at(2, 3), Square::WhiteMan);
        assert!(matches!(
            state.play_search_turn(Move::new(6, 1, 4, 1), first),
            Err(MoveError::Illegal { .. })
        ));
    }

    #[test]
    fn test_play_turn_rejects_illegal() {
        let state = GameState::new();
        assert!(matches!(
            state.play_turn(Move::new(5, 0, 4, 0), first),
            Err(MoveError::Illegal { .. })
        ));
        assert!(matches!(
            state.play_turn(Move::new(2, 1, 3, 2), first),
            Err(MoveError::Illegal { .. })
        ));
        assert!(matches!(
            state.play_turn(Move::new(5, 0, 3, 2), first),
            Err(MoveError::Illegal { .. })
        ));
    }

    #[test]
    fn test_game_over_without_pieces() {
        let mut board = Board::empty();
        board.set_square(4, 3, Square::RedMan).unwrap();
        let state = GameState::from_board(board, Side::White);
        assert!(state.is_game_over());
    }
}

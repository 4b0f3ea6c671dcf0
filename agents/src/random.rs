use crate::{search::SearchError, Agent};
use checkers_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        state
            .legal_turn_moves()
            .into_iter()
            .choose(&mut self.rng)
            .ok_or(SearchError::NoLegalMoves(state.side_to_move()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Board, Side, Square};

    #[test]
    fn test_random_move_is_legal() {
        let state = GameState::new();
        let mut agent = RandomAgent::seeded(5);
        for _ in 0..20 {
            let mv = agent.choose_move(&state).unwrap();
            assert!(state.legal_turn_moves().contains(&mv));
        }
    }

    #[test]
    fn test_random_respects_forced_jump() {
        let mut board = Board::empty();
        board.set_square(3, 4, Square::RedMan).unwrap();
        board.set_square(2, 3, Square::WhiteMan).unwrap();
        board.set_square(6, 1, Square::RedMan).unwrap();
        let state = GameState::from_board(board, Side::Red);

        let mut agent = RandomAgent::seeded(9);
        for _ in 0..10 {
            assert_eq!(agent.choose_move(&state).unwrap(), Move::new(3, 4, 1, 2));
        }
    }

    #[test]
    fn test_random_without_moves() {
        let mut board = Board::empty();
        board.set_square(4, 3, Square::RedMan).unwrap();
        let state = GameState::from_board(board, Side::White);

        assert_eq!(
            RandomAgent::seeded(0).choose_move(&state),
            Err(SearchError::NoLegalMoves(Side::White))
        );
    }
}

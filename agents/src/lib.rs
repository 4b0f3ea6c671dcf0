pub mod evaluation;
pub mod negamax;
pub mod random;
pub mod search;

use checkers_core::{GameState, Move};
use std::collections::BTreeSet;

/// Core trait for checkers agents
pub trait Agent {
    /// Pick the opening move of a turn for the side to move
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError>;

    /// Pick the next jump of a chain already in progress
    fn choose_continuation(
        &mut self,
        _state: &GameState,
        options: &BTreeSet<Move>,
    ) -> Option<Move> {
        options.iter().next().copied()
    }

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use evaluation::*;
pub use negamax::NegamaxAgent;
pub use random::RandomAgent;
pub use search::*;

use crate::{
    search::{best_move, SearchConfig, SearchError},
    Agent,
};
use checkers_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct NegamaxAgent {
    name: String,
    config: SearchConfig,
    rng: StdRng,
}

impl NegamaxAgent {
    pub fn new(depth: u8) -> Self {
        Self::with_config(SearchConfig::depth(depth))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        NegamaxAgent {
            name: format!("Negamax(depth={})", config.depth),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for NegamaxAgent {
    fn choose_move(&mut self, state: &GameState) -> Result<Move, SearchError> {
        let result = best_move(state, &self.config, &mut self.rng)?;
        Ok(result.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use crate::evaluation::evaluate;
use checkers_core::{all_candidate_moves, GameState, Move, MoveError, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Seed for the tie-breaking rng of an agent built from this config;
    /// `None` draws one from the OS. `best_move` uses the rng it is given.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn depth(depth: u8) -> Self {
        Self { depth, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::depth(3)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: f64,
    /// Every move sharing the best score, after the jump filter
    pub tied: Vec<Move>,
    pub nodes: u64,
}

/// Negamax with alpha-beta pruning, scored for the side to move.
///
/// Every jump and simple move is a candidate; one move is applied per ply.
/// A node without moves scores `alpha`.
pub fn negamax(
    state: &GameState,
    depth: u8,
    mut alpha: f64,
    beta: f64,
    stats: &mut SearchStats,
) -> Result<f64, SearchError> {
    stats.nodes += 1;

    if depth == 0 {
        return Ok(evaluate(state));
    }

    for mv in &all_candidate_moves(&state.board, state.side_to_move) {
        let child = state.successor(*mv)?;
        let score = -negamax(&child, depth - 1, -beta, -alpha, stats)?;

        if score >= beta {
            return Ok(score);
        }

        if score > alpha {
            alpha = score;
        }
    }

    Ok(alpha)
}

/// Picks a move for the side to move.
///
/// Each root move is searched with a full window so its score is exact and
/// ties are never hidden by a cutoff. All root moves sharing the best score are
/// collected, jumps win over simple moves among them, and the survivor is drawn
/// with `rng`.
pub fn best_move<R: Rng + ?Sized>(
    state: &GameState,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchResult, SearchError> {
    let side = state.side_to_move;
    let moves = all_candidate_moves(&state.board, side);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves(side));
    }

    let depth = config.depth.max(1);
    let mut stats = SearchStats::default();
    let mut alpha = f64::MIN;
    let mut tied: Vec<Move> = Vec::new();

    for mv in &moves {
        let child = state.successor(*mv)?;
        // Full window rather than (MIN, -alpha): a child cut off exactly at the
        // running best would otherwise be counted as a tie.
        let score = -negamax(&child, depth - 1, f64::MIN, f64::MAX, &mut stats)?;
        debug!(%mv, score, "root candidate");

        if score > alpha {
            alpha = score;
            tied.clear();
            tied.push(*mv);
        } else if score == alpha {
            tied.push(*mv);
        }
    }

    if tied.iter().any(|mv| mv.is_jump()) {
        tied.retain(|mv| mv.is_jump());
    }

    let best_move = *tied.choose(rng).ok_or(SearchError::NoLegalMoves(side))?;
    debug!(%best_move, score = alpha, tied = tied.len(), nodes = stats.nodes, "move chosen");

    Ok(SearchResult {
        best_move,
        score: alpha,
        tied,
        nodes: stats.nodes,
    })
}

/// Plain negamax without pruning. Scores a node without moves as `f64::MIN`.
pub fn minimax(state: &GameState, depth: u8) -> Result<f64, SearchError> {
    if depth == 0 {
        return Ok(evaluate(state));
    }

    let mut best = f64::MIN;
    for mv in &all_candidate_moves(&state.board, state.side_to_move) {
        let child = state.successor(*mv)?;
        let score = -minimax(&child, depth - 1)?;
        if score > best {
            best = score;
        }
    }

    Ok(best)
}

use crate::error::MoveError;
use crate::game_state::GameState;
use crate::move_gen::all_candidate_moves;
use crate::types::Move;

/// Perft (performance test) results at the leaves of the search tree.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub jumps: u64,
    pub crownings: u64,
    /// Leaves where the side to move has no move at all
    pub dead_ends: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.jumps += other.jumps;
        self.crownings += other.crownings;
        self.dead_ends += other.dead_ends;
    }
}

/// Counts leaf nodes of the tree the search walks: every jump and simple move
/// at each ply, one move per ply.
pub fn perft(state: &GameState, depth: u8) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = all_candidate_moves(&state.board, state.side_to_move);

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in &moves {
        let child = state.successor(*mv)?;
        nodes += perft(&child, depth - 1)?;
    }

    Ok(nodes)
}

/// Performs perft with a per-root-move breakdown.
pub fn perft_divide(state: &GameState, depth: u8) -> Result<Vec<(Move, u64)>, MoveError> {
    let moves = all_candidate_moves(&state.board, state.side_to_move);
    let mut results = Vec::with_capacity(moves.len());

    for mv in &moves {
        let child = state.successor(*mv)?;
        let nodes = if depth <= 1 {
            1
        } else {
            perft(&child, depth - 1)?
        };
        results.push((*mv, nodes));
    }

    Ok(results)
}

/// Performs perft and classifies the moves leading to each leaf.
pub fn perft_detailed(state: &GameState, depth: u8) -> Result<PerftResults, MoveError> {
    let mut results = PerftResults::default();

    if depth == 0 {
        results.nodes = 1;
        return Ok(results);
    }

    let moves = all_candidate_moves(&state.board, state.side_to_move);
    if moves.is_empty() {
        results.dead_ends = 1;
        return Ok(results);
    }

    for mv in &moves {
        let child = state.successor(*mv)?;

        if depth == 1 {
            results.nodes += 1;
            if mv.is_jump() {
                results.jumps += 1;
            }
            let before = state.board.piece_at(mv.from_row(), mv.from_col());
            let after = child.board.piece_at(mv.to_row(), mv.to_col());
            if !before.is_king() && after.is_king() {
                results.crownings += 1;
            }
        } else {
            results.add(&perft_detailed(&child, depth - 1)?);
        }
    }

    Ok(results)
}

use checkers_core::{Board, GameState, Side, Square};

/// Material value of a man.
pub const MAN_VALUE: f64 = 1.0;
/// Material value of a king.
pub const KING_VALUE: f64 = 2.0;

/// Evaluates a position from the perspective of the side to move.
/// Positive values favor the side to move.
pub fn evaluate(state: &GameState) -> f64 {
    let own = evaluate_side(&state.board, state.side_to_move);
    let opponent = evaluate_side(&state.board, state.side_to_move.opponent());
    own - opponent
}

/// Evaluates a position from Red's perspective.
/// Positive scores favor Red, negative favor White.
pub fn evaluate_absolute(state: &GameState) -> f64 {
    evaluate_side(&state.board, Side::Red) - evaluate_side(&state.board, Side::White)
}

/// Counts material value for a side.
fn evaluate_side(board: &Board, side: Side) -> f64 {
    board
        .cells()
        .filter_map(|(_, _, square)| match square.side() {
            Some(owner) if owner == side => Some(piece_value(square)),
            _ => None,
        })
        .sum()
}

fn piece_value(square: Square) -> f64 {
    if square.is_king() {
        KING_VALUE
    } else {
        MAN_VALUE
    }
}

/// Positions the search can score.
pub trait Evaluatable {
    fn evaluate(&self) -> f64;
    fn evaluate_absolute(&self) -> f64;
}

impl Evaluatable for GameState {
    fn evaluate(&self) -> f64 {
        evaluate(self)
    }

    fn evaluate_absolute(&self) -> f64 {
        evaluate_absolute(self)
    }
}

use crate::board::Board;
use crate::types::*;
use std::collections::BTreeSet;

/// Diagonal column offsets.
const DIAGONALS: [i8; 2] = [-1, 1];

/// Relative `(row, col)` probes for simple moves: the three cells one row ahead,
/// the three cells one row behind, and the cells directly to either side.
/// Only diagonals can ever pass; the rest are rejected by the square and
/// direction checks.
const STEP_PROBES: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates all legal jumps for the given pieces.
///
/// Men consider their two forward diagonals; kings and pieces that are in the
/// middle of a jump chain consider all four.
pub fn generate_legal_jumps(board: &Board, pieces: &[Piece]) -> BTreeSet<Move> {
    let mut jumps = BTreeSet::new();

    for piece in pieces {
        let side = piece.side();
        for &row_dir in row_directions(*piece) {
            for col_dir in DIAGONALS {
                let mv = Move::new(
                    piece.row,
                    piece.col,
                    piece.row + 2 * row_dir,
                    piece.col + 2 * col_dir,
                );
                if can_jump(board, side, mv) {
                    jumps.insert(mv);
                }
            }
        }
    }

    jumps
}

/// Generates all legal non-capturing moves for the given pieces.
pub fn generate_legal_moves(board: &Board, pieces: &[Piece]) -> BTreeSet<Move> {
    let mut moves = BTreeSet::new();

    for piece in pieces {
        for (row_delta, col_delta) in STEP_PROBES {
            let mv = Move::new(
                piece.row,
                piece.col,
                piece.row + row_delta,
                piece.col + col_delta,
            );
            if is_move_permitted(board, *piece, mv) {
                moves.insert(mv);
            }
        }
    }

    moves
}

/// All legal jumps for every piece of `side`.
pub fn legal_jumps(board: &Board, side: Side) -> BTreeSet<Move> {
    generate_legal_jumps(board, &board.players_pieces(side))
}

/// All legal simple moves for every piece of `side`.
pub fn legal_moves(board: &Board, side: Side) -> BTreeSet<Move> {
    generate_legal_moves(board, &board.players_pieces(side))
}

/// Moves a player may actually choose this turn: jumps are mandatory whenever
/// one exists, otherwise any simple move.
pub fn legal_turn_moves(board: &Board, side: Side) -> BTreeSet<Move> {
    let pieces = board.players_pieces(side);
    let jumps = generate_legal_jumps(board, &pieces);
    if jumps.is_empty() {
        generate_legal_moves(board, &pieces)
    } else {
        jumps
    }
}

/// Jumps and simple moves together, as explored by the search at every ply.
pub fn all_candidate_moves(board: &Board, side: Side) -> BTreeSet<Move> {
    let pieces = board.players_pieces(side);
    let mut moves = generate_legal_moves(board, &pieces);
    moves.extend(generate_legal_jumps(board, &pieces));
    moves
}

/// Returns false when `side` cannot move at all, which loses the game.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    let pieces = board.players_pieces(side);
    !generate_legal_jumps(board, &pieces).is_empty()
        || !generate_legal_moves(board, &pieces).is_empty()
}

fn row_directions(piece: Piece) -> &'static [i8] {
    if piece.moves_backwards() {
        &[-1, 1]
    } else if piece.side().forward() < 0 {
        &[-1]
    } else {
        &[1]
    }
}

/// A jump is legal when it lands on an empty dark square and passes over an
/// opponent piece. Off-board reads come back light, so no bounds checks here.
fn can_jump(board: &Board, side: Side, mv: Move) -> bool {
    if board.piece_at(mv.to_row(), mv.to_col()) != Square::DarkEmpty {
        return false;
    }
    let (mid_row, mid_col) = mv.jumped_square();
    board.piece_at(mid_row, mid_col).is_opponent_of(side)
}

fn is_move_permitted(board: &Board, piece: Piece, mv: Move) -> bool {
    // Light and off-board squares are never a destination.
    if board.piece_at(mv.to_row(), mv.to_col()) != Square::DarkEmpty {
        return false;
    }

    if piece.is_king() {
        return true;
    }

    // Men only advance; sideways probes fail here too.
    let side = piece.side();
    match side {
        Side::Red => mv.to_row() < mv.from_row(),
        Side::White => mv.to_row() > mv.from_row(),
    }
}

use super::{children, terminal_value, Heuristic, DRAW};
use crate::game::{is_terminal, Board, Cell};

/// Plain minimax without pruning.
///
/// Visits the complete tree and has the same leaf values as
/// [`super::alphabeta`], so both always agree on the result.
pub fn minimax<H: Heuristic>(
    board: &Board,
    depth: usize,
    maximizing: bool,
    mark: Cell,
    heuristic: &H,
) -> f64 {
    if is_terminal(board) {
        return terminal_value(board, mark);
    }
    if depth == 0 {
        return heuristic.eval(board, mark);
    }

    let (piece, init): (Cell, f64) = if maximizing {
        (mark, f64::NEG_INFINITY)
    } else {
        (mark.opponent(), f64::INFINITY)
    };

    let mut moved = false;
    let mut value = init;
    for child in children(board, piece) {
        moved = true;
        let newval = minimax(&child, depth - 1, !maximizing, mark, heuristic);
        value = if maximizing {
            value.max(newval)
        } else {
            value.min(newval)
        };
    }
    if moved {
        value
    } else {
        DRAW
    }
}

use super::{children, terminal_value, Heuristic, DRAW};
use crate::game::{is_terminal, Board, Cell};

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - The value is from the perspective of `mark`
/// - `mark` moves on maximizing plies, its opponent on minimizing plies
/// - Children are visited in ascending column order
pub fn alphabeta<H: Heuristic>(
    board: &Board,
    depth: usize,
    maximizing: bool,
    mark: Cell,
    heuristic: &H,
) -> f64 {
    alphabeta_rec(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        maximizing,
        mark,
        heuristic,
    )
}

fn alphabeta_rec<H: Heuristic>(
    board: &Board,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
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
    if board.legal_moves().next().is_none() {
        return DRAW;
    }

    if maximizing {
        let mut value = f64::NEG_INFINITY;
        for child in children(board, mark) {
            let newval = alphabeta_rec(&child, depth - 1, alpha, beta, false, mark, heuristic);
            value = value.max(newval);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for child in children(board, mark.opponent()) {
            let newval = alphabeta_rec(&child, depth - 1, alpha, beta, true, mark, heuristic);
            value = value.min(newval);
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

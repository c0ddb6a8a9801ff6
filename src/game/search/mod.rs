mod alphabeta;
pub use alphabeta::*;
mod minimax;
pub use minimax::*;

use std::fmt::Debug;

use super::{has_line, Board, Cell};

/// Score of a completed line for the maximizing player.
/// No heuristic combination of a non-terminal board reaches it.
pub const WIN: f64 = 1_000_000.0;
pub const DRAW: f64 = 0.0;
pub const LOSS: f64 = -1_000_000.0;

/// A heuristic that evaluates the board at the cutoff depth of a tree search
/// from the perspective of `mark`.
pub trait Heuristic: Debug + Send + Sync {
    fn eval(&self, board: &Board, mark: Cell) -> f64;
}

/// Value of a terminal board for `mark`.
fn terminal_value(board: &Board, mark: Cell) -> f64 {
    if has_line(board, mark) {
        WIN
    } else if has_line(board, mark.opponent()) {
        LOSS
    } else {
        DRAW
    }
}

/// Boards after each legal move of `piece`, in ascending column order.
fn children<'a>(board: &'a Board, piece: Cell) -> impl Iterator<Item = Board> + 'a {
    board
        .legal_moves()
        .filter_map(move |column| match board.apply_move(column, piece) {
            (next, Some(_)) => Some(next),
            _ => None,
        })
}

use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use super::WindowHeuristic;
use crate::error::{Error, Result};
use crate::game::search::alphabeta;
use crate::game::{has_line, Board, Cell};

/// Plies of lookahead including the move being scored.
pub const N_STEPS: usize = 3;

/// Depth limited alpha-beta agent.
///
/// Immediate wins and blocks are played without searching.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MinimaxAgent {
    /// Plies of lookahead, counting the scored move itself.
    pub steps: usize,
    pub heuristic: WindowHeuristic,
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self {
            steps: N_STEPS,
            heuristic: WindowHeuristic::default(),
        }
    }
}

impl MinimaxAgent {
    /// Selects the column for `mark`.
    ///
    /// Ties between equally scored columns are broken uniformly at random.
    pub fn next_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        mark: Cell,
        rng: &mut R,
    ) -> Result<usize> {
        let moves: Vec<usize> = board.legal_moves().collect();
        if moves.is_empty() {
            debug!("no legal moves");
            return Ok(0);
        }

        if let Some(column) = completing_move(board, &moves, mark) {
            debug!("win in column {column}");
            return Ok(column);
        }
        if let Some(column) = completing_move(board, &moves, mark.opponent()) {
            debug!("block column {column}");
            return Ok(column);
        }

        let scores = self.scores(board, mark);
        debug!("scores {scores:?}");

        let best = scores
            .iter()
            .map(|&(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        scores
            .into_iter()
            .filter(|&(_, score)| score == best)
            .map(|(column, _)| column)
            .choose(rng)
            .ok_or(Error::NoLegalMoves)
    }

    /// Search scores of every legal move of `mark`, in ascending column order.
    pub fn scores(&self, board: &Board, mark: Cell) -> Vec<(usize, f64)> {
        board
            .legal_moves()
            .map(|column| (column, self.score_move(board, column, mark)))
            .collect()
    }

    /// Plays `column` and searches the remaining plies, starting with the
    /// opponent's reply.
    pub fn score_move(&self, board: &Board, column: usize, mark: Cell) -> f64 {
        match board.apply_move(column, mark) {
            (next, Some(_)) => alphabeta(
                &next,
                self.steps.saturating_sub(1),
                false,
                mark,
                &self.heuristic,
            ),
            _ => f64::NEG_INFINITY,
        }
    }
}

/// First of `moves` that completes a line for `piece`.
fn completing_move(board: &Board, moves: &[usize], piece: Cell) -> Option<usize> {
    moves.iter().copied().find(|&column| match board.apply_move(column, piece) {
        (next, Some(_)) => has_line(&next, piece),
        _ => false,
    })
}

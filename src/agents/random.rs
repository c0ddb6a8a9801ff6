use rand::seq::IteratorRandom;
use rand::Rng;

use crate::game::Board;

/// Plays a uniform random legal column.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn next_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> usize {
        board.legal_moves().choose(rng).unwrap_or(0)
    }
}

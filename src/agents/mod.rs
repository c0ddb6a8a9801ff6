use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;

use log::warn;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

mod heuristic;
pub use heuristic::*;
mod minimax;
pub use minimax::*;
mod random;
pub use random::*;

use crate::env::{MoveRequest, MoveResponse};
use crate::error::Result;
use crate::game::{Board, Cell};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(MinimaxAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::Minimax(MinimaxAgent::default())
    }
}

impl Agent {
    /// Chooses the next column, this never fails.
    ///
    /// Malformed requests and internal errors fall back to a random legal
    /// column, or 0 if there is none.
    pub fn step(&self, request: &MoveRequest) -> MoveResponse {
        let mut rng = SmallRng::from_entropy();

        let result = panic::catch_unwind(AssertUnwindSafe(|| self.select(request, &mut rng)));
        match result {
            Ok(Ok(column)) => MoveResponse::new(column),
            Ok(Err(e)) => {
                warn!("move selection failed: {e}");
                MoveResponse::new(fallback(request, &mut rng))
            }
            Err(_) => {
                warn!("move selection panicked");
                MoveResponse::new(fallback(request, &mut rng))
            }
        }
    }

    fn select<R: Rng + ?Sized>(&self, request: &MoveRequest, rng: &mut R) -> Result<usize> {
        let board = Board::from_observation(&request.observation, &request.configuration)?;
        let mark = Cell::from_mark(request.observation.mark)?;

        match self {
            Agent::Minimax(agent) => agent.next_move(&board, mark, rng),
            Agent::Random(agent) => Ok(agent.next_move(&board, rng)),
        }
    }
}

/// Random column with a free top slot, read from the raw request, or 0.
pub fn fallback<R: Rng + ?Sized>(request: &MoveRequest, rng: &mut R) -> usize {
    request.raw_legal_moves().into_iter().choose(rng).unwrap_or(0)
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

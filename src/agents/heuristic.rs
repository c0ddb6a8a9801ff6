use crate::game::search::Heuristic;
use crate::game::{count_patterns, Board, Cell};

/// Weighted count of open windows plus a bonus for central pieces.
///
/// A window of `n` pieces is counted only if the rest of it is empty.
/// The terms always count fours, threes and twos, so a term is zero when
/// its piece count exceeds the window length.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowHeuristic {
    /// Own windows with four pieces.
    pub line: f64,
    /// Own windows with three pieces.
    pub threat: f64,
    /// Own windows with two pieces.
    pub open: f64,
    /// Opponent windows with two pieces.
    pub opponent_open: f64,
    /// Opponent windows with three pieces.
    pub opponent_threat: f64,
    /// Per own piece in the center column.
    pub center: f64,
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        Self {
            line: 1e6,
            threat: 100.0,
            open: 10.0,
            opponent_open: -50.0,
            opponent_threat: -1000.0,
            center: 5.0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn eval(&self, board: &Board, mark: Cell) -> f64 {
        let opponent = mark.opponent();
        let count = |discs: usize, piece: Cell| {
            if discs > board.inarow {
                0.0
            } else {
                count_patterns(board, discs, piece) as f64
            }
        };

        self.line * count(4, mark)
            + self.threat * count(3, mark)
            + self.open * count(2, mark)
            + self.opponent_open * count(2, opponent)
            + self.opponent_threat * count(3, opponent)
            + self.center * board.count_in_column(board.center_column(), mark) as f64
    }
}

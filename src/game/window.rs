use super::{Board, Cell};

/// Scan direction of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row (→).
    Horizontal,
    /// Along a column (↓).
    Vertical,
    /// ↘
    DiagonalDown,
    /// ↗
    DiagonalUp,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Direction> {
        [
            Direction::Horizontal,
            Direction::Vertical,
            Direction::DiagonalDown,
            Direction::DiagonalUp,
        ]
        .iter()
        .copied()
    }

    /// Row and column offset between two consecutive cells.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Rows in which a window in this direction may start,
    /// so that all `inarow` cells are in bounds.
    fn start_rows(self, rows: usize, inarow: usize) -> std::ops::Range<usize> {
        match self {
            Direction::Horizontal => 0..rows,
            Direction::Vertical | Direction::DiagonalDown => 0..(rows + 1).saturating_sub(inarow),
            Direction::DiagonalUp => (inarow - 1).min(rows)..rows,
        }
    }

    fn start_columns(self, columns: usize, inarow: usize) -> std::ops::Range<usize> {
        match self {
            Direction::Vertical => 0..columns,
            _ => 0..(columns + 1).saturating_sub(inarow),
        }
    }
}

/// A line of `inarow` cells, identified by its first cell and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
}

impl Window {
    /// The cells of this window on `board`.
    pub fn cells<'a>(&self, board: &'a Board) -> impl Iterator<Item = Cell> + 'a {
        let (dr, dc) = self.direction.step();
        let (row, column) = (self.row as isize, self.column as isize);
        (0..board.inarow as isize).map(move |i| {
            board[((row + i * dr) as usize, (column + i * dc) as usize)]
        })
    }

    /// Exactly `disc_count` cells are `piece` and all others are empty.
    pub fn matches(&self, board: &Board, disc_count: usize, piece: Cell) -> bool {
        let mut pieces = 0;
        for cell in self.cells(board) {
            if cell == piece {
                pieces += 1;
            } else if cell != Cell::Empty {
                return false;
            }
        }
        pieces == disc_count
    }

    /// All cells are `piece`.
    pub fn is_line_of(&self, board: &Board, piece: Cell) -> bool {
        self.cells(board).all(|c| c == piece)
    }
}

/// All windows of the board, each exactly once.
///
/// With `inarow == 1` every direction covers the same single cells,
/// so only the horizontal windows are produced.
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    let directions =
        Direction::iter().filter(move |&d| board.inarow > 1 || d == Direction::Horizontal);
    directions.flat_map(move |direction| {
        let columns = direction.start_columns(board.columns, board.inarow);
        direction
            .start_rows(board.rows, board.inarow)
            .flat_map(move |row| {
                columns.clone().map(move |column| Window {
                    row,
                    column,
                    direction,
                })
            })
    })
}

/// Number of windows with exactly `disc_count` `piece`s and otherwise empty
/// cells. Windows containing an opponent piece are never counted.
pub fn count_patterns(board: &Board, disc_count: usize, piece: Cell) -> usize {
    windows(board)
        .filter(|w| w.matches(board, disc_count, piece))
        .count()
}

/// Returns if `piece` has a completed line.
///
/// Equal to `count_patterns(board, board.inarow, piece) > 0`.
pub fn has_line(board: &Board, piece: Cell) -> bool {
    piece.is_player() && windows(board).any(|w| w.is_line_of(board, piece))
}

/// The board is full or one of the players has completed a line.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        || windows(board).any(|w| {
            let mut cells = w.cells(board);
            match cells.next() {
                Some(first) if first.is_player() => cells.all(|c| c == first),
                _ => false,
            }
        })
}

/// The outcome of a game.
/// If the game did not end the outcome is `None`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Draw,
    Winner(Cell),
}

/// Returns if the game has ended and who won.
pub fn outcome(board: &Board) -> Outcome {
    if has_line(board, Cell::Player1) {
        Outcome::Winner(Cell::Player1)
    } else if has_line(board, Cell::Player2) {
        Outcome::Winner(Cell::Player2)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::None
    }
}

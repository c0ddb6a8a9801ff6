use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use owo_colors::OwoColorize;

use super::Cell;
use crate::env::{Configuration, Observation};
use crate::error::{Error, Result};

/// The connect-x board with gravity.
///
/// Row 0 is the top, pieces fall to the lowest empty slot of a column.
/// Boards are treated as immutable snapshots by the search:
/// [`Board::apply_move`] always returns a new board.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub rows: usize,
    pub columns: usize,
    /// Length of a winning line.
    pub inarow: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(config: &Configuration) -> Result<Board> {
        validate(config)?;
        Ok(Board {
            rows: config.rows,
            columns: config.columns,
            inarow: config.inarow,
            cells: vec![Cell::Empty; config.rows * config.columns],
        })
    }

    /// Loads the board from the flat row major observation of the harness.
    pub fn from_observation(obs: &Observation, config: &Configuration) -> Result<Board> {
        validate(config)?;
        if obs.board.len() != config.rows * config.columns {
            return Err(Error::BoardSize {
                rows: config.rows,
                columns: config.columns,
                actual: obs.board.len(),
            });
        }
        let cells = obs
            .board
            .iter()
            .map(|&v| Cell::from_raw(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Board {
            rows: config.rows,
            columns: config.columns,
            inarow: config.inarow,
            cells,
        })
    }

    pub fn config(&self) -> Configuration {
        Configuration::new(self.rows, self.columns, self.inarow)
    }

    /// Returns a copy with `mark` dropped into `column` and the row it landed in.
    ///
    /// If the column is full (or does not exist) the copy is unchanged and the
    /// landing row is `None`.
    pub fn apply_move(&self, column: usize, mark: Cell) -> (Board, Option<usize>) {
        let mut next = self.clone();
        let row = next.drop_piece(column, mark);
        (next, row)
    }

    fn drop_piece(&mut self, column: usize, mark: Cell) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        let row = (0..self.rows)
            .rev()
            .find(|&row| self[(row, column)] == Cell::Empty)?;
        self[(row, column)] = mark;
        Some(row)
    }

    /// Columns that are not full in ascending order.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(move |&c| self[(0, c)] == Cell::Empty)
    }

    /// A full top row means nobody can move anymore.
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|c| self[(0, c)] != Cell::Empty)
    }

    pub fn center_column(&self) -> usize {
        self.columns / 2
    }

    /// Number of `piece`s in `column`.
    pub fn count_in_column(&self, column: usize, piece: Cell) -> usize {
        (0..self.rows)
            .filter(|&row| self[(row, column)] == piece)
            .count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn validate(config: &Configuration) -> Result<()> {
    let Configuration {
        rows,
        columns,
        inarow,
    } = *config;
    if rows == 0 || columns == 0 {
        return Err(Error::InvalidConfiguration(format!(
            "empty board {rows}x{columns}"
        )));
    }
    if inarow == 0 || inarow > rows.max(columns) {
        return Err(Error::InvalidConfiguration(format!(
            "inarow {inarow} does not fit {rows}x{columns}"
        )));
    }
    Ok(())
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && column < self.columns);
        &self.cells[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && column < self.columns);
        &mut self.cells[row * self.columns + column]
    }
}

impl Board {
    /// Parses textual human readable board representation used in tests.
    ///
    /// The top row comes first, `.` is empty, `1`/`x` and `2`/`o` are pieces.
    pub fn parse(txt: &str, inarow: usize) -> Option<Board> {
        let txt = txt.trim();
        let rows = txt.lines().count();

        let cells: Vec<Cell> = txt
            .lines()
            .flat_map(|l| {
                l.split_whitespace().flat_map(|s| {
                    s.chars().next().map(|c| match c {
                        '1' | 'x' => Cell::Player1,
                        '2' | 'o' => Cell::Player2,
                        _ => Cell::Empty,
                    })
                })
            })
            .collect();

        if rows == 0 || cells.len() % rows != 0 {
            return None;
        }
        let columns = cells.len() / rows;

        let mut board = Board::new(&Configuration::new(rows, columns, inarow)).ok()?;
        board.cells = cells;
        Some(board)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..self.rows {
            write!(f, "  ")?;
            for column in 0..self.columns {
                match self[(row, column)] {
                    Cell::Empty => write!(f, ". ")?,
                    Cell::Player1 => write!(f, "{} ", "1".green())?,
                    Cell::Player2 => write!(f, "{} ", "2".yellow())?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  inarow: {}", self.inarow)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    impl Board {
        /// Number of pieces (of any player) in `column`.
        fn column_height(&self, column: usize) -> usize {
            (0..self.rows)
                .filter(|&row| self[(row, column)] != Cell::Empty)
                .count()
        }
    }

    #[test]
    fn board_parse() {
        let board = Board::parse(
            r#"
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . 2 . . .
            . . 1 1 2 . ."#,
            4,
        )
        .unwrap();
        println!("{:?}", board);

        assert_eq!(board.rows, 6);
        assert_eq!(board.columns, 7);
        assert_eq!(board[(5, 2)], Cell::Player1);
        assert_eq!(board[(4, 3)], Cell::Player2);
        assert_eq!(board[(0, 0)], Cell::Empty);
        assert_eq!(board.center_column(), 3);
        assert_eq!(board.column_height(3), 2);
        assert_eq!(board.count_in_column(3, Cell::Player1), 1);
    }

    #[test]
    fn from_observation() {
        let config = Configuration::new(2, 4, 2);
        let obs = Observation {
            board: vec![0, 0, 0, 0, 1, 2, 0, 0],
            mark: 1,
        };
        let board = Board::from_observation(&obs, &config).unwrap();
        assert_eq!(board[(1, 0)], Cell::Player1);
        assert_eq!(board[(1, 1)], Cell::Player2);
        assert_eq!(board.config(), config);

        let obs = Observation {
            board: vec![0, 0, 0],
            mark: 1,
        };
        assert!(matches!(
            Board::from_observation(&obs, &config),
            Err(Error::BoardSize { actual: 3, .. })
        ));

        let obs = Observation {
            board: vec![0, 0, 0, 0, 0, 7, 0, 0],
            mark: 1,
        };
        assert!(matches!(
            Board::from_observation(&obs, &config),
            Err(Error::InvalidCell(7))
        ));

        assert!(Board::new(&Configuration::new(0, 7, 4)).is_err());
        assert!(Board::new(&Configuration::new(6, 7, 8)).is_err());
        assert!(Board::new(&Configuration::new(6, 7, 0)).is_err());
        assert!(Board::new(&Configuration::new(0, 0, 0)).is_err());
    }

    #[test]
    fn config_limits() {
        // a single piece is a line
        let board = Board::new(&Configuration::new(6, 7, 1)).unwrap();
        assert_eq!(board.inarow, 1);
        // a line may only fit along the longer side
        let board = Board::new(&Configuration::new(2, 5, 5)).unwrap();
        assert_eq!(board.legal_moves().count(), 5);
        assert!(Board::new(&Configuration::new(5, 2, 5)).is_ok());
        assert!(Board::new(&Configuration::new(5, 2, 6)).is_err());
    }

    #[test]
    fn apply_move() {
        let board = Board::parse(
            r#"
            . . 1 .
            . . 2 .
            . 1 1 ."#,
            3,
        )
        .unwrap();

        let (next, row) = board.apply_move(1, Cell::Player2);
        assert_eq!(row, Some(1));
        assert_eq!(next[(1, 1)], Cell::Player2);
        assert_eq!(next.column_height(1), board.column_height(1) + 1);
        for c in [0, 2, 3] {
            assert_eq!(next.column_height(c), board.column_height(c));
        }
        // input is untouched
        assert_eq!(board[(1, 1)], Cell::Empty);

        let (next, row) = board.apply_move(0, Cell::Player1);
        assert_eq!(row, Some(2));
        assert_eq!(next[(2, 0)], Cell::Player1);

        // full column
        let (next, row) = board.apply_move(2, Cell::Player1);
        assert_eq!(row, None);
        assert_eq!(next, board);

        // out of range
        let (next, row) = board.apply_move(4, Cell::Player1);
        assert_eq!(row, None);
        assert_eq!(next, board);
    }

    #[test]
    fn legal_moves() {
        let board = Board::parse(
            r#"
            1 . 2 .
            2 . 1 .
            1 1 2 ."#,
            3,
        )
        .unwrap();
        assert_eq!(board.legal_moves().collect::<Vec<_>>(), vec![1, 3]);
        assert!(!board.is_full());

        let board = Board::parse(
            r#"
            1 2 2
            2 1 1"#,
            2,
        )
        .unwrap();
        assert_eq!(board.legal_moves().count(), 0);
        assert!(board.is_full());
    }

    #[test]
    fn fill_column() {
        let mut board = Board::new(&Configuration::default()).unwrap();
        for i in 0..6 {
            let piece = if i % 2 == 0 { Cell::Player1 } else { Cell::Player2 };
            let (next, row) = board.apply_move(3, piece);
            assert_eq!(row, Some(5 - i));
            board = next;
        }
        assert_eq!(board.apply_move(3, Cell::Player1).1, None);
        assert_eq!(board.legal_moves().collect::<Vec<_>>(), vec![0, 1, 2, 4, 5, 6]);
    }
}

use crate::error::{Error, Result};

/// Represents a single slot of the board
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Player1 = 1,
    Player2 = 2,
}

impl Cell {
    /// Parses a raw cell value of the harness.
    pub fn from_raw(v: u8) -> Result<Cell> {
        match v {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Player1),
            2 => Ok(Cell::Player2),
            _ => Err(Error::InvalidCell(v)),
        }
    }

    /// Parses the mark of the acting player, which must not be empty.
    pub fn from_mark(mark: u8) -> Result<Cell> {
        match mark {
            1 => Ok(Cell::Player1),
            2 => Ok(Cell::Player2),
            _ => Err(Error::InvalidMark(mark)),
        }
    }

    /// The piece of the other player (`3 - mark`).
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Player1 => Cell::Player2,
            Cell::Player2 => Cell::Player1,
        }
    }

    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }
}

impl From<Cell> for u8 {
    fn from(c: Cell) -> u8 {
        c as u8
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Cell::Empty => write!(f, "."),
            Cell::Player1 => write!(f, "1"),
            Cell::Player2 => write!(f, "2"),
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn raw_values() {
        use super::*;

        assert_eq!(Cell::from_raw(0).unwrap(), Cell::Empty);
        assert_eq!(Cell::from_raw(1).unwrap(), Cell::Player1);
        assert_eq!(Cell::from_raw(2).unwrap(), Cell::Player2);
        assert!(matches!(Cell::from_raw(3), Err(Error::InvalidCell(3))));

        assert!(matches!(Cell::from_mark(0), Err(Error::InvalidMark(0))));
        assert_eq!(u8::from(Cell::from_mark(2).unwrap()), 2);
    }

    #[test]
    fn opponent() {
        use super::*;

        for mark in 1..=2 {
            let cell = Cell::from_mark(mark).unwrap();
            assert_eq!(u8::from(cell.opponent()), 3 - mark);
            assert_eq!(cell.opponent().opponent(), cell);
        }
        assert_eq!(Cell::Empty.opponent(), Cell::Empty);
    }
}

use crate::{Error, Pos, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Live,
}

impl Cell {
    /// converts a raw board value, `pos` only serves the error report.
    pub fn from_digit(value: u8, pos: Pos) -> Result<Self> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Live),
            value => Err(Error::InvalidCellState { value, pos }),
        }
    }

    pub fn digit(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Live => 1,
        }
    }

    pub fn is_live(self) -> bool {
        self == Cell::Live
    }
}

pub use grid::Grid;
mod grid;

#[test]
fn test_cell_digits() {
    assert_eq!(Cell::from_digit(0, crate::pos!(0, 0)).unwrap(), Cell::Dead);
    assert_eq!(Cell::from_digit(1, crate::pos!(0, 0)).unwrap(), Cell::Live);
    assert_eq!(Cell::Live.digit(), 1);
    assert_eq!(Cell::default(), Cell::Dead);
    assert!(matches!(
        Cell::from_digit(2, crate::pos!(3, 4)),
        Err(Error::InvalidCellState { value: 2, pos }) if pos == crate::pos!(3, 4)
    ));
}

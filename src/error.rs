use thiserror::Error;

use crate::Pos;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("board must have a positive number of rows and columns")]
    InvalidBoard,

    #[error("a {rows}x{cols} board exceeds the {max} cell limit")]
    TooLarge { rows: usize, cols: usize, max: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("state of cell {pos} must be either 0 (dead) or 1 (live), found {value}")]
    InvalidCellState { value: u8, pos: Pos },

    #[error("position {pos} is outside of a {rows}x{cols} board")]
    OutOfBounds { pos: Pos, rows: usize, cols: usize },

    #[error("{0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

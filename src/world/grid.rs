use crate::{pos, Cell, Error, Pos, Result};

pub const MAX_CELLS: usize = 1 << 28;

/// a bounded `rows x cols` board, stored row-major in a single buffer.
///
/// a `Grid` always has at least one row and one column and fits within
/// `MAX_CELLS`, every constructor checks it. There is no way to change a cell
/// once the grid is built: the next generation is always a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// an all dead board.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::checked_len(rows, cols)?;
        let cells = vec![Cell::Dead; len];
        Ok(Self { rows, cols, cells })
    }

    /// number of cells of a `rows x cols` board, if such a board may exist.
    pub fn checked_len(rows: usize, cols: usize) -> Result<usize> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidBoard);
        }
        rows.checked_mul(cols)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(Error::TooLarge {
                rows,
                cols,
                max: MAX_CELLS,
            })
    }

    /// builds a board from raw `0`/`1` rows.
    pub fn from_digits(digits: &[Vec<u8>]) -> Result<Self> {
        let cols = digits.first().map(Vec::len).unwrap_or(0);
        if digits.is_empty() || cols == 0 {
            return Err(Error::InvalidBoard);
        }

        let mut cells = Vec::with_capacity(Self::checked_len(digits.len(), cols)?);
        for (row, line) in digits.iter().enumerate() {
            if line.len() != cols {
                return Err(Error::RaggedRow {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, &value) in line.iter().enumerate() {
                cells.push(Cell::from_digit(value, pos!(row, col))?);
            }
        }

        let rows = digits.len();
        Ok(Self { rows, cols, cells })
    }

    /// an otherwise dead board where every listed position is live.
    pub fn with_live(
        rows: usize,
        cols: usize,
        lives: impl IntoIterator<Item = Pos>,
    ) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for pos in lives {
            let index = grid.index(pos).ok_or(Error::OutOfBounds { pos, rows, cols })?;
            grid.cells[index] = Cell::Live;
        }
        Ok(grid)
    }

    /// assembles a grid from cells already computed in row-major order.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, Pos { row, col }: Pos) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|index| self.cells[index])
    }

    /// every position of the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| pos!(row, col)))
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    #[cfg(test)]
    pub fn to_digits(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| self.row(row).iter().map(|cell| cell.digit()).collect())
            .collect()
    }
}

use super::cell::Cell;
use super::error::LifeError;

pub const MIN_SIDE: usize = 2;

/// A dense, row-major grid of cells with at least two rows and two columns.
///
/// A `Board` can only be built through [`validate_board`] or the checked
/// constructors, so every value in circulation already satisfies the shape
/// and value invariants. Stepping never mutates a board; each generation is
/// a fresh value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// An all-dead board of the given shape.
    pub fn new_dead(rows: usize, cols: usize) -> Result<Self, LifeError> {
        check_shape(rows, cols)?;
        let size = rows.checked_mul(cols).ok_or(LifeError::Shape { rows, cols })?;
        Ok(Self {
            cells: vec![Cell::default(); size],
            rows,
            cols,
        })
    }

    /// Builds a board from row-major cells.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, LifeError> {
        check_shape(rows, cols)?;
        let expected = rows.checked_mul(cols).ok_or(LifeError::Shape { rows, cols })?;
        if cells.len() != expected {
            return Err(LifeError::CellCount {
                rows,
                cols,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { cells, rows, cols })
    }

    /// A board of the same shape holding `cells`.
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Board {
        debug_assert_eq!(cells.len(), self.cells.len());
        Board {
            cells,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid_idx(row, col).map(|i| self.cells[i])
    }

    /// Cell at `(row, col)`. Both coordinates must be in bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[col + row * self.cols]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The board as nested rows of 0/1 values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    fn grid_idx(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(col + row * self.cols)
        } else {
            None
        }
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<(), LifeError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(LifeError::Shape { rows, cols });
    }
    Ok(())
}

/// Checks a raw grid and turns it into a [`Board`].
///
/// Checks run in order: every row must have the same length, both
/// dimensions must be at least 2, and every value must be 0 or 1. The first
/// bad value found scanning row-major is reported with its coordinates.
pub fn validate_board<T>(grid: &[Vec<T>]) -> Result<Board, LifeError>
where
    T: Copy + Into<i64>,
{
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    for (row, line) in grid.iter().enumerate() {
        if line.len() != cols {
            return Err(LifeError::Ragged {
                row,
                expected: cols,
                found: line.len(),
            });
        }
    }
    check_shape(rows, cols)?;

    let mut cells = Vec::with_capacity(rows * cols);
    for (row, line) in grid.iter().enumerate() {
        for (col, &raw) in line.iter().enumerate() {
            let value: i64 = raw.into();
            let cell = match value {
                0 => Cell::DEAD,
                1 => Cell::ALIVE,
                _ => return Err(LifeError::Value { row, col, value }),
            };
            cells.push(cell);
        }
    }
    Ok(Board { cells, rows, cols })
}

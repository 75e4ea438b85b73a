//! 3x3 neighborhoods around every board cell.
//!
//! The board is treated as if padded by one ring of cells. Under
//! [`EdgeMode::Wrap`] a padding cell repeats the board cell found by wrapping
//! the out-of-bounds coordinate; under [`EdgeMode::Zeros`] every padding cell
//! is dead. No padded copy is ever allocated: windows are read on demand.

use crate::traits_and_structs::{Board, Cell, EdgeMode, LifeError};

pub const SIDE: usize = 3;

/// A 3x3 window of cells. Element `[1][1]` is the center cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [[Cell; SIDE]; SIDE],
}

impl Neighborhood {
    pub fn new(cells: [[Cell; SIDE]; SIDE]) -> Self {
        Self { cells }
    }

    /// Builds a window from raw rows of 0/1 values.
    pub fn from_rows<T>(rows: &[Vec<T>]) -> Result<Self, LifeError>
    where
        T: Copy + Into<i64>,
    {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.len() != SIDE || rows.iter().any(|r| r.len() != SIDE) {
            return Err(LifeError::NeighborhoodShape {
                rows: rows.len(),
                cols,
            });
        }
        let mut cells = [[Cell::DEAD; SIDE]; SIDE];
        for (r, line) in rows.iter().enumerate() {
            for (c, &raw) in line.iter().enumerate() {
                let value: i64 = raw.into();
                cells[r][c] = match value {
                    0 => Cell::DEAD,
                    1 => Cell::ALIVE,
                    value => return Err(LifeError::Value { row: r, col: c, value }),
                };
            }
        }
        Ok(Self { cells })
    }

    pub fn center(&self) -> Cell {
        self.cells[1][1]
    }

    /// Sum of all nine cells, center included.
    pub fn total(&self) -> u8 {
        self.cells.iter().flatten().map(|c| c.value()).sum()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn to_rows(&self) -> [[u8; SIDE]; SIDE] {
        self.cells.map(|row| row.map(Cell::value))
    }
}

/// On-demand view of every neighborhood of a board.
#[derive(Clone, Copy, Debug)]
pub struct Neighborhoods<'a> {
    board: &'a Board,
    edge_mode: EdgeMode,
}

/// Neighborhoods of `board` under `edge_mode`.
pub fn extract(board: &Board, edge_mode: EdgeMode) -> Neighborhoods<'_> {
    Neighborhoods { board, edge_mode }
}

impl<'a> Neighborhoods<'a> {
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Window centered on `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Neighborhood> {
        if row < self.board.rows() && col < self.board.cols() {
            Some(self.window(row, col))
        } else {
            None
        }
    }

    /// Every window in row-major order, tagged with its center coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Neighborhood)> + 'a {
        let this = *self;
        let cols = self.board.cols();
        (0..self.board.rows())
            .flat_map(move |row| (0..cols).map(move |col| (row, col)))
            .map(move |(row, col)| ((row, col), this.window(row, col)))
    }

    fn window(&self, row: usize, col: usize) -> Neighborhood {
        let mut cells = [[Cell::DEAD; SIDE]; SIDE];
        for (dr, line) in cells.iter_mut().enumerate() {
            for (dc, cell) in line.iter_mut().enumerate() {
                // (row + dr, col + dc) in padded coordinates is (row + dr - 1, col + dc - 1) on the board.
                *cell = self.padded(row + dr, col + dc);
            }
        }
        Neighborhood { cells }
    }

    fn padded(&self, prow: usize, pcol: usize) -> Cell {
        let (rows, cols) = self.board.shape();
        match self.edge_mode {
            EdgeMode::Wrap => {
                let row = (prow + rows - 1) % rows;
                let col = (pcol + cols - 1) % cols;
                self.board.at(row, col)
            }
            EdgeMode::Zeros => {
                if prow == 0 || pcol == 0 || prow > rows || pcol > cols {
                    Cell::DEAD
                } else {
                    self.board.at(prow - 1, pcol - 1)
                }
            }
        }
    }
}

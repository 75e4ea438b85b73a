/// A single board cell. Dead cells count as 0 and live cells as 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn is_alive(self) -> bool {
        self.alive
    }

    /// Numeric state used by the neighborhood sum.
    pub fn value(self) -> u8 {
        self.alive as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

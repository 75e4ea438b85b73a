//! The board-evolution engine: neighborhoods, the update rule, single steps
//! and lazy multi-generation evolution.

pub mod evolver;
pub mod neighborhood;
pub mod rule;
pub mod stepper;

pub use evolver::{evolve, Evolution};
pub use neighborhood::{extract, Neighborhood, Neighborhoods};
pub use rule::update;
pub use stepper::step;

use crate::traits_and_structs::{Board, CellAutomata, EdgeMode};

const LIVE_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const DEAD_COLOR: [u8; 4] = [0, 0, 0, 0xff];

impl CellAutomata for Board {
    fn next_generation(&self, edge_mode: EdgeMode) -> Self {
        step(self, edge_mode)
    }

    fn population(&self) -> usize {
        Board::population(self)
    }

    fn draw(&self, screen: &mut [u8]) {
        debug_assert_eq!(screen.len(), 4 * self.cells().len());
        for (c, pix) in self.cells().iter().zip(screen.chunks_exact_mut(4)) {
            let color = if c.is_alive() { LIVE_COLOR } else { DEAD_COLOR };
            pix.copy_from_slice(&color);
        }
    }

    fn describe() -> String {
        "Conway's Game of Life (B3/S23) on a finite board".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::validate_board;

    #[test]
    fn draw_writes_one_pixel_per_cell() {
        let board = validate_board(&[vec![1, 0], vec![0, 0]]).unwrap();
        let mut screen = vec![0x11u8; 16];
        board.draw(&mut screen);
        assert_eq!(&screen[0..4], &LIVE_COLOR);
        assert!(screen[4..].chunks_exact(4).all(|p| p == DEAD_COLOR));
    }

    #[test]
    fn trait_step_matches_stepper() {
        let board = validate_board(&[vec![1, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]).unwrap();
        assert_eq!(board.next_generation(EdgeMode::Zeros), step(&board, EdgeMode::Zeros));
        assert_eq!(CellAutomata::population(&board), 3);
    }
}

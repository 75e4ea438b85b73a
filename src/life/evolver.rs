use std::iter::FusedIterator;

use log::trace;

use crate::traits_and_structs::{CellAutomata, EdgeMode};

/// Lazy sequence of generations produced by [`evolve`].
///
/// Each call to `next` computes exactly one generation from the previous
/// one. The starting value is never yielded and never mutated. Dropping the
/// iterator early skips the remaining work.
#[derive(Clone, Debug)]
pub struct Evolution<A> {
    current: A,
    edge_mode: EdgeMode,
    remaining: usize,
    generation: usize,
}

/// The next `steps` generations of `start` under `edge_mode`.
pub fn evolve<A: CellAutomata>(start: A, steps: usize, edge_mode: EdgeMode) -> Evolution<A> {
    Evolution {
        current: start,
        edge_mode,
        remaining: steps,
        generation: 0,
    }
}

impl<A> Evolution<A> {
    /// Number of generations yielded so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// The most recently yielded generation, or the start before the first call.
    pub fn current(&self) -> &A {
        &self.current
    }
}

impl<A: CellAutomata> Iterator for Evolution<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if self.remaining == 0 {
            return None;
        }
        let next = self.current.next_generation(self.edge_mode);
        self.remaining -= 1;
        self.generation += 1;
        trace!(
            "generation {} computed, population {}",
            self.generation,
            next.population()
        );
        self.current = next.clone();
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<A: CellAutomata> ExactSizeIterator for Evolution<A> {}

impl<A: CellAutomata> FusedIterator for Evolution<A> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::{validate_board, Board};

    fn blinker() -> Board {
        validate_board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn zero_generations_is_empty() {
        let mut generations = evolve(blinker(), 0, EdgeMode::Wrap);
        assert_eq!(generations.len(), 0);
        assert!(generations.next().is_none());
    }

    #[test]
    fn yields_exactly_steps_new_boards() {
        let start = blinker();
        let boards: Vec<Board> = evolve(start.clone(), 4, EdgeMode::Wrap).collect();
        assert_eq!(boards.len(), 4);
        assert_ne!(boards[0], start);
        assert_eq!(boards[1], start);
        assert_eq!(boards[0], boards[2]);
        assert_eq!(boards[1], boards[3]);
    }

    #[test]
    fn stops_and_stays_stopped() {
        let mut generations = evolve(blinker(), 1, EdgeMode::Wrap);
        assert!(generations.next().is_some());
        assert!(generations.next().is_none());
        assert!(generations.next().is_none());
        assert_eq!(generations.generation(), 1);
    }

    #[test]
    fn computes_on_demand() {
        let mut generations = evolve(blinker(), 1_000_000, EdgeMode::Zeros);
        let first = generations.next().unwrap();
        assert_eq!(generations.generation(), 1);
        assert_eq!(generations.len(), 999_999);
        assert_eq!(generations.current(), &first);
    }
}

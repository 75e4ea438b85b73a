use super::neighborhood::extract;
use super::rule::update;
use crate::traits_and_structs::{Board, EdgeMode};

/// Advances `board` by one generation.
///
/// Every window is read from `board` and results go to a separate buffer, so
/// no cell ever sees another cell's updated state.
pub fn step(board: &Board, edge_mode: EdgeMode) -> Board {
    let cells = extract(board, edge_mode)
        .iter()
        .map(|(_, hood)| update(&hood))
        .collect();
    board.with_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::validate_board;

    fn board(grid: &[Vec<u8>]) -> Board {
        validate_board(grid).unwrap()
    }

    #[test]
    fn blinker_turns_vertical() {
        let start = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let expected = board(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        assert_eq!(step(&start, EdgeMode::Wrap), expected);
        assert_eq!(step(&expected, EdgeMode::Wrap), start);
    }

    #[test]
    fn oscillator_across_the_edge() {
        let start = board(&[
            vec![1, 1, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ]);
        let wrapped = board(&[
            vec![1, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0],
        ]);
        assert_eq!(step(&start, EdgeMode::Wrap), wrapped);

        let zeros = step(&start, EdgeMode::Zeros);
        assert_eq!(zeros.population(), 0);
        assert_eq!(zeros.shape(), (5, 5));
    }

    #[test]
    fn input_is_not_mutated() {
        let start = board(&[vec![1, 1, 1], vec![0, 0, 0], vec![0, 0, 0]]);
        let copy = start.clone();
        let _ = step(&start, EdgeMode::Zeros);
        assert_eq!(start, copy);
    }

    #[test]
    fn update_is_simultaneous() {
        // Updating in place in row-major order would let (1, 0) count the
        // newly born (0, 1) and survive.
        let start = board(&[
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let next = step(&start, EdgeMode::Zeros);
        assert_eq!(
            next.to_rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![0, 1, 0, 0],
                vec![0, 1, 0, 0],
                vec![0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn deterministic() {
        let start = board(&[vec![1, 0, 1], vec![0, 1, 1], vec![1, 0, 0]]);
        for mode in [EdgeMode::Wrap, EdgeMode::Zeros] {
            assert_eq!(step(&start, mode), step(&start, mode));
        }
    }
}

use crate::traits_and_structs::Board;

/// Glyph for a dead cell (code 32).
pub const BLANK: char = ' ';
/// Glyph for a live cell, a full block (code 9608).
pub const FILLED: char = '\u{2588}';

/// Maps every cell to its terminal glyph, row by row.
pub fn to_display_grid(board: &Board) -> Vec<Vec<char>> {
    board
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|c| if c.is_alive() { FILLED } else { BLANK })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::validate_board;

    #[test]
    fn glyph_codes() {
        assert_eq!(BLANK as u32, 32);
        assert_eq!(FILLED as u32, 9608);
    }

    #[test]
    fn single_live_cell() {
        let board = validate_board(&[vec![1, 0, 0], vec![0, 0, 0]]).unwrap();
        let grid = to_display_grid(&board);
        assert_eq!(grid, vec![vec![FILLED, BLANK, BLANK], vec![BLANK, BLANK, BLANK]]);
    }

    #[test]
    fn edge_row() {
        let board = validate_board(&[
            vec![1, 1, 0, 0, 1],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap();
        let codes: Vec<Vec<u32>> = to_display_grid(&board)
            .into_iter()
            .map(|row| row.into_iter().map(|c| c as u32).collect())
            .collect();
        assert_eq!(codes[0], vec![9608, 9608, 32, 32, 9608]);
        assert!(codes[1..].iter().all(|row| row == &vec![32; 5]));
    }
}

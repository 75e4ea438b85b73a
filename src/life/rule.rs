use super::neighborhood::Neighborhood;
use crate::traits_and_structs::Cell;

/// Next state of the center of `neighborhood`.
///
/// The sum runs over all nine cells, center included:
/// - 3 => alive (birth with 3 neighbors, or survival with 2)
/// - 4 => unchanged (survival with 3 neighbors, or a dead cell with 4)
/// - anything else => dead
pub fn update(neighborhood: &Neighborhood) -> Cell {
    match neighborhood.total() {
        3 => Cell::ALIVE,
        4 => neighborhood.center(),
        _ => Cell::DEAD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life::neighborhood::SIDE;

    fn field(alive: &[(usize, usize)]) -> Neighborhood {
        let mut cells = [[Cell::DEAD; SIDE]; SIDE];
        for &(r, c) in alive {
            cells[r][c] = Cell::ALIVE;
        }
        Neighborhood::new(cells)
    }

    #[test]
    fn sum_of_three_lives() {
        assert_eq!(update(&field(&[(1, 1), (2, 2), (0, 0)])), Cell::ALIVE);
        assert_eq!(update(&field(&[(0, 1), (0, 2), (0, 0)])), Cell::ALIVE);
    }

    #[test]
    fn sum_of_four_keeps_center() {
        let alive_center = field(&[(1, 1), (2, 2), (0, 0), (1, 0)]);
        assert_eq!(update(&alive_center), Cell::ALIVE);

        let dead_center = field(&[(2, 2), (0, 0), (1, 0), (0, 1)]);
        assert_eq!(update(&dead_center), Cell::DEAD);
    }

    #[test]
    fn every_other_sum_dies() {
        let all: Vec<_> = (0..SIDE).flat_map(|r| (0..SIDE).map(move |c| (r, c))).collect();
        assert_eq!(update(&field(&all)), Cell::DEAD);
        assert_eq!(update(&field(&[])), Cell::DEAD);
        // lone live cell
        assert_eq!(update(&field(&[(1, 1)])), Cell::DEAD);
        // live center with four neighbors
        assert_eq!(update(&field(&[(1, 1), (0, 0), (0, 1), (0, 2), (2, 2)])), Cell::DEAD);
    }

    #[test]
    fn matches_classic_neighbor_count() {
        for bits in 0u16..512 {
            let mut cells = [[Cell::DEAD; SIDE]; SIDE];
            for (i, cell) in cells.iter_mut().flatten().enumerate() {
                *cell = Cell::new((bits >> i) & 1 == 1);
            }
            let hood = Neighborhood::new(cells);
            let alive = hood.center().is_alive();
            let neighbors = hood.total() - hood.center().value();
            let expected = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
            assert_eq!(update(&hood).is_alive(), expected, "pattern {:03x}", bits);
        }
    }
}

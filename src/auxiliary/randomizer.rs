use byteorder::{ByteOrder, NativeEndian};
use thiserror::Error;

use crate::traits_and_structs::{Board, Cell, LifeError};

pub const INITIAL_FILL: f32 = 0.5;

#[derive(Debug, Error)]
pub enum RandomError {
    #[error("failed to getrandom: {0}")]
    Entropy(#[from] getrandom::Error),

    #[error("density must be between 0 and 1, got {0}")]
    Density(f32),

    #[error(transparent)]
    Life(#[from] LifeError),
}

/// Generate a pseudorandom seed for the board PRNG.
pub fn generate_seed() -> Result<(u64, u64), RandomError> {
    let mut seed = [0_u8; 16];

    getrandom::getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// Expands a single user-facing seed into the PRNG state.
pub fn seed_from_u64(seed: u64) -> (u64, u64) {
    (seed, seed ^ 0x9E37_79B9_7F4A_7C15)
}

/// A board where each cell is alive with probability `density`.
pub fn random_board(
    rows: usize,
    cols: usize,
    density: f32,
    seed: (u64, u64),
) -> Result<Board, RandomError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(RandomError::Density(density));
    }
    let empty = Board::new_dead(rows, cols)?;
    let mut rng: randomize::PCG32 = seed.into();
    let cells = (0..empty.cells().len())
        .map(|_| Cell::new(randomize::f32_half_open_right(rng.next_u32()) < density))
        .collect();
    Ok(empty.with_cells(cells))
}

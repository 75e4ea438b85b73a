//! Conway's Game of Life on a finite board, with toroidal (`wrap`) or
//! dead-border (`zeros`) edges.
//!
//! ```
//! use conway_board::{evolve, validate_board, EdgeMode};
//!
//! let board = validate_board(&[
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 1, 1, 1, 0],
//!     vec![0, 0, 0, 0, 0],
//!     vec![0, 0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let mut generations = evolve(board.clone(), 2, EdgeMode::Wrap);
//! let vertical = generations.next().unwrap();
//! assert_eq!(vertical.to_rows()[1], vec![0, 0, 1, 0, 0]);
//! assert_eq!(generations.next().unwrap(), board);
//! assert!(generations.next().is_none());
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod auxiliary;
pub mod life;
pub mod traits_and_structs;

pub use auxiliary::to_display_grid;
pub use life::{evolve, extract, step, update, Evolution, Neighborhood, Neighborhoods};
pub use traits_and_structs::{
    validate_board, Board, Cell, CellAutomata, EdgeMode, ErrorKind, LifeError,
};

pub mod automata_trait;
pub mod board;
pub mod cell;
pub mod edge_mode;
pub mod error;

pub use automata_trait::CellAutomata;
pub use board::{validate_board, Board};
pub use cell::Cell;
pub use edge_mode::EdgeMode;
pub use error::{ErrorKind, LifeError};

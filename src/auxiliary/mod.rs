pub mod config;
pub mod display;
pub mod randomizer;
pub mod terminal;
#[cfg(feature = "window")]
pub mod window;

pub use config::{Config, ConfigError};
pub use display::{to_display_grid, BLANK, FILLED};
pub use randomizer::{generate_seed, random_board, seed_from_u64, RandomError};
pub use terminal::{print_board, run_terminal};

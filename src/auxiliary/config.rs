//! JSON run configuration.
//!
//! ```json
//! {
//!     "board": [[0, 0, 0], [1, 1, 1], [0, 0, 0]],
//!     "edge_mode": "wrap",
//!     "time_delay": 0.5,
//!     "generations": 10
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::traits_and_structs::{EdgeMode, LifeError};

pub const DEFAULT_TIME_DELAY: f64 = 0.5;
pub const DEFAULT_GENERATIONS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board contains a {value} in index [{row}, {col}]")]
    Cell { row: usize, col: usize, value: Value },

    #[error("time_delay must be a finite, non-negative number of seconds, got {0}")]
    TimeDelay(f64),

    #[error("no board given: set \"board\" in the configuration or request a random board")]
    MissingBoard,

    #[error(transparent)]
    Life(#[from] LifeError),
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    board: Option<Value>,
    #[serde(default)]
    edge_mode: Option<String>,
    #[serde(default)]
    time_delay: Option<f64>,
    #[serde(default)]
    generations: Option<usize>,
}

/// A parsed configuration. The board is still raw: it has not been validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub board: Option<Vec<Vec<i64>>>,
    pub edge_mode: EdgeMode,
    pub time_delay: Duration,
    pub generations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: None,
            edge_mode: EdgeMode::default(),
            time_delay: Duration::from_secs_f64(DEFAULT_TIME_DELAY),
            generations: DEFAULT_GENERATIONS,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// The board, or [`ConfigError::MissingBoard`] when none was given.
    pub fn require_board(&self) -> Result<&[Vec<i64>], ConfigError> {
        self.board.as_deref().ok_or(ConfigError::MissingBoard)
    }

    pub fn set_time_delay_secs(&mut self, secs: f64) -> Result<(), ConfigError> {
        self.time_delay = delay_from_secs(secs)?;
        Ok(())
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let board = raw.board.as_ref().map(grid_from_json).transpose()?;
        let edge_mode = match raw.edge_mode {
            Some(mode) => mode.parse()?,
            None => defaults.edge_mode,
        };
        let time_delay = match raw.time_delay {
            Some(secs) => delay_from_secs(secs)?,
            None => defaults.time_delay,
        };
        Ok(Self {
            board,
            edge_mode,
            time_delay,
            generations: raw.generations.unwrap_or(defaults.generations),
        })
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawConfig = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }
}

fn delay_from_secs(secs: f64) -> Result<Duration, ConfigError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigError::TimeDelay(secs));
    }
    Ok(Duration::from_secs_f64(secs))
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.first().map_or(0, depth),
        _ => 0,
    }
}

/// Converts a JSON value into integer rows. Anything that is not an array of
/// arrays of numbers is rejected; whole-valued floats such as `1.0` are accepted.
fn grid_from_json(value: &Value) -> Result<Vec<Vec<i64>>, ConfigError> {
    let not_2d = |found| ConfigError::Life(LifeError::Dimensionality { found });
    let rows = value.as_array().ok_or_else(|| not_2d(depth(value)))?;
    let found = depth(value);
    if found != 2 && !rows.is_empty() {
        return Err(not_2d(found));
    }

    let mut grid = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_array().ok_or_else(|| not_2d(1))?;
        let mut cells = Vec::with_capacity(line.len());
        for (col, cell) in line.iter().enumerate() {
            let bad = || ConfigError::Cell {
                row,
                col,
                value: cell.clone(),
            };
            let number = match cell {
                Value::Number(n) => n,
                Value::Array(_) => return Err(not_2d(3)),
                _ => return Err(bad()),
            };
            let value = match number.as_i64() {
                Some(v) => v,
                None => match number.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
                    _ => return Err(bad()),
                },
            };
            cells.push(value);
        }
        grid.push(cells);
    }
    Ok(grid)
}

//! Terminal front end: loads a JSON configuration, validates the board and
//! renders every generation with a pause between frames.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use conway_board::auxiliary::randomizer::INITIAL_FILL;
use conway_board::auxiliary::{
    generate_seed, random_board, run_terminal, seed_from_u64, Config,
};
use conway_board::{evolve, validate_board, Board, CellAutomata, EdgeMode};

/// Conway's Game of Life on a finite board.
#[derive(Parser)]
#[command(name = "conway_board", version)]
struct Args {
    /// JSON configuration file containing the board, edge mode, number of
    /// generations and time delay between generations.
    #[arg(long, default_value = "./conf.json")]
    conf_file: PathBuf,

    /// Number of generations to compute (overrides the configuration).
    #[arg(long)]
    generations: Option<usize>,

    /// Edge behavior, `wrap` or `zeros` (overrides the configuration).
    #[arg(long)]
    edge_mode: Option<EdgeMode>,

    /// Seconds to wait between generations (overrides the configuration).
    #[arg(long)]
    time_delay: Option<f64>,

    /// Start from a random board of the given size instead of the configured one.
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dimensions)]
    random: Option<(usize, usize)>,

    /// Fraction of live cells in a random board.
    #[arg(long, default_value_t = INITIAL_FILL)]
    density: f32,

    /// Seed for the random board. Drawn from the OS when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Render in a window instead of the terminal.
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected ROWSxCOLS, got {:?}", s))?;
    let rows = rows.trim().parse::<usize>().map_err(|e| format!("rows: {}", e))?;
    let cols = cols.trim().parse::<usize>().map_err(|e| format!("cols: {}", e))?;
    Ok((rows, cols))
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = if args.random.is_some() && !args.conf_file.exists() {
        debug!(
            "{} not found, using defaults for the random board",
            args.conf_file.display()
        );
        Config::default()
    } else {
        Config::load(&args.conf_file)
            .with_context(|| format!("loading {}", args.conf_file.display()))?
    };

    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if let Some(edge_mode) = args.edge_mode {
        config.edge_mode = edge_mode;
    }
    if let Some(secs) = args.time_delay {
        config.set_time_delay_secs(secs)?;
    }
    Ok(config)
}

fn initial_board(args: &Args, config: &Config) -> Result<Board> {
    match args.random {
        Some((rows, cols)) => {
            let seed = match args.seed {
                Some(seed) => seed_from_u64(seed),
                None => generate_seed()?,
            };
            debug!("random board seed {:?}", seed);
            Ok(random_board(rows, cols, args.density, seed)?)
        }
        None => {
            let grid = config.require_board()?;
            validate_board(grid).context("invalid board")
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let board = initial_board(&args, &config)?;
    info!(
        "{}: {}x{} board, {} generations, edge mode {}, delay {:?}",
        Board::describe(),
        board.rows(),
        board.cols(),
        config.generations,
        config.edge_mode,
        config.time_delay
    );

    let generations = evolve(board.clone(), config.generations, config.edge_mode);

    #[cfg(feature = "window")]
    if args.window {
        return conway_board::auxiliary::window::run_window(board, generations, config.time_delay)
            .context("window renderer failed");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let frames = run_terminal(&mut out, &board, generations, config.time_delay)?;
    info!("rendered {} frames", frames);
    Ok(())
}

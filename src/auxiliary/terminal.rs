use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use super::display::to_display_grid;
use crate::traits_and_structs::Board;

/// Clears the screen and moves the cursor home.
const CLEAR: &str = "\x1B[2J\x1B[1;1H";

pub fn print_board<W: Write>(out: &mut W, board: &Board, generation: usize) -> io::Result<()> {
    write!(out, "{}", CLEAR)?;
    writeln!(out, "Generation: {}", generation)?;
    for line in to_display_grid(board) {
        let line: String = line.into_iter().collect();
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Prints `initial` as generation 0, then every board pulled from
/// `generations`, sleeping `delay` after each frame. Returns the number of
/// frames printed.
pub fn run_terminal<W, I>(
    out: &mut W,
    initial: &Board,
    generations: I,
    delay: Duration,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Board>,
{
    print_board(out, initial, 0)?;
    thread::sleep(delay);
    let mut frames = 1;
    for (generation, board) in generations.into_iter().enumerate() {
        print_board(out, &board, generation + 1)?;
        debug!("rendered generation {}", generation + 1);
        thread::sleep(delay);
        frames += 1;
    }
    Ok(frames)
}

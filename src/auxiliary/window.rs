use std::time::{Duration, Instant};

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};
use winit_input_helper::WinitInputHelper;

use crate::life::Evolution;
use crate::traits_and_structs::{Board, CellAutomata};

/// On-screen size of one cell, in logical pixels.
pub const CELL_SIZE: f64 = 16.0;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("failed to create window: {0}")]
    Os(#[from] OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

pub fn create_window(
    title: &str,
    board: &Board,
    event_loop: &EventLoop<()>,
) -> Result<Window, WindowError> {
    let size = LogicalSize::new(
        board.cols() as f64 * CELL_SIZE,
        board.rows() as f64 * CELL_SIZE,
    );
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(size)
        .with_min_inner_size(LogicalSize::new(board.cols() as f64, board.rows() as f64))
        .build(event_loop)?;
    Ok(window)
}

fn title(generation: usize) -> String {
    format!("Game of Life - generation {}", generation)
}

/// Shows `initial` and then pulls one generation from `generations` every
/// `delay` until the sequence runs out. Never returns on success.
///
/// Esc quits, P pauses, Space advances a single generation.
pub fn run_window(
    initial: Board,
    mut generations: Evolution<Board>,
    delay: Duration,
) -> Result<(), WindowError> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let window = create_window(&title(0), &initial, &event_loop)?;
    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(
        initial.cols() as u32,
        initial.rows() as u32,
        surface_texture,
    )?;
    info!("{}", Board::describe());

    let mut board = initial;
    let mut paused = false;
    let mut finished = false;
    let mut last_update = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            board.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                debug!("paused: {}", paused);
            }
            let frame_step = input.key_pressed(VirtualKeyCode::Space);
            if frame_step {
                // Space is frame-step, so ensure we're paused
                paused = true;
            }
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            let due = !paused && last_update.elapsed() >= delay;
            if !finished && (due || frame_step) {
                match generations.next() {
                    Some(next) => {
                        board = next;
                        window.set_title(&title(generations.generation()));
                    }
                    None => {
                        info!("evolution finished after {} generations", generations.generation());
                        finished = true;
                    }
                }
                last_update = Instant::now();
            }
            window.request_redraw();
        }
    });
}

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod state;

pub use pixels::Error as ViewerError;

use error_iter::ErrorIter as _;
use fractals::models::task::RenderTask;
use log::error;
use pixels::{Error, Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::state::ViewerState;

/// Opens a window on the task's fractal and runs the interactive loop
/// until the user closes it.
///
/// Left/Right cycle through the fractal kinds, Up/Down change detail,
/// P cycles the palette and S saves a snapshot.
pub fn run_viewer(task: RenderTask) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let mut state = ViewerState::new(&task);
    if let Err(err) = state.rerender() {
        log_error("render", err);
    }

    let window = {
        let size = LogicalSize::new(task.resolution.nx as f64, task.resolution.ny as f64);
        WindowBuilder::new()
            .with_title(state.title())
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(task.resolution.nx as u32, task.resolution.ny as u32, surface_texture)?
    };

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            state.draw(pixels.frame_mut());
            if let Err(err) = pixels.render() {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            if input.key_pressed(VirtualKeyCode::Right) {
                if let Err(err) = state.next_kind() {
                    log_error("render", err);
                }
                window.set_title(&state.title());
            }
            if input.key_pressed(VirtualKeyCode::Left) {
                if let Err(err) = state.previous_kind() {
                    log_error("render", err);
                }
                window.set_title(&state.title());
            }
            if input.key_pressed(VirtualKeyCode::Up) {
                if let Err(err) = state.more_detail() {
                    log_error("render", err);
                }
            }
            if input.key_pressed(VirtualKeyCode::Down) {
                if let Err(err) = state.less_detail() {
                    log_error("render", err);
                }
            }
            if input.key_pressed(VirtualKeyCode::P) {
                state.cycle_palette();
            }
            if input.key_pressed(VirtualKeyCode::S) {
                if let Err(err) = state.save_snapshot() {
                    log_error("save_snapshot", err);
                }
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            window.request_redraw();
        }
    });
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

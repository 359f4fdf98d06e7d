use clap::Parser;
use fractals::models::task::RenderTask;

use super::render::resolution_from;
use super::{descriptor_for, FractalKind};

/// 🔭 View Command
///
/// Opens an interactive window. Left/Right cycle the fractal kinds,
/// Up/Down change detail, P cycles the palette and S saves a snapshot.
#[derive(Parser, Debug)]
pub struct ViewCommand {
    /// Fractal to open on. Defaults to the Mandelbrot set.
    #[arg(short, long, value_enum)]
    pub fractal: Option<FractalKind>,

    /// Recursion order, for the kinds that have one.
    #[arg(short, long)]
    pub order: Option<u32>,

    /// Iteration budget for the escape-time kinds.
    #[arg(short, long)]
    pub max_iterations: Option<u32>,

    /// 📏 Window width in pixels.
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u16>,

    /// 📐 Window height in pixels.
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u16>,
}

impl ViewCommand {
    pub fn run(self) -> Result<(), viewer::ViewerError> {
        let kind = self.fractal.unwrap_or(FractalKind::Mandelbrot);
        let descriptor = descriptor_for(kind, self.order, None, None);
        let resolution = resolution_from(self.width.or(Some(600)), self.height.or(Some(600)));

        let mut task = RenderTask::with_defaults(descriptor, resolution);
        if let Some(max_iterations) = self.max_iterations {
            task.max_iteration = max_iterations;
        }

        viewer::run_viewer(task)
    }
}

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use complex_rs::complex::Complex;
use fractals::env;
use fractals::graphics::color::{ColorPalette, PaletteHandler};
use fractals::models::fractal::julia::Julia;
use fractals::models::resolution::Resolution;
use fractals::models::task::RenderTask;
use renderer::png;
use renderer::result::RenderResult;

use super::{descriptor_for, FractalKind};

/// 🖼️ Render Command
///
/// Generates one fractal and saves it as a PNG image.
#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Which fractal to render.
    #[arg(short, long, value_enum)]
    pub fractal: FractalKind,

    /// Recursion order, for the kinds that have one.
    #[arg(short, long)]
    pub order: Option<u32>,

    /// Iteration budget for the escape-time kinds.
    #[arg(short, long)]
    pub max_iterations: Option<u32>,

    /// Real part of the Julia constant c.
    #[arg(long)]
    pub julia_re: Option<f64>,

    /// Imaginary part of the Julia constant c.
    #[arg(long)]
    pub julia_im: Option<f64>,

    /// Number of sampled points for the Barnsley fern.
    #[arg(long)]
    pub points: Option<u32>,

    /// 📏 Image width in pixels.
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u16>,

    /// 📐 Image height in pixels.
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u16>,

    /// Color palette: classic, inverted or grayscale.
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Where to write the image. Defaults to the output directory.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn run(self) -> RenderResult<()> {
        let julia_c = match (self.julia_re, self.julia_im) {
            (None, None) => None,
            (re, im) => {
                let default = Julia::default().c;
                Some(Complex::new(
                    re.unwrap_or(default.re),
                    im.unwrap_or(default.im),
                ))
            }
        };

        let descriptor = descriptor_for(self.fractal, self.order, julia_c, self.points);
        let resolution = resolution_from(self.width, self.height);
        let mut task = RenderTask::with_defaults(descriptor, resolution);
        if let Some(max_iterations) = self.max_iterations {
            task.max_iteration = max_iterations;
        }

        let palette = match self.palette {
            Some(raw) => PaletteHandler::new(raw.parse::<ColorPalette>()?),
            None => PaletteHandler::default(),
        };

        let rendering = renderer::render(&task)?;
        let path = self
            .output
            .unwrap_or_else(|| env::output_dir().join(format!("{}.png", descriptor.slug())));
        png::save_png(&rendering, &palette, &path)?;

        println!(
            "{} {} -> {}",
            "Saved".green().bold(),
            descriptor.name(),
            path.display()
        );
        Ok(())
    }
}

pub fn resolution_from(width: Option<u16>, height: Option<u16>) -> Resolution {
    let default = env::default_resolution();
    Resolution::new(
        width.unwrap_or(default.nx),
        height.unwrap_or(default.ny),
    )
}

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use fractals::env;
use fractals::graphics::color::{ColorPalette, PaletteHandler};
use fractals::models::fractal::fractal_descriptor::FractalDescriptor;
use fractals::models::task::RenderTask;
use log::info;
use renderer::png;
use renderer::result::RenderResult;

use super::render::resolution_from;
use super::{descriptor_for, FractalKind};

/// 🗃️ Gallery Command
///
/// Renders every fractal kind over a sweep of orders and saves the
/// collection under one directory, one subdirectory per kind.
#[derive(Parser, Debug)]
pub struct GalleryCommand {
    /// 📏 Image width in pixels.
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u16>,

    /// 📐 Image height in pixels.
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u16>,

    /// Color palette: classic, inverted or grayscale.
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Root directory for the gallery. Defaults to the output directory.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Order sweeps kept small enough that the whole gallery renders in
/// seconds; higher orders stop adding visible detail at screen sizes.
const SWEEPS: &[(FractalKind, u32, u32)] = &[
    (FractalKind::Koch, 1, 6),
    (FractalKind::SierpinskiTriangle, 1, 8),
    (FractalKind::SierpinskiCarpet, 1, 6),
    (FractalKind::Dragon, 1, 10),
    (FractalKind::Cantor, 1, 10),
    (FractalKind::Hilbert, 1, 7),
    (FractalKind::Peano, 1, 5),
    (FractalKind::Levy, 1, 10),
    (FractalKind::PythagorasTree, 1, 10),
];

/// Kinds without an order render once with their defaults.
const SINGLES: &[FractalKind] = &[
    FractalKind::Mandelbrot,
    FractalKind::Julia,
    FractalKind::Newton,
    FractalKind::Fern,
];

impl GalleryCommand {
    pub fn run(self) -> RenderResult<()> {
        let resolution = resolution_from(self.width, self.height);
        let palette = match self.palette {
            Some(raw) => PaletteHandler::new(raw.parse::<ColorPalette>()?),
            None => PaletteHandler::default(),
        };
        let root = self.output.unwrap_or_else(env::output_dir);

        let mut saved = 0usize;
        for &(kind, from, to) in SWEEPS {
            for order in from..=to {
                let descriptor = descriptor_for(kind, Some(order), None, None);
                let path = root
                    .join(descriptor.slug())
                    .join(format!("{}_order_{order}.png", descriptor.slug()));
                save_one(descriptor, resolution, &palette, &path)?;
                saved += 1;
            }
        }

        for &kind in SINGLES {
            let descriptor = descriptor_for(kind, None, None, None);
            let path = root
                .join(descriptor.slug())
                .join(format!("{}.png", descriptor.slug()));
            save_one(descriptor, resolution, &palette, &path)?;
            saved += 1;
        }

        println!(
            "{} {saved} images under {}",
            "Saved".green().bold(),
            root.display()
        );
        Ok(())
    }
}

fn save_one(
    descriptor: FractalDescriptor,
    resolution: fractals::models::resolution::Resolution,
    palette: &PaletteHandler,
    path: &std::path::Path,
) -> RenderResult<()> {
    let task = RenderTask::with_defaults(descriptor, resolution);
    let rendering = renderer::render(&task)?;
    png::save_png(&rendering, palette, path)?;
    info!("gallery: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractals::models::curve::curve::Curve;
    use fractals::models::curve::hilbert_curve::HilbertCurve;
    use fractals::models::curve::koch_snowflake::KochSnowflake;
    use fractals::models::curve::levy_curve::LevyCurve;

    #[test]
    fn sweeps_stay_within_each_kinds_cap() {
        for &(kind, from, to) in SWEEPS {
            assert!(from <= to);
            let descriptor = descriptor_for(kind, Some(to), None, None);
            let rendered = renderer::render(&RenderTask::with_defaults(
                descriptor,
                fractals::models::resolution::Resolution::new(8, 8),
            ));
            assert!(rendered.is_ok(), "sweep top exceeds cap for {kind:?}");
        }
        assert!(6 <= KochSnowflake::MAX_ORDER);
        assert!(7 <= HilbertCurve::MAX_ORDER);
        assert!(10 <= LevyCurve::MAX_ORDER);
    }

    #[test]
    fn every_kind_appears_exactly_once() {
        let mut kinds: Vec<FractalKind> = SWEEPS.iter().map(|&(kind, _, _)| kind).collect();
        kinds.extend_from_slice(SINGLES);
        assert_eq!(kinds.len(), FractalDescriptor::all_default().len());
        kinds.dedup();
        assert_eq!(kinds.len(), FractalDescriptor::all_default().len());
    }
}

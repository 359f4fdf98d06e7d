pub mod error;
pub mod png;
pub mod raster;
pub mod result;
pub mod scatter;
pub mod vector;

use fractals::error::FractalError;
use fractals::models::curve::curve::Curve;
use fractals::models::fractal::fractal_descriptor::FractalDescriptor;
use fractals::models::pixel::pixel_intensity::PixelIntensity;
use fractals::models::resolution::Resolution;
use fractals::models::task::RenderTask;
use log::debug;

use crate::result::RenderResult;

/// A finished frame: one intensity per pixel, row-major from the top-left.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub resolution: Resolution,
    pub intensities: Vec<PixelIntensity>,
}

/// Runs one task to completion, synchronously, and returns the frame.
pub fn render(task: &RenderTask) -> RenderResult<Rendering> {
    if task.resolution.has_zero_axis() {
        return Err(FractalError::ZeroResolution.into());
    }

    debug!(
        "rendering {} at {}x{}",
        task.fractal.name(),
        task.resolution.nx,
        task.resolution.ny
    );

    match &task.fractal {
        FractalDescriptor::Mandelbrot(mandelbrot) => raster::render_escape_time(mandelbrot, task),
        FractalDescriptor::Julia(julia) => raster::render_escape_time(julia, task),
        FractalDescriptor::NewtonRaphsonZ3(newton) => raster::render_escape_time(newton, task),
        FractalDescriptor::KochSnowflake(koch) => {
            vector::render_segments(&koch.segments()?, task.resolution)
        }
        FractalDescriptor::SierpinskiTriangle(triangle) => {
            vector::render_segments(&triangle.segments()?, task.resolution)
        }
        FractalDescriptor::SierpinskiCarpet(carpet) => {
            raster::render_carpet(carpet, task.resolution)
        }
        FractalDescriptor::DragonCurve(dragon) => {
            vector::render_segments(&dragon.segments()?, task.resolution)
        }
        FractalDescriptor::CantorSet(cantor) => {
            vector::render_segments(&cantor.segments()?, task.resolution)
        }
        FractalDescriptor::BarnsleyFern(fern) => scatter::render_fern(fern, task.resolution),
        FractalDescriptor::HilbertCurve(hilbert) => {
            vector::render_segments(&hilbert.segments()?, task.resolution)
        }
        FractalDescriptor::PeanoCurve(peano) => {
            vector::render_segments(&peano.segments()?, task.resolution)
        }
        FractalDescriptor::LevyCurve(levy) => {
            vector::render_segments(&levy.segments()?, task.resolution)
        }
        FractalDescriptor::PythagorasTree(tree) => {
            vector::render_segments(&tree.segments()?, task.resolution)
        }
    }
}

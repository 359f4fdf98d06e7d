use fractals::error::FractalError;
use fractals::models::carpet::SierpinskiCarpet;
use fractals::models::fractal::fractal::Fractal;
use fractals::models::pixel::pixel_intensity::PixelIntensity;
use fractals::models::resolution::Resolution;
use fractals::models::task::RenderTask;

use crate::result::RenderResult;
use crate::Rendering;

/// Samples the task's range at every pixel center and runs the
/// escape-time iteration there. `count` is normalized by the budget so
/// the palette can consume it directly.
pub fn render_escape_time<F: Fractal>(fractal: &F, task: &RenderTask) -> RenderResult<Rendering> {
    if task.max_iteration == 0 {
        return Err(FractalError::ZeroMaxIterations.into());
    }
    if task.range.is_empty() {
        return Err(FractalError::EmptyRange.into());
    }

    let nx = task.resolution.nx as usize;
    let ny = task.resolution.ny as usize;
    let mut intensities = Vec::with_capacity(nx * ny);

    for py in 0..ny {
        // Image rows run top-down, the plane's imaginary axis runs up.
        let y = task.range.max.y - (py as f64 + 0.5) * task.range.height() / ny as f64;
        for px in 0..nx {
            let x = task.range.min.x + (px as f64 + 0.5) * task.range.width() / nx as f64;
            let (zn, count) = fractal.generate(task.max_iteration, x, y);
            intensities.push(PixelIntensity {
                zn: zn as f32,
                count: (count / task.max_iteration as f64) as f32,
            });
        }
    }

    Ok(Rendering {
        resolution: task.resolution,
        intensities,
    })
}

/// Nearest-neighbour samples the carpet's occupancy grid into the frame.
pub fn render_carpet(carpet: &SierpinskiCarpet, resolution: Resolution) -> RenderResult<Rendering> {
    let grid = carpet.grid()?;
    let nx = resolution.nx as usize;
    let ny = resolution.ny as usize;
    let mut intensities = Vec::with_capacity(nx * ny);

    for py in 0..ny {
        let row = py * grid.size / ny;
        for px in 0..nx {
            let col = px * grid.size / nx;
            let count = if grid.is_filled(col, row) { 1.0 } else { 0.0 };
            intensities.push(PixelIntensity { zn: 0.0, count });
        }
    }

    Ok(Rendering {
        resolution,
        intensities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractals::models::fractal::fractal_descriptor::FractalDescriptor;
    use fractals::models::fractal::mandelbrot::Mandelbrot;
    use fractals::models::point::Point;
    use fractals::models::range::Range;

    fn mandelbrot_task(resolution: Resolution) -> RenderTask {
        RenderTask::with_defaults(FractalDescriptor::Mandelbrot(Mandelbrot::new()), resolution)
    }

    #[test]
    fn frame_has_one_intensity_per_pixel() {
        let rendering =
            render_escape_time(&Mandelbrot::new(), &mandelbrot_task(Resolution::new(8, 6)))
                .unwrap();
        assert_eq!(rendering.intensities.len(), 48);
    }

    #[test]
    fn normalized_counts_stay_in_unit_interval() {
        let rendering =
            render_escape_time(&Mandelbrot::new(), &mandelbrot_task(Resolution::new(16, 16)))
                .unwrap();
        for intensity in rendering.intensities {
            assert!(intensity.count >= 0.0 && intensity.count <= 1.0);
        }
    }

    #[test]
    fn interior_pixel_saturates_the_budget() {
        // A one-pixel frame centered on the origin, well inside the set.
        let mut task = mandelbrot_task(Resolution::new(1, 1));
        task.range = Range::new(Point::new(-0.1, -0.1), Point::new(0.1, 0.1));
        let rendering = render_escape_time(&Mandelbrot::new(), &task).unwrap();
        assert_eq!(rendering.intensities[0].count, 1.0);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let mut task = mandelbrot_task(Resolution::new(8, 8));
        task.max_iteration = 0;
        assert!(render_escape_time(&Mandelbrot::new(), &task).is_err());
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut task = mandelbrot_task(Resolution::new(8, 8));
        task.range = Range::new(Point::new(1.0, 1.0), Point::new(1.0, 2.0));
        assert!(render_escape_time(&Mandelbrot::new(), &task).is_err());
    }

    #[test]
    fn carpet_holes_map_to_zero_intensity() {
        let rendering = render_carpet(&SierpinskiCarpet::new(1), Resolution::new(9, 9)).unwrap();
        // Center pixel falls in the punched-out ninth.
        assert_eq!(rendering.intensities[4 * 9 + 4].count, 0.0);
        assert_eq!(rendering.intensities[0].count, 1.0);
    }
}

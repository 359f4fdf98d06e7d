use fractals::models::pixel::pixel_intensity::PixelIntensity;
use fractals::models::point::Point;
use fractals::models::resolution::Resolution;
use fractals::models::segment::Segment;

use crate::result::RenderResult;
use crate::Rendering;

/// Fraction of the frame left clear on every side.
const MARGIN: f64 = 0.05;

/// Aspect-preserving mapping from curve space into pixel coordinates,
/// centered on the curve's bounding box.
pub(crate) struct Fit {
    resolution: Resolution,
    scale: f64,
    center: Point,
}

impl Fit {
    pub(crate) fn around(min: Point, max: Point, resolution: Resolution) -> Self {
        let width = (max.x - min.x).max(f64::MIN_POSITIVE);
        let height = (max.y - min.y).max(f64::MIN_POSITIVE);

        let sx = resolution.nx as f64 * (1.0 - 2.0 * MARGIN) / width;
        let sy = resolution.ny as f64 * (1.0 - 2.0 * MARGIN) / height;

        Self {
            resolution,
            scale: sx.min(sy),
            center: min.midpoint(max),
        }
    }

    /// Pixel position of a curve-space point; the y axis flips because
    /// image rows grow downward.
    pub(crate) fn apply(&self, point: Point) -> (i32, i32) {
        let px = self.resolution.nx as f64 / 2.0 + (point.x - self.center.x) * self.scale;
        let py = self.resolution.ny as f64 / 2.0 - (point.y - self.center.y) * self.scale;
        (px as i32, py as i32)
    }
}

pub(crate) fn bounding_box(points: impl Iterator<Item = Point>) -> Option<(Point, Point)> {
    let mut bounds: Option<(Point, Point)> = None;
    for point in points {
        let (min, max) = bounds.get_or_insert((point, point));
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    bounds
}

/// Bresenham walk from `(x0, y0)` to `(x1, y1)`, marking hit pixels.
pub(crate) fn draw_line(
    buffer: &mut [u8],
    width: usize,
    height: usize,
    from: (i32, i32),
    to: (i32, i32),
) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && (x0 as usize) < width && y0 >= 0 && (y0 as usize) < height {
            buffer[y0 as usize * width + x0 as usize] = 255;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Rasterizes a segment cloud: fit, stroke, then lift the hit mask into
/// full-intensity pixels.
pub fn render_segments(segments: &[Segment], resolution: Resolution) -> RenderResult<Rendering> {
    let nx = resolution.nx as usize;
    let ny = resolution.ny as usize;
    let mut buffer = vec![0u8; nx * ny];

    let endpoints = segments
        .iter()
        .flat_map(|segment| [segment.start, segment.end]);
    if let Some((min, max)) = bounding_box(endpoints) {
        let fit = Fit::around(min, max, resolution);
        for segment in segments {
            draw_line(
                &mut buffer,
                nx,
                ny,
                fit.apply(segment.start),
                fit.apply(segment.end),
            );
        }
    }

    let intensities = buffer
        .iter()
        .map(|&hit| PixelIntensity {
            zn: 0.0,
            count: if hit > 0 { 1.0 } else { 0.0 },
        })
        .collect();

    Ok(Rendering {
        resolution,
        intensities,
    })
}

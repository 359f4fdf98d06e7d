use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Hilbert curve over the unit square, built by quartering the cell and
/// its frame vectors; the polyline visits every sub-cell center once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct HilbertCurve {
    pub order: u32,
}

impl HilbertCurve {
    pub fn new(order: u32) -> Self {
        Self { order }
    }

    /// The 4^order cell centers in traversal order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        hilbert_collect(0.0, 0.0, 1.0, 0.0, 0.0, 1.0, self.order, &mut points);
        points
    }
}

impl Default for HilbertCurve {
    fn default() -> Self {
        Self::new(6)
    }
}

// (x, y) is the cell origin, (xi, xj) and (yi, yj) its frame vectors;
// the four quadrants swap and mirror the frame to keep the path joined.
#[allow(clippy::too_many_arguments)]
fn hilbert_collect(
    x: f64,
    y: f64,
    xi: f64,
    xj: f64,
    yi: f64,
    yj: f64,
    n: u32,
    points: &mut Vec<Point>,
) {
    if n == 0 {
        points.push(Point::new(x + (xi + yi) / 2.0, y + (xj + yj) / 2.0));
        return;
    }

    hilbert_collect(x, y, yi / 2.0, yj / 2.0, xi / 2.0, xj / 2.0, n - 1, points);
    hilbert_collect(
        x + xi / 2.0,
        y + xj / 2.0,
        xi / 2.0,
        xj / 2.0,
        yi / 2.0,
        yj / 2.0,
        n - 1,
        points,
    );
    hilbert_collect(
        x + xi / 2.0 + yi / 2.0,
        y + xj / 2.0 + yj / 2.0,
        xi / 2.0,
        xj / 2.0,
        yi / 2.0,
        yj / 2.0,
        n - 1,
        points,
    );
    hilbert_collect(
        x + xi / 2.0 + yi,
        y + xj / 2.0 + yj,
        -yi / 2.0,
        -yj / 2.0,
        -xi / 2.0,
        -xj / 2.0,
        n - 1,
        points,
    );
}

impl Curve for HilbertCurve {
    const MAX_ORDER: u32 = 9;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        let points = self.points();
        for pair in points.windows(2) {
            segments.push(Segment::new(pair[0], pair[1]));
        }
    }
}

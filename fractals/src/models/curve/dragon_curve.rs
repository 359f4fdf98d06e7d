use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Heighway dragon: every segment folds into two around its midpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct DragonCurve {
    pub order: u32,
}

impl DragonCurve {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for DragonCurve {
    fn default() -> Self {
        Self::new(10)
    }
}

fn dragon_collect(a: Point, b: Point, n: u32, segments: &mut Vec<Segment>) {
    if n == 0 {
        segments.push(Segment::new(a, b));
        return;
    }

    let c = a.midpoint(b);
    let d = b.rotate_around(std::f64::consts::FRAC_PI_2, c);

    // The second half runs from B so the fold alternates sides.
    dragon_collect(a, d, n - 1, segments);
    dragon_collect(b, d, n - 1, segments);
}

impl Curve for DragonCurve {
    const MAX_ORDER: u32 = 20;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        dragon_collect(Point::new(0.0, 0.0), Point::new(1.0, 0.0), self.order, segments);
    }
}

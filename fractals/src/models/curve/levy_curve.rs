use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Levy C curve: each segment bends at a displaced midpoint, forming a
/// right angle above the original stroke.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct LevyCurve {
    pub order: u32,
}

impl LevyCurve {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for LevyCurve {
    fn default() -> Self {
        Self::new(10)
    }
}

fn levy_collect(p1: Point, p2: Point, n: u32, segments: &mut Vec<Segment>) {
    if n == 0 {
        segments.push(Segment::new(p1, p2));
        return;
    }

    let mid = Point::new(
        (p1.x + p2.x) / 2.0 + (p1.y - p2.y) / 2.0,
        (p1.y + p2.y) / 2.0 + (p2.x - p1.x) / 2.0,
    );

    levy_collect(p1, mid, n - 1, segments);
    levy_collect(mid, p2, n - 1, segments);
}

impl Curve for LevyCurve {
    const MAX_ORDER: u32 = 18;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        levy_collect(Point::new(0.0, 0.0), Point::new(1.0, 0.0), self.order, segments);
    }
}

use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Sierpinski triangle: midpoint subdivision leaves 3^order small
/// triangles, emitted as their three edges.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct SierpinskiTriangle {
    pub order: u32,
}

impl SierpinskiTriangle {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for SierpinskiTriangle {
    fn default() -> Self {
        Self::new(6)
    }
}

fn triangle_collect(p1: Point, p2: Point, p3: Point, order: u32, segments: &mut Vec<Segment>) {
    if order == 0 {
        segments.push(Segment::new(p1, p2));
        segments.push(Segment::new(p2, p3));
        segments.push(Segment::new(p3, p1));
        return;
    }

    let mid12 = p1.midpoint(p2);
    let mid23 = p2.midpoint(p3);
    let mid31 = p3.midpoint(p1);

    triangle_collect(p1, mid12, mid31, order - 1, segments);
    triangle_collect(mid12, p2, mid23, order - 1, segments);
    triangle_collect(mid31, mid23, p3, order - 1, segments);
}

impl Curve for SierpinskiTriangle {
    const MAX_ORDER: u32 = 9;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        triangle_collect(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 0.866),
            self.order,
            segments,
        );
    }
}

use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Vertical spacing between recursion levels when the set is drawn.
const LEVEL_DROP: f64 = 0.1;

/// Cantor set drawn as stacked bars: each level keeps the outer thirds of
/// the bar above it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct CantorSet {
    pub order: u32,
}

impl CantorSet {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for CantorSet {
    fn default() -> Self {
        Self::new(8)
    }
}

fn cantor_collect(x: f64, y: f64, length: f64, depth: u32, segments: &mut Vec<Segment>) {
    if depth == 0 {
        return;
    }

    segments.push(Segment::new(Point::new(x, y), Point::new(x + length, y)));

    if depth > 1 {
        let y = y - LEVEL_DROP;
        cantor_collect(x, y, length / 3.0, depth - 1, segments);
        cantor_collect(x + 2.0 * length / 3.0, y, length / 3.0, depth - 1, segments);
    }
}

impl Curve for CantorSet {
    const MAX_ORDER: u32 = 12;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        cantor_collect(0.0, 1.0, 1.0, self.order, segments);
    }
}

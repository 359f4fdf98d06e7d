use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Pythagoras tree: a square grown on the baseline, with two child
/// baselines branching from its top edge. Squares are emitted as their
/// four edges.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PythagorasTree {
    pub order: u32,
}

impl PythagorasTree {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for PythagorasTree {
    fn default() -> Self {
        Self::new(10)
    }
}

fn tree_collect(p1: Point, p2: Point, depth: u32, segments: &mut Vec<Segment>) {
    if depth == 0 {
        return;
    }

    let vx = p2.x - p1.x;
    let vy = p2.y - p1.y;
    // Perpendicular of the baseline, pointing to the square's far edge.
    let px = -vy;
    let py = vx;

    let p3 = Point::new(p2.x + px, p2.y + py);
    let p4 = Point::new(p1.x + px, p1.y + py);

    segments.push(Segment::new(p1, p2));
    segments.push(Segment::new(p2, p3));
    segments.push(Segment::new(p3, p4));
    segments.push(Segment::new(p4, p1));

    if depth > 1 {
        let branch = Point::new(p2.x + vx + px, p2.y + vy + py);
        tree_collect(p4, p3, depth - 1, segments);
        tree_collect(p3, branch, depth - 1, segments);
    }
}

impl Curve for PythagorasTree {
    const MAX_ORDER: u32 = 12;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        tree_collect(Point::new(0.0, 0.0), Point::new(1.0, 0.0), self.order, segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_count_doubles_per_level() {
        // 2^order - 1 squares, four edges each.
        for order in 1..=8 {
            let segments = PythagorasTree::new(order).segments().unwrap();
            assert_eq!(segments.len(), 4 * (2usize.pow(order) - 1));
        }
    }

    #[test]
    fn order_zero_draws_nothing() {
        assert!(PythagorasTree::new(0).segments().unwrap().is_empty());
    }

    #[test]
    fn trunk_square_sits_above_the_baseline() {
        let segments = PythagorasTree::new(1).segments().unwrap();
        assert_eq!(segments.len(), 4);
        // Far edge of the unit square on baseline (0,0)-(1,0) is at y = 1.
        assert_eq!(segments[1].end, Point::new(1.0, 1.0));
        assert_eq!(segments[2].end, Point::new(0.0, 1.0));
    }

    #[test]
    fn over_cap_order_is_rejected() {
        assert!(PythagorasTree::new(PythagorasTree::MAX_ORDER + 1).segments().is_err());
    }
}

use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Peano curve: each cell splits into a 3x3 grid walked in a serpentine
/// column order, giving 9^order sample points.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct PeanoCurve {
    pub order: u32,
}

impl PeanoCurve {
    pub fn new(order: u32) -> Self {
        Self { order }
    }

    /// The 9^order cell corners in traversal order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        peano_collect(0.0, 0.0, 1.0, self.order, &mut points);
        points
    }
}

impl Default for PeanoCurve {
    fn default() -> Self {
        Self::new(4)
    }
}

fn peano_collect(x: f64, y: f64, size: f64, n: u32, points: &mut Vec<Point>) {
    if n == 0 {
        points.push(Point::new(x, y));
        return;
    }

    let new_size = size / 3.0;
    let offsets = [
        (0.0, 0.0),
        (0.0, new_size),
        (0.0, 2.0 * new_size),
        (new_size, 2.0 * new_size),
        (new_size, new_size),
        (new_size, 0.0),
        (2.0 * new_size, 0.0),
        (2.0 * new_size, new_size),
        (2.0 * new_size, 2.0 * new_size),
    ];
    for (dx, dy) in offsets {
        peano_collect(x + dx, y + dy, new_size, n - 1, points);
    }
}

impl Curve for PeanoCurve {
    const MAX_ORDER: u32 = 6;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_count_is_nine_to_the_order() {
        for order in 0..=4 {
            let points = PeanoCurve::new(order).points();
            assert_eq!(points.len(), 9usize.pow(order));
        }
    }

    #[test]
    fn segment_count_is_one_less_than_points() {
        let segments = PeanoCurve::new(3).segments().unwrap();
        assert_eq!(segments.len(), 9usize.pow(3) - 1);
    }

    #[test]
    fn stays_inside_the_unit_square() {
        for point in PeanoCurve::new(3).points() {
            assert!((0.0..1.0).contains(&point.x));
            assert!((0.0..1.0).contains(&point.y));
        }
    }

    #[test]
    fn over_cap_order_is_rejected() {
        assert!(PeanoCurve::new(PeanoCurve::MAX_ORDER + 1).segments().is_err());
    }
}

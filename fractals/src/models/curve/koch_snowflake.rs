use serde::{Deserialize, Serialize};

use super::curve::Curve;
use crate::models::point::Point;
use crate::models::segment::Segment;

/// Koch snowflake: an equilateral triangle whose sides are subdivided
/// into four, the middle third replaced by a 60 degree bump.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct KochSnowflake {
    pub order: u32,
}

impl KochSnowflake {
    pub fn new(order: u32) -> Self {
        Self { order }
    }
}

impl Default for KochSnowflake {
    fn default() -> Self {
        Self::new(4)
    }
}

fn koch_collect(a: Point, b: Point, n: u32, segments: &mut Vec<Segment>) {
    if n == 0 {
        segments.push(Segment::new(a, b));
        return;
    }

    // C and D sit at the thirds of AB, E is D rotated 60 degrees around C.
    let c = Point::new(a.x + (b.x - a.x) / 3.0, a.y + (b.y - a.y) / 3.0);
    let d = Point::new(a.x + 2.0 * (b.x - a.x) / 3.0, a.y + 2.0 * (b.y - a.y) / 3.0);
    let e = d.rotate_around(std::f64::consts::FRAC_PI_3, c);

    koch_collect(a, c, n - 1, segments);
    koch_collect(c, e, n - 1, segments);
    koch_collect(e, d, n - 1, segments);
    koch_collect(d, b, n - 1, segments);
}

impl Curve for KochSnowflake {
    const MAX_ORDER: u32 = 9;

    fn order(&self) -> u32 {
        self.order
    }

    fn collect(&self, segments: &mut Vec<Segment>) {
        let scale = 1.0;
        let v0 = Point::new(0.0, 0.0);
        let v1 = Point::new(scale, 0.0);
        let v2 = Point::new(scale / 2.0, scale * std::f64::consts::FRAC_PI_3.sin());

        koch_collect(v0, v1, self.order, segments);
        koch_collect(v1, v2, self.order, segments);
        koch_collect(v2, v0, self.order, segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_zero_is_the_triangle() {
        let segments = KochSnowflake::new(0).segments().unwrap();
        assert_eq!(segments.len(), 3);
    }

    #[test]
    fn segment_count_follows_power_law() {
        for order in 0..=4 {
            let segments = KochSnowflake::new(order).segments().unwrap();
            assert_eq!(segments.len(), 3 * 4usize.pow(order));
        }
    }

    #[test]
    fn subdivision_shrinks_strokes_by_three() {
        let coarse = KochSnowflake::new(0).segments().unwrap();
        let fine = KochSnowflake::new(1).segments().unwrap();
        assert!((coarse[0].length() / fine[0].length() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn over_cap_order_is_rejected() {
        assert!(KochSnowflake::new(KochSnowflake::MAX_ORDER + 1).segments().is_err());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotation around `center` by `theta` radians, counter-clockwise.
    pub fn rotate_around(self, theta: f64, center: Point) -> Point {
        let temp_x = self.x - center.x;
        let temp_y = self.y - center.y;

        let cos_t = theta.cos();
        let sin_t = theta.sin();

        Point {
            x: temp_x * cos_t - temp_y * sin_t + center.x,
            y: temp_x * sin_t + temp_y * cos_t + center.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let m = Point::new(0.0, 0.0).midpoint(Point::new(2.0, 4.0));
        assert_eq!(m, Point::new(1.0, 2.0));
    }

    #[test]
    fn quarter_turn_around_origin() {
        let p = Point::new(1.0, 0.0).rotate_around(std::f64::consts::FRAC_PI_2, Point::new(0.0, 0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_distance_to_center() {
        let center = Point::new(3.0, -2.0);
        let p = Point::new(5.5, 1.0);
        let q = p.rotate_around(1.234, center);
        let before = (p.x - center.x).hypot(p.y - center.y);
        let after = (q.x - center.x).hypot(q.y - center.y);
        assert!((before - after).abs() < 1e-12);
    }
}

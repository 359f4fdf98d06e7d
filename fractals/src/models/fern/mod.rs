use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::FractalError;
use crate::models::point::Point;
use crate::result::FractalResult;

/// Barnsley fern: the orbit of (0, 0) under four affine maps picked at
/// random with the classic stem/frond probabilities.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct BarnsleyFern {
    pub n_points: u32,
}

impl BarnsleyFern {
    pub const DEFAULT_POINTS: u32 = 50_000;

    pub fn new(n_points: u32) -> Self {
        Self { n_points }
    }

    /// Samples the orbit. The caller owns the randomness; pass a seeded
    /// generator for a reproducible cloud.
    pub fn points<R: Rng>(&self, rng: &mut R) -> FractalResult<Vec<Point>> {
        if self.n_points == 0 {
            return Err(FractalError::ZeroPointCount);
        }

        let mut x = 0.0;
        let mut y = 0.0;
        let mut points = Vec::with_capacity(self.n_points as usize);

        for _ in 0..self.n_points {
            let r: f64 = rng.gen();
            (x, y) = if r < 0.01 {
                // Stem.
                (0.0, 0.16 * y)
            } else if r < 0.86 {
                // Successively smaller leaflets.
                (0.85 * x + 0.04 * y, -0.04 * x + 0.85 * y + 1.6)
            } else if r < 0.93 {
                // Largest left-hand leaflet.
                (0.2 * x - 0.26 * y, 0.23 * x + 0.22 * y + 1.6)
            } else {
                // Largest right-hand leaflet.
                (-0.15 * x + 0.28 * y, 0.26 * x + 0.24 * y + 0.44)
            };
            points.push(Point::new(x, y));
        }

        Ok(points)
    }
}

impl Default for BarnsleyFern {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POINTS)
    }
}

use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::fractal::Fractal;

/// z(n+1) = z(n)^2 + c, starting from z = 0 with c the sampled point.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct Mandelbrot {}

impl Mandelbrot {
    pub fn new() -> Self {
        Self {}
    }
}

impl Fractal for Mandelbrot {
    fn generate(&self, max_iterations: u32, x: f64, y: f64) -> (f64, f64) {
        let c = Complex::new(x, y);
        let mut z = Complex::new(0.0, 0.0);

        let mut i = 0;
        while i < max_iterations && z.arg_sq() < 4.0 {
            z = z * z + c;
            i += 1;
        }

        (z.arg_sq(), i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        let (_, count) = Mandelbrot::new().generate(128, 0.0, 0.0);
        assert_eq!(count, 128.0);
    }

    #[test]
    fn far_point_escapes_immediately() {
        let (zn, count) = Mandelbrot::new().generate(128, 2.0, 2.0);
        assert_eq!(count, 1.0);
        assert!(zn >= 4.0);
    }

    #[test]
    fn count_stays_within_budget() {
        let m = Mandelbrot::new();
        for &(x, y) in &[(-2.5, -2.0), (-0.7, 0.3), (0.25, 0.0), (1.0, 2.0)] {
            let (_, count) = m.generate(64, x, y);
            assert!(count >= 0.0 && count <= 64.0);
        }
    }
}

use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::fractal::Fractal;

/// Same iteration as Mandelbrot but with a fixed constant `c`; the
/// sampled point becomes the starting iterate instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Julia {
    pub c: Complex,
    pub divergence_threshold_square: f64,
}

impl Julia {
    pub fn new(c: Complex, divergence_threshold_square: f64) -> Self {
        Self {
            c,
            divergence_threshold_square,
        }
    }
}

impl Default for Julia {
    fn default() -> Self {
        Self::new(Complex::new(-0.8, 0.156), 4.0)
    }
}

impl Fractal for Julia {
    fn generate(&self, max_iterations: u32, x: f64, y: f64) -> (f64, f64) {
        let mut z = Complex::new(x, y);

        let mut i = 0;
        while i < max_iterations && z.arg_sq() < self.divergence_threshold_square {
            z = z * z + self.c;
            i += 1;
        }

        (z.arg_sq(), i as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_stays_within_budget() {
        let julia = Julia::default();
        for &(x, y) in &[(-2.0, -2.0), (0.0, 0.0), (0.3, -0.5), (2.0, 2.0)] {
            let (_, count) = julia.generate(256, x, y);
            assert!(count >= 0.0 && count <= 256.0);
        }
    }

    #[test]
    fn escaped_point_exceeds_threshold() {
        let julia = Julia::default();
        let (zn, count) = julia.generate(256, 2.0, 2.0);
        assert!(count < 256.0);
        assert!(zn >= julia.divergence_threshold_square);
    }

    #[test]
    fn fixed_point_of_zero_constant_never_escapes() {
        let julia = Julia::new(Complex::new(0.0, 0.0), 4.0);
        let (_, count) = julia.generate(64, 0.5, 0.0);
        assert_eq!(count, 64.0);
    }
}

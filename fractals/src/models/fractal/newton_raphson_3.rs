use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::fractal::Fractal;

/// Convergence threshold on |z(n+1) - z(n)|^2.
const EPSILON: f64 = 1e-6;

/// Newton's method on f(z) = z^3 - 1. The plane is shaded by which cube
/// root of unity the iteration converges to (phase of the final iterate)
/// and by how fast it gets there.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct NewtonRaphsonZ3 {}

impl NewtonRaphsonZ3 {
    pub fn new() -> Self {
        Self {}
    }

    fn fz(&self, z: Complex) -> Complex {
        z * z * z - Complex::new(1.0, 0.0)
    }

    fn dfz(&self, z: Complex) -> Complex {
        Complex::new(3.0, 0.0) * z * z
    }

    /// Smooths the integer step count with the residual magnitude so that
    /// neighbouring pixels do not band.
    fn convergence_value(pzn: f64, threshold: f64, count: u32, nmax: u32) -> f64 {
        let accuracy = f64::log10(threshold);
        if count < nmax {
            0.5 - 0.5 * f64::cos(0.1 * (count as f64 - (f64::log10(pzn) / accuracy)))
        } else {
            1.0
        }
    }
}

impl Fractal for NewtonRaphsonZ3 {
    fn generate(&self, max_iterations: u32, x: f64, y: f64) -> (f64, f64) {
        let mut z = Complex::new(x, y);
        let mut i = 0;

        loop {
            let zn_next = z - (self.fz(z) / self.dfz(z));
            if (zn_next - z).arg_sq() < EPSILON || i >= max_iterations {
                break;
            }
            z = zn_next;
            i += 1;
        }

        let zn = z.arg();
        let count = if i < max_iterations {
            NewtonRaphsonZ3::convergence_value(z.arg_sq(), EPSILON, i, max_iterations)
        } else {
            1.0
        };

        (zn, i as f64 * count)
    }
}

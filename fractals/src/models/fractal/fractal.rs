/// Escape-time fractal: maps one point of the plane to a `(zn, count)`
/// pair, where `zn` describes the final iterate and `count` the number of
/// iterations spent before escaping or converging. `count` never exceeds
/// `max_iterations`.
pub trait Fractal {
    fn generate(&self, max_iterations: u32, x: f64, y: f64) -> (f64, f64);
}

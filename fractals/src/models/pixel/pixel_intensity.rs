use serde::{Deserialize, Serialize};

/// Per-pixel generator output: `zn` is the final squared magnitude (or
/// phase, for convergence fractals) and `count` the normalized iteration
/// count in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PixelIntensity {
    pub zn: f32,
    pub count: f32,
}

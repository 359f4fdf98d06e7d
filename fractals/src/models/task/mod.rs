use serde::{Deserialize, Serialize};

use crate::models::fractal::fractal_descriptor::FractalDescriptor;
use crate::models::range::Range;
use crate::models::resolution::Resolution;

/// One self-contained render job: which fractal, how hard to iterate,
/// over which window of the plane and at what pixel resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderTask {
    pub fractal: FractalDescriptor,
    pub max_iteration: u32,
    pub resolution: Resolution,
    pub range: Range,
}

impl RenderTask {
    pub fn new(
        fractal: FractalDescriptor,
        max_iteration: u32,
        resolution: Resolution,
        range: Range,
    ) -> Self {
        Self {
            fractal,
            max_iteration,
            resolution,
            range,
        }
    }

    /// Task with the descriptor's own defaults for budget and range.
    pub fn with_defaults(fractal: FractalDescriptor, resolution: Resolution) -> Self {
        let max_iteration = fractal.default_max_iterations();
        let range = fractal.default_range();
        Self::new(fractal, max_iteration, resolution, range)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let wrapped = serde_json::json!({ "RenderTask": self });
        serde_json::to_value(&wrapped)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let v: serde_json::Value = serde_json::from_str(raw)?;
        serde_json::from_value(v["RenderTask"].clone())
    }
}

use std::path::PathBuf;

use crate::models::resolution::Resolution;

/// Loads a `.env` file when one is present; a missing file is fine, the
/// defaults below cover every variable.
pub fn init() {
    if dotenv::dotenv().is_ok() {
        log::debug!("loaded environment overrides from .env");
    }
}

/// Directory where rendered images land. Overridden by `FRACTALS_OUT_DIR`.
pub fn output_dir() -> PathBuf {
    std::env::var("FRACTALS_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("fractal_shapes"))
}

/// Default render resolution, overridden by `FRACTALS_WIDTH` / `FRACTALS_HEIGHT`.
pub fn default_resolution() -> Resolution {
    Resolution::new(var_or("FRACTALS_WIDTH", 800), var_or("FRACTALS_HEIGHT", 800))
}

fn var_or(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

use std::str::FromStr;

use crate::error::FractalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    #[default]
    Classic,
    Inverted,
    Grayscale,
}

impl ColorPalette {
    pub fn name(&self) -> &'static str {
        match self {
            ColorPalette::Classic => "classic",
            ColorPalette::Inverted => "inverted",
            ColorPalette::Grayscale => "grayscale",
        }
    }
}

impl FromStr for ColorPalette {
    type Err = FractalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "classic" => Ok(ColorPalette::Classic),
            "inverted" => Ok(ColorPalette::Inverted),
            "grayscale" | "greyscale" => Ok(ColorPalette::Grayscale),
            other => Err(FractalError::UnknownPalette(other.to_string())),
        }
    }
}

/// Maps normalized intensities in [0, 1] to RGB, with a cycling current
/// palette for the interactive viewer.
#[derive(Debug, Clone, Default)]
pub struct PaletteHandler {
    pub current_palette: ColorPalette,
}

impl PaletteHandler {
    pub fn new(palette: ColorPalette) -> Self {
        PaletteHandler {
            current_palette: palette,
        }
    }

    pub fn cycle_palette(&mut self) {
        self.current_palette = match self.current_palette {
            ColorPalette::Classic => ColorPalette::Inverted,
            ColorPalette::Inverted => ColorPalette::Grayscale,
            ColorPalette::Grayscale => ColorPalette::Classic,
        };
    }

    pub fn calculate_color(&self, t: f64) -> (u8, u8, u8) {
        match self.current_palette {
            ColorPalette::Classic => self.classic_palette(t),
            ColorPalette::Inverted => self.inverted_palette(t),
            ColorPalette::Grayscale => self.grayscale_palette(t),
        }
    }

    // Bernstein polynomials keep each channel smooth over [0, 1].
    fn classic_palette(&self, t: f64) -> (u8, u8, u8) {
        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;
        (r, g, b)
    }

    fn inverted_palette(&self, t: f64) -> (u8, u8, u8) {
        let (r, g, b) = self.classic_palette(t);
        (255 - r, 255 - g, 255 - b)
    }

    fn grayscale_palette(&self, t: f64) -> (u8, u8, u8) {
        let intensity = (t * 255.0) as u8;
        (intensity, intensity, intensity)
    }
}

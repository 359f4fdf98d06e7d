use std::error::Error;
use std::fmt;

use fractals::error::FractalError;

#[derive(Debug)]
pub enum RenderError {
    Fractal(FractalError),
    Image(image::ImageError),
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(e) => write!(f, "fractal generation failed: {e}"),
            Self::Image(e) => write!(f, "image encoding failed: {e}"),
            Self::Io(e) => write!(f, "io failed: {e}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(e) => Some(e),
            Self::Image(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<FractalError> for RenderError {
    fn from(e: FractalError) -> Self {
        Self::Fractal(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

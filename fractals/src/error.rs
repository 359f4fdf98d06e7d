use std::error::Error;
use std::fmt;

/// Domain errors for the generators: every failure mode is an invalid
/// numeric input, there is nothing to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractalError {
    ZeroResolution,
    ZeroMaxIterations,
    OrderTooLarge { order: u32, max: u32 },
    EmptyRange,
    ZeroPointCount,
    UnknownPalette(String),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroResolution => {
                write!(f, "resolution must be at least one pixel on both axes")
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::OrderTooLarge { order, max } => {
                write!(f, "recursion order {order} exceeds the supported maximum {max}")
            }
            Self::EmptyRange => write!(f, "range must span a non-empty area of the plane"),
            Self::ZeroPointCount => write!(f, "point count must be greater than zero"),
            Self::UnknownPalette(name) => {
                write!(f, "unknown palette '{name}' (expected classic, inverted or grayscale)")
            }
        }
    }
}

impl Error for FractalError {}

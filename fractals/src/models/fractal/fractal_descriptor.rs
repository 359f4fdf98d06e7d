use serde::{Deserialize, Serialize};

use super::julia::Julia;
use super::mandelbrot::Mandelbrot;
use super::newton_raphson_3::NewtonRaphsonZ3;
use crate::models::carpet::SierpinskiCarpet;
use crate::models::curve::cantor_set::CantorSet;
use crate::models::curve::curve::Curve;
use crate::models::curve::dragon_curve::DragonCurve;
use crate::models::curve::hilbert_curve::HilbertCurve;
use crate::models::curve::koch_snowflake::KochSnowflake;
use crate::models::curve::levy_curve::LevyCurve;
use crate::models::curve::peano_curve::PeanoCurve;
use crate::models::curve::pythagoras_tree::PythagorasTree;
use crate::models::curve::sierpinski_triangle::SierpinskiTriangle;
use crate::models::fern::BarnsleyFern;
use crate::models::point::Point;
use crate::models::range::Range;

/// Everything a renderer needs to know about which fractal to produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FractalDescriptor {
    Mandelbrot(Mandelbrot),
    Julia(Julia),
    NewtonRaphsonZ3(NewtonRaphsonZ3),
    KochSnowflake(KochSnowflake),
    SierpinskiTriangle(SierpinskiTriangle),
    SierpinskiCarpet(SierpinskiCarpet),
    DragonCurve(DragonCurve),
    CantorSet(CantorSet),
    BarnsleyFern(BarnsleyFern),
    HilbertCurve(HilbertCurve),
    PeanoCurve(PeanoCurve),
    LevyCurve(LevyCurve),
    PythagorasTree(PythagorasTree),
}

impl FractalDescriptor {
    /// One default descriptor per supported kind, in presentation order.
    pub fn all_default() -> Vec<FractalDescriptor> {
        vec![
            Self::Mandelbrot(Mandelbrot::default()),
            Self::Julia(Julia::default()),
            Self::NewtonRaphsonZ3(NewtonRaphsonZ3::default()),
            Self::KochSnowflake(KochSnowflake::default()),
            Self::SierpinskiTriangle(SierpinskiTriangle::default()),
            Self::SierpinskiCarpet(SierpinskiCarpet::default()),
            Self::DragonCurve(DragonCurve::default()),
            Self::CantorSet(CantorSet::default()),
            Self::BarnsleyFern(BarnsleyFern::default()),
            Self::HilbertCurve(HilbertCurve::default()),
            Self::PeanoCurve(PeanoCurve::default()),
            Self::LevyCurve(LevyCurve::default()),
            Self::PythagorasTree(PythagorasTree::default()),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mandelbrot(_) => "Mandelbrot Set",
            Self::Julia(_) => "Julia Set",
            Self::NewtonRaphsonZ3(_) => "Newton Fractal",
            Self::KochSnowflake(_) => "Koch Snowflake",
            Self::SierpinskiTriangle(_) => "Sierpinski Triangle",
            Self::SierpinskiCarpet(_) => "Sierpinski Carpet",
            Self::DragonCurve(_) => "Dragon Curve",
            Self::CantorSet(_) => "Cantor Set",
            Self::BarnsleyFern(_) => "Barnsley Fern",
            Self::HilbertCurve(_) => "Hilbert Curve",
            Self::PeanoCurve(_) => "Peano Curve",
            Self::LevyCurve(_) => "Levy C Curve",
            Self::PythagorasTree(_) => "Pythagoras Tree",
        }
    }

    /// Filename-friendly identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Mandelbrot(_) => "mandelbrot",
            Self::Julia(_) => "julia",
            Self::NewtonRaphsonZ3(_) => "newton_fractal",
            Self::KochSnowflake(_) => "koch_snowflake",
            Self::SierpinskiTriangle(_) => "sierpinski_triangle",
            Self::SierpinskiCarpet(_) => "sierpinski_carpet",
            Self::DragonCurve(_) => "dragon_curve",
            Self::CantorSet(_) => "cantor_set",
            Self::BarnsleyFern(_) => "barnsley_fern",
            Self::HilbertCurve(_) => "hilbert_curve",
            Self::PeanoCurve(_) => "peano_curve",
            Self::LevyCurve(_) => "levy_c_curve",
            Self::PythagorasTree(_) => "pythagoras_tree",
        }
    }

    pub fn is_escape_time(&self) -> bool {
        matches!(
            self,
            Self::Mandelbrot(_) | Self::Julia(_) | Self::NewtonRaphsonZ3(_)
        )
    }

    /// Recursion order for the kinds that have one.
    pub fn order(&self) -> Option<u32> {
        match self {
            Self::Mandelbrot(_) | Self::Julia(_) | Self::NewtonRaphsonZ3(_) | Self::BarnsleyFern(_) => None,
            Self::KochSnowflake(f) => Some(f.order),
            Self::SierpinskiTriangle(f) => Some(f.order),
            Self::SierpinskiCarpet(f) => Some(f.order),
            Self::DragonCurve(f) => Some(f.order),
            Self::CantorSet(f) => Some(f.order),
            Self::HilbertCurve(f) => Some(f.order),
            Self::PeanoCurve(f) => Some(f.order),
            Self::LevyCurve(f) => Some(f.order),
            Self::PythagorasTree(f) => Some(f.order),
        }
    }

    /// Window of the complex plane escape-time kinds are sampled over.
    pub fn default_range(&self) -> Range {
        match self {
            Self::Mandelbrot(_) => Range::new(Point::new(-2.5, -2.0), Point::new(1.0, 2.0)),
            Self::Julia(_) => Range::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0)),
            Self::NewtonRaphsonZ3(_) => Range::new(Point::new(-1.5, -1.5), Point::new(1.5, 1.5)),
            // Curve and point-cloud kinds auto-fit their own bounds.
            _ => Range::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        }
    }

    pub fn default_max_iterations(&self) -> u32 {
        match self {
            Self::NewtonRaphsonZ3(_) => 25,
            _ => 256,
        }
    }

    /// Bumps the recursion order (or sample count) on kinds that have
    /// one; returns false for escape-time kinds so callers can grow the
    /// iteration budget instead.
    pub fn increase_detail(&mut self) -> bool {
        match self {
            Self::Mandelbrot(_) | Self::Julia(_) | Self::NewtonRaphsonZ3(_) => false,
            Self::KochSnowflake(f) => {
                f.order = (f.order + 1).min(KochSnowflake::MAX_ORDER);
                true
            }
            Self::SierpinskiTriangle(f) => {
                f.order = (f.order + 1).min(SierpinskiTriangle::MAX_ORDER);
                true
            }
            Self::SierpinskiCarpet(f) => {
                f.order = (f.order + 1).min(SierpinskiCarpet::MAX_ORDER);
                true
            }
            Self::DragonCurve(f) => {
                f.order = (f.order + 1).min(DragonCurve::MAX_ORDER);
                true
            }
            Self::CantorSet(f) => {
                f.order = (f.order + 1).min(CantorSet::MAX_ORDER);
                true
            }
            Self::BarnsleyFern(f) => {
                f.n_points = f.n_points.saturating_mul(2).min(1_000_000);
                true
            }
            Self::HilbertCurve(f) => {
                f.order = (f.order + 1).min(HilbertCurve::MAX_ORDER);
                true
            }
            Self::PeanoCurve(f) => {
                f.order = (f.order + 1).min(PeanoCurve::MAX_ORDER);
                true
            }
            Self::LevyCurve(f) => {
                f.order = (f.order + 1).min(LevyCurve::MAX_ORDER);
                true
            }
            Self::PythagorasTree(f) => {
                f.order = (f.order + 1).min(PythagorasTree::MAX_ORDER);
                true
            }
        }
    }

    /// Inverse of [`increase_detail`](Self::increase_detail).
    pub fn decrease_detail(&mut self) -> bool {
        match self {
            Self::Mandelbrot(_) | Self::Julia(_) | Self::NewtonRaphsonZ3(_) => false,
            Self::KochSnowflake(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::SierpinskiTriangle(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::SierpinskiCarpet(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::DragonCurve(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::CantorSet(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::BarnsleyFern(f) => {
                f.n_points = (f.n_points / 2).max(1_000);
                true
            }
            Self::HilbertCurve(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::PeanoCurve(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::LevyCurve(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
            Self::PythagorasTree(f) => {
                f.order = f.order.saturating_sub(1);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let kinds = FractalDescriptor::all_default();
        let mut slugs: Vec<_> = kinds.iter().map(|kind| kind.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), kinds.len());
    }

    #[test]
    fn escape_time_kinds_have_no_order() {
        for kind in FractalDescriptor::all_default() {
            if kind.is_escape_time() {
                assert!(kind.order().is_none());
            }
        }
    }

    #[test]
    fn detail_increase_respects_the_cap() {
        let mut kind = FractalDescriptor::KochSnowflake(KochSnowflake::new(KochSnowflake::MAX_ORDER));
        assert!(kind.increase_detail());
        assert_eq!(kind.order(), Some(KochSnowflake::MAX_ORDER));
    }

    #[test]
    fn detail_decrease_stops_at_zero() {
        let mut kind = FractalDescriptor::CantorSet(CantorSet::new(0));
        assert!(kind.decrease_detail());
        assert_eq!(kind.order(), Some(0));
    }

    #[test]
    fn escape_time_kinds_decline_detail_changes() {
        let mut kind = FractalDescriptor::Mandelbrot(Mandelbrot::new());
        assert!(!kind.increase_detail());
        assert!(!kind.decrease_detail());
    }
}

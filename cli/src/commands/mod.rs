use clap::{Subcommand, ValueEnum};
use complex_rs::complex::Complex;
use fractals::models::carpet::SierpinskiCarpet;
use fractals::models::curve::cantor_set::CantorSet;
use fractals::models::curve::dragon_curve::DragonCurve;
use fractals::models::curve::hilbert_curve::HilbertCurve;
use fractals::models::curve::koch_snowflake::KochSnowflake;
use fractals::models::curve::levy_curve::LevyCurve;
use fractals::models::curve::peano_curve::PeanoCurve;
use fractals::models::curve::pythagoras_tree::PythagorasTree;
use fractals::models::curve::sierpinski_triangle::SierpinskiTriangle;
use fractals::models::fern::BarnsleyFern;
use fractals::models::fractal::fractal_descriptor::FractalDescriptor;
use fractals::models::fractal::julia::Julia;
use fractals::models::fractal::mandelbrot::Mandelbrot;
use fractals::models::fractal::newton_raphson_3::NewtonRaphsonZ3;

use self::gallery::GalleryCommand;
use self::render::RenderCommand;
use self::view::ViewCommand;

pub mod gallery;
pub mod render;
pub mod view;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🖼️ Render One Fractal
    ///
    /// Generate a single fractal and save it as a PNG image.
    Render(RenderCommand),

    /// 🗃️ Gallery Mode
    ///
    /// Sweep every fractal kind over a range of orders and save the
    /// whole collection of images.
    Gallery(GalleryCommand),

    /// 🔭 Interactive Viewer
    ///
    /// Open a window and explore the fractals with the keyboard.
    View(ViewCommand),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    Julia,
    Newton,
    Koch,
    SierpinskiTriangle,
    SierpinskiCarpet,
    Dragon,
    Cantor,
    Fern,
    Hilbert,
    Peano,
    Levy,
    PythagorasTree,
}

/// Builds a descriptor from command-line arguments, falling back to the
/// kind's defaults for anything the user left out.
pub fn descriptor_for(
    kind: FractalKind,
    order: Option<u32>,
    julia_c: Option<Complex>,
    points: Option<u32>,
) -> FractalDescriptor {
    match kind {
        FractalKind::Mandelbrot => FractalDescriptor::Mandelbrot(Mandelbrot::new()),
        FractalKind::Julia => FractalDescriptor::Julia(match julia_c {
            Some(c) => Julia::new(c, Julia::default().divergence_threshold_square),
            None => Julia::default(),
        }),
        FractalKind::Newton => FractalDescriptor::NewtonRaphsonZ3(NewtonRaphsonZ3::new()),
        FractalKind::Koch => FractalDescriptor::KochSnowflake(match order {
            Some(order) => KochSnowflake::new(order),
            None => KochSnowflake::default(),
        }),
        FractalKind::SierpinskiTriangle => FractalDescriptor::SierpinskiTriangle(match order {
            Some(order) => SierpinskiTriangle::new(order),
            None => SierpinskiTriangle::default(),
        }),
        FractalKind::SierpinskiCarpet => FractalDescriptor::SierpinskiCarpet(match order {
            Some(order) => SierpinskiCarpet::new(order),
            None => SierpinskiCarpet::default(),
        }),
        FractalKind::Dragon => FractalDescriptor::DragonCurve(match order {
            Some(order) => DragonCurve::new(order),
            None => DragonCurve::default(),
        }),
        FractalKind::Cantor => FractalDescriptor::CantorSet(match order {
            Some(order) => CantorSet::new(order),
            None => CantorSet::default(),
        }),
        FractalKind::Fern => FractalDescriptor::BarnsleyFern(match points {
            Some(points) => BarnsleyFern::new(points),
            None => BarnsleyFern::default(),
        }),
        FractalKind::Hilbert => FractalDescriptor::HilbertCurve(match order {
            Some(order) => HilbertCurve::new(order),
            None => HilbertCurve::default(),
        }),
        FractalKind::Peano => FractalDescriptor::PeanoCurve(match order {
            Some(order) => PeanoCurve::new(order),
            None => PeanoCurve::default(),
        }),
        FractalKind::Levy => FractalDescriptor::LevyCurve(match order {
            Some(order) => LevyCurve::new(order),
            None => LevyCurve::default(),
        }),
        FractalKind::PythagorasTree => FractalDescriptor::PythagorasTree(match order {
            Some(order) => PythagorasTree::new(order),
            None => PythagorasTree::default(),
        }),
    }
}

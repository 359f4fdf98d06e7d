use fractals::models::carpet::SierpinskiCarpet;
use fractals::models::curve::cantor_set::CantorSet;
use fractals::models::curve::curve::Curve;
use fractals::models::curve::dragon_curve::DragonCurve;
use fractals::models::curve::hilbert_curve::HilbertCurve;
use fractals::models::curve::koch_snowflake::KochSnowflake;
use fractals::models::curve::levy_curve::LevyCurve;
use fractals::models::curve::peano_curve::PeanoCurve;
use fractals::models::curve::pythagoras_tree::PythagorasTree;
use fractals::models::curve::sierpinski_triangle::SierpinskiTriangle;
use fractals::models::fractal::fractal::Fractal;
use fractals::models::fractal::julia::Julia;
use fractals::models::fractal::mandelbrot::Mandelbrot;
use fractals::models::fractal::newton_raphson_3::NewtonRaphsonZ3;

#[test]
fn closed_form_growth_laws_hold() {
    for order in 0..=4u32 {
        let n = order;
        assert_eq!(
            KochSnowflake::new(n).segments().unwrap().len(),
            3 * 4usize.pow(n)
        );
        assert_eq!(DragonCurve::new(n).segments().unwrap().len(), 2usize.pow(n));
        assert_eq!(LevyCurve::new(n).segments().unwrap().len(), 2usize.pow(n));
        assert_eq!(
            HilbertCurve::new(n).segments().unwrap().len(),
            4usize.pow(n) - 1
        );
        assert_eq!(
            PeanoCurve::new(n).segments().unwrap().len(),
            9usize.pow(n) - 1
        );
        assert_eq!(
            CantorSet::new(n).segments().unwrap().len(),
            2usize.pow(n) - 1
        );
        assert_eq!(
            SierpinskiTriangle::new(n).segments().unwrap().len(),
            3 * 3usize.pow(n)
        );
        assert_eq!(
            PythagorasTree::new(n).segments().unwrap().len(),
            4 * (2usize.pow(n) - 1)
        );
        assert_eq!(
            SierpinskiCarpet::new(n).grid().unwrap().filled_count(),
            8usize.pow(n)
        );
    }
}

#[test]
fn output_size_grows_strictly_with_order() {
    let counters: Vec<(&str, fn(u32) -> usize)> = vec![
        ("koch snowflake", |n| KochSnowflake::new(n).segments().unwrap().len()),
        ("dragon curve", |n| DragonCurve::new(n).segments().unwrap().len()),
        ("levy curve", |n| LevyCurve::new(n).segments().unwrap().len()),
        ("hilbert curve", |n| HilbertCurve::new(n).segments().unwrap().len()),
        ("peano curve", |n| PeanoCurve::new(n).segments().unwrap().len()),
        ("cantor set", |n| CantorSet::new(n).segments().unwrap().len()),
        ("sierpinski triangle", |n| {
            SierpinskiTriangle::new(n).segments().unwrap().len()
        }),
        ("pythagoras tree", |n| {
            PythagorasTree::new(n).segments().unwrap().len()
        }),
        ("sierpinski carpet", |n| {
            SierpinskiCarpet::new(n).grid().unwrap().filled_count()
        }),
    ];

    for (name, count) in counters {
        for order in 1..=4 {
            assert!(
                count(order) > count(order - 1),
                "{name} output did not grow from order {} to {order}",
                order - 1
            );
        }
    }
}

#[test]
fn escape_counts_stay_within_budget_over_a_region_sweep() {
    let mandelbrot = Mandelbrot::new();
    let julia = Julia::default();
    let newton = NewtonRaphsonZ3::new();
    let max_iterations = 64;

    for row in 0..24 {
        for col in 0..24 {
            let x = -2.5 + 4.0 * col as f64 / 24.0;
            let y = -2.0 + 4.0 * row as f64 / 24.0;

            for (_, count) in [
                mandelbrot.generate(max_iterations, x, y),
                julia.generate(max_iterations, x, y),
                newton.generate(max_iterations, x, y),
            ] {
                assert!(count >= 0.0);
                assert!(count <= max_iterations as f64);
            }
        }
    }
}

pub mod fractal;
pub mod fractal_descriptor;
pub mod julia;
pub mod mandelbrot;
pub mod newton_raphson_3;

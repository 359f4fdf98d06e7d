pub mod carpet;
pub mod curve;
pub mod fern;
pub mod fractal;
pub mod pixel;
pub mod point;
pub mod range;
pub mod resolution;
pub mod segment;
pub mod task;

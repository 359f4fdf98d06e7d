pub mod cantor_set;
pub mod curve;
pub mod dragon_curve;
pub mod hilbert_curve;
pub mod koch_snowflake;
pub mod levy_curve;
pub mod peano_curve;
pub mod pythagoras_tree;
pub mod sierpinski_triangle;

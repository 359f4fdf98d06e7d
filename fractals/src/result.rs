use crate::error::FractalError;

pub type FractalResult<T> = Result<T, FractalError>;

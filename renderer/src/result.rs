use crate::error::RenderError;

pub type RenderResult<T> = Result<T, RenderError>;

use crate::error::FractalError;
use crate::models::segment::Segment;
use crate::result::FractalResult;

/// Recursive curve fractal: expands a recursion order into the ordered
/// segments of the curve. Each implementor also defines the largest order
/// it accepts, since segment counts grow geometrically.
pub trait Curve {
    const MAX_ORDER: u32;

    fn order(&self) -> u32;

    /// Appends every segment of the curve at `self.order()`.
    fn collect(&self, segments: &mut Vec<Segment>);

    fn segments(&self) -> FractalResult<Vec<Segment>> {
        if self.order() > Self::MAX_ORDER {
            return Err(FractalError::OrderTooLarge {
                order: self.order(),
                max: Self::MAX_ORDER,
            });
        }

        let mut segments = Vec::new();
        self.collect(&mut segments);
        Ok(segments)
    }
}

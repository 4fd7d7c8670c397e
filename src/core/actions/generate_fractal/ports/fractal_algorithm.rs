use crate::core::data::point::Point;
use std::error::Error;

/// Computes the raw per-pixel result (e.g. an escape count) for one pixel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view_bounds::ViewBounds;
use crate::core::util::aspect_ratio::adjust_bounds_to_aspect;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Squared escape radius (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of iterations before `z -> z² + c` leaves the radius-2 disc.
///
/// The magnitude is checked before each step with a strict `> 4`, so a
/// point sitting exactly on the circle keeps iterating. Returns
/// `max_iterations` for points that never escape.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    width: u32,
    height: u32,
    adjusted_bounds: ViewBounds,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.width, self.height, self.adjusted_bounds)?;

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    /// A validated request always has positive dimensions, so adjustment cannot fail.
    #[must_use]
    pub fn new(request: &RenderRequest) -> Self {
        let width = request.pixel_width();
        let height = request.pixel_height();
        let adjusted_bounds =
            adjust_bounds_to_aspect(request.bounds(), width, height).unwrap_or(request.bounds());

        Self {
            width,
            height,
            adjusted_bounds,
            max_iterations: request.max_iterations(),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn adjusted_bounds(&self) -> ViewBounds {
        self.adjusted_bounds
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, 100), 100);
        assert_eq!(escape_time(Complex::ZERO, 1), 1);
    }

    #[test]
    fn test_minus_one_cycles_and_stays_bounded() {
        // 0 -> -1 -> 0 -> -1 ...
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 500), 500);
    }

    #[test]
    fn test_two_sits_on_the_radius_before_escaping() {
        // z: 0 -> 2 (|z|² = 4, not > 4) -> 6 (|z|² = 36) so the check fires at i = 2.
        // A `>=` comparison would stop one step earlier.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 100), 2);
    }

    #[test]
    fn test_point_outside_radius_escapes_after_one_step() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 100), 1);
        assert_eq!(escape_time(Complex::new(0.0, -2.5), 100), 1);
    }

    #[test]
    fn test_escape_count_capped_by_max_iterations() {
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 2), 2);
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 1), 1);
    }

    #[test]
    fn test_algorithm_uses_aspect_adjusted_bounds() {
        let request = RenderRequest::new(400, 300, 100, ViewBounds::DEFAULT).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&request);

        assert!((algorithm.adjusted_bounds().real_range() - 16.0 / 3.0).abs() < 1e-12);
        assert_eq!(algorithm.adjusted_bounds().imag_range(), 4.0);
    }

    #[test]
    fn test_compute_centre_pixel_is_in_set() {
        // 4x4 over [-2, 2]²: pixel (2, 2) maps to the origin.
        let bounds = ViewBounds::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let request = RenderRequest::new(4, 4, 50, bounds).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&request);

        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(50));
    }

    #[test]
    fn test_compute_rejects_pixel_outside_grid() {
        let request = RenderRequest::new(4, 4, 50, ViewBounds::DEFAULT).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&request);

        assert!(algorithm.compute(Point { x: 4, y: 0 }).is_err());
    }
}

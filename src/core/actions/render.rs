//! The public render call: escape counts, then colours.

use log::debug;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::{InvalidArgumentError, RenderRequest};
use crate::core::data::view_bounds::ViewBounds;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::HslColourMap;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum RenderError {
    InvalidArgument(InvalidArgumentError),
    Algorithm(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<InvalidArgumentError> for RenderError {
    fn from(err: InvalidArgumentError) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one request into a fresh RGBA buffer.
///
/// Pure in its inputs and holds no shared state, so disjoint requests may be
/// rendered from several threads at once. Blocks for
/// O(width x height x max_iterations).
pub fn render(request: &RenderRequest) -> Result<PixelBuffer, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(request);
    let start = Instant::now();
    let iterations = generate_fractal(algorithm.width(), algorithm.height(), &algorithm)?;
    let colour_map = HslColourMap::new(algorithm.max_iterations());
    let pixel_buffer = generate_pixel_buffer(
        iterations,
        &colour_map,
        algorithm.width(),
        algorithm.height(),
        algorithm.adjusted_bounds(),
    )?;

    debug!(
        "rendered {}x{} at {} iterations over {} in {:?}",
        algorithm.width(),
        algorithm.height(),
        algorithm.max_iterations(),
        algorithm.adjusted_bounds(),
        start.elapsed()
    );

    Ok(pixel_buffer)
}

/// Validates the raw arguments, then renders.
pub fn render_view(
    pixel_width: u32,
    pixel_height: u32,
    max_iterations: u32,
    bounds: ViewBounds,
) -> Result<PixelBuffer, RenderError> {
    let request = RenderRequest::new(pixel_width, pixel_height, max_iterations, bounds)?;

    render(&request)
}

/// Renders independent requests concurrently, one rayon task per request.
///
/// Each render stays single-threaded; results come back in input order.
pub fn render_batch(requests: &[RenderRequest]) -> Vec<Result<PixelBuffer, RenderError>> {
    requests.par_iter().map(render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_render_produces_full_opaque_buffer() {
        let buffer = render_view(40, 30, 50, ViewBounds::DEFAULT).unwrap();

        assert_eq!(buffer.width(), 40);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.buffer().len(), 40 * 30 * 4);
        assert!(buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn test_render_exposes_adjusted_bounds() {
        let buffer = render_view(400, 300, 10, ViewBounds::DEFAULT).unwrap();
        let adjusted = buffer.adjusted_bounds();

        assert!((adjusted.real_min() - -3.1667).abs() < 1e-4);
        assert!((adjusted.real_max() - 2.1667).abs() < 1e-4);
        assert_eq!(adjusted.imag_min(), -2.0);
        assert_eq!(adjusted.imag_max(), 2.0);
    }

    #[test]
    fn test_render_colours_set_black_and_outside_red() {
        // 4x4 over [-2, 2]²: pixel (2, 2) is the origin, pixel (0, 0) is -2-2i.
        let bounds = ViewBounds::new(-2.0, 2.0, -2.0, 2.0).unwrap();
        let buffer = render_view(4, 4, 100, bounds).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }).unwrap(), Colour::BLACK);
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_render_rejects_invalid_arguments() {
        assert!(matches!(
            render_view(0, 10, 100, ViewBounds::DEFAULT),
            Err(RenderError::InvalidArgument(
                InvalidArgumentError::ZeroDimensions { width: 0, height: 10 }
            ))
        ));
        assert!(matches!(
            render_view(10, 10, 0, ViewBounds::DEFAULT),
            Err(RenderError::InvalidArgument(
                InvalidArgumentError::ZeroMaxIterations
            ))
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = RenderRequest::new(32, 24, 64, ViewBounds::DEFAULT).unwrap();

        assert_eq!(render(&request).unwrap(), render(&request).unwrap());
    }

    #[test]
    fn test_render_batch_matches_sequential_renders() {
        let requests: Vec<RenderRequest> = [
            ViewBounds::DEFAULT,
            ViewBounds::new(-0.8, -0.7, 0.05, 0.15).unwrap(),
            ViewBounds::new(-1.5, -1.0, -0.25, 0.25).unwrap(),
        ]
        .into_iter()
        .map(|bounds| RenderRequest::new(24, 16, 40, bounds).unwrap())
        .collect();

        let batch = render_batch(&requests);

        assert_eq!(batch.len(), requests.len());
        for (request, result) in requests.iter().zip(batch) {
            assert_eq!(result.unwrap(), render(request).unwrap());
        }
    }
}

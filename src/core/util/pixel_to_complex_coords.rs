use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_bounds::ViewBounds;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, width: u32, height: u32 },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid {
                point,
                width,
                height,
            } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x, point.y, width, height
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the (already aspect-adjusted) bounds.
///
/// Linear, origin top-left: `real = real_min + (x / width) * real_range`,
/// likewise for the imaginary axis. Pixel `(width, height)` itself is never
/// sampled.
pub fn pixel_to_complex_coords(
    pixel: Point,
    width: u32,
    height: u32,
    adjusted_bounds: ViewBounds,
) -> Result<Complex, PixelToComplexCoordsError> {
    let inside = pixel.x >= 0
        && pixel.y >= 0
        && (pixel.x as u32) < width
        && (pixel.y as u32) < height;

    if !inside {
        return Err(PixelToComplexCoordsError::PointOutsideGrid {
            point: pixel,
            width,
            height,
        });
    }

    let real = adjusted_bounds.real_min()
        + (f64::from(pixel.x) / f64::from(width)) * adjusted_bounds.real_range();
    let imag = adjusted_bounds.imag_min()
        + (f64::from(pixel.y) / f64::from(height)) * adjusted_bounds.imag_range();

    Ok(Complex { real, imag })
}

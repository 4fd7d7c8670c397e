//! Aspect-ratio correction shared by the renderer and the viewport controller.
//!
//! Rendering and zooming must agree on which rectangle of the plane a buffer
//! shows. Both call [`adjust_bounds_to_aspect`]; nothing else re-derives it.

use crate::core::data::render_request::InvalidArgumentError;
use crate::core::data::view_bounds::ViewBounds;

/// Widens `bounds` along one axis so it has the same aspect as a
/// `pixel_width` x `pixel_height` canvas.
///
/// When the canvas is relatively wider the real range becomes
/// `imag_range * canvas_aspect` around the same real centre; otherwise the
/// imaginary range becomes `real_range / canvas_aspect` around the same
/// imaginary centre. The result always contains the requested bounds.
pub fn adjust_bounds_to_aspect(
    bounds: ViewBounds,
    pixel_width: u32,
    pixel_height: u32,
) -> Result<ViewBounds, InvalidArgumentError> {
    if pixel_width == 0 || pixel_height == 0 {
        return Err(InvalidArgumentError::ZeroDimensions {
            width: pixel_width,
            height: pixel_height,
        });
    }

    let real_range = bounds.real_range();
    let imag_range = bounds.imag_range();
    let canvas_aspect = f64::from(pixel_width) / f64::from(pixel_height);
    let set_aspect = real_range / imag_range;

    if canvas_aspect == set_aspect {
        return Ok(bounds);
    }

    let centre = bounds.centre();

    if canvas_aspect > set_aspect {
        let adjusted_real_range = imag_range * canvas_aspect;

        Ok(ViewBounds::from_parts_unchecked(
            centre.real - adjusted_real_range / 2.0,
            centre.real + adjusted_real_range / 2.0,
            bounds.imag_min(),
            bounds.imag_max(),
        ))
    } else {
        let adjusted_imag_range = real_range / canvas_aspect;

        Ok(ViewBounds::from_parts_unchecked(
            bounds.real_min(),
            bounds.real_max(),
            centre.imag - adjusted_imag_range / 2.0,
            centre.imag + adjusted_imag_range / 2.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_square_canvas_and_square_bounds_are_unchanged() {
        let bounds = ViewBounds::DEFAULT;

        for size in [1, 7, 256, 1000] {
            assert_eq!(adjust_bounds_to_aspect(bounds, size, size).unwrap(), bounds);
        }
    }

    #[test]
    fn test_wide_canvas_widens_real_axis() {
        // 400x300 at the default view: real range 4.0 * 4/3 around -0.5
        let adjusted = adjust_bounds_to_aspect(ViewBounds::DEFAULT, 400, 300).unwrap();

        assert!((adjusted.real_range() - 16.0 / 3.0).abs() < TOLERANCE);
        assert!((adjusted.real_min() - (-0.5 - 8.0 / 3.0)).abs() < TOLERANCE);
        assert!((adjusted.real_max() - (-0.5 + 8.0 / 3.0)).abs() < TOLERANCE);
        assert!((adjusted.real_min() - -3.1667).abs() < 1e-4);
        assert!((adjusted.real_max() - 2.1667).abs() < 1e-4);
        assert_eq!(adjusted.imag_min(), -2.0);
        assert_eq!(adjusted.imag_max(), 2.0);
    }

    #[test]
    fn test_tall_canvas_widens_imaginary_axis() {
        let bounds = ViewBounds::new(-1.0, 1.0, -0.5, 0.5).unwrap();
        let adjusted = adjust_bounds_to_aspect(bounds, 100, 200).unwrap();

        assert_eq!(adjusted.real_min(), -1.0);
        assert_eq!(adjusted.real_max(), 1.0);
        assert!((adjusted.imag_range() - 4.0).abs() < TOLERANCE);
        assert!((adjusted.centre().imag - 0.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_adjusted_bounds_contain_requested_bounds() {
        let bounds = ViewBounds::new(-0.8, -0.7, 0.05, 0.25).unwrap();

        for (width, height) in [(640, 480), (480, 640), (1920, 1080), (3, 1000)] {
            let adjusted = adjust_bounds_to_aspect(bounds, width, height).unwrap();
            let aspect = f64::from(width) / f64::from(height);

            assert!(adjusted.real_min() <= bounds.real_min());
            assert!(adjusted.real_max() >= bounds.real_max());
            assert!(adjusted.imag_min() <= bounds.imag_min());
            assert!(adjusted.imag_max() >= bounds.imag_max());
            assert!((adjusted.real_range() / adjusted.imag_range() - aspect).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            adjust_bounds_to_aspect(ViewBounds::DEFAULT, 0, 10),
            Err(InvalidArgumentError::ZeroDimensions {
                width: 0,
                height: 10
            })
        );
    }
}

use crate::core::data::render_request::InvalidArgumentError;

/// Where the displayed buffer sits on screen: its pixel size and the screen
/// coordinates of its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BufferPlacement {
    width_pixels: u32,
    height_pixels: u32,
    origin_screen_x: f64,
    origin_screen_y: f64,
}

impl BufferPlacement {
    pub fn new(
        width_pixels: u32,
        height_pixels: u32,
        origin_screen_x: f64,
        origin_screen_y: f64,
    ) -> Result<Self, InvalidArgumentError> {
        if width_pixels == 0 || height_pixels == 0 {
            return Err(InvalidArgumentError::ZeroDimensions {
                width: width_pixels,
                height: height_pixels,
            });
        }

        Ok(Self {
            width_pixels,
            height_pixels,
            origin_screen_x,
            origin_screen_y,
        })
    }

    /// Buffer centred on the given screen point.
    pub fn centred(
        width_pixels: u32,
        height_pixels: u32,
        centre_screen_x: f64,
        centre_screen_y: f64,
    ) -> Result<Self, InvalidArgumentError> {
        Self::new(
            width_pixels,
            height_pixels,
            centre_screen_x - f64::from(width_pixels) / 2.0,
            centre_screen_y - f64::from(height_pixels) / 2.0,
        )
    }

    /// Buffer drawn with its top-left corner at the screen origin.
    pub fn at_origin(width_pixels: u32, height_pixels: u32) -> Result<Self, InvalidArgumentError> {
        Self::new(width_pixels, height_pixels, 0.0, 0.0)
    }

    #[must_use]
    pub fn width_pixels(&self) -> u32 {
        self.width_pixels
    }

    #[must_use]
    pub fn height_pixels(&self) -> u32 {
        self.height_pixels
    }

    #[must_use]
    pub fn origin_screen_x(&self) -> f64 {
        self.origin_screen_x
    }

    #[must_use]
    pub fn origin_screen_y(&self) -> f64 {
        self.origin_screen_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centred_derives_origin_from_centre() {
        let placement = BufferPlacement::centred(400, 300, 500.0, 400.0).unwrap();

        assert_eq!(placement.origin_screen_x(), 300.0);
        assert_eq!(placement.origin_screen_y(), 250.0);
    }

    #[test]
    fn test_centred_odd_size_gives_half_pixel_origin() {
        let placement = BufferPlacement::centred(3, 5, 10.0, 10.0).unwrap();

        assert_eq!(placement.origin_screen_x(), 8.5);
        assert_eq!(placement.origin_screen_y(), 7.5);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert_eq!(
            BufferPlacement::at_origin(0, 10),
            Err(InvalidArgumentError::ZeroDimensions {
                width: 0,
                height: 10
            })
        );
    }
}

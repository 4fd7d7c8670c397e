use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const SATURATION: f64 = 0.8;
pub const LIGHTNESS: f64 = 0.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HslColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for HslColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for HslColourMapError {}

/// Standard six-sector HSL to RGB conversion.
///
/// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`. Channels are
/// rounded to the nearest integer.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let secondary = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let offset = lightness - chroma / 2.0;

    let (r, g, b) = if sector < 1.0 {
        (chroma, secondary, 0.0)
    } else if sector < 2.0 {
        (secondary, chroma, 0.0)
    } else if sector < 3.0 {
        (0.0, chroma, secondary)
    } else if sector < 4.0 {
        (0.0, secondary, chroma)
    } else if sector < 5.0 {
        (secondary, 0.0, chroma)
    } else {
        (chroma, 0.0, secondary)
    };

    let channel = |value: f64| ((value + offset) * 255.0).round().clamp(0.0, 255.0) as u8;

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Escape count to colour: black inside the set, otherwise a hue sweep
/// over `[0°, 360°)` at fixed saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColourMap {
    max_iterations: u32,
}

impl ColourMap<u32> for HslColourMap {
    type Failure = HslColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(HslColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let hue = iterations as f64 / self.max_iterations as f64 * 360.0;

        Ok(hsl_to_rgb(hue, SATURATION, LIGHTNESS))
    }

    fn display_name(&self) -> &str {
        "HSL hue sweep"
    }
}

impl HslColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        let mapper = HslColourMap::new(100);

        assert_eq!(mapper.map(100), Ok(Colour::BLACK));
    }

    #[test]
    fn test_map_zero_iterations_is_red() {
        // c = 0.8, x = 0, m = 0.1: (0.9, 0.1, 0.1) * 255 = (229.5, 25.49.., 25.49..)
        let mapper = HslColourMap::new(100);

        assert_eq!(mapper.map(0), Ok(Colour { r: 230, g: 25, b: 25 }));
    }

    #[test]
    fn test_map_quarter_is_yellow_green() {
        // hue 90°: second sector, x = 0.4
        let mapper = HslColourMap::new(100);

        assert_eq!(mapper.map(25), Ok(Colour { r: 128, g: 230, b: 25 }));
    }

    #[test]
    fn test_map_half_is_cyan() {
        let mapper = HslColourMap::new(100);

        assert_eq!(mapper.map(50), Ok(Colour { r: 25, g: 230, b: 230 }));
    }

    #[test]
    fn test_map_rejects_iterations_above_max() {
        let mapper = HslColourMap::new(100);

        assert_eq!(
            mapper.map(101),
            Err(HslColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }

    #[test]
    fn test_hsl_to_rgb_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hsl_to_rgb_greys_ignore_hue() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(45.0, 0.0, 1.0), Colour { r: 255, g: 255, b: 255 });
    }
}

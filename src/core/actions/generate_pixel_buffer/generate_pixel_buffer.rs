use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::view_bounds::ViewBounds;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours a row-major list of per-pixel values into an opaque RGBA buffer.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
    adjusted_bounds: ViewBounds,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    CMap::Failure: Send + Sync + 'static,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;

        buffer.extend_from_slice(&[r, g, b, 255]);
    }

    Ok(PixelBuffer::from_data(
        width,
        height,
        adjusted_bounds,
        buffer,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct StubColourMapError {}

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        type Failure = StubColourMapError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError {})
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_opaque_rgba_buffer() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results =
            generate_pixel_buffer(input, &StubColourMapSuccess {}, 3, 2, ViewBounds::DEFAULT)
                .unwrap();

        assert_eq!(
            results.buffer(),
            &vec![
                1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6,
                255
            ]
        );
        assert_eq!(results.width(), 3);
        assert_eq!(results.height(), 2);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let results =
            generate_pixel_buffer(input, &StubColourMapFailure {}, 2, 2, ViewBounds::DEFAULT);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let results =
            generate_pixel_buffer(input, &StubColourMapSuccess {}, 2, 2, ViewBounds::DEFAULT);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_colour_map_error_display() {
        let err = GeneratePixelBufferError::ColourMap(Box::new(StubColourMapError {}));

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}

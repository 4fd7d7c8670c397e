use crate::core::data::view_bounds::ViewBounds;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Caller supplied a render argument the kernel cannot work with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    ZeroDimensions { width: u32, height: u32 },
    ZeroMaxIterations,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimensions { width, height } => {
                write!(f, "pixel dimensions must be positive: {}x{}", width, height)
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for InvalidArgumentError {}

/// Snapshot of everything one render needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pixel_width: u32,
    pixel_height: u32,
    max_iterations: u32,
    bounds: ViewBounds,
}

impl RenderRequest {
    pub fn new(
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
        bounds: ViewBounds,
    ) -> Result<Self, InvalidArgumentError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(InvalidArgumentError::ZeroDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        if max_iterations == 0 {
            return Err(InvalidArgumentError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_width,
            pixel_height,
            max_iterations,
            bounds,
        })
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixel_width as usize * self.pixel_height as usize
    }
}

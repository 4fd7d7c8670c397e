use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidSelectionError {
    NonPositiveSize { size_pixels: f64 },
    NonFiniteCorner { local_x: f64, local_y: f64 },
    /// Normalised size collapsed to zero or overflowed, so the zoom factor would be infinite.
    DegenerateSize { size_pixels: f64, width_pixels: u32 },
}

impl fmt::Display for InvalidSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { size_pixels } => {
                write!(f, "selection size must be positive: {}", size_pixels)
            }
            Self::NonFiniteCorner { local_x, local_y } => {
                write!(
                    f,
                    "selection corner ({}, {}) is not a finite buffer position",
                    local_x, local_y
                )
            }
            Self::DegenerateSize {
                size_pixels,
                width_pixels,
            } => {
                write!(
                    f,
                    "selection of {} pixels is degenerate against a {} pixel wide buffer",
                    size_pixels, width_pixels
                )
            }
        }
    }
}

impl Error for InvalidSelectionError {}

/// User-drawn square in screen pixels: upper-left corner plus side length.
///
/// Coordinates live in the same space as the placement of the displayed
/// buffer. Square by construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SelectionRect {
    pub screen_x: f64,
    pub screen_y: f64,
    pub size_pixels: f64,
}

impl SelectionRect {
    #[must_use]
    pub const fn new(screen_x: f64, screen_y: f64, size_pixels: f64) -> Self {
        Self {
            screen_x,
            screen_y,
            size_pixels,
        }
    }
}

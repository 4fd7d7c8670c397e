use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewBoundsError {
    InvalidRange { real_range: f64, imag_range: f64 },
    NonFinite,
}

impl fmt::Display for ViewBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange {
                real_range,
                imag_range,
            } => {
                write!(
                    f,
                    "view bounds ranges must be positive: real {} imag {}",
                    real_range, imag_range
                )
            }
            Self::NonFinite => write!(f, "view bounds must be finite numbers"),
        }
    }
}

impl Error for ViewBoundsError {}

/// Rectangle of the complex plane.
///
/// Immutable: every zoom produces a fresh value, so a copy pushed onto the
/// zoom history can never be altered later.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBounds {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl ViewBounds {
    /// The classic full-set view.
    pub const DEFAULT: Self = Self {
        real_min: -2.5,
        real_max: 1.5,
        imag_min: -2.0,
        imag_max: 2.0,
    };

    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ViewBoundsError> {
        if ![real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ViewBoundsError::NonFinite);
        }

        let real_range = real_max - real_min;
        let imag_range = imag_max - imag_min;

        if real_range <= 0.0 || imag_range <= 0.0 {
            return Err(ViewBoundsError::InvalidRange {
                real_range,
                imag_range,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Caller guarantees `min < max` on both axes.
    pub(crate) fn from_parts_unchecked(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Self {
        Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        }
    }

    /// Builds bounds centred on `centre` with the given ranges.
    pub fn from_centre(
        centre: Complex,
        real_range: f64,
        imag_range: f64,
    ) -> Result<Self, ViewBoundsError> {
        Self::new(
            centre.real - real_range / 2.0,
            centre.real + real_range / 2.0,
            centre.imag - imag_range / 2.0,
            centre.imag + imag_range / 2.0,
        )
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn real_range(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_range(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: (self.real_min + self.real_max) / 2.0,
            imag: (self.imag_min + self.imag_max) / 2.0,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.real_min <= point.real
            && point.real <= self.real_max
            && self.imag_min <= point.imag
            && point.imag <= self.imag_max
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.real_min - other.real_min).abs() <= tolerance
            && (self.real_max - other.real_max).abs() <= tolerance
            && (self.imag_min - other.imag_min).abs() <= tolerance
            && (self.imag_max - other.imag_max).abs() <= tolerance
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ViewBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "re [{}, {}] im [{}, {}]",
            self.real_min, self.real_max, self.imag_min, self.imag_max
        )
    }
}

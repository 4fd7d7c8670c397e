use crate::core::data::render_request::InvalidArgumentError;
use crate::core::data::selection_rect::InvalidSelectionError;
use crate::core::data::view_bounds::ViewBoundsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    InvalidSelection(InvalidSelectionError),
    InvalidArgument(InvalidArgumentError),
    /// The zoomed view collapsed below floating-point resolution.
    Bounds(ViewBoundsError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection(err) => write!(f, "invalid selection: {}", err),
            Self::InvalidArgument(err) => write!(f, "invalid argument: {}", err),
            Self::Bounds(err) => write!(f, "zoomed view is not representable: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSelection(err) => Some(err),
            Self::InvalidArgument(err) => Some(err),
            Self::Bounds(err) => Some(err),
        }
    }
}

impl From<InvalidSelectionError> for ZoomError {
    fn from(err: InvalidSelectionError) -> Self {
        Self::InvalidSelection(err)
    }
}

impl From<InvalidArgumentError> for ZoomError {
    fn from(err: InvalidArgumentError) -> Self {
        Self::InvalidArgument(err)
    }
}

impl From<ViewBoundsError> for ZoomError {
    fn from(err: ViewBoundsError) -> Self {
        Self::Bounds(err)
    }
}

use std::error::Error;
use std::fmt;

use crate::core::data::buffer_placement::BufferPlacement;
use crate::core::data::render_request::{
    DEFAULT_MAX_ITERATIONS, InvalidArgumentError, RenderRequest,
};
use crate::core::data::selection_rect::SelectionRect;
use crate::core::data::view_bounds::ViewBounds;
use crate::core::viewport::controller::ViewportController;
use crate::core::viewport::errors::ZoomError;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SessionError {
    /// A zoom was requested before any frame was reported as displayed.
    NoFrameDisplayed,
    Zoom(ZoomError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrameDisplayed => write!(f, "no frame has been displayed yet"),
            Self::Zoom(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoFrameDisplayed => None,
            Self::Zoom(err) => Some(err),
        }
    }
}

impl From<ZoomError> for SessionError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

/// Everything one exploring user has: the viewport, the iteration budget
/// and where the last frame ended up on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerSession {
    viewport: ViewportController,
    max_iterations: u32,
    displayed: Option<BufferPlacement>,
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self {
            viewport: ViewportController::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            displayed: None,
        }
    }
}

impl ExplorerSession {
    pub fn new(home_bounds: ViewBounds, max_iterations: u32) -> Result<Self, InvalidArgumentError> {
        if max_iterations == 0 {
            return Err(InvalidArgumentError::ZeroMaxIterations);
        }

        Ok(Self {
            viewport: ViewportController::with_bounds(home_bounds),
            max_iterations,
            displayed: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn current_bounds(&self) -> ViewBounds {
        self.viewport.current_bounds()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), InvalidArgumentError> {
        if max_iterations == 0 {
            return Err(InvalidArgumentError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    /// Request for the current view at the given output size. Also the
    /// right call after a window resize: same bounds, new dimensions.
    pub fn render_request(
        &self,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<RenderRequest, InvalidArgumentError> {
        RenderRequest::new(
            pixel_width,
            pixel_height,
            self.max_iterations,
            self.viewport.current_bounds(),
        )
    }

    /// Records where the shell put the frame it is now showing.
    pub fn frame_displayed(&mut self, placement: BufferPlacement) {
        self.displayed = Some(placement);
    }

    #[must_use]
    pub fn displayed(&self) -> Option<BufferPlacement> {
        self.displayed
    }

    /// Zooms into a selection drawn over the displayed frame.
    ///
    /// Once the view changes the displayed frame no longer matches it, so
    /// further zooms fail with [`SessionError::NoFrameDisplayed`] until the
    /// shell reports the re-rendered frame through [`Self::frame_displayed`].
    pub fn zoom_in(&mut self, selection: SelectionRect) -> Result<ViewBounds, SessionError> {
        let placement = self.displayed.ok_or(SessionError::NoFrameDisplayed)?;
        let bounds = self.viewport.zoom_in(selection, placement)?;
        self.displayed = None;

        Ok(bounds)
    }

    pub fn zoom_out(&mut self) -> ViewBounds {
        if self.viewport.is_zoomed() {
            self.displayed = None;
        }

        self.viewport.zoom_out()
    }

    pub fn reset(&mut self) -> ViewBounds {
        if self.viewport.is_zoomed() {
            self.displayed = None;
        }

        self.viewport.reset()
    }
}

use log::debug;

use crate::core::data::buffer_placement::BufferPlacement;
use crate::core::data::complex::Complex;
use crate::core::data::selection_rect::{InvalidSelectionError, SelectionRect};
use crate::core::data::view_bounds::ViewBounds;
use crate::core::util::aspect_ratio::adjust_bounds_to_aspect;
use crate::core::viewport::errors::ZoomError;
use crate::core::viewport::history::ZoomHistory;

/// Owns the authoritative view and the zoom history of one session.
///
/// Two logical states: "at root" (empty history) and "zoomed". Not
/// synchronised; callers serialise `zoom_in` / `zoom_out` themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    home_bounds: ViewBounds,
    current_bounds: ViewBounds,
    history: ZoomHistory,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    /// Starts at the classic full-set view.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bounds(ViewBounds::DEFAULT)
    }

    #[must_use]
    pub fn with_bounds(home_bounds: ViewBounds) -> Self {
        Self {
            home_bounds,
            current_bounds: home_bounds,
            history: ZoomHistory::new(),
        }
    }

    #[must_use]
    pub fn current_bounds(&self) -> ViewBounds {
        self.current_bounds
    }

    #[must_use]
    pub fn history(&self) -> &ZoomHistory {
        &self.history
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        !self.history.is_empty()
    }

    /// Zooms into the square the user drew over the displayed buffer.
    ///
    /// The buffer showed the aspect-adjusted version of the current bounds,
    /// so the selection is mapped through the same adjustment. On error the
    /// controller is left untouched.
    pub fn zoom_in(
        &mut self,
        selection: SelectionRect,
        placement: BufferPlacement,
    ) -> Result<ViewBounds, ZoomError> {
        if !(selection.size_pixels > 0.0) {
            return Err(InvalidSelectionError::NonPositiveSize {
                size_pixels: selection.size_pixels,
            }
            .into());
        }

        let width = f64::from(placement.width_pixels());
        let height = f64::from(placement.height_pixels());

        let local_x = selection.screen_x - placement.origin_screen_x();
        let local_y = selection.screen_y - placement.origin_screen_y();

        if !(local_x.is_finite() && local_y.is_finite()) {
            return Err(InvalidSelectionError::NonFiniteCorner { local_x, local_y }.into());
        }

        let norm_x = local_x / width;
        let norm_y = local_y / height;
        let norm_size = selection.size_pixels / width;

        if !(norm_size > 0.0 && norm_size.is_finite()) {
            return Err(InvalidSelectionError::DegenerateSize {
                size_pixels: selection.size_pixels,
                width_pixels: placement.width_pixels(),
            }
            .into());
        }

        let adjusted = adjust_bounds_to_aspect(
            self.current_bounds,
            placement.width_pixels(),
            placement.height_pixels(),
        )?;

        let centre = Complex {
            real: adjusted.real_min() + (norm_x + norm_size / 2.0) * adjusted.real_range(),
            imag: adjusted.imag_min() + (norm_y + norm_size / 2.0) * adjusted.imag_range(),
        };

        let zoom_factor = 1.0 / norm_size;
        let new_bounds = ViewBounds::from_centre(
            centre,
            adjusted.real_range() / zoom_factor,
            adjusted.imag_range() / zoom_factor,
        )?;

        self.history.push(self.current_bounds);
        self.current_bounds = new_bounds;

        debug!(
            "zoom in x{:.3} to {} (depth {})",
            zoom_factor,
            new_bounds,
            self.history.len()
        );

        Ok(new_bounds)
    }

    /// Restores the view before the most recent zoom-in.
    ///
    /// With an empty history this is a no-op returning the current bounds.
    pub fn zoom_out(&mut self) -> ViewBounds {
        if let Some(previous) = self.history.pop() {
            self.current_bounds = previous;
            debug!(
                "zoom out to {} (depth {})",
                previous,
                self.history.len()
            );
        }

        self.current_bounds
    }

    /// Back to the home view with an empty history.
    pub fn reset(&mut self) -> ViewBounds {
        self.history.clear();
        self.current_bounds = self.home_bounds;

        self.current_bounds
    }
}

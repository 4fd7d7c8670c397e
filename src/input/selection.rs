//! Pointer drag to square selection.

use crate::core::data::selection_rect::SelectionRect;

/// Tracks one pointer drag and turns it into a square [`SelectionRect`].
///
/// The side is the smaller of the horizontal and vertical drag distances.
/// The square stays anchored at the point where the drag started and grows
/// in the direction of the drag on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionDrag {
    anchor: Option<(f64, f64)>,
}

impl SelectionDrag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.anchor = Some((x, y));
    }

    /// Live preview of the square while the pointer moves.
    #[must_use]
    pub fn pointer_move(&self, x: f64, y: f64) -> Option<SelectionRect> {
        let (anchor_x, anchor_y) = self.anchor?;

        Some(square_from_drag(anchor_x, anchor_y, x, y))
    }

    /// Finishes the drag. `None` when no drag was active or the square is empty.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<SelectionRect> {
        let (anchor_x, anchor_y) = self.anchor.take()?;
        let selection = square_from_drag(anchor_x, anchor_y, x, y);

        (selection.size_pixels > 0.0).then_some(selection)
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
    }
}

fn square_from_drag(anchor_x: f64, anchor_y: f64, x: f64, y: f64) -> SelectionRect {
    let dx = x - anchor_x;
    let dy = y - anchor_y;
    let size = dx.abs().min(dy.abs());

    SelectionRect {
        screen_x: if dx < 0.0 { anchor_x - size } else { anchor_x },
        screen_y: if dy < 0.0 { anchor_y - size } else { anchor_y },
        size_pixels: size,
    }
}

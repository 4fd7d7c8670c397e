use crate::core::data::view_bounds::ViewBounds;

/// LIFO stack of the views that preceded each zoom-in.
///
/// Never holds the current view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomHistory {
    snapshots: Vec<ViewBounds>,
}

impl ZoomHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bounds: ViewBounds) {
        self.snapshots.push(bounds);
    }

    pub fn pop(&mut self) -> Option<ViewBounds> {
        self.snapshots.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&ViewBounds> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Oldest snapshot first.
    pub fn iter(&self) -> impl Iterator<Item = &ViewBounds> {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(offset: f64) -> ViewBounds {
        ViewBounds::new(offset, offset + 1.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let mut history = ZoomHistory::new();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
        assert_eq!(history.peek(), None);
    }

    #[test]
    fn test_pops_in_lifo_order() {
        let mut history = ZoomHistory::new();
        history.push(bounds(0.0));
        history.push(bounds(1.0));
        history.push(bounds(2.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.peek(), Some(&bounds(2.0)));
        assert_eq!(history.pop(), Some(bounds(2.0)));
        assert_eq!(history.pop(), Some(bounds(1.0)));
        assert_eq!(history.pop(), Some(bounds(0.0)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_iter_is_oldest_first() {
        let mut history = ZoomHistory::new();
        history.push(bounds(0.0));
        history.push(bounds(5.0));

        let collected: Vec<ViewBounds> = history.iter().copied().collect();

        assert_eq!(collected, vec![bounds(0.0), bounds(5.0)]);

        history.clear();
        assert!(history.is_empty());
    }
}

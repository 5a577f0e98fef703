//! Drag Session
//!
//! Ephemeral gesture state. Created on drag start, consumed on drop or drag end,
//! never persisted.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    pub dragged_index: Option<usize>,
    /// Row under the pointer, for the insertion highlight
    pub drag_over_index: Option<usize>,
}

impl DragSession {
    pub fn begin(&mut self, index: usize) {
        self.dragged_index = Some(index);
        self.drag_over_index = None;
    }

    /// Ignored when hovering the dragged row itself
    pub fn over(&mut self, index: usize) {
        if self.dragged_index.is_some() && self.dragged_index != Some(index) {
            self.drag_over_index = Some(index);
        }
    }

    pub fn leave(&mut self) {
        self.drag_over_index = None;
    }

    pub fn is_active(&self) -> bool {
        self.dragged_index.is_some()
    }

    /// Consume the session, leaving it cleared
    pub fn take(&mut self) -> DragSession {
        std::mem::take(self)
    }

    pub fn clear(&mut self) {
        *self = DragSession::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_ignores_dragged_row() {
        let mut session = DragSession::default();
        session.begin(1);
        session.over(1);
        assert_eq!(session.drag_over_index, None);

        session.over(3);
        assert_eq!(session.drag_over_index, Some(3));
    }

    #[test]
    fn test_over_without_drag_is_ignored() {
        let mut session = DragSession::default();
        session.over(2);
        assert_eq!(session, DragSession::default());
    }

    #[test]
    fn test_leave_keeps_drag() {
        let mut session = DragSession::default();
        session.begin(0);
        session.over(2);
        session.leave();
        assert_eq!(session.dragged_index, Some(0));
        assert_eq!(session.drag_over_index, None);
    }

    #[test]
    fn test_take_clears() {
        let mut session = DragSession::default();
        session.begin(2);
        let taken = session.take();
        assert_eq!(taken.dragged_index, Some(2));
        assert!(!session.is_active());
    }
}

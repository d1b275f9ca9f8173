/// Drag session state for the interaction controller.
#[derive(Debug, Clone, PartialEq)]
enum DragState<T> {
    /// No active drag.
    Idle,
    /// An item is being dragged from `source`.
    Dragging { item: T, source: usize },
}

/// Transient state of one drag session, owned exclusively by the
/// controller.
///
/// All transitions go through methods so the Idle/Dragging lifecycle stays
/// auditable; nothing persists across sessions. A fresh session begins on
/// every accepted drag-start.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession<T> {
    state: DragState<T>,
    hover: Option<usize>,
}

impl<T> DragSession<T> {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            hover: None,
        }
    }

    /// Starts a session for `item` dragged from `source`.
    pub fn begin(&mut self, source: usize, item: T) {
        self.state = DragState::Dragging { item, source };
        self.hover = None;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn item(&self) -> Option<&T> {
        match &self.state {
            DragState::Dragging { item, .. } => Some(item),
            DragState::Idle => None,
        }
    }

    pub fn source_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            DragState::Idle => None,
        }
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    /// Updates the hovered target index. Only meaningful while dragging;
    /// harmless otherwise.
    pub fn set_hover(&mut self, index: Option<usize>) {
        self.hover = index;
    }

    /// Ends the session unconditionally, discarding any dragged item.
    /// Tolerant of an already-idle session.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
        self.hover = None;
    }

    /// Completes the session for a drop, yielding the source index and the
    /// dragged item. Returns `None` when idle.
    pub fn take_drop(&mut self) -> Option<(usize, T)> {
        self.hover = None;
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging { item, source } => Some((source, item)),
            DragState::Idle => None,
        }
    }
}

impl<T> Default for DragSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session: DragSession<&str> = DragSession::new();

        assert!(!session.is_dragging());
        assert_eq!(session.item(), None);
        assert_eq!(session.source_index(), None);
        assert_eq!(session.hover_index(), None);
    }

    #[test]
    fn test_begin_records_item_and_source() {
        let mut session = DragSession::new();
        session.begin(3, "card");

        assert!(session.is_dragging());
        assert_eq!(session.item(), Some(&"card"));
        assert_eq!(session.source_index(), Some(3));
        assert_eq!(session.hover_index(), None);
    }

    #[test]
    fn test_begin_clears_stale_hover() {
        let mut session = DragSession::new();
        session.begin(0, "a");
        session.set_hover(Some(2));

        session.begin(1, "b");
        assert_eq!(session.hover_index(), None);
    }

    #[test]
    fn test_end_resets_everything() {
        let mut session = DragSession::new();
        session.begin(0, "card");
        session.set_hover(Some(1));

        session.end();

        assert!(!session.is_dragging());
        assert_eq!(session.item(), None);
        assert_eq!(session.hover_index(), None);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut session: DragSession<&str> = DragSession::new();
        session.end();
        session.end();
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_take_drop_yields_source_and_item() {
        let mut session = DragSession::new();
        session.begin(2, "card");
        session.set_hover(Some(5));

        assert_eq!(session.take_drop(), Some((2, "card")));
        assert!(!session.is_dragging());
        assert_eq!(session.hover_index(), None);
    }

    #[test]
    fn test_take_drop_when_idle_is_none() {
        let mut session: DragSession<&str> = DragSession::new();
        assert_eq!(session.take_drop(), None);
    }
}

use crate::dragdrop::geometry::Point;

/// Hint to the host about the visual feedback for the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
    Copy,
    None,
}

/// A single drag event as delivered by the host environment.
///
/// Hosts construct one per native event (dragstart, dragover, dragend,
/// drop) and pass it to the matching [`DragController`] handler. After the
/// handler returns, [`default_prevented`] tells the host whether to
/// suppress its native default behavior.
///
/// [`DragController`]: crate::dragdrop::DragController
/// [`default_prevented`]: DragEvent::default_prevented
#[derive(Debug, Clone, PartialEq)]
pub struct DragEvent {
    pointer: Point,
    default_prevented: bool,
    drop_effect: Option<DropEffect>,
}

impl DragEvent {
    pub fn new(pointer: Point) -> Self {
        Self {
            pointer,
            default_prevented: false,
            drop_effect: None,
        }
    }

    /// Pointer position at the time of the event.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(crate) fn set_drop_effect(&mut self, effect: DropEffect) {
        self.drop_effect = Some(effect);
    }

    /// Drop-effect hint set during handling, if any.
    pub fn drop_effect(&self) -> Option<DropEffect> {
        self.drop_effect
    }
}

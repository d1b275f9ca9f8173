use crate::dragdrop::geometry::Rect;

/// Supplies the bounding rectangles of a container's drop targets.
///
/// Hosts mark which of the container's children are eligible targets and
/// report their rectangles here, in layout order; the index of a rectangle
/// in the returned vector is the hover/drop index the controller reports.
pub trait DropTargets {
    fn target_rects(&self) -> Vec<Rect>;
}

impl DropTargets for Vec<Rect> {
    fn target_rects(&self) -> Vec<Rect> {
        self.clone()
    }
}

impl<P: DropTargets> DropTargets for std::cell::RefCell<P> {
    fn target_rects(&self) -> Vec<Rect> {
        self.borrow().target_rects()
    }
}

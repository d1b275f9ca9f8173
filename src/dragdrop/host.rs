use crate::dragdrop::geometry::{Point, Size};

/// Host-environment adapter for drag preview handling.
///
/// The controller synthesizes one preview element per accepted drag and
/// owns its lifecycle: `mount_preview` at drag-start is always paired with
/// exactly one `unmount_preview` at drag-end, on every exit path including
/// cancellation.
pub trait DragHost {
    /// The host's renderable element type. Previews are produced detached
    /// from the live scene; the controller hands them here for mounting.
    type Element;

    /// Attaches the preview off-screen so it never flashes in its original
    /// layout slot, and reports its rendered size.
    fn mount_preview(&mut self, element: &Self::Element) -> Size;

    /// Registers the mounted preview as the native drag image, anchored at
    /// `anchor` relative to the preview's own origin.
    fn set_drag_image(&mut self, element: &Self::Element, anchor: Point);

    /// Detaches a previously mounted preview.
    fn unmount_preview(&mut self, element: &Self::Element);
}

use crate::dragdrop::{
    event::{DragEvent, DropEffect},
    host::DragHost,
    session::DragSession,
    targets::DropTargets,
};
use std::rc::Rc;
use tracing::debug;

type DragStartFn<T> = Box<dyn FnMut(usize, &T, &DragEvent)>;
type DragEndFn = Box<dyn FnMut(&DragEvent)>;
type DropFn<T> = Box<dyn FnMut(usize, usize, &T, &DragEvent)>;

/// Construction-time configuration for a [`DragController`].
///
/// `get_preview` is the only required piece: it produces a detached,
/// fully-formed element representing the dragged entity, which the
/// controller mounts as the native drag image for the session.
pub struct DragConfig<T, E> {
    on_drag_start: Option<DragStartFn<T>>,
    on_drag_end: Option<DragEndFn>,
    on_drop: Option<DropFn<T>>,
    can_drag: Box<dyn Fn(&T) -> bool>,
    get_preview: Box<dyn Fn(&DragEvent, &T) -> E>,
}

impl<T, E> DragConfig<T, E> {
    pub fn new(get_preview: impl Fn(&DragEvent, &T) -> E + 'static) -> Self {
        Self {
            on_drag_start: None,
            on_drag_end: None,
            on_drop: None,
            can_drag: Box::new(|_| true),
            get_preview: Box::new(get_preview),
        }
    }

    /// Predicate gating whether a drag may begin. Defaults to always-true.
    pub fn with_can_drag(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.can_drag = Box::new(predicate);
        self
    }

    /// Notified after a drag is accepted.
    pub fn with_on_drag_start(
        mut self,
        callback: impl FnMut(usize, &T, &DragEvent) + 'static,
    ) -> Self {
        self.on_drag_start = Some(Box::new(callback));
        self
    }

    /// Notified whenever a drag session ends, dropped or not.
    pub fn with_on_drag_end(mut self, callback: impl FnMut(&DragEvent) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }

    /// Notified only on a successful reorder, with `(from, to, item, event)`.
    pub fn with_on_drop(
        mut self,
        callback: impl FnMut(usize, usize, &T, &DragEvent) + 'static,
    ) -> Self {
        self.on_drop = Some(Box::new(callback));
        self
    }
}

/// Drag-and-drop interaction controller for a reorderable container.
///
/// Owns the transient session state and the synthesized preview element,
/// and converts the host's four drag events into the semantic lifecycle
/// callbacks configured in [`DragConfig`]. The controller only reports an
/// intended move on drop; mutating the backing list is the caller's job.
pub struct DragController<T, H: DragHost> {
    config: DragConfig<T, H::Element>,
    session: DragSession<T>,
    host: H,
    targets: Option<Rc<dyn DropTargets>>,
    preview: Option<H::Element>,
}

impl<T, H: DragHost> DragController<T, H> {
    pub fn new(host: H, config: DragConfig<T, H::Element>) -> Self {
        Self {
            config,
            session: DragSession::new(),
            host,
            targets: None,
            preview: None,
        }
    }

    /// Records the container whose marked children are drop targets. Until
    /// this is called, drag-over handling cannot resolve a hover target.
    pub fn register_container(&mut self, targets: Rc<dyn DropTargets>) {
        self.targets = Some(targets);
    }

    /// Entry point for the host's drag-start event.
    ///
    /// A drag rejected by `can_drag` cancels the native initiation and
    /// changes no state. An accepted drag opens a fresh session, mounts the
    /// preview anchored at its center, and fires `on_drag_start`.
    pub fn handle_drag_start(&mut self, index: usize, event: &mut DragEvent, item: T) {
        if !(self.config.can_drag)(&item) {
            event.prevent_default();
            return;
        }

        let element = (self.config.get_preview)(event, &item);
        let size = self.host.mount_preview(&element);
        self.host.set_drag_image(&element, size.center());
        self.preview = Some(element);
        event.set_drop_effect(DropEffect::Move);

        self.session.begin(index, item);
        debug!(index, "drag session started");

        if let Some(on_drag_start) = &mut self.config.on_drag_start {
            if let Some(item) = self.session.item() {
                on_drag_start(index, item, event);
            }
        }
    }

    /// Entry point for the host's drag-end event.
    ///
    /// Fires on every session exit the host reports: successful drop, drop
    /// outside any target, or cancellation. Releases the preview exactly
    /// once and is tolerant of an already-idle session and repeated calls.
    pub fn handle_drag_end(&mut self, event: &mut DragEvent) {
        event.prevent_default();

        if let Some(element) = self.preview.take() {
            self.host.unmount_preview(&element);
        }
        self.session.end();

        if let Some(on_drag_end) = &mut self.config.on_drag_end {
            on_drag_end(event);
        }
    }

    /// Entry point for the host's drag-over event.
    ///
    /// Resolves the hovered target by hit-testing the pointer against the
    /// registered container's target rectangles. When rectangles overlap,
    /// the last one in layout order wins. No-op unless a drag is in
    /// progress and a container is registered.
    pub fn handle_drag_over(&mut self, event: &mut DragEvent) {
        event.prevent_default();

        if !self.session.is_dragging() {
            return;
        }
        let Some(targets) = &self.targets else {
            return;
        };

        let pointer = event.pointer();
        let mut hover = None;
        for (index, rect) in targets.target_rects().iter().enumerate() {
            if rect.contains(pointer) {
                hover = Some(index);
            }
        }
        self.session.set_hover(hover);
    }

    /// Entry point for the host's drop event.
    ///
    /// Reports the intended move through `on_drop` and resets the session.
    /// Dropping with no active drag, no resolved hover, or onto the origin
    /// index is a silent no-op. The preview stays mounted here; the native
    /// drag-end that follows releases it.
    pub fn handle_drop(&mut self, event: &mut DragEvent) {
        event.prevent_default();

        if !self.session.is_dragging() {
            return;
        }
        let (Some(target), Some(source)) = (self.session.hover_index(), self.session.source_index())
        else {
            return;
        };
        if target == source {
            return;
        }

        if let Some((source, item)) = self.session.take_drop() {
            debug!(from = source, to = target, "drop accepted");
            if let Some(on_drop) = &mut self.config.on_drop {
                on_drop(source, target, &item, event);
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn dragged_item(&self) -> Option<&T> {
        self.session.item()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.session.source_index()
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.session.hover_index()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

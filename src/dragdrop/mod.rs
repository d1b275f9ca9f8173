//! Drag-and-drop interaction for reorderable board layouts.
//!
//! The controller converts low-level drag events into three semantic
//! lifecycle callbacks (drag-start, drag-end, drop) while maintaining a
//! consistent view of what is being dragged and which target is hovered.
//! It never mutates the caller's item list; a drop only reports the
//! intended move.

pub mod controller;
pub mod event;
pub mod geometry;
pub mod host;
pub mod session;
pub mod targets;

pub use controller::{DragConfig, DragController};
pub use event::{DragEvent, DropEffect};
pub use geometry::{Point, Rect, Size};
pub use host::DragHost;
pub use session::DragSession;
pub use targets::DropTargets;

//! # Boardkit
//!
//! UI-agnostic building blocks for board-style interfaces: a drag-and-drop
//! interaction state machine, board/entity type contracts, and a typed
//! key-value persistence layer.
//!
//! This crate provides the interaction and persistence logic for reorderable
//! board layouts without any dependency on a specific UI toolkit, DOM, or
//! storage backend. Hosts adapt their environment through the [`DragHost`]
//! and [`DropTargets`] traits; persistence backends plug in through
//! [`KeyValueStore`].

pub mod domain;
pub mod dragdrop;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    entity::{Board, BoardEntity, BoardItem},
    user_info::{Avatar, UserInfo, UserInfoData},
};
pub use dragdrop::{
    controller::{DragConfig, DragController},
    event::{DragEvent, DropEffect},
    geometry::{Point, Rect, Size},
    host::DragHost,
    session::DragSession,
    targets::DropTargets,
};
pub use error::{BoardkitError, Result};
pub use storage::{KeyValueStore, StorageService};

//! Drag state for gesture tracking

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};

/// Current gesture state
///
/// A window is never moved and resized at once: the header starts a move,
/// the edge and corner handles start a resize, and the two regions are
/// disjoint.
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Offset from window origin to pointer at gesture start
        offset: Vec2,
    },
    /// Resizing a window
    ResizeWindow {
        /// Window being resized
        window_id: WindowId,
        /// Which resize handle
        handle: WindowRegion,
        /// Window position at start
        start_pos: Vec2,
        /// Window size at start
        start_size: Size,
        /// Pointer position at start
        start_pointer: Vec2,
    },
}

impl DragState {
    /// Check if this is a window move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow { .. })
    }

    /// Get the window ID this gesture targets
    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } => *window_id,
            DragState::ResizeWindow { window_id, .. } => *window_id,
        }
    }
}

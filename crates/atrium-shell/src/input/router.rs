//! Gesture state machine
//!
//! Idle until a pointer-down on a header or resize handle starts a
//! gesture; pointer-up is the only way back to Idle.

use crate::math::{Size, Vec2};
use crate::window::{WindowId, WindowRegion};
use super::DragState;

/// Input router managing the active gesture
pub struct InputRouter {
    /// Current gesture state (None = idle)
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current gesture state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a window move gesture
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Start a window resize gesture
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: WindowRegion,
        start_pos: Vec2,
        start_size: Size,
        start_pointer: Vec2,
    ) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_pointer,
        });
    }

    /// End the current gesture, returning its final state
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}

//! Input result types

use serde::Serialize;
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled by the shell
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input should be forwarded to the hosted app
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}

/// Final geometry reported when a gesture completes.
///
/// Emitted exactly once per gesture, on pointer-up, for the owner to
/// persist; intermediate frames are not reported.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GestureEnd {
    /// A move gesture finished
    Moved {
        window_id: WindowId,
        position: Vec2,
    },
    /// A resize gesture finished
    Resized {
        window_id: WindowId,
        position: Vec2,
        size: Size,
    },
}

impl GestureEnd {
    /// Get the window ID the gesture targeted
    pub fn window_id(&self) -> WindowId {
        match self {
            GestureEnd::Moved { window_id, .. } => *window_id,
            GestureEnd::Resized { window_id, .. } => *window_id,
        }
    }
}

//! Per-frame view data for the JS layer

use crate::math::Rect;
use crate::window::{WindowId, WindowState};
use super::ShellEngine;

/// Window data the view layer renders each frame
#[derive(Clone, Debug)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub app_id: String,
    pub state: WindowState,
    pub focused: bool,
    pub rect: Rect,
    /// Opacity for lifecycle transitions (0.0 = invisible, 1.0 = fully visible)
    pub opacity: f32,
    /// Whether the frame keeps its rounded corners (removed when maximized)
    pub rounded: bool,
}

impl ShellEngine {
    /// Get window views for rendering, back to front.
    ///
    /// Minimized windows are excluded; windows still animating a minimize
    /// or close remain visible with a fading opacity until the transition
    /// commits.
    pub fn window_views(&self, now_ms: f64) -> Vec<WindowView> {
        let focused_id = self.windows.focused();

        self.windows
            .windows_by_z()
            .into_iter()
            .filter(|w| w.state != WindowState::Minimized)
            .map(|w| WindowView {
                id: w.id,
                title: w.title.clone(),
                app_id: w.app_id.clone(),
                state: w.state,
                focused: focused_id == Some(w.id),
                rect: w.rect(),
                opacity: self.window_opacity(w.id, now_ms),
                rounded: w.state != WindowState::Maximized,
            })
            .collect()
    }
}

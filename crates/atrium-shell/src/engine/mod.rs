//! Shell engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window operations and the application catalog
//! - `input`: Pointer event handling and drag/resize gestures
//! - `lifecycle`: Animation-gated minimize/restore/close transitions
//! - `rendering`: Per-frame view data for the JS layer

mod windows;
mod input;
mod lifecycle;
mod rendering;

use std::collections::HashMap;
use crate::input::InputRouter;
use crate::layout::LayoutMode;
use crate::transition::LifecycleTransition;
use crate::viewport::Viewport;
use crate::window::{WindowId, WindowManager};

pub use rendering::WindowView;

/// Shell engine coordinating the window registry, gestures, and
/// lifecycle animations
///
/// This is the main entry point for shell operations, managing:
/// - Viewport state and layout mode
/// - Window registry (open/close, focus, z-order, geometry)
/// - Input router (drag/resize state machine)
/// - Lifecycle transitions (minimize/restore/close animations)
pub struct ShellEngine {
    /// Current viewport
    pub viewport: Viewport,
    /// Window registry
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// In-flight lifecycle transitions by window
    pub(crate) lifecycle: HashMap<WindowId, LifecycleTransition>,
}

impl Default for ShellEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellEngine {
    /// Create a new shell engine
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            windows: WindowManager::new(),
            input: InputRouter::new(),
            lifecycle: HashMap::new(),
        }
    }

    /// Initialize the shell with viewport dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.viewport.set_size(width, height);
    }

    /// Get the current layout mode
    #[inline]
    pub fn layout_mode(&self) -> LayoutMode {
        self.viewport.layout_mode()
    }

    /// Resize the viewport.
    ///
    /// Every window is re-clamped against the new bounds; on a Phone
    /// layout, normal windows are auto-maximized instead of being left
    /// clipped.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.set_size(width, height);
        self.windows.reclamp_all(&self.viewport);

        if self.viewport.layout_mode().is_phone() {
            let normal: Vec<WindowId> = self
                .windows
                .all_windows()
                .filter(|w| w.state == crate::window::WindowState::Normal)
                .map(|w| w.id)
                .collect();
            for id in normal {
                self.windows.force_maximize(id, &self.viewport);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Size, Vec2};
    use crate::window::{WindowConfig, WindowState};

    #[test]
    fn test_engine_init() {
        let mut engine = ShellEngine::new();
        engine.init(1920.0, 1080.0);

        assert!((engine.viewport.size.width - 1920.0).abs() < 0.001);
        assert_eq!(engine.layout_mode(), LayoutMode::Desktop);
    }

    #[test]
    fn test_resize_reclamps_windows() {
        let mut engine = ShellEngine::new();
        engine.init(1920.0, 1080.0);

        let id = engine.open_window(WindowConfig {
            title: "Notes".to_string(),
            app_id: "notes".to_string(),
            position: Some(Vec2::new(1100.0, 500.0)),
            size: Size::new(700.0, 500.0),
            ..Default::default()
        });

        engine.resize(1280.0, 800.0);

        let window = engine.windows.get(id).unwrap();
        assert!(window.rect().right() <= 1280.0 + 0.001);
        assert!(window.rect().bottom() <= 800.0 + 0.001);
    }

    #[test]
    fn test_resize_to_phone_auto_maximizes() {
        let mut engine = ShellEngine::new();
        engine.init(1920.0, 1080.0);

        let id = engine.open_window(WindowConfig {
            title: "Notes".to_string(),
            app_id: "notes".to_string(),
            position: Some(Vec2::new(100.0, 100.0)),
            size: Size::new(700.0, 500.0),
            ..Default::default()
        });

        engine.resize(600.0, 800.0);

        assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Maximized);
    }

    #[test]
    fn test_resize_above_phone_keeps_normal() {
        let mut engine = ShellEngine::new();
        engine.init(1920.0, 1080.0);

        let id = engine.open_window(WindowConfig {
            title: "Notes".to_string(),
            app_id: "notes".to_string(),
            position: Some(Vec2::new(100.0, 100.0)),
            size: Size::new(700.0, 500.0),
            ..Default::default()
        });

        engine.resize(1100.0, 800.0);

        assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);
    }
}

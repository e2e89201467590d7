//! WASM exports for the shell
//!
//! This module provides wasm-bindgen exports for the ShellEngine,
//! allowing the JS view layer to drive the shell directly.

use wasm_bindgen::prelude::*;

use crate::engine::ShellEngine;
use crate::persistence::Snapshot;
use crate::window::WindowState;

// Import js_sys::Date for timestamps
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Shell controller for WASM - wraps ShellEngine with a JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    engine: ShellEngine,
}

#[wasm_bindgen]
impl ShellController {
    /// Create a new shell controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: ShellEngine::new(),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the shell with viewport dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    /// Get the current layout mode ("desktop", "tablet", "phone")
    #[wasm_bindgen]
    pub fn layout_mode(&self) -> String {
        self.engine.layout_mode().as_str().to_string()
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Launch an application, opening or refocusing its window
    #[wasm_bindgen]
    pub fn launch_app(&mut self, app_id: &str) -> u64 {
        self.engine.launch_app(app_id)
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) {
        self.engine.focus_window(id);
    }

    /// Move a window (clamped)
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: f32, y: f32) {
        self.engine.move_window(id, x, y);
    }

    /// Resize a window (clamped)
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: u64, width: f32, height: f32) {
        self.engine.resize_window(id, width, height);
    }

    /// Toggle a window between normal and maximized
    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) {
        self.engine.toggle_maximize_window(id);
    }

    /// Start the minimize animation for a window
    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) {
        self.engine.request_minimize(id, date_now());
    }

    /// Restore a minimized window from the taskbar
    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) {
        self.engine.request_restore(id, date_now());
    }

    /// Start the close animation for a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.engine.request_close(id, date_now());
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.engine.windows.focused()
    }

    /// Get all windows as JSON (taskbar view, including minimized)
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        let focused_id = self.engine.windows.focused();

        let mut windows: Vec<_> = self.engine.windows.all_windows().collect();
        windows.sort_by_key(|w| w.id);

        let entries: Vec<serde_json::Value> = windows
            .iter()
            .map(|w| {
                serde_json::json!({
                    "id": w.id,
                    "title": w.title,
                    "appId": w.app_id,
                    "position": { "x": w.position.x, "y": w.position.y },
                    "size": { "width": w.size.width, "height": w.size.height },
                    "state": window_state_to_str(w.state),
                    "zOrder": w.z_order,
                    "focused": focused_id == Some(w.id)
                })
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y, date_now());
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle double click event
    #[wasm_bindgen]
    pub fn double_click(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_double_click(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// CSS cursor for the pointer position, for the view layer to apply
    /// on hover and during gestures
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine.cursor_at(x, y).to_string()
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_move(x, y);
        serde_json::to_string(&result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
    }

    /// Handle pointer up event; returns the final gesture geometry once
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        match self.engine.handle_pointer_up() {
            Some(end) => {
                serde_json::to_string(&end).unwrap_or_else(|_| r#"{"type":"none"}"#.to_string())
            }
            None => r#"{"type":"none"}"#.to_string(),
        }
    }

    /// Start a window drag from the view layer's header handle
    #[wasm_bindgen]
    pub fn start_window_drag(&mut self, window_id: u64, x: f32, y: f32) {
        self.engine.start_move_drag(window_id, x, y);
    }

    /// Start a window resize from one of the view layer's handles
    #[wasm_bindgen]
    pub fn start_window_resize(&mut self, window_id: u64, direction: &str, x: f32, y: f32) {
        self.engine.start_resize_drag(window_id, direction, x, y);
    }

    // =========================================================================
    // Unified Frame Tick
    // =========================================================================

    /// Unified frame tick - commits lifecycle transitions and returns
    /// complete frame data
    #[wasm_bindgen]
    pub fn tick_frame(&mut self) -> String {
        let now = date_now();
        let animating = self.engine.tick_lifecycle(now);

        let windows: Vec<serde_json::Value> = self
            .engine
            .window_views(now)
            .into_iter()
            .enumerate()
            .map(|(z_order, v)| {
                serde_json::json!({
                    "id": v.id,
                    "title": v.title,
                    "appId": v.app_id,
                    "state": window_state_to_str(v.state),
                    "focused": v.focused,
                    "zOrder": z_order,
                    "opacity": v.opacity,
                    "rounded": v.rounded,
                    "rect": {
                        "x": v.rect.x,
                        "y": v.rect.y,
                        "width": v.rect.width,
                        "height": v.rect.height
                    }
                })
            })
            .collect();

        serde_json::to_string(&serde_json::json!({
            "viewport": {
                "width": self.engine.viewport.size.width,
                "height": self.engine.viewport.size.height
            },
            "layoutMode": self.engine.layout_mode().as_str(),
            "animating": animating,
            "windows": windows
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Export the open window set as JSON
    #[wasm_bindgen]
    pub fn export_snapshot(&self) -> String {
        serde_json::to_string(&self.engine.export_snapshot())
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Re-open windows from a JSON snapshot; returns false on a payload
    /// this shell version cannot apply
    #[wasm_bindgen]
    pub fn import_snapshot(&mut self, json: &str) -> bool {
        let snapshot: Snapshot = match serde_json::from_str(json) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                web_sys::console::warn_1(&format!("snapshot decode failed: {err}").into());
                return false;
            }
        };

        match self.engine.import_snapshot(snapshot) {
            Ok(()) => true,
            Err(err) => {
                web_sys::console::warn_1(&format!("snapshot rejected: {err}").into());
                false
            }
        }
    }
}

/// Convert WindowState to JSON-friendly string
fn window_state_to_str(state: WindowState) -> &'static str {
    match state {
        WindowState::Normal => "normal",
        WindowState::Minimized => "minimized",
        WindowState::Maximized => "maximized",
    }
}

impl Default for ShellController {
    fn default() -> Self {
        Self::new()
    }
}

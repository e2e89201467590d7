//! Pointer event handling and drag/resize gestures

use crate::input::{calculate_resize, DragState, GestureEnd, InputResult};
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion, WindowState};
use super::ShellEngine;

impl ShellEngine {
    /// Start a move gesture from the view layer's header handle.
    ///
    /// Maximized windows are not draggable.
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) {
        let window_position = match self.windows.get(id) {
            Some(window) if window.state != WindowState::Maximized => window.position,
            _ => return,
        };

        self.windows.focus(id);
        let offset = Vec2::new(x, y) - window_position;
        self.input.start_window_move(id, offset);
    }

    /// Start a resize gesture from one of the view layer's handles
    pub fn start_resize_drag(&mut self, id: WindowId, direction: &str, x: f32, y: f32) {
        let handle = match parse_resize_direction(direction) {
            Some(handle) => handle,
            None => return,
        };

        let (position, size) = match self.windows.get(id) {
            Some(window) if window.state != WindowState::Maximized => (window.position, window.size),
            _ => return,
        };

        self.windows.focus(id);
        self.input
            .start_window_resize(id, handle, position, size, Vec2::new(x, y));
    }

    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, now_ms: f64) -> InputResult {
        let pos = Vec2::new(x, y);

        let (window_id, region) = match self.windows.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.request_close(window_id, now_ms);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.request_minimize(window_id, now_ms);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.windows.focus(window_id);
                self.toggle_maximize_window(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.start_move_drag(window_id, x, y);
                // A maximized window refuses the drag but still takes focus
                self.windows.focus(window_id);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.windows.focus(window_id);
                let window = match self.windows.get(window_id) {
                    Some(w) => w,
                    None => return InputResult::Unhandled,
                };
                let local = pos - window.position;
                InputResult::Forward {
                    window_id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            handle if handle.is_resize() => {
                self.windows.focus(window_id);
                if let Some(window) = self.windows.get(window_id) {
                    self.input.start_window_resize(
                        window_id,
                        handle,
                        window.position,
                        window.size,
                        pos,
                    );
                }
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Handle a double click: double-clicking the title bar toggles
    /// maximize
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);

        if let Some((window_id, WindowRegion::TitleBar)) = self.windows.region_at(pos) {
            self.windows.focus(window_id);
            self.toggle_maximize_window(window_id);
            return InputResult::Handled;
        }
        InputResult::Unhandled
    }

    /// Handle pointer move: applies clamped geometry synchronously, every
    /// event
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);

        let drag = match self.input.drag_state() {
            Some(state) => state.clone(),
            None => return InputResult::Unhandled,
        };

        match drag {
            DragState::MoveWindow { window_id, offset } => {
                let candidate = pointer - offset;
                self.windows
                    .move_window(window_id, candidate, &self.viewport);
                InputResult::Handled
            }
            DragState::ResizeWindow {
                window_id,
                handle,
                start_pos,
                start_size,
                start_pointer,
            } => {
                let min_size = match self.windows.get(window_id) {
                    Some(window) => window.min_size,
                    None => return InputResult::Unhandled,
                };

                let delta = pointer - start_pointer;
                let (new_pos, new_size) = calculate_resize(
                    handle,
                    start_pos,
                    start_size,
                    delta,
                    min_size,
                    self.viewport.size,
                );
                self.windows
                    .set_geometry(window_id, new_pos, new_size, &self.viewport);
                InputResult::Handled
            }
        }
    }

    /// CSS cursor for the given pointer position.
    ///
    /// An active gesture keeps its cursor no matter what the pointer is
    /// over; otherwise the hovered region decides.
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        if let Some(drag) = self.input.drag_state() {
            return match drag {
                DragState::MoveWindow { .. } => WindowRegion::TitleBar.cursor(),
                DragState::ResizeWindow { handle, .. } => handle.cursor(),
            };
        }

        match self.windows.region_at(Vec2::new(x, y)) {
            Some((_, region)) => region.cursor(),
            None => "default",
        }
    }

    /// Handle pointer up: ends the gesture and reports the final clamped
    /// geometry exactly once
    pub fn handle_pointer_up(&mut self) -> Option<GestureEnd> {
        let drag = self.input.end_drag()?;
        let window = self.windows.get(drag.window_id())?;

        match drag {
            DragState::MoveWindow { window_id, .. } => Some(GestureEnd::Moved {
                window_id,
                position: window.position,
            }),
            DragState::ResizeWindow { window_id, .. } => Some(GestureEnd::Resized {
                window_id,
                position: window.position,
                size: window.size,
            }),
        }
    }
}

/// Parse a resize direction string from the view layer
fn parse_resize_direction(direction: &str) -> Option<WindowRegion> {
    match direction {
        "n" => Some(WindowRegion::ResizeN),
        "s" => Some(WindowRegion::ResizeS),
        "e" => Some(WindowRegion::ResizeE),
        "w" => Some(WindowRegion::ResizeW),
        "ne" => Some(WindowRegion::ResizeNE),
        "nw" => Some(WindowRegion::ResizeNW),
        "se" => Some(WindowRegion::ResizeSE),
        "sw" => Some(WindowRegion::ResizeSW),
        _ => None,
    }
}

//! Window registry for lifecycle, focus, and z-order
//!
//! All geometry mutations clamp against the viewport here, so the
//! invariants hold regardless of what a caller passes in.

use std::collections::HashMap;
use crate::math::{Size, Vec2, FRAME_STYLE};
use crate::viewport::Viewport;
use super::{Window, WindowConfig, WindowId, WindowRegion, WindowState, MIN_WINDOW_SIZE};

/// Window registry handling window lifecycle, z-order, and focus
pub struct WindowManager {
    /// All windows by ID
    windows: HashMap<WindowId, Window>,
    /// Focus stack (most recently focused at end)
    focus_stack: Vec<WindowId>,
    /// Next window ID
    next_id: u64,
    /// Next z-order value
    next_z: u32,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window registry
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            focus_stack: Vec::new(),
            next_id: 1,
            next_z: 1,
        }
    }

    /// Open a window.
    ///
    /// If a non-minimized window for the same app already exists, no new
    /// record is created; the existing one is focused and its id returned.
    pub fn open(&mut self, config: WindowConfig, viewport: &Viewport) -> WindowId {
        if let Some(existing) = self.find_open(&config.app_id) {
            self.focus(existing);
            return existing;
        }

        let id = self.next_id;
        self.next_id += 1;

        let z_order = self.next_z;
        self.next_z += 1;

        // Cascade successive windows so they never stack up exactly
        let position = config.position.unwrap_or_else(|| {
            let offset = (id as f32 % 8.0) * 32.0;
            Vec2::new(96.0 + offset, 64.0 + offset)
        });

        let min_size = config.min_size.unwrap_or(MIN_WINDOW_SIZE);
        let size = viewport.clamp_size(config.size, min_size);
        let position = viewport.clamp_position(position, size);

        let window = Window {
            id,
            title: config.title,
            app_id: config.app_id,
            position,
            size,
            min_size,
            state: WindowState::Normal,
            z_order,
            restore_rect: None,
            prev_state: None,
        };

        self.windows.insert(id, window);
        self.focus_stack.push(id);

        id
    }

    /// Find a non-minimized window hosting the given app
    pub fn find_open(&self, app_id: &str) -> Option<WindowId> {
        self.windows
            .values()
            .find(|w| w.app_id == app_id && w.state != WindowState::Minimized)
            .map(|w| w.id)
    }

    /// Close a window, removing its record unconditionally
    pub fn close(&mut self, id: WindowId) {
        self.windows.remove(&id);
        self.focus_stack.retain(|&wid| wid != id);
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Focus a window: brings it to the top, un-minimizing it if needed.
    ///
    /// At most one window is focused at any time; a minimized window is
    /// never the focused one.
    pub fn focus(&mut self, id: WindowId) {
        if !self.windows.contains_key(&id) {
            return;
        }

        self.focus_stack.retain(|&wid| wid != id);
        self.focus_stack.push(id);

        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Minimized {
                window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
            }
            window.z_order = self.next_z;
            self.next_z += 1;
        }
    }

    /// Get the currently focused window ID
    pub fn focused(&self) -> Option<WindowId> {
        for &id in self.focus_stack.iter().rev() {
            if let Some(window) = self.windows.get(&id) {
                if window.state != WindowState::Minimized {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Move a window to a new position, clamped to the viewport
    pub fn move_window(&mut self, id: WindowId, position: Vec2, viewport: &Viewport) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Normal {
                window.position = viewport.clamp_position(position, window.size);
            }
        }
    }

    /// Resize a window, clamped to its minimum and the viewport.
    ///
    /// Size and position commit in the same update so the rectangle never
    /// tears across a frame.
    pub fn resize(&mut self, id: WindowId, size: Size, viewport: &Viewport) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Normal {
                window.size = viewport.clamp_size(size, window.min_size);
                window.position = viewport.clamp_position(window.position, window.size);
            }
        }
    }

    /// Commit a position and size together in one update, clamped.
    ///
    /// Used by resize gestures, where the two fields must never tear
    /// across a frame.
    pub fn set_geometry(&mut self, id: WindowId, position: Vec2, size: Size, viewport: &Viewport) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Normal {
                window.size = viewport.clamp_size(size, window.min_size);
                window.position = viewport.clamp_position(position, window.size);
            }
        }
    }

    /// Minimize a window. The record persists so the taskbar can restore it.
    pub fn minimize(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state != WindowState::Minimized {
                window.prev_state = Some(window.state);
                window.state = WindowState::Minimized;
            }
        }
    }

    /// Toggle a window between Normal and Maximized.
    ///
    /// Entering Maximized saves the geometry snapshot and fills the
    /// viewport's maximize bounds. Leaving it replays the snapshot, except
    /// on compact layouts where the geometry is recomputed to fit the
    /// current viewport.
    pub fn toggle_maximize(&mut self, id: WindowId, viewport: &Viewport) {
        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };

        match window.state {
            WindowState::Maximized => {
                window.state = WindowState::Normal;
                let snapshot = window.restore_rect.take();

                if viewport.layout_mode().is_compact() {
                    let desired = snapshot.map(|(_, size)| size).unwrap_or(window.size);
                    let rect = viewport.compact_restore_rect(desired);
                    window.position = rect.position();
                    window.size = rect.size();
                } else if let Some((position, size)) = snapshot {
                    window.position = position;
                    window.size = size;
                } else {
                    window.position = viewport.clamp_position(window.position, window.size);
                }
            }
            WindowState::Normal => {
                Self::fill_maximize_bounds(window, viewport);
            }
            WindowState::Minimized => {}
        }
    }

    /// Force a Normal window into Maximized (used when the viewport shrinks
    /// below the phone threshold)
    pub fn force_maximize(&mut self, id: WindowId, viewport: &Viewport) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Normal {
                Self::fill_maximize_bounds(window, viewport);
            }
        }
    }

    fn fill_maximize_bounds(window: &mut Window, viewport: &Viewport) {
        window.restore_rect = Some((window.position, window.size));
        window.state = WindowState::Maximized;

        let bounds = viewport.maximize_bounds();
        window.position = bounds.position();
        window.size = bounds.size();
    }

    /// Restore a minimized window to its previous state
    pub fn restore(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            if window.state == WindowState::Minimized {
                window.state = window.prev_state.take().unwrap_or(WindowState::Normal);
            }
        }
    }

    /// Re-apply viewport constraints to every window after a viewport
    /// resize: maximized windows track the new bounds, normal windows are
    /// re-clamped.
    pub fn reclamp_all(&mut self, viewport: &Viewport) {
        for window in self.windows.values_mut() {
            match window.state {
                WindowState::Maximized => {
                    let bounds = viewport.maximize_bounds();
                    window.position = bounds.position();
                    window.size = bounds.size();
                }
                WindowState::Normal => {
                    window.size = viewport.clamp_size(window.size, window.min_size);
                    window.position = viewport.clamp_position(window.position, window.size);
                }
                WindowState::Minimized => {}
            }
        }
    }

    /// Get windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Get all windows
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Find the topmost window at a viewport position
    pub fn window_at(&self, pos: Vec2) -> Option<WindowId> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        for window in windows {
            if window.state == WindowState::Minimized {
                continue;
            }
            if window.rect().contains(pos) {
                return Some(window.id);
            }
        }
        None
    }

    /// Find which region of which window is at a viewport position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_order));

        for window in windows {
            if window.state == WindowState::Minimized {
                continue;
            }
            if !window.rect().contains(pos) {
                continue;
            }
            if let Some(region) = hit_test_window(window, pos) {
                return Some((window.id, region));
            }
        }

        None
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a specific window at a position
fn hit_test_window(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    // Buttons take priority over everything else
    if let Some(region) = hit_test_buttons(window, pos) {
        return Some(region);
    }

    // Resize handles are only present on non-maximized windows
    if window.state != WindowState::Maximized {
        if let Some(region) = hit_test_resize_corners(window, pos) {
            return Some(region);
        }
    }

    if window.title_bar_rect().contains(pos) {
        return Some(WindowRegion::TitleBar);
    }

    if window.state != WindowState::Maximized {
        if let Some(region) = hit_test_resize_edges(window, pos) {
            return Some(region);
        }
    }

    Some(WindowRegion::Content)
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    if window.close_button_rect().contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if window.maximize_button_rect().contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }
    if window.minimize_button_rect().contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

/// Hit test resize corner handles
fn hit_test_resize_corners(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let handle = FRAME_STYLE.corner_handle_size;
    let rect = window.rect();

    let in_left = pos.x < rect.x + handle;
    let in_right = pos.x > rect.right() - handle;
    let in_top = pos.y < rect.y + handle;
    let in_bottom = pos.y > rect.bottom() - handle;

    if in_top && in_left {
        return Some(WindowRegion::ResizeNW);
    }
    if in_top && in_right {
        return Some(WindowRegion::ResizeNE);
    }
    if in_bottom && in_left {
        return Some(WindowRegion::ResizeSW);
    }
    if in_bottom && in_right {
        return Some(WindowRegion::ResizeSE);
    }
    None
}

/// Hit test resize edge handles (non-corner)
fn hit_test_resize_edges(window: &Window, pos: Vec2) -> Option<WindowRegion> {
    let handle = FRAME_STYLE.resize_handle_size;
    let rect = window.rect();

    if pos.y < rect.y + handle {
        return Some(WindowRegion::ResizeN);
    }
    if pos.y > rect.bottom() - handle {
        return Some(WindowRegion::ResizeS);
    }
    if pos.x < rect.x + handle {
        return Some(WindowRegion::ResizeW);
    }
    if pos.x > rect.right() - handle {
        return Some(WindowRegion::ResizeE);
    }
    None
}

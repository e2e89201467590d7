//! Bounded viewport and position clamping
//!
//! The viewport is the browser window in CSS pixels. Windows are kept
//! fully inside it whenever it is large enough to contain them; when it
//! is not, the clamp degenerates deterministically to the origin.

use crate::layout::LayoutMode;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};

/// Margin kept around a window restored on a compact layout
pub const COMPACT_RESTORE_MARGIN: f32 = 32.0;

/// The visible viewport windows are placed in
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Viewport size in CSS pixels
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Update the viewport dimensions
    #[inline]
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
    }

    /// Get the layout mode for the current dimensions
    #[inline]
    pub fn layout_mode(&self) -> LayoutMode {
        LayoutMode::from_width(self.size.width)
    }

    /// Clamp a window position so the rectangle stays on-screen.
    ///
    /// When the viewport is smaller than the window on an axis the upper
    /// bound falls below zero; the position pins to 0 on that axis rather
    /// than going negative.
    pub fn clamp_position(&self, pos: Vec2, size: Size) -> Vec2 {
        Vec2::new(
            pos.x.max(0.0).min((self.size.width - size.width).max(0.0)),
            pos.y.max(0.0).min((self.size.height - size.height).max(0.0)),
        )
    }

    /// Clamp a window size to the viewport, with the minimum as a
    /// last-resort floor (the floor wins when the viewport is smaller
    /// than the minimum).
    pub fn clamp_size(&self, size: Size, min: Size) -> Size {
        size.min(self.size).max(min)
    }

    /// The rectangle a maximized window fills: the full viewport minus
    /// the taskbar at the bottom.
    pub fn maximize_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.size.width,
            (self.size.height - FRAME_STYLE.taskbar_height).max(0.0),
        )
    }

    /// Geometry for restoring a maximized window on a compact layout.
    ///
    /// The saved snapshot may describe a desktop-sized window; instead of
    /// replaying it, the size is capped to the viewport minus a margin,
    /// centered horizontally and offset to a quarter of the free height.
    pub fn compact_restore_rect(&self, desired: Size) -> Rect {
        let width = desired.width.min((self.size.width - COMPACT_RESTORE_MARGIN).max(0.0));
        let height = desired
            .height
            .min((self.size.height - COMPACT_RESTORE_MARGIN).max(0.0));
        let size = Size::new(width, height);

        let pos = self.clamp_position(
            Vec2::new(
                (self.size.width - width) / 2.0,
                (self.size.height - height) / 4.0,
            ),
            size,
        );

        Rect::from_pos_size(pos, size)
    }
}

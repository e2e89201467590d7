//! Window struct and state

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::WindowId;

/// Window state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// A window in the shell
#[derive(Clone, Debug)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Window title
    pub title: String,
    /// Application identifier (notes, tasks, memory, ...)
    pub app_id: String,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Window size including frame
    pub size: Size,
    /// Minimum size
    pub min_size: Size,
    /// Current state
    pub state: WindowState,
    /// Z-order (higher = on top)
    pub z_order: u32,
    /// Saved position/size for restore after maximize
    pub(crate) restore_rect: Option<(Vec2, Size)>,
    /// Previous state before minimize
    pub(crate) prev_state: Option<WindowState>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the content area rectangle (excludes title bar)
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + FRAME_STYLE.title_bar_height,
            self.size.width,
            self.size.height - FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * 2.0
            - FRAME_STYLE.button_spacing;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Get the minimize button rectangle
    pub fn minimize_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * 3.0
            - FRAME_STYLE.button_spacing * 2.0;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }
}

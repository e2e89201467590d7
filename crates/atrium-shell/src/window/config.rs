//! Window configuration for creation

use crate::math::{Size, Vec2};

/// Default size for new windows
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(900.0, 600.0);

/// Minimum window size enforced outside an in-progress resize
pub const MIN_WINDOW_SIZE: Size = Size::new(600.0, 400.0);

/// Configuration for opening a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Application identifier for dedup and content routing
    pub app_id: String,
    /// Initial position (None = auto-cascade)
    pub position: Option<Vec2>,
    /// Initial size
    pub size: Size,
    /// Minimum size constraint (None = shell default)
    pub min_size: Option<Size>,
}

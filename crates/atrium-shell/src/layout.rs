//! Layout mode derived from viewport dimensions
//!
//! All small-screen behavior branches on this single value instead of
//! re-checking raw pixel thresholds at each call site.

/// Viewport width below which the layout is Phone
pub const PHONE_MAX_WIDTH: f32 = 640.0;

/// Viewport width below which the layout is Tablet
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

/// Layout mode for the current viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full desktop layout
    Desktop,
    /// Narrow layout; maximize-restore recomputes geometry
    Tablet,
    /// Very narrow layout; normal windows are auto-maximized
    Phone,
}

impl LayoutMode {
    /// Derive the layout mode from a viewport width
    pub fn from_width(width: f32) -> Self {
        if width < PHONE_MAX_WIDTH {
            LayoutMode::Phone
        } else if width < TABLET_MAX_WIDTH {
            LayoutMode::Tablet
        } else {
            LayoutMode::Desktop
        }
    }

    /// Check if this is a compact layout (Tablet or Phone)
    #[inline]
    pub fn is_compact(&self) -> bool {
        matches!(self, LayoutMode::Tablet | LayoutMode::Phone)
    }

    /// Check if this is the Phone layout
    #[inline]
    pub fn is_phone(&self) -> bool {
        matches!(self, LayoutMode::Phone)
    }

    /// Get a string label for the JS layer
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Desktop => "desktop",
            LayoutMode::Tablet => "tablet",
            LayoutMode::Phone => "phone",
        }
    }
}

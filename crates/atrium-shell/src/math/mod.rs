//! Core geometry types for the shell
//!
//! These types provide the 2D math used for window placement,
//! sizing, and hit testing. All coordinates are viewport pixels.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};

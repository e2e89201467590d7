//! Frame style constants

/// Frame style constants for window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub taskbar_height: f32,
    pub border_radius: f32,
    pub resize_handle_size: f32,
    pub corner_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 36.0,
    taskbar_height: 48.0,
    border_radius: 8.0,
    resize_handle_size: 8.0,
    corner_handle_size: 14.0,
    button_size: 24.0,
    button_spacing: 8.0,
    button_margin: 12.0,
};

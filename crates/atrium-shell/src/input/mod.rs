//! Input routing module
//!
//! Provides the gesture state machine for drag/resize operations and the
//! per-edge resize math.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::{GestureEnd, InputResult};

use crate::math::{Size, Vec2};
use crate::window::WindowRegion;

/// Calculate new position and size for a resize gesture.
///
/// Trailing edges (right/bottom) only change the size. Leading edges
/// (left/top) keep the opposite edge fixed: when the shrinking dimension
/// hits the minimum the origin is recomputed backward from the far edge,
/// and when the origin would go negative it pins to zero and the dimension
/// grows forward from the far edge instead. A final pass caps the
/// rectangle to the viewport and re-applies the minimum floor.
pub fn calculate_resize(
    handle: WindowRegion,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
    viewport: Size,
) -> (Vec2, Size) {
    let mut new_pos = start_pos;
    let mut new_size = start_size;

    if handle.moves_left_edge() {
        let (x, width) = resize_leading(start_pos.x, start_size.width, delta.x, min_size.width);
        new_pos.x = x;
        new_size.width = width;
    } else if matches!(
        handle,
        WindowRegion::ResizeE | WindowRegion::ResizeNE | WindowRegion::ResizeSE
    ) {
        new_size.width = resize_trailing(start_pos.x, start_size.width, delta.x, min_size.width, viewport.width);
    }

    if handle.moves_top_edge() {
        let (y, height) = resize_leading(start_pos.y, start_size.height, delta.y, min_size.height);
        new_pos.y = y;
        new_size.height = height;
    } else if matches!(
        handle,
        WindowRegion::ResizeS | WindowRegion::ResizeSE | WindowRegion::ResizeSW
    ) {
        new_size.height = resize_trailing(start_pos.y, start_size.height, delta.y, min_size.height, viewport.height);
    }

    // Global pass: never larger than the viewport, minimum floor last
    new_size.width = new_size
        .width
        .min((viewport.width - new_pos.x).max(0.0))
        .max(min_size.width);
    new_size.height = new_size
        .height
        .min((viewport.height - new_pos.y).max(0.0))
        .max(min_size.height);

    (new_pos, new_size)
}

/// Resize along a trailing edge: the origin stays fixed
fn resize_trailing(origin: f32, start_dim: f32, delta: f32, min_dim: f32, viewport_dim: f32) -> f32 {
    let max_dim = (viewport_dim - origin).max(min_dim);
    (start_dim + delta).clamp(min_dim, max_dim)
}

/// Resize along a leading edge: the far edge stays fixed
fn resize_leading(start_origin: f32, start_dim: f32, delta: f32, min_dim: f32) -> (f32, f32) {
    let far_edge = start_origin + start_dim;
    let mut new_origin = start_origin + delta;
    let mut new_dim = start_dim - delta;

    if new_dim < min_dim {
        // Pin to the minimum; the origin follows the fixed far edge so the
        // rectangle does not jump when the limit is hit
        new_dim = min_dim;
        new_origin = far_edge - min_dim;
    }

    if new_origin < 0.0 {
        // The window never leaves the viewport to satisfy a minimum-size
        // request; grow forward from the far edge instead
        new_origin = 0.0;
        new_dim = far_edge;
    }

    (new_origin, new_dim)
}

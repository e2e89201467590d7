//! Transition and animation module
//!
//! Provides the animation-gated window lifecycle transitions and easing
//! functions. All transitions are driven by timestamps passed in from the
//! host; the core never reads a clock.

mod lifecycle;
mod easing;

pub use lifecycle::{LifecycleKind, LifecycleTransition};
pub use easing::{ease_in_out, ease_out_cubic};

/// Duration of the minimize exit animation in milliseconds
pub const MINIMIZE_DURATION_MS: u32 = 250;

/// Duration of the restore entry animation in milliseconds
pub const RESTORE_DURATION_MS: u32 = 250;

/// Duration of the close exit animation in milliseconds
pub const CLOSE_DURATION_MS: u32 = 350;

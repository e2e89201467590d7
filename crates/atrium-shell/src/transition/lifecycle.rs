//! Animation-gated window lifecycle transitions
//!
//! Minimize, restore, and close each pass through three phases:
//! requested, animating, committed. The transition carries the animating
//! phase; the owning engine performs the commit (flipping the minimized
//! flag, removing the record) only once a tick observes completion. A
//! reverse request received mid-animation replaces the transition instead
//! of committing it.

use super::{ease_in_out, ease_out_cubic, CLOSE_DURATION_MS, MINIMIZE_DURATION_MS, RESTORE_DURATION_MS};

/// Kind of lifecycle transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleKind {
    /// Window is animating out before its minimized flag is set
    Minimize,
    /// Window is animating back in after its minimized flag was cleared
    Restore,
    /// Window is animating out before its record is removed
    Close,
}

impl LifecycleKind {
    /// Animation duration for this kind
    pub fn duration_ms(self) -> u32 {
        match self {
            LifecycleKind::Minimize => MINIMIZE_DURATION_MS,
            LifecycleKind::Restore => RESTORE_DURATION_MS,
            LifecycleKind::Close => CLOSE_DURATION_MS,
        }
    }

    /// Check if this transition hides the window when it completes
    #[inline]
    pub fn is_exit(self) -> bool {
        matches!(self, LifecycleKind::Minimize | LifecycleKind::Close)
    }
}

/// An in-flight lifecycle transition for one window
#[derive(Clone, Copy, Debug)]
pub struct LifecycleTransition {
    /// Kind of transition
    pub kind: LifecycleKind,
    /// Start time (ms timestamp)
    pub start_ms: f64,
}

impl LifecycleTransition {
    /// Start a transition at the given time
    pub fn new(kind: LifecycleKind, start_ms: f64) -> Self {
        Self { kind, start_ms }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.kind.duration_ms() as f32).clamp(0.0, 1.0)
    }

    /// Check if the animation has run its full duration
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Window opacity at the given time: exits fade out, restores fade in.
    ///
    /// Exits ease in-out; the restore entry eases out so the window is
    /// mostly visible early in the animation.
    pub fn opacity(&self, now_ms: f64) -> f32 {
        let t = self.progress(now_ms);
        if self.kind.is_exit() {
            1.0 - ease_in_out(t)
        } else {
            ease_out_cubic(t)
        }
    }
}

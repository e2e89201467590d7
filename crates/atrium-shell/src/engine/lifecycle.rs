//! Animation-gated minimize/restore/close transitions
//!
//! Requests start an animation; the state commit (flipping the minimized
//! flag, removing the record) happens when a tick observes the animation
//! complete. A reverse request that arrives mid-animation replaces the
//! pending transition instead of letting it commit.

use crate::transition::{LifecycleKind, LifecycleTransition};
use crate::window::{WindowId, WindowState};
use super::ShellEngine;

impl ShellEngine {
    /// Request a window minimize: the exit animation starts now, the
    /// minimized flag is set when it completes.
    pub fn request_minimize(&mut self, id: WindowId, now_ms: f64) {
        let Some(window) = self.windows.get(id) else {
            return;
        };
        if window.state == WindowState::Minimized {
            return;
        }

        match self.lifecycle.get(&id).map(|t| t.kind) {
            // Already on the way out
            Some(LifecycleKind::Minimize) | Some(LifecycleKind::Close) => {}
            // Reverse a restore in flight, or start fresh
            _ => {
                self.lifecycle
                    .insert(id, LifecycleTransition::new(LifecycleKind::Minimize, now_ms));
            }
        }
    }

    /// Request a window restore from the taskbar.
    ///
    /// The minimized flag clears immediately (the window re-enters the
    /// registry's visible set) and the entry animation runs from now. A
    /// minimize still animating is cancelled instead: its commit never
    /// happens.
    pub fn request_restore(&mut self, id: WindowId, now_ms: f64) {
        let Some(window) = self.windows.get(id) else {
            return;
        };

        match self.lifecycle.get(&id).map(|t| t.kind) {
            Some(LifecycleKind::Close) => {}
            Some(LifecycleKind::Minimize) => {
                // The minimize never committed; the window is still visible
                self.lifecycle
                    .insert(id, LifecycleTransition::new(LifecycleKind::Restore, now_ms));
                self.windows.focus(id);
            }
            _ => {
                if window.state == WindowState::Minimized {
                    self.windows.focus(id);
                    self.lifecycle
                        .insert(id, LifecycleTransition::new(LifecycleKind::Restore, now_ms));
                }
            }
        }
    }

    /// Request a window close: the exit animation starts now, the record
    /// is removed when it completes. Not cancellable.
    pub fn request_close(&mut self, id: WindowId, now_ms: f64) {
        if self.windows.get(id).is_none() {
            return;
        }
        self.lifecycle
            .insert(id, LifecycleTransition::new(LifecycleKind::Close, now_ms));
    }

    /// Tick lifecycle transitions, committing any that completed.
    /// Returns true while any transition is still animating.
    pub fn tick_lifecycle(&mut self, now_ms: f64) -> bool {
        let completed: Vec<(WindowId, LifecycleKind)> = self
            .lifecycle
            .iter()
            .filter(|(_, t)| t.is_complete(now_ms))
            .map(|(&id, t)| (id, t.kind))
            .collect();

        for (id, kind) in completed {
            self.lifecycle.remove(&id);
            match kind {
                LifecycleKind::Minimize => self.windows.minimize(id),
                LifecycleKind::Close => self.windows.close(id),
                LifecycleKind::Restore => {}
            }
        }

        !self.lifecycle.is_empty()
    }

    /// Check if any lifecycle animation is running
    #[inline]
    pub fn is_lifecycle_animating(&self) -> bool {
        !self.lifecycle.is_empty()
    }

    /// Opacity for a window at the given time (1.0 when not animating)
    pub fn window_opacity(&self, id: WindowId, now_ms: f64) -> f32 {
        self.lifecycle
            .get(&id)
            .map(|t| t.opacity(now_ms))
            .unwrap_or(1.0)
    }
}

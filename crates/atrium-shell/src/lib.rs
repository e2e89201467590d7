//! Window management core for the Atrium web desktop
//!
//! This crate provides the shell's floating-window functionality:
//! - Window lifecycle (open with dedup, close, focus, z-order)
//! - Drag and resize gestures with viewport clamping
//! - Maximize/restore with viewport-adaptive geometry
//! - Animation-gated minimize/restore/close transitions
//! - Session snapshot persistence
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`layout`]: Layout mode derived from viewport dimensions
//! - [`Viewport`]: Bounded viewport and position clamping
//! - [`window`]: Window records, hit regions, and the registry
//! - [`input`]: Gesture state machine and resize math
//! - [`transition`]: Lifecycle animations and easing
//! - [`persistence`]: Snapshot serialization for storage
//!
//! ## Example
//!
//! ```rust
//! use atrium_shell::ShellEngine;
//!
//! let mut engine = ShellEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let window_id = engine.launch_app("notes");
//! engine.start_move_drag(window_id, 200.0, 100.0);
//! engine.handle_pointer_move(400.0, 300.0);
//! let report = engine.handle_pointer_up();
//! assert!(report.is_some());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable
//!    without a browser
//! 2. **Time Abstraction**: Lifecycle animations take timestamps from the
//!    host for deterministic testing
//! 3. **Central Clamping**: The registry enforces geometry invariants
//!    itself instead of trusting callers

pub mod math;
pub mod layout;
pub mod window;
pub mod input;
pub mod transition;
pub mod persistence;

mod engine;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, FrameStyle, FRAME_STYLE};
pub use layout::LayoutMode;
pub use window::{
    Window, WindowConfig, WindowId, WindowManager, WindowRegion, WindowState,
    DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE,
};
pub use input::{DragState, GestureEnd, InputResult, InputRouter};
pub use transition::{LifecycleKind, LifecycleTransition};
pub use persistence::{PersistedWindow, Snapshot, SnapshotError};

pub use engine::{ShellEngine, WindowView};
pub use viewport::{Viewport, COMPACT_RESTORE_MARGIN};

/// Duration of the minimize exit animation in milliseconds
pub use transition::MINIMIZE_DURATION_MS;

/// Duration of the restore entry animation in milliseconds
pub use transition::RESTORE_DURATION_MS;

/// Duration of the close exit animation in milliseconds
pub use transition::CLOSE_DURATION_MS;

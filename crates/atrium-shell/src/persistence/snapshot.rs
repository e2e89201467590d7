//! Snapshot serialization for the open window set

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{Size, Vec2};
use crate::window::WindowState;

/// Errors from decoding a foreign snapshot
#[derive(Clone, Debug, Error)]
pub enum SnapshotError {
    /// Snapshot was written by a newer shell version
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Persisted state of one window
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistedWindow {
    pub app_id: String,
    pub title: String,
    /// Normal-state geometry; for a maximized window this is the restore
    /// snapshot, not the filled bounds
    pub position: Vec2,
    pub size: Size,
    #[serde(default)]
    pub state: WindowState,
}

/// Snapshot of the window set for persistence
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version for migration support
    pub version: u32,
    /// Windows back to front
    pub windows: Vec<PersistedWindow>,
    /// App id of the focused window (if any)
    #[serde(default)]
    pub focused_app: Option<String>,
}

impl Snapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(windows: Vec<PersistedWindow>, focused_app: Option<String>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            windows,
            focused_app,
        }
    }

    /// Check the snapshot can be applied by this shell version
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version > Self::CURRENT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}

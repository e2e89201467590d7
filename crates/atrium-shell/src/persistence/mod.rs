//! Persistence module for session snapshots
//!
//! Provides snapshot export/import of the open window set.

mod snapshot;

pub use snapshot::{PersistedWindow, Snapshot, SnapshotError};

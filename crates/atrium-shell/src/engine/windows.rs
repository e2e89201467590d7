//! Window operations and the application catalog

use crate::math::{Size, Vec2};
use crate::persistence::{PersistedWindow, Snapshot, SnapshotError};
use crate::window::{WindowConfig, WindowId, WindowState, DEFAULT_WINDOW_SIZE, MIN_WINDOW_SIZE};
use super::ShellEngine;

impl ShellEngine {
    /// Open a window.
    ///
    /// Dedup happens in the registry: reopening an app that already has a
    /// non-minimized window focuses it instead. On a Phone layout the new
    /// window is maximized immediately.
    pub fn open_window(&mut self, mut config: WindowConfig) -> WindowId {
        if config.size.is_empty() {
            config.size = DEFAULT_WINDOW_SIZE;
        }

        let id = self.windows.open(config, &self.viewport);

        if self.viewport.layout_mode().is_phone() {
            self.windows.force_maximize(id, &self.viewport);
        }

        id
    }

    /// Close a window immediately, removing its record.
    ///
    /// The animated path goes through [`ShellEngine::request_close`]; this
    /// is the commit.
    pub fn close_window(&mut self, id: WindowId) {
        self.lifecycle.remove(&id);
        self.windows.close(id);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Move a window (clamped by the registry)
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        self.windows.move_window(id, Vec2::new(x, y), &self.viewport);
    }

    /// Resize a window (clamped by the registry)
    pub fn resize_window(&mut self, id: WindowId, width: f32, height: f32) {
        self.windows.resize(id, Size::new(width, height), &self.viewport);
    }

    /// Toggle a window between Normal and Maximized
    pub fn toggle_maximize_window(&mut self, id: WindowId) {
        self.windows.toggle_maximize(id, &self.viewport);
    }

    /// Launch an application, opening (or refocusing) its window
    pub fn launch_app(&mut self, app_id: &str) -> WindowId {
        let app_config = app_catalog(app_id);
        let size = self.initial_app_size(&app_config);

        self.open_window(WindowConfig {
            title: app_config.title.to_string(),
            app_id: app_id.to_string(),
            position: None,
            size,
            min_size: Some(app_config.min_size),
        })
    }

    /// Size a new app window to the viewport: the preferred size, capped
    /// so the window fits above the taskbar with some padding
    fn initial_app_size(&self, config: &AppConfig) -> Size {
        let padding = 20.0;
        let viewport = self.viewport.size;
        let max = Size::new(
            (viewport.width - padding * 2.0).max(400.0),
            (viewport.height - crate::math::FRAME_STYLE.taskbar_height - padding * 2.0).max(300.0),
        );
        config.preferred_size.min(max)
    }
}

impl ShellEngine {
    /// Export the open window set for persistence
    pub fn export_snapshot(&self) -> Snapshot {
        let focused_app = self
            .windows
            .focused()
            .and_then(|id| self.windows.get(id))
            .map(|w| w.app_id.clone());

        let windows = self
            .windows
            .windows_by_z()
            .into_iter()
            .map(|w| {
                // A maximized window persists its restore geometry, not
                // the filled bounds
                let (position, size) = match w.state {
                    WindowState::Maximized => w.restore_rect.unwrap_or((w.position, w.size)),
                    _ => (w.position, w.size),
                };
                PersistedWindow {
                    app_id: w.app_id.clone(),
                    title: w.title.clone(),
                    position,
                    size,
                    state: w.state,
                }
            })
            .collect();

        Snapshot::new(windows, focused_app)
    }

    /// Re-open the windows described by a snapshot.
    ///
    /// Geometry is re-clamped against the current viewport as the windows
    /// open, so a snapshot from a larger screen still lands on-screen.
    pub fn import_snapshot(&mut self, mut snapshot: Snapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        if snapshot.needs_migration() {
            snapshot.migrate();
        }

        for persisted in &snapshot.windows {
            let id = self.open_window(WindowConfig {
                title: persisted.title.clone(),
                app_id: persisted.app_id.clone(),
                position: Some(persisted.position),
                size: persisted.size,
                min_size: None,
            });

            match persisted.state {
                WindowState::Minimized => self.windows.minimize(id),
                WindowState::Maximized => self.windows.force_maximize(id, &self.viewport),
                WindowState::Normal => {}
            }
        }

        if let Some(app_id) = &snapshot.focused_app {
            if let Some(id) = self.windows.find_open(app_id) {
                self.windows.focus(id);
            }
        }

        Ok(())
    }
}

/// Catalog entry for a hosted application
struct AppConfig<'a> {
    title: &'a str,
    preferred_size: Size,
    min_size: Size,
}

/// Look up the catalog entry for an app id
fn app_catalog(app_id: &str) -> AppConfig<'_> {
    match app_id {
        "notes" => AppConfig {
            title: "Notes",
            preferred_size: Size::new(900.0, 600.0),
            min_size: MIN_WINDOW_SIZE,
        },
        "tasks" => AppConfig {
            title: "Tasks",
            preferred_size: Size::new(820.0, 560.0),
            min_size: MIN_WINDOW_SIZE,
        },
        "memory" => AppConfig {
            title: "Memory",
            preferred_size: Size::new(960.0, 640.0),
            min_size: MIN_WINDOW_SIZE,
        },
        "dashboard" => AppConfig {
            title: "Dashboard",
            preferred_size: Size::new(1040.0, 680.0),
            min_size: MIN_WINDOW_SIZE,
        },
        "settings" => AppConfig {
            title: "Settings",
            preferred_size: Size::new(760.0, 560.0),
            min_size: MIN_WINDOW_SIZE,
        },
        _ => AppConfig {
            title: app_id,
            preferred_size: DEFAULT_WINDOW_SIZE,
            min_size: MIN_WINDOW_SIZE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowState;

    fn create_test_engine() -> ShellEngine {
        let mut engine = ShellEngine::new();
        engine.init(1920.0, 1080.0);
        engine
    }

    #[test]
    fn test_launch_app_notes() {
        let mut engine = create_test_engine();

        let id = engine.launch_app("notes");

        let window = engine.windows.get(id).unwrap();
        assert_eq!(window.title, "Notes");
        assert_eq!(window.app_id, "notes");
        assert!((window.size.width - 900.0).abs() < 0.001);
    }

    #[test]
    fn test_launch_app_unknown_uses_defaults() {
        let mut engine = create_test_engine();

        let id = engine.launch_app("scratchpad");

        let window = engine.windows.get(id).unwrap();
        assert_eq!(window.title, "scratchpad");
        assert!((window.size.width - DEFAULT_WINDOW_SIZE.width).abs() < 0.001);
    }

    #[test]
    fn test_launch_app_twice_dedups() {
        let mut engine = create_test_engine();

        let first = engine.launch_app("notes");
        let second = engine.launch_app("notes");

        assert_eq!(first, second);
        assert_eq!(engine.windows.count(), 1);
    }

    #[test]
    fn test_relaunch_focuses_existing() {
        let mut engine = create_test_engine();

        let notes = engine.launch_app("notes");
        let tasks = engine.launch_app("tasks");
        assert_eq!(engine.windows.focused(), Some(tasks));

        engine.launch_app("notes");
        assert_eq!(engine.windows.focused(), Some(notes));
    }

    #[test]
    fn test_launch_on_small_viewport_fits() {
        let mut engine = ShellEngine::new();
        engine.init(1100.0, 700.0);

        let id = engine.launch_app("dashboard");

        let window = engine.windows.get(id).unwrap();
        assert!(window.size.width <= 1100.0);
        assert!(window.rect().bottom() <= 700.0 + 0.001);
    }

    #[test]
    fn test_launch_on_phone_maximizes() {
        let mut engine = ShellEngine::new();
        engine.init(480.0, 800.0);

        let id = engine.launch_app("notes");

        assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Maximized);
    }

    #[test]
    fn test_cascade_avoids_exact_overlap() {
        let mut engine = create_test_engine();

        let id1 = engine.launch_app("notes");
        let id2 = engine.launch_app("tasks");

        let pos1 = engine.windows.get(id1).unwrap().position;
        let pos2 = engine.windows.get(id2).unwrap().position;
        assert!((pos1.x - pos2.x).abs() > 0.001 || (pos1.y - pos2.y).abs() > 0.001);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut engine = create_test_engine();
        let notes = engine.launch_app("notes");
        let tasks = engine.launch_app("tasks");
        engine.toggle_maximize_window(tasks);

        let notes_pos = engine.windows.get(notes).unwrap().position;
        let snapshot = engine.export_snapshot();

        let mut restored = create_test_engine();
        restored.import_snapshot(snapshot).unwrap();

        assert_eq!(restored.windows.count(), 2);

        let notes_id = restored.windows.find_open("notes").unwrap();
        let restored_pos = restored.windows.get(notes_id).unwrap().position;
        assert!((restored_pos.x - notes_pos.x).abs() < 0.001);
        assert!((restored_pos.y - notes_pos.y).abs() < 0.001);

        let tasks_id = restored.windows.find_open("tasks").unwrap();
        assert_eq!(restored.windows.get(tasks_id).unwrap().state, WindowState::Maximized);
        assert_eq!(restored.windows.focused(), Some(tasks_id));
    }

    #[test]
    fn test_snapshot_export_keeps_restore_geometry() {
        let mut engine = create_test_engine();
        let id = engine.open_window(WindowConfig {
            title: "Notes".to_string(),
            app_id: "notes".to_string(),
            position: Some(Vec2::new(50.0, 60.0)),
            size: Size::new(700.0, 500.0),
            ..Default::default()
        });
        engine.toggle_maximize_window(id);

        let snapshot = engine.export_snapshot();

        assert_eq!(snapshot.windows[0].state, WindowState::Maximized);
        assert!((snapshot.windows[0].position.x - 50.0).abs() < 0.001);
        assert!((snapshot.windows[0].size.width - 700.0).abs() < 0.001);
    }

    #[test]
    fn test_import_rejects_newer_snapshot() {
        let mut engine = create_test_engine();
        let mut snapshot = engine.export_snapshot();
        snapshot.version = Snapshot::CURRENT_VERSION + 1;

        assert!(engine.import_snapshot(snapshot).is_err());
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_open_window_defaults_empty_size() {
        let mut engine = create_test_engine();

        let id = engine.open_window(WindowConfig {
            title: "Blank".to_string(),
            app_id: "blank".to_string(),
            ..Default::default()
        });

        let window = engine.windows.get(id).unwrap();
        assert!((window.size.width - DEFAULT_WINDOW_SIZE.width).abs() < 0.001);
        assert!((window.size.height - DEFAULT_WINDOW_SIZE.height).abs() < 0.001);
    }
}

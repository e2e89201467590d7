//! Integration tests for ShellEngine
//!
//! These tests verify the full shell workflow including:
//! - Window lifecycle (open, move, resize, minimize, maximize, close)
//! - Drag and resize gestures with clamping
//! - Animation-gated minimize/restore/close transitions
//! - Focus and z-order invariants
//! - Snapshot persistence

use atrium_shell::{
    GestureEnd, InputResult, ShellEngine, Size, Vec2, WindowConfig, WindowState,
    CLOSE_DURATION_MS, MINIMIZE_DURATION_MS, RESTORE_DURATION_MS,
};

fn create_engine() -> ShellEngine {
    let mut engine = ShellEngine::new();
    engine.init(1920.0, 1080.0);
    engine
}

fn open_window(engine: &mut ShellEngine, app_id: &str, x: f32, y: f32) -> u64 {
    engine.open_window(WindowConfig {
        title: app_id.to_string(),
        app_id: app_id.to_string(),
        position: Some(Vec2::new(x, y)),
        size: Size::new(700.0, 500.0),
        ..Default::default()
    })
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_window_lifecycle_full() {
    let mut engine = create_engine();

    let id = open_window(&mut engine, "notes", 100.0, 100.0);
    assert!(engine.windows.get(id).is_some());
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);

    // Move
    engine.move_window(id, 200.0, 200.0);
    let window = engine.windows.get(id).unwrap();
    assert!((window.position.x - 200.0).abs() < 0.001);
    assert!((window.position.y - 200.0).abs() < 0.001);

    // Resize
    engine.resize_window(id, 1000.0, 800.0);
    let window = engine.windows.get(id).unwrap();
    assert!((window.size.width - 1000.0).abs() < 0.001);
    assert!((window.size.height - 800.0).abs() < 0.001);

    // Minimize through the animated path
    let mut time = 1000.0;
    engine.request_minimize(id, time);
    time += MINIMIZE_DURATION_MS as f64;
    engine.tick_lifecycle(time);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Minimized);

    // Restore
    engine.request_restore(id, time);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);
    time += RESTORE_DURATION_MS as f64;
    engine.tick_lifecycle(time);

    // Maximize and back
    engine.toggle_maximize_window(id);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Maximized);
    engine.toggle_maximize_window(id);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);

    // Close through the animated path
    engine.request_close(id, time);
    assert!(engine.windows.get(id).is_some());
    time += CLOSE_DURATION_MS as f64;
    engine.tick_lifecycle(time);
    assert!(engine.windows.get(id).is_none());
}

#[test]
fn test_drag_roundtrip_exact() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    // Pointer down at (110, 90): offset inside the window is (10, 10)
    engine.start_move_drag(id, 110.0, 90.0);

    // Pointer to (300, 250): candidate position (290, 240), in bounds
    engine.handle_pointer_move(300.0, 250.0);

    let window = engine.windows.get(id).unwrap();
    assert!((window.position.x - 290.0).abs() < 0.001);
    assert!((window.position.y - 240.0).abs() < 0.001);

    // Pointer up reports exactly (290, 240), exactly once
    match engine.handle_pointer_up() {
        Some(GestureEnd::Moved { window_id, position }) => {
            assert_eq!(window_id, id);
            assert!((position.x - 290.0).abs() < 0.001);
            assert!((position.y - 240.0).abs() < 0.001);
        }
        other => panic!("expected a move report, got {:?}", other),
    }
    assert!(engine.handle_pointer_up().is_none());
}

#[test]
fn test_right_edge_resize_floors_at_minimum() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    // Drag the right handle 500px to the left
    engine.start_resize_drag(id, "e", 800.0, 300.0);
    engine.handle_pointer_move(300.0, 300.0);
    engine.handle_pointer_up();

    let window = engine.windows.get(id).unwrap();
    assert!((window.size.width - 600.0).abs() < 0.001);
    assert!(window.size.width >= window.min_size.width);
}

#[test]
fn test_maximize_restore_roundtrip_large_viewport() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 50.0, 60.0);

    engine.toggle_maximize_window(id);
    engine.toggle_maximize_window(id);

    let window = engine.windows.get(id).unwrap();
    assert_eq!(window.state, WindowState::Normal);
    assert!((window.position.x - 50.0).abs() < 0.001);
    assert!((window.position.y - 60.0).abs() < 0.001);
    assert!((window.size.width - 700.0).abs() < 0.001);
    assert!((window.size.height - 500.0).abs() < 0.001);
}

// =============================================================================
// Registry Invariant Tests
// =============================================================================

#[test]
fn test_single_active_window_invariant() {
    let mut engine = create_engine();

    let ids = [
        open_window(&mut engine, "notes", 100.0, 100.0),
        open_window(&mut engine, "tasks", 200.0, 200.0),
        open_window(&mut engine, "memory", 300.0, 300.0),
    ];

    // An arbitrary mix of operations
    engine.focus_window(ids[0]);
    engine.windows.minimize(ids[0]);
    engine.focus_window(ids[2]);
    engine.windows.minimize(ids[2]);
    engine.focus_window(ids[1]);
    engine.launch_app("tasks");
    engine.windows.minimize(ids[1]);

    // At most one focused window, and it is never minimized
    let focused: Vec<u64> = engine
        .windows
        .all_windows()
        .filter(|w| engine.windows.focused() == Some(w.id))
        .map(|w| w.id)
        .collect();
    assert!(focused.len() <= 1);
    if let Some(id) = engine.windows.focused() {
        assert_ne!(engine.windows.get(id).unwrap().state, WindowState::Minimized);
    }

    // All three minimized: nothing is focused
    assert_eq!(engine.windows.focused(), None);
}

#[test]
fn test_z_order_monotonicity() {
    let mut engine = create_engine();

    let ids = [
        open_window(&mut engine, "notes", 100.0, 100.0),
        open_window(&mut engine, "tasks", 200.0, 200.0),
        open_window(&mut engine, "memory", 300.0, 300.0),
    ];

    let mut highest = engine
        .windows
        .all_windows()
        .map(|w| w.z_order)
        .max()
        .unwrap();

    for &id in &[ids[0], ids[2], ids[1], ids[0]] {
        engine.focus_window(id);
        let z = engine.windows.get(id).unwrap().z_order;
        assert!(z > highest, "activation must always land on top");
        highest = z;
    }
}

#[test]
fn test_reopen_dedup() {
    let mut engine = create_engine();

    engine.launch_app("notes");
    engine.launch_app("notes");

    let notes_windows = engine
        .windows
        .all_windows()
        .filter(|w| w.app_id == "notes")
        .count();
    assert_eq!(notes_windows, 1);
}

#[test]
fn test_reopen_restores_minimized_via_activate() {
    let mut engine = create_engine();

    let id = engine.launch_app("notes");
    let mut time = 0.0;
    engine.request_minimize(id, time);
    time += MINIMIZE_DURATION_MS as f64;
    engine.tick_lifecycle(time);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Minimized);

    // Activating directly (taskbar click path) clears the minimized flag
    engine.focus_window(id);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);
    assert_eq!(engine.windows.focused(), Some(id));
}

// =============================================================================
// Clamping Tests
// =============================================================================

#[test]
fn test_move_never_leaves_viewport() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    for target in [
        (-500.0, -500.0),
        (5000.0, 5000.0),
        (1800.0, -50.0),
        (-50.0, 1000.0),
    ] {
        engine.move_window(id, target.0, target.1);
        let rect = engine.windows.get(id).unwrap().rect();
        assert!(rect.x >= 0.0);
        assert!(rect.y >= 0.0);
        assert!(rect.right() <= 1920.0 + 0.001);
        assert!(rect.bottom() <= 1080.0 + 0.001);
    }
}

#[test]
fn test_resize_gesture_never_exceeds_viewport() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 1400.0, 700.0);

    engine.start_resize_drag(id, "se", 2000.0, 1100.0);
    engine.handle_pointer_move(4000.0, 4000.0);
    engine.handle_pointer_up();

    let rect = engine.windows.get(id).unwrap().rect();
    assert!(rect.right() <= 1920.0 + 0.001);
    assert!(rect.bottom() <= 1080.0 + 0.001);
}

#[test]
fn test_leading_edge_resize_pins_at_origin() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    // Drag the left edge far past the viewport boundary
    engine.start_resize_drag(id, "w", 100.0, 300.0);
    engine.handle_pointer_move(-400.0, 300.0);
    engine.handle_pointer_up();

    let window = engine.windows.get(id).unwrap();
    assert!((window.position.x - 0.0).abs() < 0.001);
    // The far edge stayed fixed at 800
    assert!((window.size.width - 800.0).abs() < 0.001);
}

// =============================================================================
// Viewport Adaptation Tests
// =============================================================================

#[test]
fn test_viewport_shrink_to_phone_maximizes_windows() {
    let mut engine = create_engine();
    let notes = open_window(&mut engine, "notes", 100.0, 100.0);
    let tasks = open_window(&mut engine, "tasks", 300.0, 200.0);

    engine.resize(480.0, 800.0);

    assert_eq!(engine.windows.get(notes).unwrap().state, WindowState::Maximized);
    assert_eq!(engine.windows.get(tasks).unwrap().state, WindowState::Maximized);
}

#[test]
fn test_restore_on_compact_viewport_recomputes() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 50.0, 60.0);

    engine.toggle_maximize_window(id);
    engine.resize(800.0, 900.0);
    engine.toggle_maximize_window(id);

    let window = engine.windows.get(id).unwrap();
    assert_eq!(window.state, WindowState::Normal);
    // Not the raw snapshot: recomputed to fit the 800px viewport
    let rect = window.rect();
    assert!(rect.x >= 0.0);
    assert!(rect.right() <= 800.0 + 0.001);
    assert!((rect.x - (800.0 - rect.width) / 2.0).abs() < 0.001);
}

// =============================================================================
// Lifecycle Animation Tests
// =============================================================================

#[test]
fn test_minimize_defers_state_change() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 100.0);

    engine.request_minimize(id, 0.0);

    // Window remains visible and Normal during the exit animation
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);
    assert_eq!(engine.window_views(100.0).len(), 1);
    assert!(engine.window_views(100.0)[0].opacity < 1.0);

    engine.tick_lifecycle(MINIMIZE_DURATION_MS as f64);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Minimized);
    assert!(engine.window_views(MINIMIZE_DURATION_MS as f64).is_empty());
}

#[test]
fn test_minimize_then_immediate_restore_never_hides() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 100.0);

    engine.request_minimize(id, 0.0);
    engine.request_restore(id, 120.0);

    // Tick well past both durations: the reversed minimize never commits
    engine.tick_lifecycle(2000.0);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Normal);
    assert_eq!(engine.window_views(2000.0).len(), 1);
}

#[test]
fn test_close_animation_keeps_window_until_commit() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 100.0);

    engine.request_close(id, 0.0);

    // The exit animation is observable before the record is removed
    assert_eq!(engine.window_views(200.0).len(), 1);
    assert!(engine.window_views(200.0)[0].opacity < 1.0);

    engine.tick_lifecycle(CLOSE_DURATION_MS as f64);
    assert!(engine.windows.get(id).is_none());
}

// =============================================================================
// Input Routing Tests
// =============================================================================

#[test]
fn test_pointer_down_close_button() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    let window = engine.windows.get(id).unwrap();
    let button = window.close_button_rect().center();

    let result = engine.handle_pointer_down(button.x, button.y, 0.0);
    assert!(result.is_handled());

    engine.tick_lifecycle(CLOSE_DURATION_MS as f64);
    assert!(engine.windows.get(id).is_none());
}

#[test]
fn test_pointer_down_minimize_button() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    let button = engine.windows.get(id).unwrap().minimize_button_rect().center();
    engine.handle_pointer_down(button.x, button.y, 0.0);

    engine.tick_lifecycle(MINIMIZE_DURATION_MS as f64);
    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Minimized);
}

#[test]
fn test_pointer_down_maximize_button() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    let button = engine.windows.get(id).unwrap().maximize_button_rect().center();
    engine.handle_pointer_down(button.x, button.y, 0.0);

    assert_eq!(engine.windows.get(id).unwrap().state, WindowState::Maximized);
}

#[test]
fn test_content_click_forwards_to_app() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    match engine.handle_pointer_down(500.0, 400.0, 0.0) {
        InputResult::Forward { window_id, local_x, local_y } => {
            assert_eq!(window_id, id);
            assert!((local_x - 400.0).abs() < 0.001);
            assert!((local_y - 320.0).abs() < 0.001);
        }
        other => panic!("expected forward, got {:?}", other),
    }
}

#[test]
fn test_gesture_survives_pointer_outside_viewport() {
    let mut engine = create_engine();
    let id = open_window(&mut engine, "notes", 100.0, 80.0);

    engine.start_move_drag(id, 110.0, 90.0);
    engine.handle_pointer_move(-2000.0, -2000.0);
    engine.handle_pointer_move(2500.0, 1500.0);

    // Still clamped, still dragging, single report on release
    let rect = engine.windows.get(id).unwrap().rect();
    assert!(rect.x >= 0.0 && rect.right() <= 1920.0 + 0.001);
    assert!(engine.handle_pointer_up().is_some());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_snapshot_json_roundtrip() {
    let mut engine = create_engine();
    engine.launch_app("notes");
    let tasks = engine.launch_app("tasks");
    engine.toggle_maximize_window(tasks);

    let json = serde_json::to_string(&engine.export_snapshot()).unwrap();
    let snapshot: atrium_shell::Snapshot = serde_json::from_str(&json).unwrap();

    let mut restored = create_engine();
    restored.import_snapshot(snapshot).unwrap();

    assert_eq!(restored.windows.count(), 2);
    let tasks_id = restored.windows.find_open("tasks").unwrap();
    assert_eq!(restored.windows.get(tasks_id).unwrap().state, WindowState::Maximized);
}

#[test]
fn test_snapshot_import_reclamps_for_smaller_viewport() {
    let mut engine = create_engine();
    open_window(&mut engine, "notes", 1100.0, 500.0);
    let snapshot = engine.export_snapshot();

    let mut small = ShellEngine::new();
    small.init(1280.0, 800.0);
    small.import_snapshot(snapshot).unwrap();

    let id = small.windows.find_open("notes").unwrap();
    let rect = small.windows.get(id).unwrap().rect();
    assert!(rect.right() <= 1280.0 + 0.001);
    assert!(rect.bottom() <= 800.0 + 0.001);
}

use std::path::PathBuf;

use luxmon_settings::{
    LoadOutcome, Settings, SettingsStore, WindowBridge, WindowGeometry,
};

fn temp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("luxmon-window-{}-{}", std::process::id(), name));
    p
}

#[test]
fn save_captures_live_geometry_into_the_record() {
    let path = temp_path("capture");
    let _ = std::fs::remove_file(&path);

    let bridge = WindowBridge::new();
    bridge.set_current([15, 30], [800, 600]);

    let mut store = SettingsStore::new(Settings::default());
    store.settings_mut().file_name = path.clone();
    store.attach_window(bridge);
    store.save().unwrap();

    let s = store.settings();
    assert_eq!(s.window_left, 15);
    assert_eq!(s.window_top, 30);
    assert_eq!(s.window_width, 800);
    assert_eq!(s.window_height, 600);

    // The captured values made it into the file, not just the record.
    let text = std::fs::read_to_string(&path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["Window left"], 15);
    assert_eq!(v["Window top"], 30);
    assert_eq!(v["Window width"], 800);
    assert_eq!(v["Window height"], 600);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_without_observed_geometry_keeps_record_fields() {
    let bridge = WindowBridge::new();
    let mut store = SettingsStore::new(Settings::default());
    store.settings_mut().file_name = temp_path("no-geometry");
    store.attach_window(bridge);
    store.save().unwrap();

    assert_eq!(store.settings().window_width, 950);
    assert_eq!(store.settings().window_height, 650);
    let _ = std::fs::remove_file(&store.settings().file_name);
}

#[test]
fn load_queues_a_manual_placement_request() {
    let path = temp_path("placement");
    std::fs::write(
        &path,
        "{\"Window left\": 120, \"Window top\": 45, \"Window width\": 700, \"Window height\": 500}",
    )
    .unwrap();

    let bridge = WindowBridge::new();
    let mut store = SettingsStore::new(Settings::default());
    store.settings_mut().file_name = path.clone();
    store.attach_window(bridge.clone());
    assert!(matches!(store.load(), LoadOutcome::Loaded));

    let commands = bridge.take_commands();
    assert_eq!(commands.len(), 2);
    match &commands[0] {
        egui::ViewportCommand::OuterPosition(pos) => {
            assert_eq!(*pos, egui::pos2(120.0, 45.0));
        }
        other => panic!("expected OuterPosition, got {:?}", other),
    }
    match &commands[1] {
        egui::ViewportCommand::InnerSize(size) => {
            assert_eq!(*size, egui::vec2(700.0, 500.0));
        }
        other => panic!("expected InnerSize, got {:?}", other),
    }
    // The request is drained exactly once.
    assert!(bridge.take_commands().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bridge_reports_geometry_only_once_fully_observed() {
    let bridge = WindowBridge::new();
    assert!(bridge.current_geometry().is_none());

    bridge.set_current([10, 20], [300, 200]);
    assert_eq!(
        bridge.current_geometry(),
        Some(WindowGeometry {
            left: 10,
            top: 20,
            width: 300,
            height: 200
        })
    );
}

#[test]
fn bridge_notifies_subscribers_on_change() {
    let bridge = WindowBridge::new();
    let updates = bridge.subscribe();

    bridge.set_current([1, 2], [30, 40]);
    let g = updates.try_recv().expect("update expected");
    assert_eq!(g.left, 1);
    assert_eq!(g.height, 40);

    // No change, no update.
    bridge.set_current([1, 2], [30, 40]);
    assert!(updates.try_recv().is_err());
}

#[test]
fn native_options_place_the_window_manually() {
    let mut s = Settings::default();
    s.set_geometry(WindowGeometry {
        left: 64,
        top: 32,
        width: 1280,
        height: 720,
    });

    let opts = s.native_options();
    assert_eq!(opts.viewport.position, Some(egui::pos2(64.0, 32.0)));
    assert_eq!(opts.viewport.inner_size, Some(egui::vec2(1280.0, 720.0)));
}

#[test]
fn geometry_accessors_round_trip() {
    let mut s = Settings::default();
    let g = WindowGeometry {
        left: -5,
        top: 7,
        width: 111,
        height: 222,
    };
    s.set_geometry(g);
    assert_eq!(s.geometry(), g);
}

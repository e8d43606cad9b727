use std::path::PathBuf;

use eph::config::*;
use eph::input::KeyCode;
use eph::note::{Lane, Rect};
use eph::window::WindowMode;

#[test]
fn empty_object_is_all_defaults() {
    assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
}

#[test]
fn default_layout() {
    let pf = Playfield::default();
    assert_eq!(pf.spawn_position(Lane::Left).to_array(), [1000.0, 150.0]);
    assert_eq!(pf.spawn_position(Lane::Right).to_array(), [1000.0, 510.0]);
    assert_eq!(pf.note_velocity().to_array(), [-800.0, 0.0]);
    assert_eq!(*pf.zone(Lane::Left), Rect::new(50.0, 0.0, 35.0, 350.0));
    assert_eq!(*pf.zone(Lane::Right), Rect::new(50.0, 370.0, 35.0, 350.0));
    assert_eq!(pf.tolerance, 5.0);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let json = r#"{
        "window": { "mode": "Borderless" },
        "playfield": { "note_speed": 400.0 },
        "tuning": { "miss_damage": 10.0 }
    }"#;
    let cfg = GameConfig::from_json(json).unwrap();
    assert_eq!(cfg.window.mode, WindowMode::Borderless);
    assert_eq!(cfg.window.width, 1000);
    assert_eq!(cfg.playfield.note_speed, 400.0);
    assert_eq!(cfg.playfield.spawn_x, 1000.0);
    assert_eq!(cfg.tuning.miss_damage, 10.0);
    assert_eq!(cfg.tuning.start_health, 50.0);
}

#[test]
fn bindings_use_key_code_names() {
    let cfg = GameConfig::from_json(r#"{ "bindings": { "lane_left_1": "ArrowLeft", "pause_toggle": "KeyP" } }"#).unwrap();
    assert_eq!(cfg.bindings.lane_left_1, KeyCode::ArrowLeft);
    assert_eq!(cfg.bindings.pause_toggle, KeyCode::KeyP);
    assert_eq!(cfg.bindings.lane_right_2, KeyCode::KeyK);
}

#[test]
fn audio_paths_are_optional() {
    let cfg = GameConfig::from_json(r#"{ "audio": { "music": "songs/a.ogg" } }"#).unwrap();
    assert_eq!(cfg.audio.music, Some(PathBuf::from("songs/a.ogg")));
    assert_eq!(cfg.audio.hit, None);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(GameConfig::from_json("{ \"tuning\": ").is_err());
    assert!(GameConfig::from_json(r#"{ "tuning": { "max_health": "lots" } }"#).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = GameConfig::load_or_default("definitely/not/here.json").unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert!(matches!(GameConfig::load("definitely/not/here.json"), Err(ConfigError::Io { .. })));
}

#[test]
fn broken_file_is_still_reported() {
    let dir = std::env::temp_dir().join(format!("eph-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("eph.json");
    std::fs::write(&path, "not json").unwrap();

    let err = GameConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().contains("eph.json"));

    std::fs::write(&path, r#"{ "chart": { "path": "x.txt" } }"#).unwrap();
    let cfg = GameConfig::load(&path).unwrap();
    assert_eq!(cfg.chart.path, PathBuf::from("x.txt"));
    assert_eq!(cfg.chart.levels_dir, PathBuf::from("levels"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn defaults_are_valid() {
    assert_eq!(GameConfig::default().validate(), Ok(()));
}

#[test]
fn unusable_tuning_is_rejected() {
    for json in [
        r#"{ "tuning": { "max_health": -1 } }"#,
        r#"{ "tuning": { "max_health": 0 } }"#,
        r#"{ "playfield": { "note_speed": 0 } }"#,
        r#"{ "playfield": { "note_speed": -800 } }"#,
    ] {
        let cfg = GameConfig::from_json(json).unwrap();
        assert!(cfg.validate().is_err(), "{json}");
    }

    let mut cfg = GameConfig::default();
    cfg.tuning.hit_heal = f32::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn invalid_file_fails_at_load_instead_of_at_play() {
    let dir = std::env::temp_dir().join(format!("eph-config-invalid-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("eph.json");
    std::fs::write(&path, r#"{ "tuning": { "max_health": -1 } }"#).unwrap();

    let err = GameConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("max_health"), "{err}");

    std::fs::remove_dir_all(&dir).unwrap();
}

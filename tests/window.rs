use eph::window::*;

#[test]
fn default_is_1000x720_windowed() {
    let cfg = WindowConfig::default();
    assert_eq!(cfg.width, 1000);
    assert_eq!(cfg.height, 720);
    assert_eq!(cfg.title, "eph :3");
    assert_eq!(cfg.mode, WindowMode::Windowed);
}

#[test]
fn mode_reads_from_json_by_name() {
    let cfg: WindowConfig = serde_json::from_str(r#"{ "mode": "Fullscreen", "width": 640 }"#).unwrap();
    assert_eq!(cfg.mode, WindowMode::Fullscreen);
    assert_eq!(cfg.width, 640);
    assert_eq!(cfg.height, 720);
}

// ── GlyphAtlas ───────────────────────────────────────────────────────────────

#[test]
fn builtin_atlas_decodes() {
    let font = GlyphAtlas::builtin().unwrap();
    assert_eq!(font.tile(), 8);
    assert_eq!(font.index_of('A'), Some(65));
    assert_eq!(font.index_of('é'), None);
}

#[test]
fn letters_have_ink_and_space_has_none() {
    let font = GlyphAtlas::builtin().unwrap();
    let ink = |ch| (0..8).flat_map(|y| (0..8).map(move |x| (x, y))).filter(|&(x, y)| font.is_inked(ch, x, y)).count();
    assert!(ink('A') > 0);
    assert!(ink(':') > 0);
    assert_eq!(ink(' '), 0);
    assert_eq!(ink('é'), 0);
    assert!(!font.is_inked('A', 8, 0));
}

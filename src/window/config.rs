use serde::{Deserialize, Serialize};

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowMode {
    /// Standard decorated, resizable window at the configured size.
    Windowed,
    /// Exclusive hardware fullscreen at the closest video mode.
    Fullscreen,
    /// Borderless window sized to the monitor.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window section of the game config.
///
/// `width`/`height` are the playfield's logical size; every layout
/// coordinate in the playfield config is expressed in this space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub mode: WindowMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "eph :3".into(),
            width: 1000,
            height: 720,
            mode: WindowMode::Windowed,
        }
    }
}

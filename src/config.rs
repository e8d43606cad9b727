// =============================================================================
// CONFIG.RS — Game configuration (JSON, every field optional)
// =============================================================================

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use winit::keyboard::KeyCode;

use crate::note::{Lane, Rect};
use crate::window::WindowConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config '{path}': {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Top-level configuration. Missing sections and fields take their
/// defaults, so `{}` is a valid config file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub chart: ChartConfig,
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub audio: AudioConfig,
    pub bindings: Bindings,
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    /// Reject values the game cannot run with. Well-formed JSON can still
    /// carry a negative health cap or notes that never reach the zones.
    pub fn validate(&self) -> Result<(), String> {
        let t = &self.tuning;
        if !t.max_health.is_finite() || t.max_health <= 0.0 {
            return Err(format!("tuning.max_health must be positive, got {}", t.max_health));
        }
        for (name, value) in [
            ("tuning.start_health", t.start_health),
            ("tuning.miss_damage", t.miss_damage),
            ("tuning.hit_heal", t.hit_heal),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }

        let pf = &self.playfield;
        if !pf.note_speed.is_finite() || pf.note_speed <= 0.0 {
            return Err(format!("playfield.note_speed must be positive, got {}", pf.note_speed));
        }
        if !pf.tolerance.is_finite() || !pf.note_size.is_finite() {
            return Err("playfield sizes must be finite".into());
        }
        Ok(())
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    /// A file that exists and fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

// ── Chart selection ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart played when "play" is activated.
    pub path: PathBuf,
    /// Directory scanned for the level-select button.
    pub levels_dir: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("levels/level1/test_chart.txt"),
            levels_dir: PathBuf::from("levels"),
        }
    }
}

// ── Playfield layout ────────────────────────────────────────────────────────

/// Spawn points, note motion and hit zones, in window pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub note_size: Vec2,
    pub spawn_x: f32,
    pub left_spawn_y: f32,
    pub right_spawn_y: f32,
    /// Horizontal speed towards the zones, pixels per second.
    pub note_speed: f32,
    pub left_zone: Rect,
    pub right_zone: Rect,
    /// Extra margin below each zone's bottom edge for the overlap test.
    pub tolerance: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            note_size: Vec2::new(100.0, 100.0),
            spawn_x: 1000.0,
            left_spawn_y: 150.0,
            right_spawn_y: 510.0,
            note_speed: 800.0,
            left_zone: Rect::new(50.0, 0.0, 35.0, 350.0),
            right_zone: Rect::new(50.0, 370.0, 35.0, 350.0),
            tolerance: 5.0,
        }
    }
}

impl Playfield {
    pub fn spawn_position(&self, lane: Lane) -> Vec2 {
        match lane {
            Lane::Left => Vec2::new(self.spawn_x, self.left_spawn_y),
            Lane::Right => Vec2::new(self.spawn_x, self.right_spawn_y),
        }
    }

    /// Notes travel right to left.
    pub fn note_velocity(&self) -> Vec2 {
        Vec2::new(-self.note_speed, 0.0)
    }

    pub fn zone(&self, lane: Lane) -> &Rect {
        match lane {
            Lane::Left => &self.left_zone,
            Lane::Right => &self.right_zone,
        }
    }
}

// ── Health tuning ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub start_health: f32,
    pub max_health: f32,
    pub miss_damage: f32,
    pub hit_heal: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_health: 50.0,
            max_health: 100.0,
            miss_damage: 25.0,
            hit_heal: 25.0,
        }
    }
}

// ── Audio files ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub hit: Option<PathBuf>,
    pub miss: Option<PathBuf>,
    pub music: Option<PathBuf>,
}

// ── Key bindings ────────────────────────────────────────────────────────────

/// Physical keys per logical action, written with winit's `KeyCode` names
/// (`"KeyD"`, `"Escape"`, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bindings {
    pub lane_left_1: KeyCode,
    pub lane_left_2: KeyCode,
    pub lane_right_1: KeyCode,
    pub lane_right_2: KeyCode,
    pub pause_toggle: KeyCode,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            lane_left_1: KeyCode::KeyD,
            lane_left_2: KeyCode::KeyF,
            lane_right_1: KeyCode::KeyJ,
            lane_right_2: KeyCode::KeyK,
            pause_toggle: KeyCode::Escape,
        }
    }
}

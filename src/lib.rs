pub mod audio;
pub mod chart;
pub mod config;
pub mod game;
pub mod input;
pub mod judgment;
pub mod levels;
pub mod note;
pub mod render;
pub mod scheduler;
pub mod score;
pub mod screen;
pub mod ui;
pub mod window;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "eph.json";

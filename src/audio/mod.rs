use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};
use log::warn;

use crate::config::AudioConfig;
use crate::game::GameEvent;
use crate::screen::Screen;

/// Sounds the game asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Hit,
    Miss,
    /// Chart backing track, looped while a run is on screen.
    Music,
}

/// Audio side of the frame loop.
pub trait AudioSink {
    fn play(&mut self, cue: Cue, looped: bool);
    fn stop(&mut self, cue: Cue);
    /// Hold a looped cue at its current position.
    fn pause(&mut self, cue: Cue);
    /// Continue a paused cue from where it was held.
    fn resume(&mut self, cue: Cue);
}

/// Translate one tick's gameplay events into cues.
pub fn play_cues(sink: &mut impl AudioSink, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::NoteHit { .. } => sink.play(Cue::Hit, false),
            GameEvent::NoteMissed { .. } => sink.play(Cue::Miss, false),
            GameEvent::RunStarted => {
                sink.stop(Cue::Music);
                sink.play(Cue::Music, true);
            }
            GameEvent::ScreenChanged { from: Screen::Playing, to: Screen::Paused } => sink.pause(Cue::Music),
            GameEvent::ScreenChanged { from: Screen::Paused, to: Screen::Playing } => sink.resume(Cue::Music),
            GameEvent::ScreenChanged { from: Screen::Playing, .. } => sink.stop(Cue::Music),
            GameEvent::ScreenChanged { .. } | GameEvent::NoteSpawned { .. } => {}
        }
    }
}

// ── kira backend ─────────────────────────────────────────────────────────────

pub struct AudioContext {
    /// `None` when audio hardware is unavailable (headless / CI / no audio device).
    manager: Option<AudioManager>,
    sounds: HashMap<Cue, StaticSoundData>,
    playing: HashMap<Cue, StaticSoundHandle>,
}

impl AudioContext {
    pub fn new() -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("failed to initialize audio manager: {e}; audio disabled");
                None
            }
        };
        Self { manager, sounds: HashMap::new(), playing: HashMap::new() }
    }

    /// Create a context and load every sound named in `config`.
    pub fn from_config(config: &AudioConfig) -> Self {
        let mut ctx = Self::new();
        let files = [(Cue::Hit, &config.hit), (Cue::Miss, &config.miss), (Cue::Music, &config.music)];
        for (cue, path) in files {
            if let Some(path) = path {
                ctx.load(cue, path);
            }
        }
        ctx
    }

    pub fn is_available(&self) -> bool { self.manager.is_some() }

    pub fn is_loaded(&self, cue: Cue) -> bool { self.sounds.contains_key(&cue) }

    /// Load a sound file (OGG, WAV) for `cue`. Failures are logged and the
    /// cue stays silent.
    pub fn load<P: AsRef<Path>>(&mut self, cue: Cue, path: P) {
        match StaticSoundData::from_file(path.as_ref()) {
            Ok(sound) => { self.sounds.insert(cue, sound); }
            Err(e) => warn!("failed to load {cue:?} from '{}': {e}", path.as_ref().display()),
        }
    }
}

impl Default for AudioContext {
    fn default() -> Self { Self::new() }
}

impl AudioSink for AudioContext {
    fn play(&mut self, cue: Cue, looped: bool) {
        let Some(manager) = self.manager.as_mut() else { return; };
        let Some(data) = self.sounds.get(&cue) else { return; };

        let settings = if looped {
            StaticSoundSettings::new().loop_region(0.0..)
        } else {
            StaticSoundSettings::new()
        };
        match manager.play(data.clone().with_settings(settings)) {
            Ok(handle) => {
                if looped {
                    self.playing.insert(cue, handle);
                }
            }
            Err(e) => warn!("failed to play {cue:?}: {e}"),
        }
    }

    fn stop(&mut self, cue: Cue) {
        if let Some(mut handle) = self.playing.remove(&cue) {
            let _ = handle.stop(fade());
        }
    }

    fn pause(&mut self, cue: Cue) {
        if let Some(handle) = self.playing.get_mut(&cue) {
            let _ = handle.pause(fade());
        }
    }

    fn resume(&mut self, cue: Cue) {
        if let Some(handle) = self.playing.get_mut(&cue) {
            let _ = handle.resume(fade());
        }
    }
}

fn fade() -> Tween {
    Tween {
        duration: Duration::from_secs_f32(0.2),
        ..Default::default()
    }
}

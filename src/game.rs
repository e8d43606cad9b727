// =============================================================================
// GAME.RS — The screen state machine and the per-tick simulation
//
// Tick order: input → scheduling → note physics → judgment and miss sweep →
// health check → frame composition.
// =============================================================================

use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::chart::Chart;
use crate::config::{GameConfig, Playfield, Tuning};
use crate::input::{Action, InputEvent, PointerButton};
use crate::judgment::{self, Judgment};
use crate::note::{Lane, Note};
use crate::render::Frame;
use crate::scheduler::{ScheduleStatus, Scheduler};
use crate::score::{self, PlayState};
use crate::screen::{Screen, Trigger};
use crate::ui::{self, HealthBar, HitZone, Label};

/// Gameplay happenings of one tick, for audio and logging.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScreenChanged { from: Screen, to: Screen },
    RunStarted,
    NoteSpawned { lane: Lane },
    NoteHit { lane: Lane },
    NoteMissed { lane: Lane },
}

/// Output of [`Game::tick`].
#[derive(Debug, Clone)]
pub struct Tick {
    pub frame: Frame,
    pub events: Vec<GameEvent>,
    /// The player asked to leave (window close or confirmed exit).
    pub quit: bool,
}

/// One attempt at a chart.
#[derive(Debug, Clone)]
pub struct Run {
    pub state: PlayState,
    pub scheduler: Scheduler,
    /// In spawn order.
    pub notes: Vec<Note>,
}

pub struct Game {
    playfield: Playfield,
    tuning: Tuning,
    screen: Screen,
    chart: Option<Chart>,
    levels: Vec<PathBuf>,
    level_index: usize,
    run: Option<Run>,
    last_error: Option<String>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            playfield: config.playfield.clone(),
            tuning: config.tuning,
            screen: Screen::Menu,
            chart: None,
            levels: Vec::new(),
            level_index: 0,
            run: None,
            last_error: None,
        }
    }

    pub fn with_chart(mut self, chart: Chart) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Charts the level button cycles through.
    pub fn with_levels(mut self, levels: Vec<PathBuf>) -> Self {
        self.levels = levels;
        self
    }

    pub fn screen(&self) -> Screen { self.screen }
    pub fn chart(&self) -> Option<&Chart> { self.chart.as_ref() }
    pub fn run(&self) -> Option<&Run> { self.run.as_ref() }
    pub fn run_mut(&mut self) -> Option<&mut Run> { self.run.as_mut() }
    pub fn playfield(&self) -> &Playfield { &self.playfield }

    /// Last chart load or schedule failure, shown on the menu.
    pub fn last_error(&self) -> Option<&str> { self.last_error.as_deref() }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Advance the game by `dt` seconds after applying `input`.
    ///
    /// Negative or non-finite `dt` counts as zero.
    pub fn tick(&mut self, dt: f32, input: &[InputEvent]) -> Tick {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("ignoring invalid frame delta {dt}");
            0.0
        };

        let mut tick = TickState::default();
        for event in input {
            self.handle_input(event, &mut tick);
        }

        if self.screen.simulates() {
            self.simulate(dt, &mut tick);
        }

        Tick {
            frame: self.compose(),
            events: tick.events,
            quit: tick.quit,
        }
    }

    // ── Input ───────────────────────────────────────────────────────────────

    fn handle_input(&mut self, event: &InputEvent, tick: &mut TickState) {
        match *event {
            InputEvent::Action(Action::Quit) => tick.quit = true,
            InputEvent::Action(Action::PauseToggle) => {
                self.transition(Trigger::PauseToggle, tick);
            }
            InputEvent::Action(action) => {
                if let Some(lane) = action.lane() {
                    self.strike(lane, tick);
                }
            }
            InputEvent::Pointer { button, x, y } => self.handle_pointer(button, x, y, tick),
        }
    }

    fn handle_pointer(&mut self, button: PointerButton, x: f32, y: f32, tick: &mut TickState) {
        if self.screen == Screen::Playing {
            self.strike(button.lane(), tick);
            return;
        }
        if button != PointerButton::Primary {
            return;
        }

        match self.screen {
            Screen::Menu => {
                if ui::PLAY_BUTTON.is_touching(x, y) {
                    if !tick.transitioned {
                        self.start_run(Trigger::Play, tick);
                    }
                } else if ui::EXIT_BUTTON.is_touching(x, y) {
                    self.transition(Trigger::Exit, tick);
                } else if ui::LEVEL_BUTTON.is_touching(x, y) {
                    self.next_level();
                }
            }
            Screen::ExitConfirm => {
                if ui::EXIT_CONFIRM_BUTTON.is_touching(x, y) {
                    tick.quit = true;
                } else if ui::EXIT_CANCEL_BUTTON.is_touching(x, y) {
                    self.transition(Trigger::CancelExit, tick);
                }
            }
            Screen::Results => {
                if ui::RETRY_BUTTON.is_touching(x, y) {
                    if !tick.transitioned {
                        self.start_run(Trigger::Retry, tick);
                    }
                } else if ui::MENU_BUTTON.is_touching(x, y) {
                    if self.transition(Trigger::ToMenu, tick) {
                        self.run = None;
                    }
                }
            }
            Screen::Playing | Screen::Paused => {}
        }
    }

    /// Queue a lane strike; resolved in the judgment step of this tick.
    fn strike(&mut self, lane: Lane, tick: &mut TickState) {
        if self.screen == Screen::Playing {
            tick.strikes.push(lane);
        }
    }

    /// Apply `trigger` if the current screen allows it. Only the first
    /// input trigger of a tick may change the screen.
    fn transition(&mut self, trigger: Trigger, tick: &mut TickState) -> bool {
        if trigger.is_input() && tick.transitioned {
            debug!("ignoring {trigger:?}: screen already changed this tick");
            return false;
        }
        let Some(to) = self.screen.next(trigger) else {
            return false;
        };
        let from = self.screen;
        debug!("screen {from:?} -> {to:?} ({trigger:?})");
        self.screen = to;
        tick.transitioned |= trigger.is_input();
        tick.events.push(GameEvent::ScreenChanged { from, to });
        true
    }

    // ── Runs ────────────────────────────────────────────────────────────────

    /// Re-parse the chart and reset all run state, then enter Playing.
    /// A chart that fails to load keeps the current screen.
    fn start_run(&mut self, trigger: Trigger, tick: &mut TickState) {
        if self.screen.next(trigger).is_none() {
            return;
        }
        let Some(chart) = self.chart.as_ref() else {
            error!("no chart selected");
            self.last_error = Some("no chart selected".into());
            return;
        };
        let events = match chart.events() {
            Ok(events) => events,
            Err(e) => {
                error!("cannot start '{}': {e}", chart.name());
                self.last_error = Some(e.to_string());
                return;
            }
        };

        info!("starting run on '{}'", chart.name());
        self.run = Some(Run {
            state: PlayState::new(self.tuning),
            scheduler: Scheduler::new(events),
            notes: Vec::new(),
        });
        self.last_error = None;
        self.transition(trigger, tick);
        tick.events.push(GameEvent::RunStarted);
    }

    fn next_level(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        self.level_index = (self.level_index + 1) % self.levels.len();
        let path = &self.levels[self.level_index];
        match Chart::open(path) {
            Ok(chart) => {
                info!("selected level '{}'", chart.name());
                self.chart = Some(chart);
                self.last_error = None;
            }
            Err(e) => {
                error!("{e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    // ── Simulation ──────────────────────────────────────────────────────────

    fn simulate(&mut self, dt: f32, tick: &mut TickState) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        let before = run.notes.len();
        let status = run.scheduler.advance(dt, &mut run.notes, &self.playfield);
        tick.events.extend(run.notes[before..].iter().map(|n| GameEvent::NoteSpawned { lane: n.lane }));

        match status {
            Ok(ScheduleStatus::Running) => {}
            Ok(ScheduleStatus::Finished) => {
                info!("chart finished, score {}", run.state.score);
                self.transition(Trigger::ChartFinished, tick);
                return;
            }
            Err(e) => {
                error!("run aborted: {e}");
                self.last_error = Some(e.to_string());
                self.run = None;
                self.transition(Trigger::Fault, tick);
                return;
            }
        }

        judgment::advance_notes(&mut run.notes, dt);
        run.state.elapsed += dt;

        for &lane in &tick.strikes {
            if let Judgment::Hit { lane } = judgment::judge(lane, &mut run.notes, &self.playfield, &mut run.state) {
                tick.events.push(GameEvent::NoteHit { lane });
            }
        }
        for lane in judgment::sweep_misses(&mut run.notes, &mut run.state) {
            tick.events.push(GameEvent::NoteMissed { lane });
        }

        if run.state.is_depleted() {
            info!("health depleted, score {}", run.state.score);
            self.transition(Trigger::HealthDepleted, tick);
        }
    }

    // ── Frame ───────────────────────────────────────────────────────────────

    fn compose(&self) -> Frame {
        let mut frame = Frame::new(ui::BACKGROUND);

        match self.screen {
            Screen::Menu => {
                frame.draw(&Label::new(ui::TITLE.0, ui::TITLE.1, "eph :3").with_panel(800.0, 150.0));
                frame.draw(&ui::PLAY_BUTTON);
                frame.draw(&ui::EXIT_BUTTON);
                if !self.levels.is_empty() {
                    frame.draw(&ui::LEVEL_BUTTON);
                }
                if let Some(chart) = &self.chart {
                    frame.text(ui::PLAY_BUTTON.rect.right() + 20.0, ui::PLAY_BUTTON.rect.y, 24.0, chart.name(), ui::TEXT);
                }
                if let Some(err) = &self.last_error {
                    frame.text(ui::STATUS_POS.0, ui::STATUS_POS.1, 20.0, err.as_str(), ui::ERROR_TEXT);
                }
            }
            Screen::Playing => {
                frame.draw(&HitZone(&self.playfield.left_zone));
                frame.draw(&HitZone(&self.playfield.right_zone));
                if let Some(run) = &self.run {
                    for note in &run.notes {
                        frame.draw(note);
                    }
                    let state = &run.state;
                    frame.draw(&Label::new(ui::SCORE_POS.0, ui::SCORE_POS.1, score::score_text(state)));
                    frame.draw(&Label::new(ui::MULTIPLIER_POS.0, ui::MULTIPLIER_POS.1, score::multiplier_text(state)));
                    frame.draw(&Label::new(ui::CLOCK_POS.0, ui::CLOCK_POS.1, score::format_clock(state.elapsed)));
                    frame.draw(&HealthBar { rect: ui::HEALTH_BAR, fraction: state.health_fraction() });
                }
            }
            Screen::Paused => {
                frame.draw(&Label::new(ui::PAUSE_LABEL.0, ui::PAUSE_LABEL.1, "pause").with_panel(650.0, 200.0));
            }
            Screen::ExitConfirm => {
                frame.draw(&ui::EXIT_CONFIRM_BUTTON);
                frame.draw(&ui::EXIT_CANCEL_BUTTON);
            }
            Screen::Results => {
                let title = match &self.run {
                    Some(run) if run.state.is_depleted() => "game over",
                    _ => "you win!",
                };
                frame.text(ui::RESULTS_TITLE.0, ui::RESULTS_TITLE.1, 32.0, title, ui::TEXT);
                if let Some(run) = &self.run {
                    let s = &run.state;
                    frame.text(ui::RESULTS_TITLE.0, ui::RESULTS_TITLE.1 + 40.0, 24.0, score::score_text(s), ui::TEXT);
                    frame.text(
                        ui::RESULTS_TITLE.0,
                        ui::RESULTS_TITLE.1 + 70.0,
                        24.0,
                        format!("hits: {}  misses: {}", s.hits, s.misses),
                        ui::TEXT,
                    );
                }
                frame.draw(&ui::RETRY_BUTTON);
                frame.draw(&ui::MENU_BUTTON);
            }
        }

        frame
    }
}

#[derive(Default)]
struct TickState {
    events: Vec<GameEvent>,
    strikes: Vec<Lane>,
    transitioned: bool,
    quit: bool,
}

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use eph::DEFAULT_CONFIG_PATH;
use eph::audio::{self, AudioContext};
use eph::chart::Chart;
use eph::config::GameConfig;
use eph::game::Game;
use eph::input::{Action, ActionMap, InputEvent, InputState};
use eph::levels;
use eph::render::{self, Presenter};
use eph::window::{self, SoftwarePresenter};

/// eph - a two-lane rhythm game
#[derive(Parser, Debug)]
#[command(name = "eph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// JSON config file (missing file means defaults)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Chart to play, overriding the config
    #[arg(long, value_name = "PATH")]
    chart: Option<PathBuf>,

    /// Print the charts found in the levels directory and exit
    #[arg(long)]
    list_levels: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = GameConfig::load_or_default(&config_path)?;
    if let Some(chart) = args.chart {
        config.chart.path = chart;
    }

    let levels = levels::discover(&config.chart.levels_dir);
    if args.list_levels {
        for level in &levels {
            println!("{}", level.display());
        }
        return Ok(());
    }

    let mut game = Game::new(&config).with_levels(levels);
    match Chart::open(&config.chart.path) {
        Ok(chart) => game = game.with_chart(chart),
        Err(e) => {
            error!("{e}");
            game.set_error(e.to_string());
        }
    }

    let event_loop = EventLoop::new()?;
    let mut app = App {
        actions: ActionMap::from_bindings(&config.bindings),
        audio: AudioContext::from_config(&config.audio),
        config,
        game,
        input: InputState::new(),
        presenter: None,
        final_score: 0,
    };
    event_loop.run_app(&mut app)?;

    info!("you scored {}", app.final_score);
    Ok(())
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: GameConfig,
    game: Game,
    actions: ActionMap,
    input: InputState,
    audio: AudioContext,
    presenter: Option<SoftwarePresenter>,
    final_score: u64,
}

impl App {
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(presenter) = self.presenter.as_mut() else { return };

        let dt = presenter.get_dt();
        let events = self.input.take_events();
        let tick = self.game.tick(dt, &events);

        audio::play_cues(&mut self.audio, &tick.events);
        render::present(presenter, &tick.frame);

        if let Some(run) = self.game.run() {
            self.final_score = run.state.score;
        }

        if tick.quit {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }
        let window = match event_loop.create_window(window::window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        window::apply_window_mode(&window, &self.config.window);

        match SoftwarePresenter::new(window, self.config.window.width, self.config.window.height) {
            Ok(p) => self.presenter = Some(p),
            Err(e) => {
                error!("failed to initialize presenter: {e}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(presenter) = self.presenter.as_ref() {
            presenter.window().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.input.push(InputEvent::Action(Action::Quit)),

            WindowEvent::Resized(size) => {
                if let Some(presenter) = self.presenter.as_mut() {
                    presenter.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = match self.presenter.as_ref() {
                    Some(p) => p.to_logical(position.x as f32, position.y as f32),
                    None => (position.x as f32, position.y as f32),
                };
                self.input.cursor_moved(x, y);
            }

            WindowEvent::MouseInput { button, state: ElementState::Pressed, .. } => {
                self.input.mouse_pressed(button);
            }

            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, repeat, .. },
                ..
            } => match state {
                ElementState::Pressed if !repeat => self.input.key_pressed(code, &self.actions),
                ElementState::Pressed => {}
                ElementState::Released => self.input.key_released(code),
            },

            WindowEvent::Focused(false) => self.input.focus_lost(),

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

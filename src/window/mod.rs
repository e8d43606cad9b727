pub mod config;
pub mod font;
pub mod presenter;

pub use config::{WindowConfig, WindowMode};
pub use font::GlyphAtlas;
pub use presenter::SoftwarePresenter;

use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Build the attributes for the game window from `config`.
///
/// Fullscreen modes are applied after creation with
/// [`apply_window_mode`], since exclusive fullscreen needs the monitor the
/// window ends up on.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_resizable(config.mode == WindowMode::Windowed)
}

/// Switch `window` into the configured presentation mode.
///
/// `Fullscreen` picks the current monitor's video mode closest in area to
/// the configured size and falls back to borderless when no monitor handle
/// is available.
pub fn apply_window_mode(window: &Window, config: &WindowConfig) {
    match config.mode {
        WindowMode::Windowed => window.set_fullscreen(None),

        WindowMode::Fullscreen => {
            let fullscreen = match window.current_monitor() {
                Some(monitor) => {
                    let target_area = config.width as u64 * config.height as u64;
                    let best = monitor.video_modes().min_by_key(|vm| {
                        let s = vm.size();
                        (s.width as u64 * s.height as u64).abs_diff(target_area)
                    });
                    match best {
                        Some(vm) => Fullscreen::Exclusive(vm),
                        None => Fullscreen::Borderless(Some(monitor)),
                    }
                }
                None => Fullscreen::Borderless(None),
            };
            window.set_fullscreen(Some(fullscreen));
        }

        WindowMode::Borderless => window.set_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

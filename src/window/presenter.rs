use std::error::Error;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use winit::window::Window;

use crate::note::Rect;
use crate::render::{self, Color, DrawCommand, Presenter};

use super::font::GlyphAtlas;

/// Longest frame delta handed to the game, in seconds.
pub const MAX_FRAME_DT: f32 = 0.25;

/// CPU rasterizer over a softbuffer surface.
///
/// Layout coordinates are logical (the configured window size) and scaled
/// to the window's physical size. Text is drawn from the built-in glyph
/// atlas, one filled block per inked glyph pixel.
pub struct SoftwarePresenter {
    window: Arc<Window>,
    _context: softbuffer::Context<Arc<Window>>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    pixels: Vec<u32>,
    font: Option<GlyphAtlas>,
    width: u32,
    height: u32,
    logical: (f32, f32),
    last_instant: Option<Instant>,
}

impl SoftwarePresenter {
    pub fn new(window: Arc<Window>, logical_width: u32, logical_height: u32) -> Result<Self, Box<dyn Error>> {
        info!("initializing software presenter (softbuffer)");
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;
        let size = window.inner_size();
        let font = match GlyphAtlas::builtin() {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("failed to decode glyph atlas: {e}; text disabled");
                None
            }
        };

        let mut presenter = Self {
            window,
            _context: context,
            surface,
            pixels: Vec::new(),
            font,
            width: 0,
            height: 0,
            logical: (logical_width.max(1) as f32, logical_height.max(1) as f32),
            last_instant: None,
        };
        presenter.resize(size.width, size.height);
        Ok(presenter)
    }

    pub fn window(&self) -> &Window { &self.window }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }

    /// Physical window position → logical layout position.
    pub fn to_logical(&self, x: f32, y: f32) -> (f32, f32) {
        if self.width == 0 || self.height == 0 {
            return (x, y);
        }
        (x * self.logical.0 / self.width as f32, y * self.logical.1 / self.height as f32)
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let sx = self.width as f32 / self.logical.0;
        let sy = self.height as f32 / self.logical.1;
        let x0 = (rect.left() * sx).round().clamp(0.0, self.width as f32) as usize;
        let x1 = (rect.right() * sx).round().clamp(0.0, self.width as f32) as usize;
        let y0 = (rect.top() * sy).round().clamp(0.0, self.height as f32) as usize;
        let y1 = (rect.bottom() * sy).round().clamp(0.0, self.height as f32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let packed = color.to_xrgb();
        let stride = self.width as usize;
        for row in self.pixels[y0 * stride..y1 * stride].chunks_exact_mut(stride) {
            row[x0..x1].fill(packed);
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, size: f32, text: &str, color: Color) {
        let Some(font) = self.font.take() else { return };
        let tile = font.tile();
        let cell = size * render::GLYPH_ADVANCE;
        let dot = cell / tile as f32;

        for (i, ch) in text.chars().enumerate() {
            let ox = x + i as f32 * cell;
            for gy in 0..tile {
                for gx in 0..tile {
                    if font.is_inked(ch, gx, gy) {
                        let px = Rect::new(ox + gx as f32 * dot, y + gy as f32 * dot, dot, dot);
                        self.fill_rect(&px, color);
                    }
                }
            }
        }
        self.font = Some(font);
    }
}

impl Presenter for SoftwarePresenter {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_xrgb());
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect { rect, color } => self.fill_rect(rect, *color),
            DrawCommand::Text { x, y, size, text, color } => self.draw_text(*x, *y, *size, text, *color),
        }
    }

    fn swap_buffers(&mut self) {
        let (Some(w), Some(h)) = (NonZeroU32::new(self.width), NonZeroU32::new(self.height)) else {
            return;
        };
        let result = self.surface.resize(w, h).and_then(|()| {
            let mut buffer = self.surface.buffer_mut()?;
            buffer.copy_from_slice(&self.pixels);
            buffer.present()
        });
        if let Err(e) = result {
            debug!("present failed: {e}");
        }
    }

    fn get_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32().min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_instant = Some(now);
        dt
    }

    fn get_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

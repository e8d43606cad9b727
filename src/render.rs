// =============================================================================
// RENDER.RS — Draw commands and the presentation seam
//
// The game never touches pixels. Each tick it fills a `Frame` with plain draw
// commands; a `Presenter` turns those into whatever the platform offers.
// =============================================================================

use crate::note::Rect;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    /// Pack as `0x00RRGGBB`, alpha dropped.
    pub fn to_xrgb(self) -> u32 {
        let [r, g, b, _] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u32);
        (r << 16) | (g << 8) | b
    }
}

// ── Text metrics ───────────────────────────────────────────────────────────

/// Text is monospaced with square glyph cells; a cell is this fraction of
/// the requested text size.
pub const GLYPH_ADVANCE: f32 = 0.5;

/// Width of `text` drawn at `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ADVANCE
}

/// Largest size up to `size` at which `text` fits in `max_width`.
pub fn fit_text_size(text: &str, size: f32, max_width: f32) -> f32 {
    let width = text_width(text, size);
    if width <= max_width || width <= 0.0 {
        return size;
    }
    size * (max_width.max(0.0) / width)
}

// ── Commands ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Text { x: f32, y: f32, size: f32, text: String, color: Color },
}

/// Everything needed to present one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub clear_color: Color,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(clear_color: Color) -> Self {
        Self { clear_color, commands: Vec::new() }
    }

    pub fn rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, text: impl Into<String>, color: Color) {
        self.commands.push(DrawCommand::Text { x, y, size, text: text.into(), color });
    }

    pub fn draw(&mut self, item: &impl Drawable) {
        item.draw(self);
    }

    /// All text commands in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }
}

/// Anything that knows how to describe itself as draw commands.
pub trait Drawable {
    fn draw(&self, frame: &mut Frame);
}

// ── Presenter ──────────────────────────────────────────────────────────────

/// Platform side of the frame loop: a window, a test recorder, etc.
pub trait Presenter {
    fn clear(&mut self, color: Color);
    fn draw(&mut self, command: &DrawCommand);
    fn swap_buffers(&mut self);
    /// Seconds since the previous call.
    fn get_dt(&mut self) -> f32;
    fn get_size(&self) -> (u32, u32);
}

/// Clear, draw every command in order, then swap.
pub fn present(presenter: &mut impl Presenter, frame: &Frame) {
    presenter.clear(frame.clear_color);
    for command in &frame.commands {
        presenter.draw(command);
    }
    presenter.swap_buffers();
}

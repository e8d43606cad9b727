// =============================================================================
// UI.RS — Buttons, labels, health bar and the fixed screen layouts
// =============================================================================

use crate::note::{Note, Rect};
use crate::render::{self, Color, Drawable, Frame};

// ── Palette ─────────────────────────────────────────────────────────────────
pub const BACKGROUND:  Color = Color::rgb8(148, 201, 224);
pub const PANEL:       Color = Color::rgb8(38, 52, 74);
pub const TEXT:        Color = Color::WHITE;
pub const ZONE:        Color = Color::WHITE;
pub const NOTE:        Color = Color::rgb8(72, 88, 110);
pub const HEALTH_FULL: Color = Color::rgb8(179, 229, 252);
pub const HEALTH_EMPTY: Color = Color::WHITE;
pub const ERROR_TEXT:  Color = Color::rgb8(200, 40, 40);

const TEXT_SIZE: f32 = 32.0;
const BUTTON_PADDING: f32 = 10.0;

// ── Widgets ─────────────────────────────────────────────────────────────────

/// A clickable labelled box.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub text: &'static str,
}

impl Button {
    pub const fn new(x: f32, y: f32, w: f32, h: f32, text: &'static str) -> Self {
        Self { rect: Rect::new(x, y, w, h), text }
    }

    pub fn is_touching(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }
}

impl Drawable for Button {
    fn draw(&self, frame: &mut Frame) {
        frame.rect(self.rect, PANEL);
        let size = render::fit_text_size(self.text, TEXT_SIZE, self.rect.w - 2.0 * BUTTON_PADDING);
        frame.text(self.rect.x + BUTTON_PADDING, self.rect.y + BUTTON_PADDING, size, self.text, TEXT);
    }
}

/// Static text, optionally on a panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub panel: Option<Rect>,
}

impl Label {
    pub fn new(x: f32, y: f32, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), panel: None }
    }

    pub fn with_panel(mut self, w: f32, h: f32) -> Self {
        self.panel = Some(Rect::new(self.x, self.y, w, h));
        self
    }
}

impl Drawable for Label {
    fn draw(&self, frame: &mut Frame) {
        if let Some(panel) = self.panel {
            frame.rect(panel, PANEL);
        }
        frame.text(self.x, self.y, TEXT_SIZE, self.text.as_str(), TEXT);
    }
}

/// Two-tone bar: filled part on the left, empty remainder on the right.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthBar {
    pub rect: Rect,
    /// Fill ratio, clamped to `[0, 1]` when drawn.
    pub fraction: f32,
}

impl HealthBar {
    pub fn full_width(&self) -> f32 {
        self.fraction.clamp(0.0, 1.0) * self.rect.w
    }
}

impl Drawable for HealthBar {
    fn draw(&self, frame: &mut Frame) {
        let full = self.full_width();
        let r = self.rect;
        frame.rect(Rect::new(r.x, r.y, full, r.h), HEALTH_FULL);
        frame.rect(Rect::new(r.x + full, r.y, r.w - full, r.h), HEALTH_EMPTY);
    }
}

/// A lane's target area.
pub struct HitZone<'a>(pub &'a Rect);

impl Drawable for HitZone<'_> {
    fn draw(&self, frame: &mut Frame) {
        frame.rect(*self.0, ZONE);
    }
}

impl Drawable for Note {
    fn draw(&self, frame: &mut Frame) {
        frame.rect(self.rect(), NOTE);
    }
}

// ── Layouts ─────────────────────────────────────────────────────────────────

pub const TITLE: (f32, f32) = (100.0, 60.0);
pub const PLAY_BUTTON: Button = Button::new(300.0, 300.0, 200.0, 100.0, "play :3");
pub const EXIT_BUTTON: Button = Button::new(350.0, 450.0, 150.0, 100.0, "exit :(");
pub const LEVEL_BUTTON: Button = Button::new(350.0, 600.0, 150.0, 100.0, "level select");

pub const EXIT_CONFIRM_BUTTON: Button = Button::new(350.0, 200.0, 150.0, 100.0, "exit :(");
pub const EXIT_CANCEL_BUTTON: Button = Button::new(350.0, 450.0, 150.0, 100.0, "nevermind");

pub const RETRY_BUTTON: Button = Button::new(350.0, 200.0, 150.0, 100.0, "retry");
pub const MENU_BUTTON: Button = Button::new(350.0, 400.0, 150.0, 100.0, "menu");

pub const PAUSE_LABEL: (f32, f32) = (100.0, 255.0);
pub const SCORE_POS: (f32, f32) = (775.0, 125.0);
pub const MULTIPLIER_POS: (f32, f32) = (775.0, 160.0);
pub const CLOCK_POS: (f32, f32) = (775.0, 195.0);
pub const HEALTH_BAR: Rect = Rect::new(750.0, 50.0, 200.0, 25.0);
pub const RESULTS_TITLE: (f32, f32) = (50.0, 50.0);
pub const STATUS_POS: (f32, f32) = (20.0, 680.0);

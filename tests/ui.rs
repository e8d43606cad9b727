use eph::note::Rect;
use eph::render::{DrawCommand, Frame};
use eph::ui::*;

fn rects(frame: &Frame) -> Vec<Rect> {
    frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { rect, .. } => Some(*rect),
            DrawCommand::Text { .. } => None,
        })
        .collect()
}

// ── Button ───────────────────────────────────────────────────────────────────

#[test]
fn button_hit_test_is_edge_inclusive() {
    let b = Button::new(300.0, 300.0, 200.0, 100.0, "play");
    assert!(b.is_touching(300.0, 300.0));
    assert!(b.is_touching(500.0, 400.0));
    assert!(b.is_touching(400.0, 350.0));
    assert!(!b.is_touching(299.9, 350.0));
    assert!(!b.is_touching(400.0, 400.1));
}

#[test]
fn button_draws_panel_then_label() {
    let mut frame = Frame::new(BACKGROUND);
    frame.draw(&PLAY_BUTTON);
    assert_eq!(frame.commands.len(), 2);
    assert_eq!(rects(&frame), vec![PLAY_BUTTON.rect]);
    assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["play :3"]);
}

#[test]
fn menu_buttons_do_not_overlap() {
    let buttons = [&PLAY_BUTTON, &EXIT_BUTTON, &LEVEL_BUTTON];
    for (i, a) in buttons.iter().enumerate() {
        for b in &buttons[i + 1..] {
            assert!(a.rect.bottom() < b.rect.top() || b.rect.bottom() < a.rect.top());
        }
    }
}

// ── Label ────────────────────────────────────────────────────────────────────

#[test]
fn label_with_panel_draws_background_first() {
    let mut frame = Frame::new(BACKGROUND);
    frame.draw(&Label::new(100.0, 60.0, "eph :3").with_panel(800.0, 150.0));
    assert!(matches!(frame.commands[0], DrawCommand::Rect { .. }));
    assert_eq!(rects(&frame), vec![Rect::new(100.0, 60.0, 800.0, 150.0)]);
}

#[test]
fn plain_label_is_only_text() {
    let mut frame = Frame::new(BACKGROUND);
    frame.draw(&Label::new(10.0, 10.0, "score: 3"));
    assert!(rects(&frame).is_empty());
    assert_eq!(frame.texts().next(), Some("score: 3"));
}

// ── HealthBar ────────────────────────────────────────────────────────────────

#[test]
fn health_bar_splits_at_fraction() {
    let bar = HealthBar { rect: HEALTH_BAR, fraction: 0.25 };
    assert_eq!(bar.full_width(), 50.0);

    let mut frame = Frame::new(BACKGROUND);
    frame.draw(&bar);
    assert_eq!(
        rects(&frame),
        vec![Rect::new(750.0, 50.0, 50.0, 25.0), Rect::new(800.0, 50.0, 150.0, 25.0)]
    );
}

#[test]
fn health_bar_fraction_is_clamped() {
    assert_eq!(HealthBar { rect: HEALTH_BAR, fraction: 1.5 }.full_width(), 200.0);
    assert_eq!(HealthBar { rect: HEALTH_BAR, fraction: -0.5 }.full_width(), 0.0);
}

#[test]
fn every_button_label_fits_its_panel() {
    let buttons = [
        &PLAY_BUTTON,
        &EXIT_BUTTON,
        &LEVEL_BUTTON,
        &EXIT_CONFIRM_BUTTON,
        &EXIT_CANCEL_BUTTON,
        &RETRY_BUTTON,
        &MENU_BUTTON,
    ];
    for button in buttons {
        let mut frame = Frame::new(BACKGROUND);
        frame.draw(button);
        let Some(DrawCommand::Text { x, size, text, .. }) = frame.commands.get(1) else {
            panic!("{} has no label", button.text);
        };
        assert!(x + eph::render::text_width(text, *size) <= button.rect.right() + 1e-3, "{text}");
    }
}

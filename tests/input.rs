use eph::config::Bindings;
use eph::input::*;
use eph::note::Lane;

fn default_map() -> ActionMap {
    ActionMap::from_bindings(&Bindings::default())
}

// ── ActionMap ────────────────────────────────────────────────────────────────

#[test]
fn default_bindings_cover_both_lanes_twice() {
    let map = default_map();
    assert_eq!(map.action_for(KeyCode::KeyD), Some(Action::LaneLeft1));
    assert_eq!(map.action_for(KeyCode::KeyF), Some(Action::LaneLeft2));
    assert_eq!(map.action_for(KeyCode::KeyJ), Some(Action::LaneRight1));
    assert_eq!(map.action_for(KeyCode::KeyK), Some(Action::LaneRight2));
    assert_eq!(map.action_for(KeyCode::Escape), Some(Action::PauseToggle));
    assert_eq!(map.action_for(KeyCode::KeyQ), None);
}

#[test]
fn action_can_have_several_keys() {
    let mut map = ActionMap::new();
    map.bind(Action::LaneLeft1, KeyCode::KeyD);
    map.bind(Action::LaneLeft1, KeyCode::ArrowLeft);
    assert_eq!(map.keys_for(Action::LaneLeft1), &[KeyCode::KeyD, KeyCode::ArrowLeft]);
    assert_eq!(map.action_for(KeyCode::ArrowLeft), Some(Action::LaneLeft1));
    assert!(map.keys_for(Action::Quit).is_empty());
}

#[test]
fn shared_key_resolves_to_earliest_action() {
    let mut map = ActionMap::new();
    map.bind(Action::PauseToggle, KeyCode::Space);
    map.bind(Action::LaneRight2, KeyCode::Space);
    assert_eq!(map.action_for(KeyCode::Space), Some(Action::LaneRight2));
}

#[test]
fn actions_map_to_lanes() {
    assert_eq!(Action::LaneLeft2.lane(), Some(Lane::Left));
    assert_eq!(Action::LaneRight1.lane(), Some(Lane::Right));
    assert_eq!(Action::PauseToggle.lane(), None);
    assert_eq!(Action::Quit.lane(), None);
}

// ── InputState ───────────────────────────────────────────────────────────────

#[test]
fn held_key_fires_once() {
    let map = default_map();
    let mut input = InputState::new();
    input.key_pressed(KeyCode::KeyD, &map);
    input.key_pressed(KeyCode::KeyD, &map);
    input.key_pressed(KeyCode::KeyD, &map);
    assert_eq!(input.take_events(), vec![InputEvent::Action(Action::LaneLeft1)]);

    input.key_released(KeyCode::KeyD);
    input.key_pressed(KeyCode::KeyD, &map);
    assert_eq!(input.take_events().len(), 1);
}

#[test]
fn unbound_keys_produce_nothing() {
    let map = default_map();
    let mut input = InputState::new();
    input.key_pressed(KeyCode::KeyZ, &map);
    assert!(input.take_events().is_empty());
}

#[test]
fn take_events_drains_in_order() {
    let map = default_map();
    let mut input = InputState::new();
    input.key_pressed(KeyCode::KeyJ, &map);
    input.key_pressed(KeyCode::KeyF, &map);
    input.push(InputEvent::Action(Action::Quit));
    assert_eq!(
        input.take_events(),
        vec![
            InputEvent::Action(Action::LaneRight1),
            InputEvent::Action(Action::LaneLeft2),
            InputEvent::Action(Action::Quit),
        ]
    );
    assert!(input.take_events().is_empty());
}

#[test]
fn clicks_carry_last_pointer_position() {
    let mut input = InputState::new();
    input.cursor_moved(400.0, 350.0);
    input.mouse_pressed(MouseButton::Left);
    input.mouse_pressed(MouseButton::Middle);
    input.cursor_moved(10.0, 20.0);
    input.mouse_pressed(MouseButton::Right);

    assert_eq!(input.pointer_pos(), [10.0, 20.0]);
    assert_eq!(
        input.take_events(),
        vec![
            InputEvent::Pointer { button: PointerButton::Primary, x: 400.0, y: 350.0 },
            InputEvent::Pointer { button: PointerButton::Secondary, x: 10.0, y: 20.0 },
        ]
    );
}

#[test]
fn pointer_buttons_map_to_lanes() {
    assert_eq!(PointerButton::Primary.lane(), Lane::Left);
    assert_eq!(PointerButton::Secondary.lane(), Lane::Right);
    assert_eq!(PointerButton::from_mouse(MouseButton::Middle), None);
}

#[test]
fn losing_focus_forgets_held_keys() {
    let map = default_map();
    let mut input = InputState::new();
    input.key_pressed(KeyCode::KeyJ, &map);
    input.take_events();

    // Release happened while another window had focus.
    input.focus_lost();
    input.key_pressed(KeyCode::KeyJ, &map);
    assert_eq!(input.take_events(), vec![InputEvent::Action(Action::LaneRight1)]);
}

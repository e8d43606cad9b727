use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

use crate::config::Bindings;
use crate::note::Lane;

/// Logical actions the game understands. Two independent bindings per
/// lane, so two fingers can alternate on one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    LaneLeft1,
    LaneLeft2,
    LaneRight1,
    LaneRight2,
    PauseToggle,
    Quit,
}

impl Action {
    pub fn lane(self) -> Option<Lane> {
        match self {
            Action::LaneLeft1 | Action::LaneLeft2 => Some(Lane::Left),
            Action::LaneRight1 | Action::LaneRight2 => Some(Lane::Right),
            Action::PauseToggle | Action::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
}

impl PointerButton {
    pub fn from_mouse(button: MouseButton) -> Option<Self> {
        match button {
            MouseButton::Left => Some(PointerButton::Primary),
            MouseButton::Right => Some(PointerButton::Secondary),
            _ => None,
        }
    }

    /// Lane struck by this button while playing.
    pub fn lane(self) -> Lane {
        match self {
            PointerButton::Primary => Lane::Left,
            PointerButton::Secondary => Lane::Right,
        }
    }
}

/// A discrete input event, consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Action(Action),
    Pointer { button: PointerButton, x: f32, y: f32 },
}

// ── ActionMap ────────────────────────────────────────────────────────────────

/// Maps logical actions to one or more physical keys.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bindings(bindings: &Bindings) -> Self {
        let mut map = Self::new();
        map.bind(Action::LaneLeft1, bindings.lane_left_1);
        map.bind(Action::LaneLeft2, bindings.lane_left_2);
        map.bind(Action::LaneRight1, bindings.lane_right_1);
        map.bind(Action::LaneRight2, bindings.lane_right_2);
        map.bind(Action::PauseToggle, bindings.pause_toggle);
        map
    }

    pub fn bind(&mut self, action: Action, key: KeyCode) {
        self.bindings.entry(action).or_default().push(key);
    }

    /// The action bound to `key`, if any. When a key is bound twice the
    /// lowest action in declaration order wins.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings
            .iter()
            .filter(|(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
            .min_by_key(|action| *action as u8)
    }

    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ── InputState ───────────────────────────────────────────────────────────────

/// Collects raw window input into a queue of [`InputEvent`]s for the next
/// tick.
#[derive(Debug, Default)]
pub struct InputState {
    keys_held: HashSet<KeyCode>,
    pointer_pos: [f32; 2],
    queue: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down. OS auto-repeat is ignored: only the first press of a held
    /// key produces an event.
    pub fn key_pressed(&mut self, key: KeyCode, map: &ActionMap) {
        if !self.keys_held.insert(key) {
            return;
        }
        if let Some(action) = map.action_for(key) {
            self.queue.push(InputEvent::Action(action));
        }
    }

    pub fn key_released(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Forget held keys. Releases that happen while unfocused never arrive,
    /// so without this the next real press would be taken for a repeat.
    pub fn focus_lost(&mut self) {
        self.keys_held.clear();
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.pointer_pos = [x, y];
    }

    pub fn pointer_pos(&self) -> [f32; 2] { self.pointer_pos }

    pub fn mouse_pressed(&mut self, button: MouseButton) {
        if let Some(button) = PointerButton::from_mouse(button) {
            let [x, y] = self.pointer_pos;
            self.queue.push(InputEvent::Pointer { button, x, y });
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Hand the queued events to the tick and start a fresh frame.
    pub fn take_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.queue)
    }
}

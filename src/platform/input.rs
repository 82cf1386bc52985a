//! Input collaborator
//!
//! Records host key and mouse events between ticks. The scheduler takes a
//! snapshot at the start of each tick and clears the one-shot "released"
//! flags once the tick has consumed them.

use glam::Vec2;

use crate::sim::{InputSnapshot, Key, KeySet, MouseSnapshot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KeyStatus {
    held: bool,
    released: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct MouseStatus {
    pos: Vec2,
    pressed: bool,
    released: bool,
}

/// Live key/mouse state fed by host events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: [KeyStatus; Key::COUNT],
    mouse: MouseStatus,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.keys[key.index()].held = true;
    }

    pub fn key_released(&mut self, key: Key) {
        let status = &mut self.keys[key.index()];
        status.held = false;
        status.released = true;
    }

    /// Host key event by name; unknown keys are ignored
    pub fn key_event(&mut self, name: &str, down: bool) {
        match (Key::from_name(name), down) {
            (Some(key), true) => self.key_pressed(key),
            (Some(key), false) => self.key_released(key),
            (None, _) => {}
        }
    }

    pub fn mouse_moved(&mut self, pos: Vec2) {
        self.mouse.pos = pos;
    }

    pub fn mouse_pressed(&mut self, pos: Vec2) {
        self.mouse.pos = pos;
        self.mouse.pressed = true;
    }

    pub fn mouse_released(&mut self, pos: Vec2) {
        self.mouse.pos = pos;
        self.mouse.pressed = false;
        self.mouse.released = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys[key.index()].held
    }

    /// Copy of the current state for one tick
    pub fn snapshot(&self) -> InputSnapshot {
        let mut held = KeySet::EMPTY;
        let mut released = KeySet::EMPTY;
        for key in Key::ALL {
            let status = self.keys[key.index()];
            if status.held {
                held.insert(key);
            }
            if status.released {
                released.insert(key);
            }
        }

        InputSnapshot {
            held,
            released,
            mouse: MouseSnapshot {
                pos: self.mouse.pos,
                pressed: self.mouse.pressed,
                released: self.mouse.released,
            },
        }
    }

    /// Drop one-shot release flags after a tick has seen them
    pub fn clear_transient(&mut self) {
        for status in &mut self.keys {
            status.released = false;
        }
        self.mouse.released = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_cycle() {
        let mut input = InputState::new();
        input.key_pressed(Key::Up);
        input.key_pressed(Key::Z);

        let snap = input.snapshot();
        assert!(snap.accelerate());
        assert!(snap.held.contains(Key::Z));
        assert!(snap.released.is_empty());

        input.key_released(Key::Z);
        let snap = input.snapshot();
        assert!(!snap.held.contains(Key::Z));
        assert!(snap.export_requested());
        assert!(input.is_held(Key::Up));

        input.clear_transient();
        assert!(!input.snapshot().export_requested());
        assert!(input.snapshot().accelerate());
    }

    #[test]
    fn test_mouse_release_is_transient() {
        let mut input = InputState::new();
        input.mouse_pressed(Vec2::new(10.0, 20.0));
        assert!(input.snapshot().mouse.pressed);

        input.mouse_released(Vec2::new(12.0, 22.0));
        let snap = input.snapshot();
        assert!(!snap.mouse.pressed);
        assert!(snap.mouse.released);
        assert_eq!(snap.mouse.pos, Vec2::new(12.0, 22.0));

        input.clear_transient();
        assert!(!input.snapshot().mouse.released);
    }

    #[test]
    fn test_named_key_events() {
        let mut input = InputState::new();
        input.key_event("ArrowRight", true);
        input.key_event("Escape", true);
        assert!(input.snapshot().steer_right());

        input.key_event("ArrowRight", false);
        assert!(!input.snapshot().steer_right());
        assert!(input.snapshot().released.contains(Key::Right));
    }
}

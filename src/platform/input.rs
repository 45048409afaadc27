//! Keyboard state
//!
//! Turns browser key events into per-tick `TickInput`s. Held keys are level
//! triggered; fire and restart are edges, one per physical press.

use crate::sim::TickInput;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    RotateLeft,
    RotateRight,
    Forward,
    Backward,
    Fire,
    Restart,
    ToggleIdle,
}

/// Fixed key bindings (DOM `KeyboardEvent.key` names)
pub fn map_key(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "Left" => Some(KeyAction::RotateLeft),
        "ArrowRight" | "Right" => Some(KeyAction::RotateRight),
        "ArrowUp" | "Up" => Some(KeyAction::Forward),
        "ArrowDown" | "Down" => Some(KeyAction::Backward),
        " " | "Spacebar" => Some(KeyAction::Fire),
        "r" | "R" => Some(KeyAction::Restart),
        "i" | "I" => Some(KeyAction::ToggleIdle),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    rotate_left: bool,
    rotate_right: bool,
    forward: bool,
    backward: bool,
    fire_held: bool,
    restart_held: bool,
    idle_held: bool,
    /// Presses not yet consumed by a tick
    fire_presses: u32,
    restart_pending: bool,
    pub idle_mode: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true if the key is bound.
    ///
    /// Auto-repeat keydowns for an already held key produce no new edge.
    pub fn key_down(&mut self, key: &str) -> bool {
        let Some(action) = map_key(key) else {
            return false;
        };
        match action {
            KeyAction::RotateLeft => self.rotate_left = true,
            KeyAction::RotateRight => self.rotate_right = true,
            KeyAction::Forward => self.forward = true,
            KeyAction::Backward => self.backward = true,
            KeyAction::Fire => {
                if !self.fire_held {
                    self.fire_presses += 1;
                }
                self.fire_held = true;
            }
            KeyAction::Restart => {
                if !self.restart_held {
                    self.restart_pending = true;
                }
                self.restart_held = true;
            }
            KeyAction::ToggleIdle => {
                if !self.idle_held {
                    self.idle_mode = !self.idle_mode;
                    log::info!("Idle mode: {}", self.idle_mode);
                }
                self.idle_held = true;
            }
        }
        true
    }

    /// Handle a key release. Returns true if the key is bound.
    pub fn key_up(&mut self, key: &str) -> bool {
        let Some(action) = map_key(key) else {
            return false;
        };
        match action {
            KeyAction::RotateLeft => self.rotate_left = false,
            KeyAction::RotateRight => self.rotate_right = false,
            KeyAction::Forward => self.forward = false,
            KeyAction::Backward => self.backward = false,
            KeyAction::Fire => self.fire_held = false,
            KeyAction::Restart => self.restart_held = false,
            KeyAction::ToggleIdle => self.idle_held = false,
        }
        true
    }

    /// Forget held keys (focus loss swallows keyup events)
    pub fn release_all(&mut self) {
        self.rotate_left = false;
        self.rotate_right = false;
        self.forward = false;
        self.backward = false;
        self.fire_held = false;
        self.restart_held = false;
        self.idle_held = false;
    }

    /// Input for the next tick; consumes at most one fire press
    pub fn sample(&mut self) -> TickInput {
        let fire = self.fire_presses > 0;
        self.fire_presses = self.fire_presses.saturating_sub(1);
        let restart = std::mem::take(&mut self.restart_pending);

        TickInput {
            rotate_left: self.rotate_left,
            rotate_right: self.rotate_right,
            forward: self.forward,
            backward: self.backward,
            fire,
            restart,
            idle_mode: self.idle_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_persist() {
        let mut keys = KeyboardState::new();
        assert!(keys.key_down("ArrowUp"));
        assert!(keys.key_down("ArrowLeft"));

        for _ in 0..3 {
            let input = keys.sample();
            assert!(input.forward);
            assert!(input.rotate_left);
            assert!(!input.fire);
        }

        keys.key_up("ArrowUp");
        let input = keys.sample();
        assert!(!input.forward);
        assert!(input.rotate_left);
    }

    #[test]
    fn test_fire_is_one_edge_per_press() {
        let mut keys = KeyboardState::new();
        keys.key_down(" ");
        // Auto-repeat while held
        keys.key_down(" ");
        keys.key_down(" ");

        assert!(keys.sample().fire);
        assert!(!keys.sample().fire);

        keys.key_up(" ");
        keys.key_down(" ");
        assert!(keys.sample().fire);
    }

    #[test]
    fn test_two_presses_between_ticks_fire_twice() {
        let mut keys = KeyboardState::new();
        keys.key_down(" ");
        keys.key_up(" ");
        keys.key_down(" ");
        keys.key_up(" ");

        assert!(keys.sample().fire);
        assert!(keys.sample().fire);
        assert!(!keys.sample().fire);
    }

    #[test]
    fn test_restart_edge_and_idle_toggle() {
        let mut keys = KeyboardState::new();
        keys.key_down("R");
        assert!(keys.sample().restart);
        assert!(!keys.sample().restart);

        keys.key_down("i");
        keys.key_up("i");
        assert!(keys.sample().idle_mode);
        keys.key_down("I");
        assert!(!keys.sample().idle_mode);
    }

    #[test]
    fn test_held_idle_key_toggles_once() {
        let mut keys = KeyboardState::new();
        // Initial press plus two auto-repeats
        keys.key_down("i");
        keys.key_down("i");
        keys.key_down("i");
        keys.key_up("i");
        assert!(keys.sample().idle_mode);

        keys.key_down("i");
        keys.key_down("i");
        keys.key_up("i");
        assert!(!keys.sample().idle_mode);

        // Focus loss drops the held flag, so the next press toggles
        keys.key_down("i");
        keys.release_all();
        keys.key_down("i");
        assert!(!keys.sample().idle_mode);
    }

    #[test]
    fn test_unbound_and_release_all() {
        let mut keys = KeyboardState::new();
        assert!(!keys.key_down("q"));
        keys.key_down("ArrowDown");
        keys.key_down("ArrowRight");
        keys.release_all();
        let input = keys.sample();
        assert!(!input.backward);
        assert!(!input.rotate_right);
    }
}

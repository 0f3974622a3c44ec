//! Input Configuration
//!
//! Defines all key bindings and pointer tuning as a data structure, and
//! builds the engine's [`InputHandler`] from it.

use winit::keyboard::KeyCode;

use crate::input::handler::{DEFAULT_JOYSTICK_DEADZONE, DEFAULT_LOOK_SENSITIVITY};
use crate::input::{InputAction, InputHandler, KeyBindings};

/// Category a key binding belongs to, returned by `InputConfig::classify_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCategory {
    Movement,
    Action,
}

/// Movement key bindings (WASD + jump).
#[derive(Clone, Debug)]
pub struct MovementBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
}

/// One-shot action bindings.
#[derive(Clone, Debug)]
pub struct ActionBindings {
    pub hop: KeyCode,
    pub fire: KeyCode,
    pub restart: KeyCode,
}

/// Centralized input configuration.
#[derive(Clone, Debug)]
pub struct InputConfig {
    pub movement: MovementBindings,
    pub actions: ActionBindings,
    /// Radians of camera rotation per dragged pixel
    pub look_sensitivity: f32,
    /// Per-axis joystick deadzone
    pub joystick_deadzone: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            movement: MovementBindings {
                forward: KeyCode::KeyW,
                backward: KeyCode::KeyS,
                left: KeyCode::KeyA,
                right: KeyCode::KeyD,
                jump: KeyCode::Space,
            },
            actions: ActionBindings {
                hop: KeyCode::KeyE,
                fire: KeyCode::KeyF,
                restart: KeyCode::KeyR,
            },
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            joystick_deadzone: DEFAULT_JOYSTICK_DEADZONE,
        }
    }
}

impl InputConfig {
    /// Classify which category a key belongs to.
    ///
    /// Returns `None` if the key is not bound to any action.
    pub fn classify_key(&self, key: KeyCode) -> Option<InputCategory> {
        let m = &self.movement;
        if [m.forward, m.backward, m.left, m.right, m.jump].contains(&key) {
            return Some(InputCategory::Movement);
        }
        let a = &self.actions;
        if [a.hop, a.fire, a.restart].contains(&key) {
            return Some(InputCategory::Action);
        }
        None
    }

    /// Key-to-action table for the input handler.
    pub fn key_bindings(&self) -> KeyBindings {
        let mut bindings = KeyBindings::new();
        for (key, action) in [
            (self.movement.forward, InputAction::MoveForward),
            (self.movement.backward, InputAction::MoveBack),
            (self.movement.left, InputAction::MoveLeft),
            (self.movement.right, InputAction::MoveRight),
            (self.movement.jump, InputAction::Jump),
            (self.actions.hop, InputAction::Hop),
            (self.actions.fire, InputAction::Fire),
            (self.actions.restart, InputAction::Restart),
        ] {
            bindings.bind(key, action);
        }
        bindings
    }

    /// Input handler wired with these bindings and tuning values.
    pub fn build_handler(&self) -> InputHandler {
        let mut handler = InputHandler::with_bindings(self.key_bindings());
        handler.look_sensitivity = self.look_sensitivity;
        handler.joystick_deadzone = self.joystick_deadzone;
        handler
    }
}

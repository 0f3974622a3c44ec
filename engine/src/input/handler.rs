//! Input Handler
//!
//! Centralized input handling for the game core.
//! Collects key, touch-joystick, on-screen-button and pointer-drag events as
//! they arrive and folds them into one [`FrameInput`] snapshot per frame.

use std::collections::HashSet;

use glam::Vec2;
use winit::keyboard::KeyCode;

use super::FrameInput;
use super::bindings::{InputAction, KeyBindings};
use super::mouse_state::DragState;

/// Radians of camera rotation per dragged pixel.
pub const DEFAULT_LOOK_SENSITIVITY: f32 = 0.005;

/// Joystick magnitude below which the stick is ignored (per axis).
pub const DEFAULT_JOYSTICK_DEADZONE: f32 = 0.05;

/// Accumulates raw input events between frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    bindings: KeyBindings,
    /// Physical keys currently held
    pressed_keys: HashSet<KeyCode>,
    /// Actions held through on-screen buttons
    held_actions: HashSet<InputAction>,
    /// Actions pressed since the last snapshot
    just_pressed: HashSet<InputAction>,
    /// Joystick position, x right and y down, within the unit disc
    joystick: Vec2,
    drag: DragState,
    pub look_sensitivity: f32,
    pub joystick_deadzone: f32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::new())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
            held_actions: HashSet::new(),
            just_pressed: HashSet::new(),
            joystick: Vec2::ZERO,
            drag: DragState::new(),
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            joystick_deadzone: DEFAULT_JOYSTICK_DEADZONE,
        }
    }

    /// Handle a key event. Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let was_pressed = self.pressed_keys.contains(&key);
        if pressed {
            self.pressed_keys.insert(key);
        } else {
            self.pressed_keys.remove(&key);
        }

        match self.bindings.get_action(key) {
            Some(action) => {
                if pressed && !was_pressed {
                    self.just_pressed.insert(action);
                }
                true
            }
            None => false,
        }
    }

    /// On-screen button press/release (touch jump or hop buttons).
    pub fn set_action_held(&mut self, action: InputAction, held: bool) {
        if held {
            if self.held_actions.insert(action) {
                self.just_pressed.insert(action);
            }
        } else {
            self.held_actions.remove(&action);
        }
    }

    /// Touch joystick position, normalized to the pad radius (y down).
    ///
    /// Values outside the unit disc are pulled back onto its edge.
    pub fn set_joystick(&mut self, x: f32, y: f32) {
        let stick = Vec2::new(x, y);
        self.joystick = if stick.is_finite() {
            stick.clamp_length_max(1.0)
        } else {
            Vec2::ZERO
        };
    }

    /// Touch released: stick springs back to center.
    pub fn release_joystick(&mut self) {
        self.joystick = Vec2::ZERO;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag.begin(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.drag.move_to(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    fn action_held(&self, action: InputAction) -> bool {
        self.held_actions.contains(&action)
            || self.bindings.is_action_pressed(action, &self.pressed_keys)
    }

    fn axis(&self, positive: InputAction, negative: InputAction) -> f32 {
        let mut value = 0.0;
        if self.action_held(positive) {
            value += 1.0;
        }
        if self.action_held(negative) {
            value -= 1.0;
        }
        value
    }

    /// Movement intent (x right, y forward) without consuming anything.
    pub fn movement(&self) -> Vec2 {
        let mut intent = Vec2::new(
            self.axis(InputAction::MoveRight, InputAction::MoveLeft),
            self.axis(InputAction::MoveForward, InputAction::MoveBack),
        );

        if self.joystick.x.abs() > self.joystick_deadzone
            || self.joystick.y.abs() > self.joystick_deadzone
        {
            // screen y grows downward, pushing the stick up means forward
            intent += Vec2::new(self.joystick.x, -self.joystick.y);
        }

        intent.clamp_length_max(1.0)
    }

    /// Build this frame's input and clear one-shot state.
    pub fn snapshot(&mut self) -> FrameInput {
        let (dx, dy) = self.drag.consume_delta();
        let pressed = std::mem::take(&mut self.just_pressed);

        FrameInput {
            movement: self.movement(),
            jump: self.action_held(InputAction::Jump) || pressed.contains(&InputAction::Jump),
            hop: pressed.contains(&InputAction::Hop),
            fire: pressed.contains(&InputAction::Fire),
            restart: pressed.contains(&InputAction::Restart),
            look: Vec2::new(-dx * self.look_sensitivity, -dy * self.look_sensitivity),
        }
    }

    /// Drop all held keys, buttons, stick and drag state.
    pub fn reset(&mut self) {
        self.pressed_keys.clear();
        self.held_actions.clear();
        self.just_pressed.clear();
        self.joystick = Vec2::ZERO;
        self.drag.reset();
    }
}

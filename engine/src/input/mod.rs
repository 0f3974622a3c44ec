//! Input Module
//!
//! Turns raw key, touch and pointer events into one immutable
//! [`FrameInput`] per frame. The simulation only ever sees `FrameInput`,
//! so it does not care whether intent came from a keyboard, an on-screen
//! joystick or a test.
//!
//! # Example
//!
//! ```rust,ignore
//! use bunny_planet_engine::input::InputHandler;
//! use winit::keyboard::KeyCode;
//!
//! let mut input = InputHandler::new();
//! input.handle_key(KeyCode::KeyW, true);
//! input.pointer_down(10.0, 10.0);
//! input.pointer_move(30.0, 10.0);
//!
//! let frame = input.snapshot();
//! session.update(dt, &frame);
//! ```

pub mod bindings;
pub mod handler;
pub mod mouse_state;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use handler::InputHandler;
pub use mouse_state::DragState;

/// Input state consumed by one simulation update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Movement intent, x = right and y = forward, length at most 1
    pub movement: Vec2,
    /// Jump held (or tapped since the last frame)
    pub jump: bool,
    /// Hop to the nearest other planet
    pub hop: bool,
    /// Fire the ranged attack
    pub fire: bool,
    /// Restart the match
    pub restart: bool,
    /// Camera rotation this frame in radians, x = yaw and y = pitch
    pub look: Vec2,
}

impl FrameInput {
    /// No input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Only movement intent (right, forward).
    pub fn moving(right: f32, forward: f32) -> Self {
        Self {
            movement: Vec2::new(right, forward).clamp_length_max(1.0),
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    pub fn with_hop(mut self) -> Self {
        self.hop = true;
        self
    }

    pub fn with_fire(mut self) -> Self {
        self.fire = true;
        self
    }

    pub fn with_look(mut self, yaw: f32, pitch: f32) -> Self {
        self.look = Vec2::new(yaw, pitch);
        self
    }

    /// Check if there is any movement intent.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.movement.length_squared() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_intent() {
        let input = FrameInput::idle();
        assert!(!input.is_moving());
        assert!(!input.jump && !input.hop && !input.fire && !input.restart);
    }

    #[test]
    fn test_moving_is_clamped() {
        let input = FrameInput::moving(1.0, 1.0);
        assert!(input.is_moving());
        assert!((input.movement.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_builders() {
        let input = FrameInput::idle().with_jump().with_hop().with_look(0.1, -0.2);
        assert!(input.jump && input.hop && !input.fire);
        assert_eq!(input.look, Vec2::new(0.1, -0.2));
    }
}

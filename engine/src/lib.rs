//! Bunny Planet Engine Library
//!
//! Spherical-surface movement and camera math for a small arcade game in
//! which a player runs over tiny planets catching bunnies. Windowing,
//! rendering and audio are left to the embedding application; this library
//! produces transforms, HUD state and events for them.
//!
//! # Modules
//!
//! - [`physics`] - Local up, tangent bases and spherical coordinates
//! - [`world`] - Static planet registry
//! - [`player`] - Player locomotion and status effects
//! - [`camera`] - Third-person camera rig
//! - [`input`] - Platform-agnostic input handling (keys, joystick, drag)
//! - [`render`] - Transform export for a GPU renderer
//! - [`game`] - Bunnies, power-ups, match rules and the game session
//!
//! # Example
//!
//! ```ignore
//! use bunny_planet_engine::game::{GameConfig, GameSession};
//! use bunny_planet_engine::input::InputHandler;
//! use winit::keyboard::KeyCode;
//!
//! let mut session = GameSession::new(GameConfig::default())?;
//! let mut input = InputHandler::new();
//!
//! input.handle_key(KeyCode::KeyW, true);
//! session.update(1.0 / 60.0, &input.snapshot());
//!
//! for transform in session.transforms() {
//!     // draw it
//! }
//! let hud = session.hud();
//! println!("{} bunnies left, {}s", hud.bunnies_remaining, hud.seconds_remaining);
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types for convenience
pub use camera::{CameraConfig, CameraPose, CameraRig};
pub use input::{FrameInput, InputHandler};
pub use player::{LocomotionConfig, Player};
pub use render::{EntityKind, EntityTransform, TransformInstance};
pub use world::{Body, BodyId, PlanetRegistry};

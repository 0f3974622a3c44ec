//! Player Module
//!
//! Provides the player character for spherical worlds.
//!
//! # Components
//!
//! - [`Player`] - Surface locomotion with camera-relative controls
//!   - Radial jump and gravity toward the attached planet's center
//!   - Proximity re-attachment and on-demand planet hops
//! - [`LocomotionConfig`] - Movement tuning (speed, gravity, jump, hop range)
//! - [`StatusEffects`] - Timed power-up effects carried by the player

pub mod locomotion;
pub mod status;

pub use locomotion::{HopResult, LocomotionConfig, LocomotionStep, Player};
pub use status::StatusEffects;

//! Config Module
//!
//! Centralized configuration for the level layout, gameplay tuning and
//! key bindings.

pub mod game_config;
pub mod input_config;

pub use game_config::{ConfigError, FeatureFlags, GameConfig};
pub use input_config::{InputCategory, InputConfig};

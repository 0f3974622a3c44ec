//! Camera Module
//!
//! Provides the third-person camera rig for spherical worlds.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod rig;

pub use rig::{CameraConfig, CameraPose, CameraRig};

//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the movement and orientation code, re-exported from the glam library.

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

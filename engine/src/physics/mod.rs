//! Physics module for Bunny Planet
//!
//! Spherical-surface math shared by the player, the bunnies and the camera.
//! Built from scratch on glam; there is no rigid-body solver.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, seconds for time, radians for angles.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`frame`] - Local up, tangent bases and spherical coordinates

pub mod frame;
pub mod types;

pub use frame::{
    TangentBasis, basis_rotation, offset_to_spherical, project_onto_sphere, spherical_to_offset,
    tangent_basis, tangent_basis_with_fallback, up, wrap_angle, yawed_hint,
};
pub use types::{Mat3, Mat4, Quat, Vec2, Vec3};

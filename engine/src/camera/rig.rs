//! Third-Person Camera Rig
//!
//! Orbit camera that follows the player over a spherical world. Yaw and pitch
//! are offsets accumulated from drag input; the rig turns them into a pose
//! relative to the player's local frame, so "up" on screen is always the
//! local up of the planet the player stands on.
//!
//! The yaw is not applied here directly: it rotates the player's movement
//! frame (see `Player::update`) and the rig orbits behind the resulting
//! heading. Pitch tilts the view direction about the local right axis.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::frame::{self, wrap_angle};

/// Camera rig tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance behind the player along the view direction
    pub distance: f32,
    /// Height above the player along the local up
    pub height: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` radians
    pub pitch_limit: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            height: 2.0,
            pitch_limit: std::f32::consts::FRAC_PI_3,
            initial_yaw: 0.0,
            initial_pitch: 0.3,
        }
    }
}

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Point the camera looks at (the player)
    pub target: Vec3,
    /// Local up of the player's planet
    pub up: Vec3,
    /// Camera orientation, looking down local -Z
    pub rotation: Quat,
}

impl CameraPose {
    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        // orthonormal up from the rotation stays valid when looking straight down
        Mat4::look_at_rh(self.position, self.target, self.rotation * Vec3::Y)
    }

    /// Unit direction from the camera towards its target.
    pub fn look_direction(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Orbit state driven by look input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Horizontal offset in radians, wrapped into `[-π, π]`
    pub yaw: f32,
    /// Vertical offset in radians, clamped to the configured limit
    pub pitch: f32,
    pub config: CameraConfig,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let limit = config.pitch_limit.abs();
        Self {
            yaw: wrap_angle(config.initial_yaw),
            pitch: config.initial_pitch.clamp(-limit, limit),
            config,
        }
    }

    /// Apply look deltas in radians.
    pub fn apply_look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        if yaw_delta.is_finite() {
            self.yaw = wrap_angle(self.yaw + yaw_delta);
        }
        if pitch_delta.is_finite() {
            let limit = self.config.pitch_limit.abs();
            self.pitch = (self.pitch + pitch_delta).clamp(-limit, limit);
        }
    }

    /// Back to the configured initial yaw and pitch.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Pose behind a player at `player_position` with local `up`, heading `forward`.
    pub fn compute(&self, player_position: Vec3, up: Vec3, forward: Vec3) -> CameraPose {
        let basis = frame::tangent_basis(up, forward);
        let dir = Quat::from_axis_angle(basis.right, self.pitch) * basis.forward;
        let offset = -dir * self.config.distance + basis.up * self.config.height;
        let position = player_position + offset;

        CameraPose {
            position,
            target: player_position,
            up: basis.up,
            rotation: look_rotation(player_position - position, basis.up),
        }
    }
}

/// Rotation whose local -Z points along `look` with local +Y as close to `up` as possible.
fn look_rotation(look: Vec3, up: Vec3) -> Quat {
    let look = look.try_normalize().unwrap_or(frame::WORLD_FORWARD);
    // with `look` as the axis, the basis forward is `up` made orthogonal to it
    let cam_up = frame::tangent_basis(look, up).forward;
    let right = look.cross(cam_up);
    frame::basis_rotation(right, cam_up, look)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_defaults() {
        let rig = CameraRig::default();
        assert_eq!(rig.yaw, 0.0);
        assert!((rig.pitch - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut rig = CameraRig::default();
        rig.apply_look(0.0, 10.0);
        assert!((rig.pitch - PI / 3.0).abs() < 1e-6);
        rig.apply_look(0.0, -20.0);
        assert!((rig.pitch + PI / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_wrapped() {
        let mut rig = CameraRig::default();
        for _ in 0..100 {
            rig.apply_look(0.7, 0.0);
            assert!(rig.yaw >= -PI && rig.yaw <= PI);
        }
    }

    #[test]
    fn test_non_finite_look_ignored() {
        let mut rig = CameraRig::default();
        rig.apply_look(f32::NAN, f32::INFINITY);
        assert_eq!(rig, CameraRig::default());
    }

    #[test]
    fn test_level_pose_distance_and_up() {
        let mut rig = CameraRig::default();
        rig.pitch = 0.0;
        let player = Vec3::new(0.0, 5.5, 0.0);
        let pose = rig.compute(player, Vec3::Y, Vec3::NEG_Z);

        let expected = (5.0f32 * 5.0 + 2.0 * 2.0).sqrt();
        assert!((pose.position.distance(player) - expected).abs() < 1e-4);
        // behind (+Z) and above the player
        assert!(pose.position.z > 4.9);
        assert!((pose.position.y - 7.5).abs() < 1e-4);
        assert!((pose.up - Vec3::Y).length() < 1e-5);
        assert_eq!(pose.target, player);
    }

    #[test]
    fn test_rotation_looks_at_target() {
        let rig = CameraRig::default();
        let player = Vec3::new(3.0, -4.0, 2.0);
        let up = player.normalize();
        let pose = rig.compute(player, up, up.any_orthonormal_vector());
        let to_target = (pose.target - pose.position).normalize();
        assert!((pose.look_direction() - to_target).length() < 1e-4);
        assert!((pose.rotation.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_view_matrix_maps_target_onto_neg_z() {
        let rig = CameraRig::default();
        let player = Vec3::new(0.0, 5.5, 0.0);
        let pose = rig.compute(player, Vec3::Y, Vec3::NEG_Z);
        let view = pose.view_matrix();
        let target_view = view.transform_point3(pose.target);
        assert!(target_view.x.abs() < 1e-4);
        assert!(target_view.y.abs() < 1e-4);
        assert!(target_view.z < 0.0);
    }

    #[test]
    fn test_degenerate_forward_does_not_produce_nan() {
        let rig = CameraRig::default();
        let pose = rig.compute(Vec3::new(0.0, 5.5, 0.0), Vec3::Y, Vec3::Y);
        assert!(pose.position.is_finite());
        assert!(pose.rotation.is_finite());
    }
}

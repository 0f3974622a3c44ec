//! Spherical Frame Utility
//!
//! Local "up" and tangent-plane bases for points on a sphere, plus the
//! spherical-coordinate helpers used by everything that walks on a planet.
//!
//! # Conventions
//!
//! - Right-handed, Y-up world. World forward is `-Z`.
//! - A tangent basis is `(right, up, forward)` with `right = forward × up`
//!   and `forward = up × right`.
//! - [`basis_rotation`] maps local X/Y/-Z onto right/up/forward, so a mesh
//!   modelled standing on +Y and facing -Z ends up standing on the sphere.
//! - Longitude is measured in the XZ plane from +X towards +Z, latitude
//!   from the equator towards +Y.
//!
//! Degenerate input (zero-length vectors) never produces NaN; every function
//! resolves it to a documented fallback direction.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Mat3, Quat, Vec3};

/// Lengths below this are treated as zero.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// A hint whose angle to `up` has a sine below this counts as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-3;

/// Up direction returned when the point coincides with the body center.
pub const FALLBACK_UP: Vec3 = Vec3::Y;

/// World forward before any yaw is applied.
pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;

/// Orthonormal frame tangent to a sphere at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl TangentBasis {
    /// Rotation taking local X/Y/Z to right/up/forward.
    #[inline]
    pub fn rotation(&self) -> Quat {
        basis_rotation(self.right, self.up, self.forward)
    }

    /// Map a 2D intent (x = right, y = forward) onto the tangent plane.
    #[inline]
    pub fn to_world(&self, right: f32, forward: f32) -> Vec3 {
        self.right * right + self.forward * forward
    }

    /// Remove the radial component of `v`.
    #[inline]
    pub fn project(&self, v: Vec3) -> Vec3 {
        v - self.up * v.dot(self.up)
    }
}

/// Radial "up" at `point` for a body centered at `center`.
///
/// Returns [`FALLBACK_UP`] when `point == center`.
pub fn up(center: Vec3, point: Vec3) -> Vec3 {
    let offset = point - center;
    let length = offset.length();
    if length > DEGENERATE_EPSILON {
        offset / length
    } else {
        FALLBACK_UP
    }
}

/// World axis least aligned with `up`. Never parallel to a unit `up`.
pub fn least_aligned_axis(up: Vec3) -> Vec3 {
    let a = up.abs();
    if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::NEG_Z
    }
}

/// Tangent basis at a point with radial direction `up`.
///
/// `forward_hint` only needs to be non-parallel to `up`; its radial component
/// is discarded. A parallel or zero hint falls back to [`least_aligned_axis`].
pub fn tangent_basis(up: Vec3, forward_hint: Vec3) -> TangentBasis {
    tangent_basis_with_fallback(up, forward_hint, least_aligned_axis(up))
}

/// Same as [`tangent_basis`] but tries `fallback_hint` before the world axis.
pub fn tangent_basis_with_fallback(up: Vec3, forward_hint: Vec3, fallback_hint: Vec3) -> TangentBasis {
    let up = up.try_normalize().unwrap_or(FALLBACK_UP);

    let right = [forward_hint, fallback_hint, least_aligned_axis(up)]
        .into_iter()
        .filter_map(|hint| hint.try_normalize())
        .map(|hint| hint.cross(up))
        .filter(|cross| cross.is_finite() && cross.length() > PARALLEL_EPSILON)
        // strip the rounding left along `up` before normalizing
        .find_map(|cross| (cross - up * cross.dot(up)).try_normalize())
        // least_aligned_axis is never parallel to a unit vector
        .unwrap_or(Vec3::X);

    let forward = up.cross(right).normalize();

    TangentBasis { right, up, forward }
}

/// Rotation whose local X/Y/-Z axes map to `right`/`up`/`forward`.
///
/// The three vectors must be orthonormal with `forward = up × right`.
#[inline]
pub fn basis_rotation(right: Vec3, up: Vec3, forward: Vec3) -> Quat {
    Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize()
}

/// World forward rotated about `up` by `yaw` radians.
#[inline]
pub fn yawed_hint(up: Vec3, yaw: f32) -> Vec3 {
    Quat::from_axis_angle(up, yaw) * WORLD_FORWARD
}

/// Place `point` on the sphere of `radius` around `center`, keeping its direction.
#[inline]
pub fn project_onto_sphere(center: Vec3, point: Vec3, radius: f32) -> Vec3 {
    center + up(center, point) * radius
}

/// Offset from a body center for spherical coordinates `(lon, lat)` at radius `r`.
#[inline]
pub fn spherical_to_offset(lon: f32, lat: f32, r: f32) -> Vec3 {
    Vec3::new(
        r * lat.cos() * lon.cos(),
        r * lat.sin(),
        r * lat.cos() * lon.sin(),
    )
}

/// Inverse of [`spherical_to_offset`]. `None` for a zero-length offset.
pub fn offset_to_spherical(offset: Vec3) -> Option<(f32, f32)> {
    let length = offset.length();
    if length <= DEGENERATE_EPSILON {
        return None;
    }
    let lon = offset.z.atan2(offset.x);
    let lat = (offset.y / length).clamp(-1.0, 1.0).asin();
    Some((lon, lat))
}

/// Unit tangent pointing along increasing longitude ("east").
#[inline]
pub fn east(lon: f32) -> Vec3 {
    Vec3::new(-lon.sin(), 0.0, lon.cos())
}

/// Unit tangent pointing along increasing latitude ("north").
#[inline]
pub fn north(lon: f32, lat: f32) -> Vec3 {
    Vec3::new(-lat.sin() * lon.cos(), lat.cos(), -lat.sin() * lon.sin())
}

/// Wrap an angle into `[-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    if (-PI..=PI).contains(&angle) {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can land exactly on -π for odd multiples; keep it in range
    wrapped.clamp(-PI, PI)
}

/// Clamp a latitude to `margin` radians away from either pole.
#[inline]
pub fn clamp_latitude(lat: f32, margin: f32) -> f32 {
    let limit = FRAC_PI_2 - margin.max(DEGENERATE_EPSILON);
    lat.clamp(-limit, limit)
}

/// Sign with `sign(0) == 0`, unlike `f32::signum`.
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(b: &TangentBasis) {
        assert!((b.right.length() - 1.0).abs() < EPS);
        assert!((b.up.length() - 1.0).abs() < EPS);
        assert!((b.forward.length() - 1.0).abs() < EPS);
        assert!(b.right.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.forward).abs() < EPS);
        assert!(b.up.dot(b.forward).abs() < EPS);
        // right-handed: forward = up × right
        assert!((b.up.cross(b.right) - b.forward).length() < EPS);
    }

    #[test]
    fn test_up_points_away_from_center() {
        let u = up(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 7.0, 3.0));
        assert!((u - Vec3::Y).length() < EPS);
    }

    #[test]
    fn test_up_degenerate_uses_fallback() {
        let c = Vec3::new(4.0, -2.0, 1.0);
        let u = up(c, c);
        assert_eq!(u, FALLBACK_UP);
        assert!(u.is_finite());
    }

    #[test]
    fn test_tangent_basis_at_north_pole_matches_world_axes() {
        let b = tangent_basis(Vec3::Y, WORLD_FORWARD);
        assert!((b.right - Vec3::X).length() < EPS);
        assert!((b.forward - Vec3::NEG_Z).length() < EPS);
        assert_orthonormal(&b);
    }

    #[test]
    fn test_tangent_basis_discards_radial_part_of_hint() {
        let up = Vec3::new(1.0, 1.0, 0.0).normalize();
        let b = tangent_basis(up, Vec3::new(0.3, 0.9, -1.0));
        assert_orthonormal(&b);
        assert!(b.forward.dot(up).abs() < EPS);
    }

    #[test]
    fn test_tangent_basis_parallel_hint_falls_back() {
        let b = tangent_basis(Vec3::Z, Vec3::NEG_Z);
        assert!(b.right.is_finite() && b.forward.is_finite());
        assert_orthonormal(&b);
    }

    #[test]
    fn test_tangent_basis_prefers_caller_fallback() {
        let b = tangent_basis_with_fallback(Vec3::Y, Vec3::Y, Vec3::X);
        assert!((b.forward - Vec3::X).length() < EPS);
        assert_orthonormal(&b);
    }

    #[test]
    fn test_rounding_noise_hint_counts_as_parallel() {
        // the hint is up before normalization, so hint × up is rounding noise
        let raw = Vec3::new(0.0235, 0.7216, 0.6919);
        let b = tangent_basis_with_fallback(raw, raw, Vec3::X);
        assert_orthonormal(&b);
        let expected = (Vec3::X - b.up * b.up.x).normalize();
        assert!((b.forward - expected).length() < 1e-3);

        let b = tangent_basis(raw, raw * -4.0);
        assert_orthonormal(&b);
    }

    #[test]
    fn test_tangent_basis_zero_hint() {
        let b = tangent_basis(Vec3::new(0.0, 0.0, -1.0), Vec3::ZERO);
        assert_orthonormal(&b);
    }

    #[test]
    fn test_basis_rotation_maps_axes() {
        let up = Vec3::new(0.0, 0.0, 1.0);
        let b = tangent_basis(up, Vec3::Y);
        let q = b.rotation();
        assert!((q * Vec3::X - b.right).length() < EPS);
        assert!((q * Vec3::Y - b.up).length() < EPS);
        assert!((q * Vec3::NEG_Z - b.forward).length() < EPS);
    }

    #[test]
    fn test_yawed_hint_quarter_turn() {
        let hint = yawed_hint(Vec3::Y, FRAC_PI_2);
        // rotating -Z by +90° about +Y gives -X
        assert!((hint - Vec3::NEG_X).length() < EPS);
    }

    #[test]
    fn test_spherical_round_trip_and_radius() {
        let offset = spherical_to_offset(1.2, -0.4, 5.3);
        assert!((offset.length() - 5.3).abs() < EPS);
        let (lon, lat) = offset_to_spherical(offset).unwrap();
        assert!((lon - 1.2).abs() < EPS);
        assert!((lat + 0.4).abs() < EPS);
        assert!(offset_to_spherical(Vec3::ZERO).is_none());
    }

    #[test]
    fn test_east_and_north_are_tangent() {
        let (lon, lat) = (0.7, 0.3);
        let radial = spherical_to_offset(lon, lat, 1.0);
        assert!(east(lon).dot(radial).abs() < EPS);
        assert!(north(lon, lat).dot(radial).abs() < EPS);
        let step = spherical_to_offset(lon + 1e-3, lat, 1.0) - radial;
        assert!(step.normalize().dot(east(lon)) > 0.99);
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(PI + 0.5) - (-PI + 0.5)).abs() < EPS);
        assert!((wrap_angle(-PI - 0.5) - (PI - 0.5)).abs() < EPS);
        assert_eq!(wrap_angle(1.0), 1.0);
        assert!((wrap_angle(5.0 * TAU + 0.25) - 0.25).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_latitude_and_sign() {
        assert!(clamp_latitude(2.0, 0.05) < FRAC_PI_2);
        assert!(clamp_latitude(-2.0, 0.05) > -FRAC_PI_2);
        assert_eq!(clamp_latitude(0.2, 0.05), 0.2);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-3.0), -1.0);
        assert_eq!(sign(0.1), 1.0);
    }
}

//! Planet Registry
//!
//! Static list of spherical bodies the player and the bunnies stand on.
//! Bodies never move and never change size after the registry is built;
//! everything else refers to them by [`BodyId`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::frame;

/// Index of a body inside a [`PlanetRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BodyId(pub usize);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "planet#{}", self.0)
    }
}

/// A static sphere a character can stand on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World-space center
    pub center: Vec3,
    /// Radius in meters
    pub radius: f32,
}

impl Body {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `point` to the surface (negative inside).
    #[inline]
    pub fn surface_distance(&self, point: Vec3) -> f32 {
        point.distance(self.center) - self.radius
    }

    /// Radial up direction at `point`.
    #[inline]
    pub fn up_at(&self, point: Vec3) -> Vec3 {
        frame::up(self.center, point)
    }

    /// Point at `distance` from the center along the direction of `point`.
    #[inline]
    pub fn project(&self, point: Vec3, distance: f32) -> Vec3 {
        frame::project_onto_sphere(self.center, point, distance)
    }
}

/// Immutable collection of bodies.
#[derive(Debug, Clone, Default)]
pub struct PlanetRegistry {
    bodies: Vec<Body>,
}

impl PlanetRegistry {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Get a body by id. `None` for an id from a different registry.
    #[inline]
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Iterate `(id, body)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Body whose surface is closest to `point`, with that surface distance.
    ///
    /// Ties resolve to the lower index.
    pub fn nearest_surface(&self, point: Vec3) -> Option<(BodyId, f32)> {
        self.nearest_filtered(point, |_| true)
    }

    /// Like [`Self::nearest_surface`] but never returns `exclude`.
    pub fn nearest_other(&self, point: Vec3, exclude: BodyId) -> Option<(BodyId, f32)> {
        self.nearest_filtered(point, |id| id != exclude)
    }

    fn nearest_filtered(&self, point: Vec3, keep: impl Fn(BodyId) -> bool) -> Option<(BodyId, f32)> {
        let mut best: Option<(BodyId, f32)> = None;
        for (id, body) in self.iter() {
            if !keep(id) {
                continue;
            }
            let d = body.surface_distance(point);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((id, d)),
            }
        }
        best
    }
}

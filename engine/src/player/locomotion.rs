//! Player Locomotion
//!
//! Moves the player over the surface of whichever planet it is attached to.
//! Position is kept as a radial distance from the attached body's center
//! plus a direction, so walking never changes height and gravity only ever
//! acts along the local up.
//!
//! # State Machine
//!
//! - **Grounded**: radial distance == `radius + stand_offset`, radial velocity 0.
//!   Jump input sets the radial velocity to `jump_impulse` and goes Airborne.
//! - **Airborne**: gravity integrates the radial velocity; dropping below the
//!   standing surface clamps back to it and goes Grounded.
//!
//! # Frame Order
//!
//! 1. Tangent basis from the yawed world forward
//! 2. Walk: step along the basis, re-normalize to the radial distance
//! 3. Jump, gravity, radial integration
//! 4. Re-attach to the body with the nearest surface
//! 5. Landing check against the (possibly new) body
//! 6. Re-project and re-orient
//!
//! # Example
//!
//! ```rust,ignore
//! let mut player = Player::spawn(&planets, BodyId(0), LocomotionConfig::default())?;
//! let step = player.update(&frame_input, camera_yaw, dt, &planets);
//! if step.jumped {
//!     // play a sound
//! }
//! ```

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::status::StatusEffects;
use crate::input::FrameInput;
use crate::physics::frame::{self, TangentBasis, WORLD_FORWARD};
use crate::world::{Body, BodyId, PlanetRegistry};

/// Tuning for player movement on a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Walking speed along the surface in meters per second.
    pub move_speed: f32,
    /// Movement speed factor while the speed boost is active.
    pub speed_boost_multiplier: f32,
    /// Radial gravity in meters per second squared.
    pub gravity: f32,
    /// Radial velocity set by a jump in meters per second.
    pub jump_impulse: f32,
    /// Height of the player's origin above the planet surface when standing.
    pub stand_offset: f32,
    /// Maximum surface distance to another planet for a hop.
    pub hop_range: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            speed_boost_multiplier: 2.0,
            gravity: 9.8,
            jump_impulse: 4.0,
            stand_offset: 0.5,
            hop_range: 12.0,
        }
    }
}

impl LocomotionConfig {
    /// Radial distance at which the player stands on `body`.
    #[inline]
    pub fn standing_distance(&self, body: &Body) -> f32 {
        body.radius + self.stand_offset
    }

    /// Time from leaving the ground to landing again (`2v/g`).
    pub fn time_of_flight(&self) -> f32 {
        if self.gravity > 0.0 {
            2.0 * self.jump_impulse / self.gravity
        } else {
            f32::INFINITY
        }
    }
}

/// What happened during one locomotion update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionStep {
    pub jumped: bool,
    pub landed: bool,
    /// Attachment changed by proximity: `(from, to)`
    pub reattached: Option<(BodyId, BodyId)>,
    /// Distance walked along the surface this frame
    pub distance_moved: f32,
}

/// Outcome of a successful planet hop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopResult {
    pub from: BodyId,
    pub to: BodyId,
    /// Surface distance to the target at the time of the hop
    pub distance: f32,
}

/// The player character.
#[derive(Debug, Clone)]
pub struct Player {
    /// World position of the player's origin
    pub position: Vec3,
    /// Body the player is standing on (or falling towards)
    pub body: BodyId,
    /// Distance from the attached body's center
    pub radial_distance: f32,
    /// Signed speed along the local up (positive = away from the center)
    pub radial_velocity: f32,
    /// Direction the character faces, tangent to the surface
    pub facing: Vec3,
    /// Forward of the yaw-driven movement frame, tangent to the surface
    pub heading: Vec3,
    /// Mesh rotation: local Y up, local -Z along `facing`
    pub rotation: Quat,
    pub grounded: bool,
    pub status: StatusEffects,
    pub config: LocomotionConfig,
}

impl Player {
    /// Place a grounded player on top (+Y side) of `body`.
    ///
    /// Returns `None` if `body` is not in `planets`.
    pub fn spawn(planets: &PlanetRegistry, body: BodyId, config: LocomotionConfig) -> Option<Self> {
        let planet = planets.get(body)?;
        let radial_distance = config.standing_distance(planet);
        let mut player = Self {
            position: planet.center + Vec3::Y * radial_distance,
            body,
            radial_distance,
            radial_velocity: 0.0,
            facing: WORLD_FORWARD,
            heading: WORLD_FORWARD,
            rotation: Quat::IDENTITY,
            grounded: true,
            status: StatusEffects::new(),
            config,
        };
        player.refresh_orientation(planet);
        Some(player)
    }

    /// Local up at the player's position.
    pub fn up(&self, planets: &PlanetRegistry) -> Vec3 {
        planets
            .get(self.body)
            .map(|b| b.up_at(self.position))
            .unwrap_or(frame::FALLBACK_UP)
    }

    /// Movement frame for a given camera yaw.
    pub fn movement_basis(&self, body: &Body, yaw: f32) -> TangentBasis {
        let up = body.up_at(self.position);
        frame::tangent_basis_with_fallback(up, frame::yawed_hint(up, yaw), self.heading)
    }

    /// Advance one frame.
    ///
    /// `yaw` rotates the movement frame about the local up, so turning the
    /// camera turns the controls with it.
    pub fn update(
        &mut self,
        input: &FrameInput,
        yaw: f32,
        delta_time: f32,
        planets: &PlanetRegistry,
    ) -> LocomotionStep {
        let mut step = LocomotionStep::default();
        let dt = delta_time.max(0.0);
        let Some(body) = planets.get(self.body).copied() else {
            return step;
        };

        // 1. movement frame
        let basis = self.movement_basis(&body, yaw);
        self.heading = basis.forward;

        // 2. walk, staying at the current radial distance
        let intent = input.movement.clamp_length_max(1.0);
        if let Some(direction) = basis.to_world(intent.x, intent.y).try_normalize() {
            let speed = self.config.move_speed
                * self.status.speed_multiplier(self.config.speed_boost_multiplier);
            let before = self.position;
            let offset = (self.position - body.center) + direction * speed * dt;
            self.position = body.center + offset.normalize_or(basis.up) * self.radial_distance;
            self.facing = direction;
            step.distance_moved = before.distance(self.position);
        }

        // 3. jump and gravity
        if input.jump && self.grounded {
            self.radial_velocity = self.config.jump_impulse;
            self.grounded = false;
            step.jumped = true;
        }
        self.radial_velocity -= self.config.gravity * dt;
        self.radial_distance += self.radial_velocity * dt;
        self.position = body.project(self.position, self.radial_distance);

        // 4. proximity re-attachment
        let mut attached = body;
        if let Some((nearest, _)) = planets.nearest_surface(self.position) {
            if nearest != self.body {
                if let Some(next) = planets.get(nearest).copied() {
                    tracing::debug!(from = %self.body, to = %nearest, "player fell into another gravity well");
                    step.reattached = Some((self.body, nearest));
                    // radial distance carries over; step 6 re-projects onto the new body
                    self.body = nearest;
                    attached = next;
                }
            }
        }

        // 5. landing
        let surface = self.config.standing_distance(&attached);
        if self.radial_distance < surface {
            self.radial_distance = surface;
            self.radial_velocity = 0.0;
            if !self.grounded {
                step.landed = true;
            }
            self.grounded = true;
        } else if step.reattached.is_some() && self.radial_distance > surface {
            self.grounded = false;
        }

        // 6. final placement
        self.position = attached.project(self.position, self.radial_distance);
        self.refresh_orientation(&attached);

        step
    }

    /// Instantly reattach to the nearest other planet if it is within `hop_range`.
    ///
    /// Leaves the player untouched and returns `None` when nothing is in range.
    pub fn try_hop(&mut self, planets: &PlanetRegistry) -> Option<HopResult> {
        let (target, distance) = planets.nearest_other(self.position, self.body)?;
        if distance >= self.config.hop_range {
            return None;
        }
        let body = *planets.get(target)?;

        let from = self.body;
        self.body = target;
        self.radial_distance = self.config.standing_distance(&body);
        self.position = body.project(self.position, self.radial_distance);
        self.radial_velocity = 0.0;
        self.grounded = true;
        self.refresh_orientation(&body);

        tracing::info!(%from, to = %target, distance, "planet hop");
        Some(HopResult { from, to: target, distance })
    }

    /// Re-project facing and heading onto the tangent plane and rebuild the rotation.
    fn refresh_orientation(&mut self, body: &Body) {
        let up = body.up_at(self.position);
        let facing = frame::tangent_basis_with_fallback(up, self.facing, self.heading);
        let heading = frame::tangent_basis_with_fallback(up, self.heading, facing.forward);
        self.facing = facing.forward;
        self.heading = heading.forward;
        self.rotation = facing.rotation();
    }

    /// `|distance to center - radial_distance|`; zero when the invariant holds.
    pub fn surface_error(&self, planets: &PlanetRegistry) -> f32 {
        planets
            .get(self.body)
            .map(|b| (self.position.distance(b.center) - self.radial_distance).abs())
            .unwrap_or(f32::INFINITY)
    }
}

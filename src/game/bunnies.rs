//! Bunnies
//!
//! Roaming creatures that wander over their home planet in spherical
//! coordinates, run away when the player gets close and are caught on
//! contact. A bunny never leaves its home planet.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::physics::frame::{self, clamp_latitude, offset_to_spherical, sign, spherical_to_offset, wrap_angle};
use crate::world::{Body, BodyId, PlanetRegistry};

/// Bunny wander, flee and capture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    /// Height of a bunny above its planet's surface
    pub surface_offset: f32,
    /// Spawn latitude is drawn from `[-spawn_latitude, spawn_latitude]`
    pub spawn_latitude: f32,
    /// Longitude speed is drawn from `[-max_lon_speed, max_lon_speed]` (rad/s)
    pub max_lon_speed: f32,
    /// Latitude speed is drawn from `[-max_lat_speed, max_lat_speed]` (rad/s)
    pub max_lat_speed: f32,
    /// Wander countdown is drawn from `[min_wander_time, max_wander_time)`
    pub min_wander_time: f32,
    pub max_wander_time: f32,
    /// Player closer than this (straight line) makes the bunny flee
    pub flee_distance: f32,
    /// Longitude acceleration away from the player (rad/s²)
    pub flee_lon_accel: f32,
    /// Latitude acceleration away from the player (rad/s²)
    pub flee_lat_accel: f32,
    /// Player closer than this catches the bunny
    pub capture_radius: f32,
    /// Latitude stays this far from either pole
    pub pole_margin: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            surface_offset: 0.3,
            spawn_latitude: 0.3,
            max_lon_speed: 0.5,
            max_lat_speed: 0.2,
            min_wander_time: 2.0,
            max_wander_time: 5.0,
            flee_distance: 2.0,
            flee_lon_accel: 0.6,
            flee_lat_accel: 0.3,
            capture_radius: 0.6,
            pole_margin: 0.05,
        }
    }
}

/// Draw from `[-limit, limit]`, tolerating a zero or negative limit.
fn symmetric<R: Rng>(rng: &mut R, limit: f32) -> f32 {
    let limit = limit.abs();
    if limit > 0.0 {
        rng.random_range(-limit..=limit)
    } else {
        0.0
    }
}

fn wander_time<R: Rng>(rng: &mut R, config: &WanderConfig) -> f32 {
    let min = config.min_wander_time.max(0.0);
    if config.max_wander_time > min {
        rng.random_range(min..config.max_wander_time)
    } else {
        min
    }
}

/// A roaming bunny.
#[derive(Debug, Clone, PartialEq)]
pub struct Bunny {
    /// Stable id, unique within a session
    pub id: u32,
    /// Planet the bunny lives on
    pub body: BodyId,
    pub lon: f32,
    pub lat: f32,
    /// Angular velocity along longitude (rad/s)
    pub vel_lon: f32,
    /// Angular velocity along latitude (rad/s)
    pub vel_lat: f32,
    /// Seconds until the next random change of direction
    pub wander_timer: f32,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Bunny {
    /// Random placement near the equator of `planet`.
    pub fn spawn<R: Rng>(id: u32, body: BodyId, planet: &Body, config: &WanderConfig, rng: &mut R) -> Self {
        let lon = rng.random_range(0.0..TAU);
        let lat = symmetric(rng, config.spawn_latitude);
        let vel_lon = symmetric(rng, config.max_lon_speed);
        let vel_lat = symmetric(rng, config.max_lat_speed);
        let wander_timer = wander_time(rng, config);

        let mut bunny = Self {
            id,
            body,
            lon,
            lat: clamp_latitude(lat, config.pole_margin),
            vel_lon,
            vel_lat,
            wander_timer,
            position: planet.center,
            rotation: Quat::IDENTITY,
        };
        bunny.place(planet, config);
        bunny
    }

    /// Distance from the planet's center the bunny sits at.
    #[inline]
    pub fn orbit_radius(planet: &Body, config: &WanderConfig) -> f32 {
        planet.radius + config.surface_offset
    }

    /// Direction of travel on the surface; zero when the bunny is not moving.
    pub fn motion_direction(&self) -> Vec3 {
        let east = frame::east(self.lon) * self.vel_lon * self.lat.cos();
        let north = frame::north(self.lon, self.lat) * self.vel_lat;
        (east + north).normalize_or_zero()
    }

    /// Recompute position and rotation from `(lon, lat)`.
    fn place(&mut self, planet: &Body, config: &WanderConfig) {
        let previous_forward = self.rotation * Vec3::NEG_Z;
        self.position = planet.center + spherical_to_offset(self.lon, self.lat, Self::orbit_radius(planet, config));
        let up = planet.up_at(self.position);
        self.rotation = frame::tangent_basis_with_fallback(up, self.motion_direction(), previous_forward).rotation();
    }

    /// Flee, wander and re-place for one frame.
    pub fn update<R: Rng>(
        &mut self,
        player_position: Vec3,
        planet: &Body,
        config: &WanderConfig,
        rng: &mut R,
        dt: f32,
    ) {
        if self.position.distance(player_position) < config.flee_distance {
            if let Some((player_lon, player_lat)) = offset_to_spherical(player_position - planet.center) {
                // push away from the player, the short way round in longitude
                let d_lon = wrap_angle(self.lon - player_lon);
                let d_lat = self.lat - player_lat;
                self.vel_lon += sign(d_lon) * config.flee_lon_accel * dt;
                self.vel_lat += sign(d_lat) * config.flee_lat_accel * dt;
            }
        }

        self.lon = wrap_angle(self.lon + self.vel_lon * dt);
        let lat = self.lat + self.vel_lat * dt;
        self.lat = clamp_latitude(lat, config.pole_margin);
        if self.lat != lat {
            // bounce off the pole cap
            self.vel_lat = -self.vel_lat;
        }

        self.wander_timer -= dt;
        if self.wander_timer <= 0.0 {
            self.vel_lon = symmetric(rng, config.max_lon_speed);
            self.vel_lat = symmetric(rng, config.max_lat_speed);
            self.wander_timer = wander_time(rng, config);
        }

        self.place(planet, config);
    }

    /// Straight-line capture test against the player's position.
    #[inline]
    pub fn is_caught_by(&self, player_position: Vec3, config: &WanderConfig) -> bool {
        self.position.distance(player_position) < config.capture_radius
    }
}

/// The active bunnies of a session.
#[derive(Debug, Clone, Default)]
pub struct BunnySwarm {
    bunnies: Vec<Bunny>,
    pub config: WanderConfig,
}

impl BunnySwarm {
    /// Spawn one bunny per entry of `homes`. Unknown planets are skipped.
    pub fn spawn<R: Rng>(planets: &PlanetRegistry, homes: &[BodyId], config: WanderConfig, rng: &mut R) -> Self {
        let bunnies = homes
            .iter()
            .enumerate()
            .filter_map(|(id, &home)| {
                let Some(planet) = planets.get(home) else {
                    tracing::warn!(%home, "bunny spawn on unknown planet skipped");
                    return None;
                };
                Some(Bunny::spawn(id as u32, home, planet, &config, rng))
            })
            .collect();
        Self { bunnies, config }
    }

    /// Swarm from already placed bunnies.
    pub fn from_bunnies(bunnies: Vec<Bunny>, config: WanderConfig) -> Self {
        Self { bunnies, config }
    }

    pub fn len(&self) -> usize {
        self.bunnies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bunnies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bunny> + '_ {
        self.bunnies.iter()
    }

    /// Bunnies living on `body`.
    pub fn count_on(&self, body: BodyId) -> usize {
        self.bunnies.iter().filter(|b| b.body == body).count()
    }

    /// Move every bunny, then remove the ones the player touches.
    ///
    /// Returns the ids of the caught bunnies in removal order.
    pub fn update<R: Rng>(
        &mut self,
        planets: &PlanetRegistry,
        player_position: Vec3,
        rng: &mut R,
        dt: f32,
    ) -> Vec<u32> {
        let config = self.config;
        for bunny in &mut self.bunnies {
            if let Some(planet) = planets.get(bunny.body) {
                bunny.update(player_position, planet, &config, rng, dt);
            }
        }
        self.remove_where(|b| b.is_caught_by(player_position, &config))
    }

    /// Remove the first bunny within `radius` of `point`, returning its id.
    pub fn take_within(&mut self, point: Vec3, radius: f32) -> Option<u32> {
        let index = self.bunnies.iter().position(|b| b.position.distance(point) < radius)?;
        Some(self.bunnies.remove(index).id)
    }

    fn remove_where(&mut self, mut caught: impl FnMut(&Bunny) -> bool) -> Vec<u32> {
        let mut ids = Vec::new();
        self.bunnies.retain(|b| {
            if caught(b) {
                ids.push(b.id);
                false
            } else {
                true
            }
        });
        ids
    }
}

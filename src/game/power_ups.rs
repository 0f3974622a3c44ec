//! Power-up Pickups
//!
//! Static pickups resting on planet surfaces. Walking into one grants a
//! timed status effect to the player and removes the pickup for the rest of
//! the match.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::physics::frame::{self, spherical_to_offset};
use crate::player::StatusEffects;
use crate::render::EntityKind;
use crate::world::{BodyId, PlanetRegistry};

/// Effect granted by a pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    SpeedBoost,
    RangedAttack,
}

impl PowerUpKind {
    pub fn entity_kind(self) -> EntityKind {
        match self {
            PowerUpKind::SpeedBoost => EntityKind::SpeedBoostPickup,
            PowerUpKind::RangedAttack => EntityKind::RangedAttackPickup,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PowerUpKind::SpeedBoost => "speed boost",
            PowerUpKind::RangedAttack => "ranged attack",
        }
    }
}

/// Where a pickup is placed at match start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpSpawn {
    pub body: BodyId,
    pub lon: f32,
    pub lat: f32,
    pub kind: PowerUpKind,
}

/// Pickup placement and effect tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    /// Seconds of doubled movement speed
    pub speed_boost_duration: f32,
    /// Seconds the ranged attack stays armed
    pub ranged_attack_duration: f32,
    /// Player closer than this collects the pickup
    pub pickup_radius: f32,
    /// Height of a pickup above its planet's surface
    pub surface_offset: f32,
    pub spawns: Vec<PowerUpSpawn>,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            speed_boost_duration: 8.0,
            ranged_attack_duration: 10.0,
            pickup_radius: 0.8,
            surface_offset: 0.5,
            spawns: vec![
                PowerUpSpawn { body: BodyId(0), lon: 1.2, lat: 0.4, kind: PowerUpKind::SpeedBoost },
                PowerUpSpawn { body: BodyId(1), lon: -1.0, lat: 0.2, kind: PowerUpKind::SpeedBoost },
                PowerUpSpawn { body: BodyId(2), lon: 2.5, lat: -0.3, kind: PowerUpKind::RangedAttack },
            ],
        }
    }
}

impl PowerUpConfig {
    /// Effect duration for `kind`.
    pub fn duration(&self, kind: PowerUpKind) -> f32 {
        match kind {
            PowerUpKind::SpeedBoost => self.speed_boost_duration,
            PowerUpKind::RangedAttack => self.ranged_attack_duration,
        }
    }
}

/// A pickup waiting to be collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    /// Index of the spawn entry it came from
    pub id: u32,
    pub kind: PowerUpKind,
    pub body: BodyId,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Pickup handed to the player this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collected {
    pub id: u32,
    pub kind: PowerUpKind,
    pub duration: f32,
}

/// All uncollected pickups.
#[derive(Debug, Clone, Default)]
pub struct PowerUpField {
    pickups: Vec<PowerUp>,
    pub config: PowerUpConfig,
}

impl PowerUpField {
    /// Place every configured pickup. Entries on unknown planets are skipped.
    pub fn spawn(planets: &PlanetRegistry, config: PowerUpConfig) -> Self {
        let pickups = config
            .spawns
            .iter()
            .enumerate()
            .filter_map(|(id, spawn)| {
                let Some(planet) = planets.get(spawn.body) else {
                    tracing::warn!(body = %spawn.body, kind = spawn.kind.name(), "power-up on unknown planet skipped");
                    return None;
                };
                let offset = spherical_to_offset(spawn.lon, spawn.lat, planet.radius + config.surface_offset);
                let position = planet.center + offset;
                let rotation = frame::tangent_basis(planet.up_at(position), frame::WORLD_FORWARD).rotation();
                Some(PowerUp { id: id as u32, kind: spawn.kind, body: spawn.body, position, rotation })
            })
            .collect();
        Self { pickups, config }
    }

    /// Empty field, used when power-ups are switched off.
    pub fn disabled(config: PowerUpConfig) -> Self {
        Self { pickups: Vec::new(), config }
    }

    pub fn len(&self) -> usize {
        self.pickups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PowerUp> + '_ {
        self.pickups.iter()
    }

    /// Hand every pickup within reach of `player_position` to `status`.
    pub fn collect(&mut self, player_position: Vec3, status: &mut StatusEffects) -> Vec<Collected> {
        let config = &self.config;
        let mut collected = Vec::new();
        self.pickups.retain(|p| {
            if p.position.distance(player_position) >= config.pickup_radius {
                return true;
            }
            let duration = config.duration(p.kind);
            match p.kind {
                PowerUpKind::SpeedBoost => status.grant_speed_boost(duration),
                PowerUpKind::RangedAttack => status.grant_ranged_attack(duration),
            }
            collected.push(Collected { id: p.id, kind: p.kind, duration });
            false
        });
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Body;

    fn planets() -> PlanetRegistry {
        PlanetRegistry::new(vec![
            Body::new(Vec3::ZERO, 5.0),
            Body::new(Vec3::new(15.0, 0.0, 0.0), 3.0),
            Body::new(Vec3::new(-12.0, 0.0, 8.0), 4.0),
        ])
    }

    #[test]
    fn test_default_layout() {
        let field = PowerUpField::spawn(&planets(), PowerUpConfig::default());
        assert_eq!(field.len(), 3);
        let kinds: Vec<_> = field.iter().map(|p| (p.body, p.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (BodyId(0), PowerUpKind::SpeedBoost),
                (BodyId(1), PowerUpKind::SpeedBoost),
                (BodyId(2), PowerUpKind::RangedAttack),
            ]
        );
        for p in field.iter() {
            assert!(p.rotation.is_finite());
        }
    }

    #[test]
    fn test_pickup_sits_above_surface() {
        let planets = planets();
        let field = PowerUpField::spawn(&planets, PowerUpConfig::default());
        for p in field.iter() {
            let body = planets.get(p.body).unwrap();
            assert!((p.position.distance(body.center) - (body.radius + 0.5)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_collect_grants_status_once() {
        let mut field = PowerUpField::spawn(&planets(), PowerUpConfig::default());
        let mut status = StatusEffects::new();
        let target = *field.iter().next().unwrap();

        let got = field.collect(target.position, &mut status);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].kind, PowerUpKind::SpeedBoost);
        assert!(status.speed_boost_active());
        assert!((status.speed_boost_remaining() - 8.0).abs() < 1e-6);
        assert_eq!(field.len(), 2);

        assert!(field.collect(target.position, &mut status).is_empty());
    }

    #[test]
    fn test_ranged_attack_pickup() {
        let mut field = PowerUpField::spawn(&planets(), PowerUpConfig::default());
        let mut status = StatusEffects::new();
        let target = *field.iter().find(|p| p.kind == PowerUpKind::RangedAttack).unwrap();
        field.collect(target.position + Vec3::X * 0.5, &mut status);
        assert!(status.ranged_attack_active());
        assert!(!status.speed_boost_active());
    }

    #[test]
    fn test_out_of_reach_keeps_pickup() {
        let mut field = PowerUpField::spawn(&planets(), PowerUpConfig::default());
        let mut status = StatusEffects::new();
        assert!(field.collect(Vec3::splat(100.0), &mut status).is_empty());
        assert_eq!(field.len(), 3);
        assert!(!status.speed_boost_active());
    }

    #[test]
    fn test_disabled_is_empty() {
        let field = PowerUpField::disabled(PowerUpConfig::default());
        assert!(field.is_empty());
    }
}

//! Ranged Attack Projectiles
//!
//! Shots fired along the player's facing. A projectile hugs the planet it
//! was fired on at the player's radial distance, stepping along the surface
//! the same way walking does, and catches the first bunny it touches.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::bunnies::BunnySwarm;
use crate::physics::frame;
use crate::player::Player;
use crate::world::{BodyId, PlanetRegistry};

/// Ranged attack tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangedAttackConfig {
    /// Surface speed in meters per second
    pub projectile_speed: f32,
    /// Seconds before an unused projectile fizzles out
    pub lifetime: f32,
    /// Bunny closer than this is hit
    pub hit_radius: f32,
    /// Minimum seconds between two shots
    pub fire_cooldown: f32,
}

impl Default for RangedAttackConfig {
    fn default() -> Self {
        Self {
            projectile_speed: 8.0,
            lifetime: 1.5,
            hit_radius: 0.6,
            fire_cooldown: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec3,
    /// Unit travel direction, tangent to the surface
    pub direction: Vec3,
    pub body: BodyId,
    pub radial_distance: f32,
    /// Seconds left before it disappears
    pub remaining: f32,
}

impl Projectile {
    pub fn rotation(&self, planets: &PlanetRegistry) -> Quat {
        let up = planets
            .get(self.body)
            .map(|b| b.up_at(self.position))
            .unwrap_or(frame::FALLBACK_UP);
        frame::tangent_basis(up, self.direction).rotation()
    }
}

/// A projectile hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: u32,
    pub bunny: u32,
    /// Where the projectile was when it hit
    pub position: Vec3,
}

/// Live projectiles.
#[derive(Debug, Clone, Default)]
pub struct Projectiles {
    live: Vec<Projectile>,
    next_id: u32,
    pub config: RangedAttackConfig,
}

impl Projectiles {
    pub fn new(config: RangedAttackConfig) -> Self {
        Self {
            live: Vec::new(),
            next_id: 0,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> + '_ {
        self.live.iter()
    }

    /// Launch a projectile from the player along its facing.
    ///
    /// Does not check the ranged-attack status; the caller gates firing.
    pub fn fire(&mut self, player: &Player) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(Projectile {
            id,
            position: player.position,
            direction: player.facing,
            body: player.body,
            radial_distance: player.radial_distance,
            remaining: self.config.lifetime,
        });
        id
    }

    /// Advance every projectile, resolve hits and drop expired ones.
    pub fn update(&mut self, planets: &PlanetRegistry, bunnies: &mut BunnySwarm, dt: f32) -> Vec<Hit> {
        let step = self.config.projectile_speed * dt;
        let hit_radius = self.config.hit_radius;
        let mut hits = Vec::new();

        self.live.retain_mut(|p| {
            let Some(body) = planets.get(p.body) else {
                return false;
            };

            let up = body.up_at(p.position);
            let offset = (p.position - body.center) + p.direction * step;
            p.position = body.center + offset.normalize_or(up) * p.radial_distance;
            // keep travelling along the great circle
            let new_up = body.up_at(p.position);
            p.direction = frame::tangent_basis_with_fallback(new_up, p.direction, up).forward;
            p.remaining -= dt;

            if let Some(bunny) = bunnies.take_within(p.position, hit_radius) {
                hits.push(Hit { projectile: p.id, bunny, position: p.position });
                return false;
            }
            p.remaining > 0.0
        });

        hits
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::frame::spherical_to_offset;
    use crate::player::LocomotionConfig;
    use crate::world::Body;
    use crate::game::bunnies::{Bunny, WanderConfig};

    fn planets() -> PlanetRegistry {
        PlanetRegistry::new(vec![Body::new(Vec3::ZERO, 5.0)])
    }

    fn player(planets: &PlanetRegistry) -> Player {
        Player::spawn(planets, BodyId(0), LocomotionConfig::default()).unwrap()
    }

    #[test]
    fn test_travels_on_sphere_and_expires() {
        let planets = planets();
        let mut projectiles = Projectiles::new(RangedAttackConfig::default());
        let mut bunnies = BunnySwarm::default();
        projectiles.fire(&player(&planets));

        let dt = 1.0 / 60.0;
        for _ in 0..60 {
            projectiles.update(&planets, &mut bunnies, dt);
            for p in projectiles.iter() {
                assert!((p.position.length() - 5.5).abs() < 1e-3);
                assert!(p.direction.dot(p.position.normalize()).abs() < 1e-3);
            }
        }
        assert_eq!(projectiles.len(), 1);
        for _ in 0..60 {
            projectiles.update(&planets, &mut bunnies, dt);
        }
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_moves_along_facing() {
        let planets = planets();
        let mut projectiles = Projectiles::new(RangedAttackConfig::default());
        let mut bunnies = BunnySwarm::default();
        projectiles.fire(&player(&planets));
        projectiles.update(&planets, &mut bunnies, 0.05);
        let p = projectiles.iter().next().unwrap();
        // player faces -Z at spawn
        assert!(p.position.z < -0.3);
    }

    #[test]
    fn test_hits_bunny_ahead() {
        let planets = planets();
        let shooter = player(&planets);
        // a still bunny on the great circle ahead of the player (which faces -Z)
        let (lon, lat) = (-std::f32::consts::FRAC_PI_2, 1.37);
        let bunny = Bunny {
            id: 4,
            body: BodyId(0),
            lon,
            lat,
            vel_lon: 0.0,
            vel_lat: 0.0,
            wander_timer: 10.0,
            position: spherical_to_offset(lon, lat, 5.3),
            rotation: Quat::IDENTITY,
        };
        let bunny_position = bunny.position;
        assert!(bunny_position.distance(shooter.position) > 0.6);
        let mut bunnies = BunnySwarm::from_bunnies(vec![bunny], WanderConfig::default());

        let mut projectiles = Projectiles::new(RangedAttackConfig::default());
        projectiles.fire(&shooter);
        let mut hits = Vec::new();
        for _ in 0..90 {
            hits.extend(projectiles.update(&planets, &mut bunnies, 1.0 / 60.0));
        }
        assert_eq!(hits.len(), 1);
        assert_eq!((hits[0].projectile, hits[0].bunny), (0, 4));
        assert!(hits[0].position.distance(bunny_position) < 0.6);
        assert!(bunnies.is_empty());
        assert!(projectiles.is_empty());
    }
}

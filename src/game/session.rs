//! Game Session
//!
//! Owns every piece of match state and advances it once per rendered frame.
//!
//! # Frame Order
//!
//! 1. Clamp the frame delta
//! 2. Camera look (always, even after the match ended)
//! 3. Planet hop, locomotion, bunnies, pickups, ranged attack, status timers
//! 4. Win check, then the countdown
//! 5. Camera pose from the updated player
//!
//! Step 3 and 4 stop once the match has an outcome.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::bunnies::BunnySwarm;
use super::clock::{FrameClock, MatchTimer};
use super::config::{ConfigError, GameConfig};
use super::events::{CaptureCause, EventQueue, GameEvent, Outcome};
use super::hud::HudSnapshot;
use super::power_ups::PowerUpField;
use super::projectiles::Projectiles;
use crate::camera::{CameraPose, CameraRig};
use crate::input::FrameInput;
use crate::player::Player;
use crate::render::{EntityKind, EntityTransform};
use crate::world::PlanetRegistry;

/// One match on a set of planets.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    planets: PlanetRegistry,
    player: Player,
    camera: CameraRig,
    camera_pose: CameraPose,
    bunnies: BunnySwarm,
    power_ups: PowerUpField,
    projectiles: Projectiles,
    clock: FrameClock,
    timer: MatchTimer,
    rng: ChaCha8Rng,
    events: EventQueue,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Validate `config` and set up a fresh match.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let planets = config.registry();
        let player = Player::spawn(&planets, config.player_spawn, config.locomotion).ok_or_else(|| {
            ConfigError::Invalid(format!("player spawn {} does not exist", config.player_spawn))
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let bunnies = BunnySwarm::spawn(&planets, &config.bunny_spawns, config.wander, &mut rng);
        let power_ups = if config.features.power_ups {
            PowerUpField::spawn(&planets, config.power_ups.clone())
        } else {
            PowerUpField::disabled(config.power_ups.clone())
        };

        let camera = CameraRig::new(config.camera);
        let camera_pose = camera.compute(player.position, player.up(&planets), player.heading);

        tracing::info!(
            seed = config.seed,
            planets = planets.len(),
            bunnies = bunnies.len(),
            power_ups = power_ups.len(),
            "match started"
        );

        Ok(Self {
            projectiles: Projectiles::new(config.ranged_attack),
            clock: FrameClock::new(config.max_frame_delta),
            timer: MatchTimer::new(config.match_duration),
            events: EventQueue::new(),
            outcome: None,
            config,
            planets,
            player,
            camera,
            camera_pose,
            bunnies,
            power_ups,
            rng,
        })
    }

    /// Start over with the same configuration and seed.
    pub fn restart(&mut self) {
        let planets = self.config.registry();
        let Some(player) = Player::spawn(&planets, self.config.player_spawn, self.config.locomotion) else {
            // unreachable for a validated config
            tracing::warn!(spawn = %self.config.player_spawn, "restart skipped: player spawn missing");
            return;
        };

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.bunnies = BunnySwarm::spawn(&planets, &self.config.bunny_spawns, self.config.wander, &mut rng);
        self.power_ups = if self.config.features.power_ups {
            PowerUpField::spawn(&planets, self.config.power_ups.clone())
        } else {
            PowerUpField::disabled(self.config.power_ups.clone())
        };
        self.projectiles = Projectiles::new(self.config.ranged_attack);
        self.camera = CameraRig::new(self.config.camera);
        self.camera_pose = self.camera.compute(player.position, player.up(&planets), player.heading);
        self.player = player;
        self.planets = planets;
        self.rng = rng;
        self.clock.reset();
        self.timer.reset();
        self.events.clear();
        self.outcome = None;

        tracing::info!(bunnies = self.bunnies.len(), "match restarted");
    }

    /// Advance the match by one rendered frame.
    pub fn update(&mut self, frame_delta: f32, input: &FrameInput) {
        if input.restart {
            self.restart();
            return;
        }

        let dt = self.clock.tick(frame_delta);
        self.camera.apply_look(input.look.x, input.look.y);

        if self.outcome.is_none() {
            self.step_gameplay(dt, input);
            self.check_outcome(dt);
        }

        self.camera_pose = self.camera.compute(
            self.player.position,
            self.player.up(&self.planets),
            self.player.heading,
        );
    }

    fn step_gameplay(&mut self, dt: f32, input: &FrameInput) {
        if input.hop {
            if let Some(hop) = self.player.try_hop(&self.planets) {
                self.events.push(GameEvent::PlanetHopped { from: hop.from, to: hop.to });
            }
        }

        let step = self.player.update(input, self.camera.yaw, dt, &self.planets);
        if step.jumped {
            self.events.push(GameEvent::Jumped);
        }
        if step.landed {
            self.events.push(GameEvent::Landed);
        }

        let player_position = self.player.position;
        for id in self.bunnies.update(&self.planets, player_position, &mut self.rng, dt) {
            tracing::debug!(bunny = id, remaining = self.bunnies.len(), "bunny caught");
            self.events.push(GameEvent::BunnyCaught {
                id,
                position: player_position,
                cause: CaptureCause::Player,
            });
        }

        if self.config.features.power_ups {
            for pickup in self.power_ups.collect(player_position, &mut self.player.status) {
                tracing::debug!(kind = pickup.kind.name(), duration = pickup.duration, "power-up collected");
                self.events.push(GameEvent::PowerUpCollected {
                    id: pickup.id,
                    kind: pickup.kind,
                    duration: pickup.duration,
                });
            }
        }

        if self.config.features.ranged_attack {
            if input.fire && self.player.status.try_fire(self.config.ranged_attack.fire_cooldown) {
                let projectile = self.projectiles.fire(&self.player);
                tracing::debug!(projectile, "ranged attack fired");
                self.events.push(GameEvent::RangedAttackFired {
                    projectile,
                    position: self.player.position,
                    direction: self.player.facing,
                });
            }
            for hit in self.projectiles.update(&self.planets, &mut self.bunnies, dt) {
                tracing::debug!(bunny = hit.bunny, projectile = hit.projectile, "bunny shot");
                self.events.push(GameEvent::BunnyCaught {
                    id: hit.bunny,
                    position: hit.position,
                    cause: CaptureCause::Projectile,
                });
            }
        }

        self.player.status.tick(dt);
    }

    fn check_outcome(&mut self, dt: f32) {
        let outcome = if self.bunnies.is_empty() {
            Some(Outcome::Won)
        } else if self.timer.advance(dt) {
            Some(Outcome::Lost)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            self.outcome = Some(outcome);
            self.events.push(GameEvent::MatchEnded { outcome });
            tracing::info!(
                ?outcome,
                elapsed = self.clock.elapsed(),
                bunnies_left = self.bunnies.len(),
                "match ended"
            );
        }
    }

    /// Events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            bunnies_remaining: self.bunnies.len(),
            seconds_remaining: self.timer.display_seconds(),
            outcome: self.outcome,
            speed_boost_active: self.player.status.speed_boost_active(),
            ranged_attack_active: self.player.status.ranged_attack_active(),
        }
    }

    /// Transforms of everything that should be drawn this frame.
    pub fn transforms(&self) -> Vec<EntityTransform> {
        let mut out = Vec::with_capacity(1 + self.bunnies.len() + self.power_ups.len() + self.projectiles.len());
        out.push(EntityTransform::new(
            EntityKind::Player,
            0,
            self.player.position,
            self.player.rotation,
        ));
        out.extend(
            self.bunnies
                .iter()
                .map(|b| EntityTransform::new(EntityKind::Bunny, b.id, b.position, b.rotation)),
        );
        out.extend(
            self.power_ups
                .iter()
                .map(|p| EntityTransform::new(p.kind.entity_kind(), p.id, p.position, p.rotation)),
        );
        out.extend(self.projectiles.iter().map(|p| {
            EntityTransform::new(EntityKind::Projectile, p.id, p.position, p.rotation(&self.planets))
        }));
        out
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn planets(&self) -> &PlanetRegistry {
        &self.planets
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bunnies(&self) -> &BunnySwarm {
        &self.bunnies
    }

    pub fn power_ups(&self) -> &PowerUpField {
        &self.power_ups
    }

    pub fn projectiles(&self) -> &Projectiles {
        &self.projectiles
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn camera_pose(&self) -> &CameraPose {
        &self.camera_pose
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn timer(&self) -> &MatchTimer {
        &self.timer
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

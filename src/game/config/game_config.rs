//! Game Configuration
//!
//! Every tuning value of a match in one serializable struct. `Default`
//! reproduces the stock three-planet level; a JSON file can override any
//! subset of fields.

use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::game::bunnies::WanderConfig;
use crate::game::power_ups::PowerUpConfig;
use crate::game::projectiles::RangedAttackConfig;
use crate::player::LocomotionConfig;
use crate::world::{Body, BodyId, PlanetRegistry};

/// Error type for loading and validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Upper bound for bunny wander speeds, radians per second.
pub const MAX_WANDER_SPEED: f32 = 100.0;

/// Upper bound for the time between bunny direction changes, seconds.
pub const MAX_WANDER_TIME: f32 = 3600.0;

/// Optional gameplay features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Spawn power-up pickups
    pub power_ups: bool,
    /// Allow firing projectiles while the ranged attack is active
    pub ranged_attack: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            power_ups: true,
            ranged_attack: true,
        }
    }
}

impl FeatureFlags {
    /// Walk, jump, hop and catch only.
    pub fn base() -> Self {
        Self {
            power_ups: false,
            ranged_attack: false,
        }
    }
}

/// Complete match configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed of the bunny RNG
    pub seed: u64,
    /// Match length in seconds
    pub match_duration: f32,
    /// Longest simulation step in seconds
    pub max_frame_delta: f32,
    pub planets: Vec<Body>,
    /// Planet the player starts on
    pub player_spawn: BodyId,
    /// Home planet of each bunny
    pub bunny_spawns: Vec<BodyId>,
    pub locomotion: LocomotionConfig,
    pub camera: CameraConfig,
    pub wander: WanderConfig,
    pub power_ups: PowerUpConfig,
    pub ranged_attack: RangedAttackConfig,
    pub features: FeatureFlags,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0x00b0_bb1e,
            match_duration: 250.0,
            max_frame_delta: 0.1,
            planets: vec![
                Body::new(Vec3::ZERO, 5.0),
                Body::new(Vec3::new(15.0, 0.0, 0.0), 3.0),
                Body::new(Vec3::new(-12.0, 0.0, 8.0), 4.0),
            ],
            player_spawn: BodyId(0),
            bunny_spawns: vec![BodyId(0), BodyId(0), BodyId(1), BodyId(2), BodyId(2)],
            locomotion: LocomotionConfig::default(),
            camera: CameraConfig::default(),
            wander: WanderConfig::default(),
            power_ups: PowerUpConfig::default(),
            ranged_attack: RangedAttackConfig::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn registry(&self) -> PlanetRegistry {
        PlanetRegistry::new(self.planets.clone())
    }

    /// Check every value the simulation relies on.
    ///
    /// All problems are reported together in one [`ConfigError::Invalid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems: Vec<String> = Vec::new();

        if self.planets.is_empty() {
            problems.push("at least one planet is required".into());
        }
        for (i, body) in self.planets.iter().enumerate() {
            if !body.center.is_finite() {
                problems.push(format!("planet {i} has a non-finite center"));
            }
            if !(body.radius.is_finite() && body.radius > 0.0) {
                problems.push(format!("planet {i} radius must be positive, got {}", body.radius));
            }
        }
        let planet_count = self.planets.len();
        if self.player_spawn.index() >= planet_count {
            problems.push(format!("player spawn {} does not exist", self.player_spawn));
        }
        for home in &self.bunny_spawns {
            if home.index() >= planet_count {
                problems.push(format!("bunny home {home} does not exist"));
            }
        }
        for spawn in &self.power_ups.spawns {
            if spawn.body.index() >= planet_count {
                problems.push(format!("power-up planet {} does not exist", spawn.body));
            }
        }

        if !(self.match_duration.is_finite() && self.match_duration > 0.0) {
            problems.push("match_duration must be positive".into());
        }
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            problems.push("max_frame_delta must be positive".into());
        }

        let l = &self.locomotion;
        for (name, value) in [
            ("locomotion.move_speed", l.move_speed),
            ("locomotion.speed_boost_multiplier", l.speed_boost_multiplier),
            ("locomotion.gravity", l.gravity),
            ("locomotion.jump_impulse", l.jump_impulse),
            ("locomotion.stand_offset", l.stand_offset),
            ("locomotion.hop_range", l.hop_range),
            ("camera.distance", self.camera.distance),
            ("wander.surface_offset", self.wander.surface_offset),
            ("wander.spawn_latitude", self.wander.spawn_latitude),
            ("wander.max_lon_speed", self.wander.max_lon_speed),
            ("wander.max_lat_speed", self.wander.max_lat_speed),
            ("wander.min_wander_time", self.wander.min_wander_time),
            ("wander.max_wander_time", self.wander.max_wander_time),
            ("wander.flee_lon_accel", self.wander.flee_lon_accel),
            ("wander.flee_lat_accel", self.wander.flee_lat_accel),
            ("wander.flee_distance", self.wander.flee_distance),
            ("wander.capture_radius", self.wander.capture_radius),
            ("power_ups.pickup_radius", self.power_ups.pickup_radius),
            ("power_ups.speed_boost_duration", self.power_ups.speed_boost_duration),
            ("power_ups.ranged_attack_duration", self.power_ups.ranged_attack_duration),
            ("ranged_attack.projectile_speed", self.ranged_attack.projectile_speed),
            ("ranged_attack.lifetime", self.ranged_attack.lifetime),
            ("ranged_attack.hit_radius", self.ranged_attack.hit_radius),
            ("ranged_attack.fire_cooldown", self.ranged_attack.fire_cooldown),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                problems.push(format!("{name} must be a non-negative number, got {value}"));
            }
        }

        let pitch_limit = self.camera.pitch_limit;
        if !(pitch_limit.is_finite() && pitch_limit > 0.0 && pitch_limit < std::f32::consts::FRAC_PI_2) {
            problems.push(format!("camera.pitch_limit must be in (0, π/2), got {pitch_limit}"));
        }
        if !(self.wander.pole_margin > 0.0 && self.wander.pole_margin < std::f32::consts::FRAC_PI_2) {
            problems.push("wander.pole_margin must be in (0, π/2)".into());
        }
        let w = &self.wander;
        // bunnies draw from these ranges, so they must stay well inside f32
        if w.max_lon_speed > MAX_WANDER_SPEED || w.max_lat_speed > MAX_WANDER_SPEED {
            problems.push(format!("wander speeds must not exceed {MAX_WANDER_SPEED} rad/s"));
        }
        if w.spawn_latitude > std::f32::consts::FRAC_PI_2 {
            problems.push("wander.spawn_latitude must not exceed π/2".into());
        }
        if w.max_wander_time > MAX_WANDER_TIME {
            problems.push(format!("wander.max_wander_time must not exceed {MAX_WANDER_TIME} s"));
        }
        if self.wander.max_wander_time < self.wander.min_wander_time {
            problems.push("wander.max_wander_time must not be below min_wander_time".into());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.planets.len(), 3);
        assert_eq!(config.bunny_spawns.len(), 5);
        assert_eq!(config.match_duration, 250.0);
        assert!(config.features.power_ups && config.features.ranged_attack);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig::default();
        let json = config.to_json_string().unwrap();
        let back = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "seed": 7, "locomotion": { "move_speed": 4.5 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.locomotion.move_speed, 4.5);
        assert_eq!(config.locomotion.gravity, 9.8);
        assert_eq!(config.planets.len(), 3);
    }

    #[test]
    fn test_rejects_bad_references() {
        let result = GameConfig::from_json_str(r#"{ "bunny_spawns": [0, 9], "player_spawn": 4 }"#);
        match result {
            Err(ConfigError::Invalid(msg)) => {
                assert!(msg.contains("bunny home planet#9"));
                assert!(msg.contains("player spawn planet#4"));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut config = GameConfig::default();
        config.planets[1].radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_out_of_range_wander() {
        for json in [
            r#"{ "wander": { "max_lon_speed": 3.0e38 } }"#,
            r#"{ "wander": { "max_lat_speed": 1000.0 } }"#,
            r#"{ "wander": { "spawn_latitude": 2.0 } }"#,
            r#"{ "wander": { "max_wander_time": 1.0e30 } }"#,
            r#"{ "wander": { "flee_lon_accel": -1.0 } }"#,
        ] {
            match GameConfig::from_json_str(json) {
                Err(ConfigError::Invalid(msg)) => assert!(msg.contains("wander"), "{msg}"),
                other => panic!("{json} should be rejected, got {other:?}"),
            }
        }

        let ok = GameConfig::from_json_str(r#"{ "wander": { "max_lon_speed": 2.0, "max_wander_time": 60.0 } }"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_rejects_empty_world() {
        let mut config = GameConfig::default();
        config.planets.clear();
        config.bunny_spawns.clear();
        config.power_ups.spawns.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GameConfig::from_json_str("{ not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}

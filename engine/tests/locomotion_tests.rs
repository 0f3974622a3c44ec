//! Locomotion Tests - Walking, Jumping and Hopping Between Planets
//!
//! Drives `Player::update` directly with hand-built `FrameInput`s on the
//! default three-planet world.

use bunny_planet_engine::input::FrameInput;
use bunny_planet_engine::player::{LocomotionConfig, Player};
use bunny_planet_engine::world::{Body, BodyId, PlanetRegistry};
use glam::Vec3;

fn world() -> PlanetRegistry {
    PlanetRegistry::new(vec![
        Body::new(Vec3::ZERO, 5.0),
        Body::new(Vec3::new(15.0, 0.0, 0.0), 3.0),
        Body::new(Vec3::new(-12.0, 0.0, 8.0), 4.0),
    ])
}

fn spawn(planets: &PlanetRegistry) -> Player {
    Player::spawn(planets, BodyId(0), LocomotionConfig::default()).unwrap()
}

// ============================================================================
// Jump Arc
// ============================================================================

#[test]
fn test_jump_peak_and_landing_times() {
    let planets = world();
    let mut player = spawn(&planets);
    let surface = player.config.standing_distance(planets.get(BodyId(0)).unwrap());
    let dt = 1e-3;

    let first = player.update(&FrameInput::idle().with_jump(), 0.0, dt, &planets);
    assert!(first.jumped);
    assert!(!player.grounded);

    let mut t = dt;
    let mut peak = (player.radial_distance, t);
    let mut landed_at = None;
    for _ in 0..2000 {
        let step = player.update(&FrameInput::idle(), 0.0, dt, &planets);
        t += dt;
        if player.radial_distance > peak.0 {
            peak = (player.radial_distance, t);
        }
        if step.landed {
            landed_at = Some(t);
            break;
        }
    }

    // v = 4, g = 9.8: peak at 0.408 s, 0.816 m up; back down at 0.816 s
    let (peak_distance, peak_time) = peak;
    assert!((peak_time - 0.408).abs() < 0.01, "peak at {peak_time}");
    assert!((peak_distance - surface - 0.816).abs() < 0.01);
    let landed_at = landed_at.expect("player never landed");
    assert!((landed_at - 0.816).abs() < 0.01, "landed at {landed_at}");
    assert!(player.grounded);
    assert_eq!(player.radial_distance, surface);
    assert_eq!(player.radial_velocity, 0.0);
}

#[test]
fn test_time_of_flight_matches_config() {
    let config = LocomotionConfig::default();
    assert!((config.time_of_flight() - 2.0 * 4.0 / 9.8).abs() < 1e-4);
}

#[test]
fn test_jump_ignored_in_air() {
    let planets = world();
    let mut player = spawn(&planets);
    player.update(&FrameInput::idle().with_jump(), 0.0, 1.0 / 60.0, &planets);
    let velocity = player.radial_velocity;
    let step = player.update(&FrameInput::idle().with_jump(), 0.0, 1.0 / 60.0, &planets);
    assert!(!step.jumped);
    assert!(player.radial_velocity < velocity);
}

// ============================================================================
// Surface Invariant
// ============================================================================

#[test]
fn test_long_walk_stays_on_sphere() {
    let planets = world();
    let mut player = spawn(&planets);
    let dt = 1.0 / 60.0;
    let mut yaw = 0.0;

    for frame in 0..1200 {
        let angle = frame as f32 * 0.013;
        let mut input = FrameInput::moving(angle.sin(), angle.cos());
        if frame % 90 == 0 {
            input = input.with_jump();
        }
        yaw += 0.004;
        player.update(&input, yaw, dt, &planets);

        let body = planets.get(player.body).unwrap();
        assert!(player.surface_error(&planets) < 1e-3, "frame {frame}");
        assert!(player.radial_distance >= player.config.standing_distance(body) - 1e-4);
        if player.grounded {
            assert!((player.radial_distance - player.config.standing_distance(body)).abs() < 1e-4);
        }
        let up = body.up_at(player.position);
        assert!(player.facing.dot(up).abs() < 1e-3);
        assert!(player.heading.dot(up).abs() < 1e-3);
        assert!(player.rotation.is_finite());
    }
}

#[test]
fn test_walking_forward_from_the_pole_reaches_the_equator() {
    let planets = world();
    let mut player = spawn(&planets);
    for _ in 0..600 {
        player.update(&FrameInput::moving(0.0, 1.0), 0.0, 1.0 / 60.0, &planets);
        assert!(player.position.is_finite());
        assert!(player.heading.is_finite());
    }
    // world forward is -Z, so walking forward ends up hugging the -Z equator
    let offset = player.position - planets.get(BodyId(0)).unwrap().center;
    assert!(offset.y.abs() < 0.5, "ended at {offset:?}");
    assert!(offset.z < -5.0);
}

// ============================================================================
// Planet Hop
// ============================================================================

#[test]
fn test_hop_from_spawn_reaches_third_planet() {
    let planets = world();
    let mut player = spawn(&planets);

    // planet 2 surface is ~11.4 away from the top of planet 0, planet 1 ~13
    let hop = player.try_hop(&planets).expect("a planet should be in range");
    assert_eq!(hop.from, BodyId(0));
    assert_eq!(hop.to, BodyId(2));
    assert!(hop.distance < player.config.hop_range);

    assert_eq!(player.body, BodyId(2));
    assert!(player.grounded);
    assert!(player.surface_error(&planets) < 1e-4);
    let body = planets.get(BodyId(2)).unwrap();
    assert!((player.position.distance(body.center) - 4.5).abs() < 1e-4);
}

#[test]
fn test_hop_out_of_range_is_noop() {
    let planets = world();
    let mut config = LocomotionConfig::default();
    config.hop_range = 5.0;
    let mut player = Player::spawn(&planets, BodyId(0), config).unwrap();
    let before = player.position;

    assert!(player.try_hop(&planets).is_none());
    assert_eq!(player.body, BodyId(0));
    assert_eq!(player.position, before);
}

#[test]
fn test_walking_into_a_closer_well_reattaches() {
    // two nearly touching planets; the seam between them is closer to planet 1
    let planets = PlanetRegistry::new(vec![
        Body::new(Vec3::ZERO, 2.0),
        Body::new(Vec3::new(4.2, 0.0, 0.0), 2.0),
    ]);
    let mut player = Player::spawn(&planets, BodyId(0), LocomotionConfig::default()).unwrap();

    // strafe towards +X, the side facing planet 1
    let mut reattached = None;
    for _ in 0..600 {
        let step = player.update(&FrameInput::moving(1.0, 0.0), 0.0, 1.0 / 60.0, &planets);
        if let Some(change) = step.reattached {
            reattached = Some(change);
            assert!(player.surface_error(&planets) < 1e-3);
            break;
        }
    }

    assert_eq!(reattached, Some((BodyId(0), BodyId(1))));
    assert_eq!(player.body, BodyId(1));
    let body = planets.get(BodyId(1)).unwrap();
    assert!(player.radial_distance >= player.config.standing_distance(body) - 1e-4);
}

//! Bunny Planet Headless Runner
//!
//! Run with: `cargo run --bin bunny_planet -- [config.json]`
//!
//! Plays one match without a window at a fixed 60 Hz. A simple autopilot
//! feeds the same input path a keyboard and touch joystick would:
//! - Steers the joystick towards the nearest bunny on the current planet
//! - Jumps every few seconds
//! - Hops (E) when its planet has no bunnies left
//! - Fires (F) while the ranged attack is armed
//!
//! Set `RUST_LOG=debug` to see every capture, pickup and shot.

use std::process::ExitCode;

use glam::{Vec2, Vec3};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bunny_planet_engine::game::{GameConfig, GameEvent, GameSession, InputConfig};
use bunny_planet_engine::input::InputHandler;
use bunny_planet_engine::world::Body;

const FRAME_DT: f32 = 1.0 / 60.0;
const JUMP_INTERVAL: u64 = 180;
const HOP_INTERVAL: u64 = 60;
const FIRE_INTERVAL: u64 = 36;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(%err, "could not load config");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(%err, "could not start match");
            return ExitCode::FAILURE;
        }
    };

    let input_config = InputConfig::default();
    let mut input = input_config.build_handler();
    let max_frames = (session.config().match_duration / FRAME_DT).ceil() as u64 + 10;

    for frame in 0..max_frames {
        autopilot(&session, &input_config, &mut input, frame);
        let snapshot = input.snapshot();
        session.update(FRAME_DT, &snapshot);

        for event in session.drain_events() {
            log_event(&event);
        }
        if session.is_over() {
            break;
        }
    }

    let hud = session.hud();
    let pose = session.camera_pose();
    tracing::info!(
        outcome = hud.banner().unwrap_or("unfinished"),
        bunnies_left = hud.bunnies_remaining,
        seconds_left = hud.seconds_remaining,
        frames = session.clock().frame(),
        camera = ?pose.position,
        "run complete"
    );
    ExitCode::SUCCESS
}

/// Decide this frame's input from the current state.
fn autopilot(session: &GameSession, keys: &InputConfig, input: &mut InputHandler, frame: u64) {
    let player = session.player();

    // release one-shot keys pressed on the previous frame
    input.handle_key(keys.movement.jump, false);
    input.handle_key(keys.actions.hop, false);
    input.handle_key(keys.actions.fire, false);

    let Some(body) = session.planets().get(player.body) else {
        input.release_joystick();
        return;
    };

    let target = session
        .bunnies()
        .iter()
        .filter(|b| b.body == player.body)
        .map(|b| b.position)
        .min_by(|a, b| a.distance(player.position).total_cmp(&b.distance(player.position)));

    match target {
        Some(target) => steer(input, session, body, target),
        None => {
            input.release_joystick();
            if frame % HOP_INTERVAL == 0 && !session.bunnies().is_empty() {
                input.handle_key(keys.actions.hop, true);
            }
        }
    }

    if frame % JUMP_INTERVAL == 0 && frame > 0 {
        input.handle_key(keys.movement.jump, true);
    }
    if player.status.can_fire() && frame % FIRE_INTERVAL == 0 {
        input.handle_key(keys.actions.fire, true);
    }
    // keep the camera drifting a little, like a player nudging the view
    if frame % 120 == 0 {
        input.pointer_down(0.0, 0.0);
        input.pointer_move(4.0, 0.0);
        input.pointer_up();
    }
}

/// Point the joystick at `target` in the player's movement frame.
fn steer(input: &mut InputHandler, session: &GameSession, body: &Body, target: Vec3) {
    let player = session.player();
    let basis = player.movement_basis(body, session.camera().yaw);
    let to_target = basis.project(target - player.position);
    let right = to_target.dot(basis.right);
    let forward = to_target.dot(basis.forward);
    match Vec2::new(right, forward).try_normalize() {
        // joystick y grows downward
        Some(dir) => input.set_joystick(dir.x, -dir.y),
        None => input.release_joystick(),
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::BunnyCaught { id, cause, .. } => tracing::info!(bunny = id, ?cause, "caught a bunny"),
        GameEvent::PowerUpCollected { kind, duration, .. } => {
            tracing::info!(kind = kind.name(), duration, "picked up a power-up")
        }
        GameEvent::PlanetHopped { from, to } => tracing::info!(%from, %to, "hopped"),
        GameEvent::MatchEnded { outcome } => tracing::info!(?outcome, "match ended"),
        GameEvent::RangedAttackFired { projectile, .. } => tracing::debug!(projectile, "fired"),
        GameEvent::Jumped | GameEvent::Landed => tracing::trace!(?event, "locomotion"),
    }
}

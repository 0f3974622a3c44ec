//! Discrete gameplay events for audio and visual-effect collaborators.
//!
//! Events are queued during `GameSession::update` and drained by the
//! embedding application once per frame. Nothing in the core reacts to them.

use glam::Vec3;

use super::power_ups::PowerUpKind;
use crate::world::BodyId;

/// What caught a bunny.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureCause {
    Player,
    Projectile,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every bunny was caught before time ran out
    Won,
    /// The countdown reached zero with bunnies left
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BunnyCaught { id: u32, position: Vec3, cause: CaptureCause },
    PowerUpCollected { id: u32, kind: PowerUpKind, duration: f32 },
    RangedAttackFired { projectile: u32, position: Vec3, direction: Vec3 },
    PlanetHopped { from: BodyId, to: BodyId },
    Jumped,
    Landed,
    MatchEnded { outcome: Outcome },
}

/// FIFO of events produced since the last drain.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

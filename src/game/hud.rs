//! HUD observables.
//!
//! A plain snapshot the UI layer reads after each update: bunny counter,
//! countdown, end-of-match banner and active power-up indicators.

use super::events::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub bunnies_remaining: usize,
    /// Countdown rounded up to whole seconds
    pub seconds_remaining: u32,
    /// `Some` once the match has ended
    pub outcome: Option<Outcome>,
    pub speed_boost_active: bool,
    pub ranged_attack_active: bool,
}

impl HudSnapshot {
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Banner text for the end screen.
    pub fn banner(&self) -> Option<&'static str> {
        match self.outcome? {
            Outcome::Won => Some("Planet Completed!"),
            Outcome::Lost => Some("Time's up!"),
        }
    }
}

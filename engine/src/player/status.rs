//! Timed status effects granted by power-ups.
//!
//! Each effect is a countdown in seconds. An effect is active while its
//! timer is positive; expiry has no side effects beyond the gated behavior
//! switching off.

/// Remaining durations of the player's timed effects.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusEffects {
    speed_boost: f32,
    ranged_attack: f32,
    /// Time until the ranged attack may fire again
    fire_cooldown: f32,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or refresh) the speed boost. Never shortens a running boost.
    pub fn grant_speed_boost(&mut self, duration: f32) {
        self.speed_boost = self.speed_boost.max(duration.max(0.0));
    }

    /// Start (or refresh) the ranged attack. Never shortens a running one.
    pub fn grant_ranged_attack(&mut self, duration: f32) {
        self.ranged_attack = self.ranged_attack.max(duration.max(0.0));
    }

    /// Count every timer down by `dt`, stopping at zero.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.speed_boost = (self.speed_boost - dt).max(0.0);
        self.ranged_attack = (self.ranged_attack - dt).max(0.0);
        self.fire_cooldown = (self.fire_cooldown - dt).max(0.0);
    }

    #[inline]
    pub fn speed_boost_active(&self) -> bool {
        self.speed_boost > 0.0
    }

    #[inline]
    pub fn ranged_attack_active(&self) -> bool {
        self.ranged_attack > 0.0
    }

    #[inline]
    pub fn speed_boost_remaining(&self) -> f32 {
        self.speed_boost
    }

    #[inline]
    pub fn ranged_attack_remaining(&self) -> f32 {
        self.ranged_attack
    }

    /// Movement speed factor: `boost_multiplier` while boosted, else 1.
    #[inline]
    pub fn speed_multiplier(&self, boost_multiplier: f32) -> f32 {
        if self.speed_boost_active() {
            boost_multiplier
        } else {
            1.0
        }
    }

    /// Ranged attack active and off cooldown.
    #[inline]
    pub fn can_fire(&self) -> bool {
        self.ranged_attack_active() && self.fire_cooldown <= 0.0
    }

    /// Consume a shot: starts the cooldown. Returns `false` if firing is not allowed.
    pub fn try_fire(&mut self, cooldown: f32) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.fire_cooldown = cooldown.max(0.0);
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

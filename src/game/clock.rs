//! Frame clock and match countdown.

/// Turns raw frame deltas into simulation steps.
///
/// A long stall (tab in the background, debugger break) would otherwise
/// launch the player through the planet, so each step is capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Largest step handed to the simulation, in seconds
    max_frame_delta: f32,
    /// Simulated seconds since the clock started
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new(max_frame_delta: f32) -> Self {
        Self {
            max_frame_delta: max_frame_delta.max(0.0),
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Clamp a frame delta into `[0, max_frame_delta]` and count it.
    ///
    /// Non-finite or negative deltas become zero.
    pub fn tick(&mut self, frame_delta: f32) -> f32 {
        let dt = if frame_delta.is_finite() {
            frame_delta.clamp(0.0, self.max_frame_delta)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frame += 1;
        dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn max_frame_delta(&self) -> f32 {
        self.max_frame_delta
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.max_frame_delta);
    }
}

/// Countdown to the end of the match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchTimer {
    duration: f32,
    remaining: f32,
}

impl MatchTimer {
    pub fn new(duration: f32) -> Self {
        let duration = duration.max(0.0);
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Count down by `dt`. Returns `true` only on the call that reaches zero.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Whole seconds shown on the HUD (rounded up).
    pub fn display_seconds(&self) -> u32 {
        self.remaining.ceil() as u32
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }
}

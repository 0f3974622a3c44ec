//! Pointer Drag Tracker
//!
//! Accumulates pointer (mouse or touch) drag motion between frames so the
//! camera can consume it once per update. Positions are in screen pixels.

/// Drag state with delta accumulation.
///
/// - Motion only accumulates while a drag is active
/// - `consume_delta()` returns the accumulated delta and resets it
///
/// # Example
///
/// ```rust,ignore
/// let mut drag = DragState::new();
/// drag.begin(100.0, 100.0);
/// drag.move_to(110.0, 95.0);
/// let (dx, dy) = drag.consume_delta(); // (10.0, -5.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Last pointer position while dragging.
    last: Option<(f32, f32)>,
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at the given pointer position.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.last = Some((x, y));
    }

    /// Pointer moved. Ignored unless a drag is active.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if let Some((px, py)) = self.last {
            self.delta_x += x - px;
            self.delta_y += y - py;
            self.last = Some((x, y));
        }
    }

    /// End the drag (pointer up or cancel). Accumulated delta is kept.
    pub fn end(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

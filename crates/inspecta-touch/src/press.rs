//! Pressed-state tracking.

use crate::event::{TouchEvent, TouchPhase};
use crate::subscription::{Listeners, Subscription};

/// Tracks whether a finger is currently down on an element.
///
/// `Start` presses, `End` and `Cancel` release. Subscribers are notified
/// only on transitions, so a stream of `Move` events (or a duplicate
/// release) produces no callbacks.
pub struct PressTracker {
    pressed: bool,
    listeners: Listeners<bool>,
}

impl PressTracker {
    /// Create a tracker in the released state.
    pub fn new() -> Self {
        Self {
            pressed: false,
            listeners: Listeners::new(),
        }
    }

    /// Whether a press is currently active.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Subscribe to pressed-state transitions.
    ///
    /// The callback receives the new state: `true` on press, `false` on
    /// release.
    pub fn on_change(&self, callback: impl FnMut(&bool) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    /// Feed one raw touch event into the tracker.
    pub fn feed(&mut self, event: TouchEvent) {
        let pressed = match event.phase {
            TouchPhase::Start => true,
            TouchPhase::End | TouchPhase::Cancel => false,
            TouchPhase::Move => return,
        };

        if pressed != self.pressed {
            self.pressed = pressed;
            self.listeners.emit(&pressed);
        }
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressTracker")
            .field("pressed", &self.pressed)
            .finish()
    }
}

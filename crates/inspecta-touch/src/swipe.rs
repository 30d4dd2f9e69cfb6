//! Left/right swipe detection.

use crate::event::{TouchEvent, TouchPhase};
use crate::subscription::{Listeners, Subscription};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default horizontal displacement a swipe must exceed.
pub const DEFAULT_THRESHOLD: f32 = 50.0;

/// Direction of a detected swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    /// Finger moved left
    Left,
    /// Finger moved right
    Right,
}

/// Detects horizontal swipes from a touch event stream.
///
/// A swipe is recognized on `End` when the horizontal displacement from
/// the `Start` point exceeds the threshold **and** exceeds the vertical
/// displacement; mostly-vertical drags are scroll gestures, not swipes.
///
/// # Example
///
/// ```
/// use inspecta_touch::{Swipe, SwipeDetector, TouchEvent};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut detector = SwipeDetector::new();
/// let seen = Rc::new(Cell::new(None));
/// let sink = seen.clone();
/// let _sub = detector.on_swipe(move |swipe| sink.set(Some(*swipe)));
///
/// detector.feed(TouchEvent::start(200.0, 80.0));
/// detector.feed(TouchEvent::end(40.0, 90.0));
/// assert_eq!(seen.get(), Some(Swipe::Left));
/// ```
pub struct SwipeDetector {
    threshold: f32,
    start: Option<(f32, f32)>,
    listeners: Listeners<Swipe>,
}

impl SwipeDetector {
    /// Create a detector with [`DEFAULT_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    /// Create a detector with a custom displacement threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
            listeners: Listeners::new(),
        }
    }

    /// The active displacement threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Subscribe to detected swipes.
    pub fn on_swipe(&self, callback: impl FnMut(&Swipe) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    /// Feed one raw touch event into the detector.
    pub fn feed(&mut self, event: TouchEvent) {
        match event.phase {
            TouchPhase::Start => {
                self.start = Some((event.x, event.y));
            }
            // Intermediate movement doesn't matter; only the end point
            // relative to the start point decides the gesture.
            TouchPhase::Move => {}
            TouchPhase::End => {
                let Some((start_x, start_y)) = self.start.take() else {
                    // End without a Start (e.g., gesture began outside the
                    // region) is ignored.
                    return;
                };

                let dx = event.x - start_x;
                let dy = event.y - start_y;

                if dx.abs() < self.threshold || dx.abs() < dy.abs() {
                    trace!(dx, dy, "displacement below swipe threshold");
                    return;
                }

                let swipe = if dx < 0.0 { Swipe::Left } else { Swipe::Right };
                trace!(?swipe, dx, dy, "swipe detected");
                self.listeners.emit(&swipe);
            }
            TouchPhase::Cancel => {
                // Interrupted interactions never produce a swipe.
                self.start = None;
            }
        }
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SwipeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeDetector")
            .field("threshold", &self.threshold)
            .field("start", &self.start)
            .finish()
    }
}

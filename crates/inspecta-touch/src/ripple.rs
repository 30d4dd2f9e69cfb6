//! Ripple origin emission.
//!
//! Computes where a touch landed relative to a region so the embedding
//! layer can anchor its ripple animation there. The animation itself is a
//! presentation concern and stays outside this crate.

use crate::event::{Rect, TouchEvent, TouchPhase};
use crate::subscription::{Listeners, Subscription};
use serde::{Deserialize, Serialize};

/// Origin point of a ripple, relative to the emitter's region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ripple {
    /// Horizontal offset from the region's left edge
    pub x: f32,
    /// Vertical offset from the region's top edge
    pub y: f32,
}

/// Emits a [`Ripple`] for every touch that starts inside a region.
pub struct RippleEmitter {
    region: Rect,
    listeners: Listeners<Ripple>,
}

impl RippleEmitter {
    /// Create an emitter for the given region.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            listeners: Listeners::new(),
        }
    }

    /// Replace the region, e.g., after the embedding layer relayouts.
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// The current region.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Subscribe to ripple origins.
    pub fn on_ripple(&self, callback: impl FnMut(&Ripple) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    /// Feed one raw touch event into the emitter.
    ///
    /// Only `Start` events produce a ripple; the origin is the touch point
    /// translated into region-relative coordinates.
    pub fn feed(&mut self, event: TouchEvent) {
        if event.phase != TouchPhase::Start {
            return;
        }

        self.listeners.emit(&Ripple {
            x: event.x - self.region.left,
            y: event.y - self.region.top,
        });
    }
}

impl std::fmt::Debug for RippleEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RippleEmitter")
            .field("region", &self.region)
            .finish()
    }
}

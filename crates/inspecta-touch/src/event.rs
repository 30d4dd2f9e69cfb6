//! Raw touch event types fed into the detectors.

use serde::{Deserialize, Serialize};

/// Phase of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchPhase {
    /// A finger touched down
    Start,
    /// The finger moved while down
    Move,
    /// The finger lifted
    End,
    /// The system interrupted the interaction (e.g., an incoming call)
    Cancel,
}

/// One raw touch event in the embedding layer's coordinate space.
///
/// Coordinates are viewport-absolute; detectors that need region-relative
/// positions carry their own [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    /// Interaction phase
    pub phase: TouchPhase,
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl TouchEvent {
    /// Shorthand constructor
    pub fn new(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }

    /// A `Start` event at the given point
    pub fn start(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Start, x, y)
    }

    /// An `End` event at the given point
    pub fn end(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::End, x, y)
    }

    /// A `Cancel` event at the given point
    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancel, x, y)
    }
}

/// Axis-aligned region rectangle in the same coordinate space as events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Construct a rect from its left/top corner and size
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

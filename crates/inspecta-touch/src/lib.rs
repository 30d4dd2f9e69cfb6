//! Framework-independent touch gesture detection.
//!
//! This library turns raw touch events into gesture notifications without
//! assuming any particular UI framework. The embedding layer feeds
//! [`TouchEvent`] values into a detector; interested parties subscribe
//! with a callback and receive notifications until their [`Subscription`]
//! guard is dropped.
//!
//! Three detectors are provided:
//!
//! - [`SwipeDetector`]: left/right swipe via horizontal displacement
//! - [`PressTracker`]: pressed-state transitions across start/end/cancel
//! - [`RippleEmitter`]: ripple origin points relative to a region

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod event;
pub mod press;
pub mod ripple;
pub mod subscription;
pub mod swipe;

pub use event::{Rect, TouchEvent, TouchPhase};
pub use press::PressTracker;
pub use ripple::{Ripple, RippleEmitter};
pub use subscription::Subscription;
pub use swipe::{Swipe, SwipeDetector};

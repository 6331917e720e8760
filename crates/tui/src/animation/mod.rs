//! Animation primitives for smooth highlight transitions.
//!
//! All state here is caller-owned and sampled with an explicit instant:
//! [`MarkerMotion`] holds the per-marker clocks and produces immutable
//! [`Motion`] values that renderers consume. Nothing in this module touches
//! the terminal.

mod blend;
mod easing;
mod emphasis;
mod motion;
mod pulse;

pub use blend::Blend;
pub use easing::Easing;
pub use emphasis::Emphasis;
pub use motion::{BOUNCE_PERIOD, EMPHASIS_DURATION, MarkerMotion, Motion, RING_PERIOD};
pub use pulse::Pulse;

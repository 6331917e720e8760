use std::time::{Duration, Instant};

use super::easing::Easing;
use super::emphasis::Emphasis;
use super::pulse::Pulse;

/// How long the highlight transition takes in either direction.
pub const EMPHASIS_DURATION: Duration = Duration::from_millis(250);

/// Full up-and-down cycle of the glyph bounce.
pub const BOUNCE_PERIOD: Duration = Duration::from_millis(600);

/// One complete expansion of the halo ring.
pub const RING_PERIOD: Duration = Duration::from_millis(1200);

/// An immutable per-frame animation sample.
///
/// Renderers receive a `Motion` alongside the marker itself and derive every
/// visual treatment from it. Two samples taken at the same instant from the
/// same clock are identical, so rendering stays a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Eased highlight progress: `0.0` neutral, `1.0` fully emphasized.
    pub emphasis: f32,
    /// Cyclic bounce phase in `[0.0, 1.0)`. Meaningful only while emphasized.
    pub bounce: f32,
    /// Halo ring phase in `[0.0, 1.0)`, or `None` exactly when the ring is
    /// absent from the frame.
    pub ring: Option<f32>,
}

impl Motion {
    /// The neutral sample: no emphasis, no bounce, no ring.
    pub const fn rest() -> Self {
        Self {
            emphasis: 0.0,
            bounce: 0.0,
            ring: None,
        }
    }

    /// A fully settled highlighted sample at the start of both cycles.
    pub const fn emphasized() -> Self {
        Self {
            emphasis: 1.0,
            bounce: 0.0,
            ring: Some(0.0),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::rest()
    }
}

/// The caller-owned animation clock for one marker.
///
/// Holds the highlight tween plus the bounce and ring pulses, and samples
/// them into [`Motion`] values. The ring pulse runs exactly while the
/// highlight is on: removing the highlight makes the ring vanish from the
/// next sample even though the emphasis is still easing back down.
#[derive(Debug, Clone)]
pub struct MarkerMotion {
    emphasis: Emphasis,
    bounce: Pulse,
    ring: Pulse,
}

impl MarkerMotion {
    pub fn new() -> Self {
        Self {
            emphasis: Emphasis::new(EMPHASIS_DURATION).with_easing(Easing::EaseOut),
            bounce: Pulse::new(BOUNCE_PERIOD),
            ring: Pulse::new(RING_PERIOD),
        }
    }

    /// Retargets the clock for a highlight change.
    ///
    /// Returns `true` if the state changed. The pulses start from phase zero
    /// on activation so the ring always begins at its smallest radius.
    pub fn set_highlighted(&mut self, highlighted: bool, now: Instant) -> bool {
        if !self.emphasis.set_active(highlighted, now) {
            return false;
        }
        if highlighted {
            self.bounce.start(now);
            self.ring.start(now);
        } else {
            self.bounce.stop();
            self.ring.stop();
        }
        true
    }

    /// Whether the clock currently targets the highlighted state.
    pub fn is_highlighted(&self) -> bool {
        self.emphasis.is_active()
    }

    /// Samples the clock into an immutable per-frame value.
    pub fn sample(&self, now: Instant) -> Motion {
        Motion {
            emphasis: self.emphasis.sample(now),
            bounce: self.bounce.phase(now).unwrap_or(0.0),
            ring: self.ring.phase(now),
        }
    }

    /// True while a redraw on the next tick would show something new.
    ///
    /// The emphasis tween animates for a bounded time, but the pulses run for
    /// as long as the highlight is held.
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.emphasis.is_settled(now) || self.ring.is_running()
    }
}

impl Default for MarkerMotion {
    fn default() -> Self {
        Self::new()
    }
}

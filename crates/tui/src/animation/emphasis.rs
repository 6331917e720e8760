use std::time::{Duration, Instant};

use super::blend::Blend;
use super::easing::Easing;

/// A reversible toggle tween over `[0.0, 1.0]`.
///
/// Drives the highlight transition: `0.0` is the neutral state, `1.0` the
/// fully emphasized state. Toggling while a transition is in flight retargets
/// from the current value instead of snapping, so rapid toggles stay smooth.
///
/// Sampling takes an explicit instant and never mutates, which keeps
/// renderers referentially transparent and makes the math testable without
/// sleeping.
#[derive(Debug, Clone)]
pub struct Emphasis {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
    active: bool,
}

impl Emphasis {
    /// Creates an inactive emphasis resting at `0.0`.
    pub fn new(duration: Duration) -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: Instant::now(),
            duration,
            easing: Easing::default(),
            active: false,
        }
    }

    /// Sets the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Whether the toggle currently targets the emphasized state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the active state, retargeting from the current value if changed.
    ///
    /// Returns `true` if the state changed.
    pub fn set_active(&mut self, active: bool, now: Instant) -> bool {
        if self.active == active {
            return false;
        }
        self.from = self.sample(now);
        self.to = if active { 1.0 } else { 0.0 };
        self.started = now;
        self.active = active;
        true
    }

    /// Eased progress at `now`, in `[0.0, 1.0]`.
    #[inline]
    pub fn sample(&self, now: Instant) -> f32 {
        self.from.mix(&self.to, self.easing.apply(self.progress(now)))
    }

    /// Whether the transition has reached its target at `now`.
    #[inline]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.from == self.to || self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_emphasis_rests_at_zero() {
        let emphasis = Emphasis::new(Duration::from_millis(200));
        let now = Instant::now();
        assert_eq!(emphasis.sample(now), 0.0);
        assert!(emphasis.is_settled(now));
        assert!(!emphasis.is_active());
    }

    #[test]
    fn activation_eases_toward_one_and_settles() {
        let mut emphasis = Emphasis::new(Duration::from_millis(200));
        let t0 = Instant::now();
        assert!(emphasis.set_active(true, t0));

        assert_eq!(emphasis.sample(t0), 0.0);
        assert!(!emphasis.is_settled(t0 + Duration::from_millis(100)));
        let halfway = emphasis.sample(t0 + Duration::from_millis(100));
        assert!(halfway > 0.0 && halfway < 1.0);

        let done = t0 + Duration::from_millis(200);
        assert!(emphasis.is_settled(done));
        assert_eq!(emphasis.sample(done), 1.0);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let mut emphasis = Emphasis::new(Duration::from_millis(200));
        let t0 = Instant::now();
        emphasis.set_active(true, t0);

        // Reverse mid-flight: the new transition starts from wherever the
        // old one had gotten to, not from 1.0.
        let mid = t0 + Duration::from_millis(100);
        let value_at_reversal = emphasis.sample(mid);
        assert!(emphasis.set_active(false, mid));
        assert_eq!(emphasis.sample(mid), value_at_reversal);

        let done = mid + Duration::from_millis(200);
        assert_eq!(emphasis.sample(done), 0.0);
    }

    #[test]
    fn matching_state_is_a_no_op() {
        let mut emphasis = Emphasis::new(Duration::from_millis(200));
        let now = Instant::now();
        assert!(!emphasis.set_active(false, now));
        emphasis.set_active(true, now);
        assert!(!emphasis.set_active(true, now));
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let mut emphasis = Emphasis::new(Duration::ZERO);
        let now = Instant::now();
        emphasis.set_active(true, now);
        assert_eq!(emphasis.sample(now), 1.0);
        assert!(emphasis.is_settled(now));
    }

    #[test]
    fn sampling_is_pure() {
        let mut emphasis = Emphasis::new(Duration::from_millis(200)).with_easing(Easing::EaseOut);
        let t0 = Instant::now();
        emphasis.set_active(true, t0);
        let probe = t0 + Duration::from_millis(70);
        assert_eq!(emphasis.sample(probe), emphasis.sample(probe));
    }
}

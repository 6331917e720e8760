use std::time::{Duration, Instant};

/// A repeating phase clock.
///
/// While running, `phase(now)` wraps through `[0.0, 1.0)` forever with the
/// configured period, anchored to the instant the pulse was started. Restarting
/// re-anchors phase zero, so a cycle always begins at its initial position.
#[derive(Debug, Clone)]
pub struct Pulse {
    period: Duration,
    origin: Option<Instant>,
}

impl Pulse {
    /// Creates a stopped pulse with the given period.
    pub fn new(period: Duration) -> Self {
        Self { period, origin: None }
    }

    /// Starts (or restarts) the pulse, anchoring phase zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.origin = Some(now);
    }

    /// Stops the pulse; `phase` returns `None` until started again.
    pub fn stop(&mut self) {
        self.origin = None;
    }

    /// Whether the pulse is currently running.
    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Current phase in `[0.0, 1.0)`, or `None` while stopped.
    pub fn phase(&self, now: Instant) -> Option<f32> {
        let origin = self.origin?;
        if self.period.is_zero() {
            return Some(0.0);
        }
        let elapsed = now.saturating_duration_since(origin).as_secs_f32();
        let cycles = elapsed / self.period.as_secs_f32();
        Some(cycles.fract())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_pulse_has_no_phase() {
        let pulse = Pulse::new(Duration::from_millis(400));
        assert_eq!(pulse.phase(Instant::now()), None);
        assert!(!pulse.is_running());
    }

    #[test]
    fn phase_wraps_with_the_period() {
        let mut pulse = Pulse::new(Duration::from_millis(400));
        let t0 = Instant::now();
        pulse.start(t0);

        assert_eq!(pulse.phase(t0), Some(0.0));
        assert_eq!(pulse.phase(t0 + Duration::from_millis(100)), Some(0.25));
        assert_eq!(pulse.phase(t0 + Duration::from_millis(400)), Some(0.0));
        assert_eq!(pulse.phase(t0 + Duration::from_millis(500)), Some(0.25));
    }

    #[test]
    fn restart_re_anchors_phase_zero() {
        let mut pulse = Pulse::new(Duration::from_millis(400));
        let t0 = Instant::now();
        pulse.start(t0);
        let t1 = t0 + Duration::from_millis(300);
        pulse.start(t1);
        assert_eq!(pulse.phase(t1), Some(0.0));
    }

    #[test]
    fn stop_clears_the_phase_immediately() {
        let mut pulse = Pulse::new(Duration::from_millis(400));
        let t0 = Instant::now();
        pulse.start(t0);
        pulse.stop();
        assert_eq!(pulse.phase(t0 + Duration::from_millis(50)), None);
    }

    #[test]
    fn zero_period_pins_phase_to_zero() {
        let mut pulse = Pulse::new(Duration::ZERO);
        let t0 = Instant::now();
        pulse.start(t0);
        assert_eq!(pulse.phase(t0 + Duration::from_secs(1)), Some(0.0));
    }
}

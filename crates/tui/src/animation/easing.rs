/// Easing curve applied to linear animation progress.
///
/// Transforms linear progress `t` in `[0.0, 1.0]` into curved progress so
/// highlight transitions accelerate and settle naturally instead of moving
/// at constant speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic ease-in: starts slow, accelerates. `t²`
    EaseIn,
    /// Quadratic ease-out: starts fast, decelerates. `1 - (1-t)²`
    EaseOut,
    /// Quadratic ease-in-out: slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Apply the curve to linear progress. Input is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at t=0.0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at t=1.0");
        }
    }

    #[test]
    fn ease_out_leads_and_ease_in_trails_linear() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}

use ratatui::style::Color;

/// A value that can be linearly interpolated toward a target.
///
/// `t = 0.0` returns `self`, `t = 1.0` returns `target`, and values in
/// between return a proportional blend. Implementations clamp `t` to
/// `[0.0, 1.0]`.
pub trait Blend: Clone {
    fn mix(&self, target: &Self, t: f32) -> Self;
}

impl Blend for f32 {
    #[inline]
    fn mix(&self, target: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self + (target - self) * t
    }
}

impl Blend for u8 {
    #[inline]
    fn mix(&self, target: &Self, t: f32) -> Self {
        (*self as f32).mix(&(*target as f32), t).round() as u8
    }
}

impl Blend for u16 {
    #[inline]
    fn mix(&self, target: &Self, t: f32) -> Self {
        (*self as f32).mix(&(*target as f32), t).round() as u16
    }
}

impl Blend for i16 {
    #[inline]
    fn mix(&self, target: &Self, t: f32) -> Self {
        (*self as f32).mix(&(*target as f32), t).round() as i16
    }
}

/// RGB colors blend per channel. Indexed and named colors cannot be
/// interpolated, so they snap to the nearer endpoint at `t = 0.5`.
impl Blend for Color {
    fn mix(&self, target: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        match (self, target) {
            (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
                Color::Rgb(r0.mix(r1, t), g0.mix(g1, t), b0.mix(b1, t))
            }
            _ => {
                if t < 0.5 {
                    *self
                } else {
                    *target
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_mix_hits_endpoints_and_midpoint() {
        assert_eq!(0.0f32.mix(&100.0, 0.0), 0.0);
        assert_eq!(0.0f32.mix(&100.0, 0.5), 50.0);
        assert_eq!(0.0f32.mix(&100.0, 1.0), 100.0);
    }

    #[test]
    fn f32_mix_clamps_t() {
        assert_eq!(0.0f32.mix(&100.0, -0.5), 0.0);
        assert_eq!(0.0f32.mix(&100.0, 1.5), 100.0);
    }

    #[test]
    fn integer_mix_rounds() {
        assert_eq!(0u8.mix(&255, 0.5), 128);
        assert_eq!(1u16.mix(&2, 0.5), 2);
        assert_eq!(1u16.mix(&2, 0.4), 1);
    }

    #[test]
    fn rgb_mix_blends_per_channel() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(black.mix(&white, 0.0), black);
        assert_eq!(black.mix(&white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(black.mix(&white, 1.0), white);
    }

    #[test]
    fn indexed_colors_snap_at_midpoint() {
        let a = Color::Indexed(238);
        let b = Color::Indexed(214);
        assert_eq!(a.mix(&b, 0.49), a);
        assert_eq!(a.mix(&b, 0.5), b);
        assert_eq!(a.mix(&b, 1.0), b);
    }
}

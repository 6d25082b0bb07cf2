/// Timing curves for tweens. `PowerN` follows the usual naming where
/// `Power1` is quadratic, `Power2` cubic and `Power3` quartic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
    /// Overshoots past the end value before settling. The argument is the
    /// overshoot amount, 1.7 gives the classic "back" feel.
    BackOut(f64),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Power1Out,
        Easing::Power2Out,
        Easing::Power2InOut,
        Easing::Power3Out,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-3.0), easing.apply(0.0));
            assert_eq!(easing.apply(7.5), easing.apply(1.0));
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Easing::Power1Out.apply(0.5) > 0.5);
        assert!(Easing::Power2Out.apply(0.5) > Easing::Power1Out.apply(0.5));
        assert!(Easing::Power3Out.apply(0.5) > Easing::Power2Out.apply(0.5));
        assert!((Easing::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}

//! Linear range mapping around the base lightness.

use super::LightnessModel;
use crate::shades::{ShadeKey, BASE_SHADE};

/// Lighter shades ramp from the base lightness up to `lightness_max` at the
/// smallest scheduled shade; darker shades ramp down to `lightness_min` at
/// the largest.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRange {
    base_lightness: f64,
    lightness_max: f64,
    lightness_min: f64,
    /// Smallest scheduled shade below 500, if any.
    lightest: Option<ShadeKey>,
    /// Largest scheduled shade above 500, if any.
    darkest: Option<ShadeKey>,
}

impl LinearRange {
    pub fn new(
        base_lightness: f64,
        lightness_max: f64,
        lightness_min: f64,
        shades: &[ShadeKey],
    ) -> Self {
        Self {
            base_lightness,
            lightness_max,
            lightness_min,
            lightest: shades.iter().copied().filter(|&s| s < BASE_SHADE).min(),
            darkest: shades.iter().copied().filter(|&s| s > BASE_SHADE).max(),
        }
    }
}

impl LightnessModel for LinearRange {
    fn lightness(&self, shade: f64) -> f64 {
        let base = BASE_SHADE as f64;

        if shade < base {
            // No lighter shades scheduled means ratio 0.
            let ratio = match self.lightest {
                Some(m) => (base - shade) / (base - m as f64),
                None => 0.0,
            };
            self.base_lightness + (self.lightness_max - self.base_lightness) * ratio
        } else if shade > base {
            let ratio = match self.darkest {
                Some(m) => (shade - base) / (m as f64 - base),
                None => 0.0,
            };
            self.base_lightness - (self.base_lightness - self.lightness_min) * ratio
        } else {
            self.base_lightness
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_schedule() -> Vec<ShadeKey> {
        (1..=19).map(|i| i * 50).collect()
    }

    #[test]
    fn endpoints_hit_bounds() {
        let model = LinearRange::new(50.0, 95.0, 5.0, &default_schedule());
        assert!((model.lightness(50.0) - 95.0).abs() < 1e-9);
        assert!((model.lightness(950.0) - 5.0).abs() < 1e-9);
        assert!((model.lightness(500.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn monotonically_decreasing() {
        let shades = default_schedule();
        let model = LinearRange::new(50.0, 95.0, 5.0, &shades);
        let values: Vec<f64> = shades.iter().map(|&s| model.lightness(s as f64)).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]), "{values:?}");
    }

    #[test]
    fn midpoint_of_lighter_half() {
        let model = LinearRange::new(50.0, 90.0, 10.0, &[100, 500, 900]);
        assert!((model.lightness(300.0) - 70.0).abs() < 1e-9);
        assert!((model.lightness(700.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn missing_side_does_not_divide_by_zero() {
        let model = LinearRange::new(40.0, 95.0, 5.0, &[500, 600, 700]);
        let value = model.lightness(300.0);
        assert!(value.is_finite());
        assert!((value - 40.0).abs() < 1e-9);
    }
}

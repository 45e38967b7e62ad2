//! Palette generation: schedule, lightness model and HSL adjustments
//! composed into an ordered list of colors.

use crate::color_space::{hex_to_hsl, hsl_to_hex, Hsl};
use crate::config::PaletteConfig;
use crate::lightness::{CurveModel, LightnessModel, LightnessStrategy, LinearRange};
use crate::shades::{ShadeKey, BASE_SHADE};
use crate::PaletteError;
use serde::{Deserialize, Serialize};

/// One generated palette step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub shade: ShadeKey,
    pub color: String,
    pub lightness: f64,
}

/// Generate a palette using the model selected by `strategy`.
pub fn generate_palette(
    config: &PaletteConfig,
    strategy: LightnessStrategy,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let shades = config.shades();
    let base = hex_to_hsl(&config.base_color)?;

    match strategy {
        LightnessStrategy::Linear => {
            let model = LinearRange::new(
                base.l as f64,
                config.lightness_max as f64,
                config.lightness_min as f64,
                &shades,
            );
            Ok(build_entries(config, &shades, base, &model))
        }
        LightnessStrategy::Curve => {
            let model = CurveModel::new(config.graph_points.clone(), config.curve_intensity);
            Ok(build_entries(config, &shades, base, &model))
        }
    }
}

/// Generate a palette with a caller-supplied lightness model.
pub fn generate_palette_with<M: LightnessModel>(
    config: &PaletteConfig,
    model: &M,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let shades = config.shades();
    let base = hex_to_hsl(&config.base_color)?;
    Ok(build_entries(config, &shades, base, model))
}

fn build_entries<M: LightnessModel>(
    config: &PaletteConfig,
    shades: &[ShadeKey],
    base: Hsl,
    model: &M,
) -> Vec<PaletteEntry> {
    let hue = (base.h + config.hue + 360).rem_euclid(360) as f64;
    let saturation = (base.s + config.saturation).clamp(0, 100) as f64;
    let (lo, hi) = (config.lightness_min as f64, config.lightness_max as f64);

    shades
        .iter()
        .map(|&shade| {
            // The base shade is the input color verbatim.
            if shade == BASE_SHADE {
                return PaletteEntry {
                    shade,
                    color: config.base_color.clone(),
                    lightness: base.l as f64,
                };
            }

            let lightness = lo.max(hi.min(model.lightness(shade as f64)));
            PaletteEntry {
                shade,
                color: hsl_to_hex(hue, saturation, lightness),
                lightness,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_shade_is_pinned_despite_shifts() {
        let config = PaletteConfig {
            hue: 90,
            saturation: -60,
            lightness_max: 60,
            lightness_min: 50,
            ..PaletteConfig::default()
        };
        for strategy in [LightnessStrategy::Linear, LightnessStrategy::Curve] {
            let palette = generate_palette(&config, strategy).unwrap();
            let base = palette.iter().find(|e| e.shade == BASE_SHADE).unwrap();
            assert_eq!(base.color, "#1E4BCD");
            assert_eq!(base.lightness, 46.0);
        }
    }

    #[test]
    fn lightness_is_clamped_to_bounds() {
        let config = PaletteConfig {
            lightness_max: 80,
            lightness_min: 20,
            ..PaletteConfig::default()
        };
        let palette = generate_palette(&config, LightnessStrategy::Linear).unwrap();
        assert_eq!(palette.first().unwrap().lightness, 80.0);
        assert_eq!(palette.last().unwrap().lightness, 20.0);
    }

    #[test]
    fn hue_shift_wraps_negative() {
        let config = PaletteConfig {
            base_color: "#ff0000".to_string(),
            hue: -120,
            use_custom_ranges: true,
            custom_ranges: "400".to_string(),
            min_range: 600,
            lightness_max: 50,
            lightness_min: 50,
            ..PaletteConfig::default()
        };
        let palette = generate_palette(&config, LightnessStrategy::Linear).unwrap();
        assert_eq!(palette.len(), 1);
        // (0 - 120 + 360) % 360 = 240, lightness pinned to 50 by the bounds.
        assert_eq!(palette[0].color, "#0000ff");
    }

    #[test]
    fn malformed_base_color_propagates() {
        let config = PaletteConfig {
            base_color: "#12G456".to_string(),
            ..PaletteConfig::default()
        };
        assert!(matches!(
            generate_palette(&config, LightnessStrategy::Curve),
            Err(PaletteError::InvalidColorFormat(_))
        ));
    }

    struct Flat(f64);

    impl LightnessModel for Flat {
        fn lightness(&self, _shade: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn custom_model_is_used() {
        let config = PaletteConfig::default();
        let palette = generate_palette_with(&config, &Flat(50.0)).unwrap();
        assert!(palette
            .iter()
            .filter(|e| e.shade != BASE_SHADE)
            .all(|e| e.lightness == 50.0));
    }
}

//! JSON save/load of palettes and their generation settings.
//!
//! The document always carries `name` and `colors`. Saving with the config
//! included adds a `config` object plus the curve fields at the top level:
//!
//! ```json
//! {
//!   "name": "navy",
//!   "colors": { "50": "#eef2fb", "500": "#1E4BCD" },
//!   "config": { "baseColor": "#1E4BCD", "minRange": 50, "maxRange": 950, ... },
//!   "graphPoints": [{ "shade": 50, "lightness": 95 }],
//!   "curveIntensity": 0,
//!   "connectionStrength": 50
//! }
//! ```

use std::collections::BTreeMap;

use crate::config::{PaletteConfig, DEFAULT_IS_PERCEIVED, DEFAULT_USE_CUSTOM_RANGES};
use crate::lightness::{GraphPoint, LightnessStrategy};
use crate::palette::{generate_palette, PaletteEntry};
use crate::shades::ShadeKey;
use crate::PaletteError;
use serde::{Deserialize, Serialize};

/// On-disk palette document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shade to color, ascending by shade. Ignored on load.
    #[serde(skip_deserializing)]
    pub colors: BTreeMap<ShadeKey, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_points: Option<Vec<GraphPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve_intensity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_strength: Option<i32>,
}

/// The `config` object. Absent fields keep the current value on load,
/// except the flags, which fall back to fixed defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_range: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_range: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_ranges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_custom_ranges: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_perceived: Option<bool>,
}

impl ConfigSection {
    fn from_config(config: &PaletteConfig) -> Self {
        Self {
            base_color: Some(config.base_color.clone()),
            min_range: Some(config.min_range as i64),
            max_range: Some(config.max_range as i64),
            custom_ranges: Some(config.custom_ranges.clone()),
            use_custom_ranges: Some(config.use_custom_ranges),
            hue: Some(config.hue),
            saturation: Some(config.saturation),
            lightness_max: Some(config.lightness_max),
            lightness_min: Some(config.lightness_min),
            is_perceived: Some(config.is_perceived),
        }
    }
}

/// Build the document for an already generated palette.
pub fn to_document(
    config: &PaletteConfig,
    palette: &[PaletteEntry],
    include_config: bool,
) -> PaletteDocument {
    let colors = palette
        .iter()
        .map(|entry| (entry.shade, entry.color.clone()))
        .collect();

    let mut document = PaletteDocument {
        name: Some(config.name.clone()),
        colors,
        ..PaletteDocument::default()
    };
    if include_config {
        document.config = Some(ConfigSection::from_config(config));
        document.graph_points = Some(config.graph_points.clone());
        document.curve_intensity = Some(config.curve_intensity);
        document.connection_strength = Some(config.connection_strength);
    }
    document
}

/// Generate the palette for `config` and serialize it as pretty JSON.
pub fn encode(
    config: &PaletteConfig,
    strategy: LightnessStrategy,
    include_config: bool,
) -> Result<String, PaletteError> {
    let palette = generate_palette(config, strategy)?;
    let document = to_document(config, &palette, include_config);
    log::debug!(
        "Encoding palette {:?} ({} colors, config: {})",
        config.name,
        palette.len(),
        include_config
    );
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Apply a saved document on top of `current`.
///
/// Either the whole document applies or `current` is returned untouched
/// through an error: malformed JSON is `InvalidConfigFormat`, a malformed
/// `baseColor` is `InvalidColorFormat`. A document without a `config`
/// object only updates the name.
pub fn decode(json: &str, current: &PaletteConfig) -> Result<PaletteConfig, PaletteError> {
    let document: PaletteDocument = serde_json::from_str(json)?;
    apply_document(document, current)
}

/// Apply an already parsed document on top of `current`.
pub fn apply_document(
    document: PaletteDocument,
    current: &PaletteConfig,
) -> Result<PaletteConfig, PaletteError> {
    let mut next = current.clone();
    if let Some(name) = document.name {
        next.name = name;
    }

    let Some(section) = document.config else {
        log::warn!("Palette document has no config section, only the name was applied");
        return Ok(next);
    };

    if let Some(color) = section.base_color {
        next.set_base_color(&color)?;
    }
    if let Some(min_range) = section.min_range {
        next.set_min_range(min_range);
    }
    if let Some(max_range) = section.max_range {
        next.set_max_range(max_range);
    }
    if let Some(custom_ranges) = section.custom_ranges {
        next.set_custom_ranges(custom_ranges);
    }
    next.use_custom_ranges = section.use_custom_ranges.unwrap_or(DEFAULT_USE_CUSTOM_RANGES);
    if let Some(hue) = section.hue {
        next.set_hue(hue);
    }
    if let Some(saturation) = section.saturation {
        next.set_saturation(saturation);
    }
    if let Some(lightness_max) = section.lightness_max {
        next.set_lightness_max(lightness_max);
    }
    if let Some(lightness_min) = section.lightness_min {
        next.set_lightness_min(lightness_min);
    }
    next.is_perceived = section.is_perceived.unwrap_or(DEFAULT_IS_PERCEIVED);

    if let Some(points) = document.graph_points {
        let count = points.len();
        if !next.set_graph_points(points) {
            log::warn!("Ignoring graph points: need at least 2 distinct shades, got {count} points");
        }
    }
    if let Some(curve_intensity) = document.curve_intensity {
        next.set_curve_intensity(curve_intensity);
    }
    if let Some(connection_strength) = document.connection_strength {
        next.set_connection_strength(connection_strength);
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn colors_only_without_config() {
        let json = encode(&PaletteConfig::default(), LightnessStrategy::Linear, false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "navy");
        assert_eq!(value["colors"]["500"], "#1E4BCD");
        assert!(value.get("config").is_none());
        assert!(value.get("graphPoints").is_none());
    }

    #[test]
    fn colors_are_ordered_numerically() {
        let json = encode(&PaletteConfig::default(), LightnessStrategy::Linear, false).unwrap();
        let fifty = json.find("\"50\"").unwrap();
        let hundred = json.find("\"100\"").unwrap();
        assert!(fifty < hundred);
    }

    #[test]
    fn config_fields_use_camel_case() {
        let json = encode(&PaletteConfig::default(), LightnessStrategy::Curve, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["baseColor"], "#1E4BCD");
        assert_eq!(value["config"]["useCustomRanges"], false);
        assert_eq!(value["config"]["isPerceived"], true);
        assert_eq!(value["graphPoints"][1]["shade"], 500.0);
        assert_eq!(value["connectionStrength"], 50);
    }

    #[test]
    fn save_load_roundtrip() {
        let mut config = PaletteConfig::default();
        config.name = "brand".to_string();
        config.set_base_color("#ff8800").unwrap();
        config.set_hue(-30);
        config.set_curve_intensity(20);
        config.use_custom_ranges = true;
        config.set_custom_ranges("100,300,700");

        let json = encode(&config, LightnessStrategy::Curve, true).unwrap();
        let loaded = decode(&json, &PaletteConfig::default()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_flags_use_fixed_defaults() {
        let current = PaletteConfig {
            use_custom_ranges: true,
            is_perceived: false,
            hue: 40,
            ..PaletteConfig::default()
        };
        let loaded = decode(r#"{"config": {"saturation": 10}}"#, &current).unwrap();
        assert!(!loaded.use_custom_ranges);
        assert!(loaded.is_perceived);
        assert_eq!(loaded.hue, 40);
        assert_eq!(loaded.saturation, 10);
    }

    #[test]
    fn short_graph_point_list_is_ignored() {
        let current = PaletteConfig::default();
        let loaded = decode(
            r#"{"config": {}, "graphPoints": [{"shade": 100, "lightness": 50}]}"#,
            &current,
        )
        .unwrap();
        assert_eq!(loaded.graph_points, current.graph_points);
    }

    #[test]
    fn coinciding_graph_points_are_ignored() {
        let current = PaletteConfig::default();
        let loaded = decode(
            r#"{"config": {}, "graphPoints": [
                {"shade": 500, "lightness": 20}, {"shade": 500, "lightness": 80}]}"#,
            &current,
        )
        .unwrap();
        assert_eq!(loaded.graph_points, current.graph_points);
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(
            decode("{not json", &PaletteConfig::default()),
            Err(PaletteError::InvalidConfigFormat(_))
        ));
    }

    #[test]
    fn invalid_base_color_is_rejected() {
        assert!(matches!(
            decode(
                r##"{"config": {"baseColor": "#zzzzzz"}}"##,
                &PaletteConfig::default()
            ),
            Err(PaletteError::InvalidColorFormat(_))
        ));
    }
}

//! User-editable palette generation settings.

use crate::color_space::{hex_to_hsl, is_valid_hex};
use crate::lightness::{
    curve::{dedup_points, sort_points},
    GraphPoint, MIN_GRAPH_POINTS,
};
use crate::shades::{ShadeKey, ShadeSchedule, BASE_SHADE, MAX_SHADE};
use crate::PaletteError;

pub const DEFAULT_NAME: &str = "navy";
pub const DEFAULT_BASE_COLOR: &str = "#1E4BCD";

pub const DEFAULT_MIN_RANGE: ShadeKey = 50;
pub const DEFAULT_MAX_RANGE: ShadeKey = 950;

/// Hue shift in degrees.
pub const MIN_HUE_SHIFT: i32 = -180;
pub const MAX_HUE_SHIFT: i32 = 180;

/// Saturation shift in percentage points.
pub const MIN_SATURATION_SHIFT: i32 = -100;
pub const MAX_SATURATION_SHIFT: i32 = 100;

pub const DEFAULT_LIGHTNESS_MAX: i32 = 95;
pub const LIGHTNESS_MAX_RANGE: (i32, i32) = (50, 100);

pub const DEFAULT_LIGHTNESS_MIN: i32 = 5;
pub const LIGHTNESS_MIN_RANGE: (i32, i32) = (0, 50);

pub const MIN_CURVE_INTENSITY: i32 = -50;
pub const MAX_CURVE_INTENSITY: i32 = 50;

pub const DEFAULT_CONNECTION_STRENGTH: i32 = 50;
pub const MAX_CONNECTION_STRENGTH: i32 = 100;

/// Value a missing `useCustomRanges` flag decodes to.
pub const DEFAULT_USE_CUSTOM_RANGES: bool = false;
/// Value a missing `isPerceived` flag decodes to.
pub const DEFAULT_IS_PERCEIVED: bool = true;

/// Full palette generation input.
///
/// Fields are public for reading; the setters apply the same clamping the
/// editor controls do and should be preferred for writes.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteConfig {
    /// Color name used in exports (`--color-<name>-<shade>`).
    pub name: String,
    pub base_color: String,
    pub min_range: ShadeKey,
    pub max_range: ShadeKey,
    /// Raw comma-separated shade list.
    pub custom_ranges: String,
    pub use_custom_ranges: bool,
    /// Hue shift in [-180, 180].
    pub hue: i32,
    /// Saturation shift in [-100, 100].
    pub saturation: i32,
    pub lightness_max: i32,
    pub lightness_min: i32,
    /// Display preference carried through save/load; does not affect output.
    pub is_perceived: bool,
    /// Control points, sorted by shade, at least two.
    pub graph_points: Vec<GraphPoint>,
    pub curve_intensity: i32,
    pub connection_strength: i32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            base_color: DEFAULT_BASE_COLOR.to_string(),
            min_range: DEFAULT_MIN_RANGE,
            max_range: DEFAULT_MAX_RANGE,
            custom_ranges: String::new(),
            use_custom_ranges: DEFAULT_USE_CUSTOM_RANGES,
            hue: 0,
            saturation: 0,
            lightness_max: DEFAULT_LIGHTNESS_MAX,
            lightness_min: DEFAULT_LIGHTNESS_MIN,
            is_perceived: DEFAULT_IS_PERCEIVED,
            // 46 is the lightness of DEFAULT_BASE_COLOR.
            graph_points: vec![
                GraphPoint::new(DEFAULT_MIN_RANGE as f64, DEFAULT_LIGHTNESS_MAX as f64),
                GraphPoint::new(BASE_SHADE as f64, 46.0),
                GraphPoint::new(DEFAULT_MAX_RANGE as f64, DEFAULT_LIGHTNESS_MIN as f64),
            ],
            curve_intensity: 0,
            connection_strength: DEFAULT_CONNECTION_STRENGTH,
        }
    }
}

impl PaletteConfig {
    /// Shade schedule for the current range settings.
    pub fn schedule(&self) -> ShadeSchedule<'_> {
        ShadeSchedule {
            use_custom_ranges: self.use_custom_ranges,
            custom_ranges: &self.custom_ranges,
            min_range: self.min_range,
            max_range: self.max_range,
        }
    }

    pub fn shades(&self) -> Vec<ShadeKey> {
        self.schedule().shades()
    }

    /// Set the base color. Malformed hex is rejected and leaves the config
    /// unchanged.
    pub fn set_base_color(&mut self, color: &str) -> Result<(), PaletteError> {
        if !is_valid_hex(color) {
            return Err(PaletteError::InvalidColorFormat(color.to_string()));
        }
        self.base_color = color.to_string();
        Ok(())
    }

    /// Clamped to [0, 2099]. `max_range` is pushed up if it no longer
    /// exceeds the new minimum.
    pub fn set_min_range(&mut self, value: i64) {
        self.min_range = value.clamp(0, MAX_SHADE as i64 - 1) as ShadeKey;
        if self.max_range <= self.min_range {
            self.max_range = (self.min_range + 1).min(MAX_SHADE);
        }
    }

    /// Clamped to [min_range + 1, 2100].
    pub fn set_max_range(&mut self, value: i64) {
        let floor = (self.min_range as i64 + 1).min(MAX_SHADE as i64);
        self.max_range = value.clamp(floor, MAX_SHADE as i64) as ShadeKey;
    }

    pub fn set_custom_ranges(&mut self, value: impl Into<String>) {
        self.custom_ranges = value.into();
    }

    pub fn set_hue(&mut self, value: i32) {
        self.hue = value.clamp(MIN_HUE_SHIFT, MAX_HUE_SHIFT);
    }

    pub fn set_saturation(&mut self, value: i32) {
        self.saturation = value.clamp(MIN_SATURATION_SHIFT, MAX_SATURATION_SHIFT);
    }

    pub fn set_lightness_max(&mut self, value: i32) {
        self.lightness_max = value.clamp(LIGHTNESS_MAX_RANGE.0, LIGHTNESS_MAX_RANGE.1);
    }

    pub fn set_lightness_min(&mut self, value: i32) {
        self.lightness_min = value.clamp(LIGHTNESS_MIN_RANGE.0, LIGHTNESS_MIN_RANGE.1);
    }

    pub fn set_curve_intensity(&mut self, value: i32) {
        self.curve_intensity = value.clamp(MIN_CURVE_INTENSITY, MAX_CURVE_INTENSITY);
    }

    pub fn set_connection_strength(&mut self, value: i32) {
        self.connection_strength = value.clamp(0, MAX_CONNECTION_STRENGTH);
    }

    /// Replace the control points. Points are clamped and sorted, and only
    /// the first point on any given shade is kept. Fewer than two distinct
    /// shades are rejected and the current set is kept.
    pub fn set_graph_points(&mut self, points: Vec<GraphPoint>) -> bool {
        let mut points: Vec<GraphPoint> = points.into_iter().map(GraphPoint::clamped).collect();
        sort_points(&mut points);
        dedup_points(&mut points);
        if points.len() < MIN_GRAPH_POINTS {
            return false;
        }
        self.graph_points = points;
        true
    }

    /// Restore shifts, lightness bounds and ranges to their defaults.
    /// Name, base color and graph points are kept.
    pub fn reset_controls(&mut self) {
        let defaults = Self::default();
        self.hue = defaults.hue;
        self.saturation = defaults.saturation;
        self.lightness_max = defaults.lightness_max;
        self.lightness_min = defaults.lightness_min;
        self.min_range = defaults.min_range;
        self.max_range = defaults.max_range;
        self.custom_ranges = defaults.custom_ranges;
        self.use_custom_ranges = defaults.use_custom_ranges;
    }

    /// Reseed the control points from the current base color and bounds:
    /// `(min_range, lightness_max)`, `(500, base)`, `(max_range, lightness_min)`.
    pub fn reset_graph_points(&mut self) -> Result<(), PaletteError> {
        let base = hex_to_hsl(&self.base_color)?;
        let mut points = vec![
            GraphPoint::new(self.min_range as f64, self.lightness_max as f64),
            GraphPoint::new(self.max_range as f64, self.lightness_min as f64),
        ];
        if self.min_range < BASE_SHADE && BASE_SHADE < self.max_range {
            points.insert(1, GraphPoint::new(BASE_SHADE as f64, base.l as f64));
        }
        self.graph_points = points;
        Ok(())
    }
}

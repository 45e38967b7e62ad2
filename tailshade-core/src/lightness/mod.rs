//! Lightness models mapping a shade key to an HSL lightness.

pub mod curve;
pub mod linear;

pub use curve::{
    add_point, apply_point_drag, dedup_points, remove_point, CurveModel, GraphPoint,
    MIN_GRAPH_POINTS,
};
pub use linear::LinearRange;

use serde::{Deserialize, Serialize};

/// Maps a shade to a lightness percentage.
///
/// Results are not clamped here; the palette builder clamps every shade
/// except the base to the configured lightness bounds.
pub trait LightnessModel {
    fn lightness(&self, shade: f64) -> f64;
}

/// Selects which model `generate_palette` builds from a config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightnessStrategy {
    /// Linear mapping between the lightness bounds around the base color.
    Linear,
    /// Piecewise curve through the config's graph points.
    #[default]
    Curve,
}

//! Piecewise lightness curves through user-editable control points.

use super::LightnessModel;
use serde::{Deserialize, Serialize};

/// Fewest control points a curve may have.
pub const MIN_GRAPH_POINTS: usize = 2;

const SHADE_DOMAIN: (f64, f64) = (0.0, 2100.0);
const LIGHTNESS_DOMAIN: (f64, f64) = (0.0, 100.0);

/// Shade distance at which a dragged point stops influencing others.
const INFLUENCE_RADIUS: f64 = 1000.0;
const SHADE_INFLUENCE: f64 = 0.3;
const LIGHTNESS_INFLUENCE: f64 = 0.5;

/// Band new points are placed in, and the spacing of candidate positions.
const ADD_BAND: (f64, f64) = (300.0, 700.0);
const ADD_STEP: f64 = 50.0;

/// Shades closer than this count as the same position.
const SHADE_EPSILON: f64 = 1e-6;

/// A control point on the lightness curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint {
    pub shade: f64,
    pub lightness: f64,
}

impl GraphPoint {
    pub fn new(shade: f64, lightness: f64) -> Self {
        Self { shade, lightness }
    }

    /// Clamp both coordinates to their domains.
    pub fn clamped(self) -> Self {
        Self {
            shade: self.shade.clamp(SHADE_DOMAIN.0, SHADE_DOMAIN.1),
            lightness: self.lightness.clamp(LIGHTNESS_DOMAIN.0, LIGHTNESS_DOMAIN.1),
        }
    }
}

/// Sort points by shade ascending.
pub fn sort_points(points: &mut [GraphPoint]) {
    points.sort_by(|a, b| a.shade.total_cmp(&b.shade));
}

/// A piecewise curve through control points with optional easing.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveModel {
    points: Vec<GraphPoint>,
    curve_intensity: i32,
}

impl CurveModel {
    /// Points are sorted by shade. `curve_intensity` is in [-50, 50].
    pub fn new(mut points: Vec<GraphPoint>, curve_intensity: i32) -> Self {
        sort_points(&mut points);
        Self {
            points,
            curve_intensity,
        }
    }

    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    /// Evaluate the curve at `shade`. Outside the control-point range the
    /// nearest endpoint's lightness is returned.
    pub fn evaluate(&self, shade: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if shade <= first.shade {
            return first.lightness;
        }
        if shade >= last.shade {
            return last.lightness;
        }

        // Find the segment containing shade
        let mut i = 0;
        while i < self.points.len() - 2 && self.points[i + 1].shade < shade {
            i += 1;
        }

        let left = &self.points[i];
        let right = &self.points[i + 1];

        let t = if (right.shade - left.shade).abs() < 1e-10 {
            0.0
        } else {
            (shade - left.shade) / (right.shade - left.shade)
        };
        let t = apply_curve_intensity(t, self.curve_intensity);

        left.lightness + (right.lightness - left.lightness) * t
    }
}

impl LightnessModel for CurveModel {
    fn lightness(&self, shade: f64) -> f64 {
        self.evaluate(shade)
    }
}

/// Remap a segment position by the curve intensity.
///
/// Zero is linear. Positive values ease in and out with exponent `1 + i`;
/// negative values use a sine remap scaled by `0.5 + |i|`, where
/// `i = intensity / 100`.
pub fn apply_curve_intensity(t: f64, curve_intensity: i32) -> f64 {
    let i = curve_intensity as f64 / 100.0;
    if curve_intensity == 0 {
        t
    } else if curve_intensity > 0 {
        if t < 0.5 {
            2.0 * t.powf(1.0 + i)
        } else {
            1.0 - 2.0 * (1.0 - t).powf(1.0 + i)
        }
    } else {
        0.5 + ((t - 0.5) * std::f64::consts::PI).sin() * (0.5 + i.abs())
    }
}

/// Move the point at `index` to `(new_shade, new_lightness)`.
///
/// Coordinates are clamped to [0, 2100] x [0, 100]. With a non-zero
/// `connection_strength` (0..=100) every other point follows by
/// `max(0, 1 - distance / 1000) * strength / 100` of the move, where
/// distance is measured from the dragged point's old shade; shade follows
/// at 0.3x that weight and lightness at 0.5x.
///
/// If the move would put two points on the same shade, the shade part of
/// the move is dropped and only lightness changes. The result is re-sorted
/// and returned with the dragged point's new index. An out-of-range index
/// returns the points unchanged.
pub fn apply_point_drag(
    points: &[GraphPoint],
    index: usize,
    new_shade: f64,
    new_lightness: f64,
    connection_strength: i32,
) -> (Vec<GraphPoint>, usize) {
    let Some(old) = points.get(index).copied() else {
        log::debug!("Ignoring drag of missing graph point {index}");
        return (points.to_vec(), index);
    };

    let target = GraphPoint::new(new_shade, new_lightness).clamped();
    let mut result = drag_points(points, index, old, target, connection_strength);
    if has_duplicate_shades(&result) {
        log::debug!(
            "Graph point {index} would collide at shade {}, keeping shade {}",
            target.shade,
            old.shade
        );
        let target = GraphPoint::new(old.shade, target.lightness);
        result = drag_points(points, index, old, target, connection_strength);
    }

    let moved = result[index];
    sort_points(&mut result);
    let new_index = result
        .iter()
        .position(|p| p.shade == moved.shade)
        .unwrap_or(index);
    (result, new_index)
}

fn drag_points(
    points: &[GraphPoint],
    index: usize,
    old: GraphPoint,
    target: GraphPoint,
    connection_strength: i32,
) -> Vec<GraphPoint> {
    let mut result = points.to_vec();
    result[index] = target;

    if connection_strength > 0 {
        let strength = connection_strength.min(100) as f64 / 100.0;
        let shade_delta = target.shade - old.shade;
        let lightness_delta = target.lightness - old.lightness;

        for (i, point) in result.iter_mut().enumerate() {
            if i == index {
                continue;
            }
            let distance = (point.shade - old.shade).abs();
            let weight = (1.0 - distance / INFLUENCE_RADIUS).max(0.0) * strength;
            *point = GraphPoint::new(
                point.shade + shade_delta * weight * SHADE_INFLUENCE,
                point.lightness + lightness_delta * weight * LIGHTNESS_INFLUENCE,
            )
            .clamped();
        }
    }
    result
}

fn same_shade(a: f64, b: f64) -> bool {
    (a - b).abs() < SHADE_EPSILON
}

fn has_duplicate_shades(points: &[GraphPoint]) -> bool {
    let mut sorted = points.to_vec();
    sort_points(&mut sorted);
    sorted.windows(2).any(|w| same_shade(w[0].shade, w[1].shade))
}

/// Drop points sharing a shade with the point before them. Expects sorted input.
pub fn dedup_points(points: &mut Vec<GraphPoint>) {
    points.dedup_by(|b, a| same_shade(a.shade, b.shade));
}

/// Insert a point in the [300, 700) band, on the free 50-step position
/// farthest from existing points, with lightness sampled from the current
/// curve. Returns `None` when every position in the band is taken.
pub fn add_point(points: &[GraphPoint], curve_intensity: i32) -> Option<Vec<GraphPoint>> {
    let curve = CurveModel::new(points.to_vec(), curve_intensity);

    let mut best: Option<(f64, f64)> = None;
    let mut candidate = ADD_BAND.0;
    while candidate < ADD_BAND.1 {
        let gap = points
            .iter()
            .map(|p| (p.shade - candidate).abs())
            .fold(f64::INFINITY, f64::min);
        let free = gap >= SHADE_EPSILON;
        if free && best.map_or(true, |(_, best_gap)| gap > best_gap) {
            best = Some((candidate, gap));
        }
        candidate += ADD_STEP;
    }

    let Some((shade, _)) = best else {
        log::debug!("No free shade in [300, 700) for a new graph point");
        return None;
    };

    let mut result = curve.points().to_vec();
    result.push(GraphPoint::new(shade, curve.evaluate(shade)));
    sort_points(&mut result);
    Some(result)
}

/// Remove the point at `index`. Returns `None` if that would leave fewer
/// than [`MIN_GRAPH_POINTS`] points or the index is out of range.
pub fn remove_point(points: &[GraphPoint], index: usize) -> Option<Vec<GraphPoint>> {
    if points.len() <= MIN_GRAPH_POINTS || index >= points.len() {
        return None;
    }
    let mut result = points.to_vec();
    result.remove(index);
    Some(result)
}

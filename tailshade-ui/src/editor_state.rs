//! State management for the palette editor.

use crate::css::css_variables;
use tailshade_core::{
    add_point, apply_point_drag, decode, encode, generate_palette, remove_point,
    LightnessStrategy, PaletteConfig, PaletteEntry, PaletteError,
};

/// State for an active palette editing session.
///
/// The palette is never cached: every read regenerates it from
/// `working_config`.
#[derive(Clone, Debug)]
pub struct PaletteEditorState {
    /// Snapshot at open or last commit (for revert and dirty check)
    pub source_config: PaletteConfig,
    /// Live edits
    pub working_config: PaletteConfig,
    /// Which lightness model drives generation
    pub strategy: LightnessStrategy,
    /// Index of the control point under an active drag
    dragging: Option<usize>,
}

impl Default for PaletteEditorState {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}

impl PaletteEditorState {
    pub fn new(config: PaletteConfig) -> Self {
        Self {
            source_config: config.clone(),
            working_config: config,
            strategy: LightnessStrategy::default(),
            dragging: None,
        }
    }

    /// Check if there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.working_config != self.source_config
    }

    /// Discard edits since the last commit.
    pub fn revert(&mut self) {
        self.dragging = None;
        self.working_config = self.source_config.clone();
    }

    /// Make the working config the new baseline.
    pub fn commit(&mut self) {
        self.source_config = self.working_config.clone();
    }

    pub fn palette(&self) -> Result<Vec<PaletteEntry>, PaletteError> {
        generate_palette(&self.working_config, self.strategy)
    }

    pub fn css(&self) -> Result<String, PaletteError> {
        Ok(css_variables(&self.working_config.name, &self.palette()?))
    }

    pub fn export_json(&self, include_config: bool) -> Result<String, PaletteError> {
        encode(&self.working_config, self.strategy, include_config)
    }

    /// Load a saved document into the working config. On error the working
    /// config is left exactly as it was.
    pub fn import_json(&mut self, json: &str) -> Result<(), PaletteError> {
        match decode(json, &self.working_config) {
            Ok(config) => {
                log::info!("Loaded palette config: {}", config.name);
                self.dragging = None;
                self.working_config = config;
                Ok(())
            }
            Err(e) => {
                log::warn!("Failed to load palette config: {}", e);
                Err(e)
            }
        }
    }

    /// Move a control point, dragging neighbours by the connection strength.
    /// Returns the point's index after the points are re-sorted.
    pub fn drag_point(&mut self, index: usize, shade: f64, lightness: f64) -> usize {
        let config = &mut self.working_config;
        let (points, new_index) = apply_point_drag(
            &config.graph_points,
            index,
            shade,
            lightness,
            config.connection_strength,
        );
        config.graph_points = points;
        new_index
    }

    /// Start dragging the point at `index`. Returns false for a bad index.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.working_config.graph_points.len() {
            return false;
        }
        self.dragging = Some(index);
        true
    }

    /// Move the point grabbed by `begin_drag`, following it if it passes a
    /// neighbour. Returns its current index, or `None` with no active drag.
    pub fn drag_to(&mut self, shade: f64, lightness: f64) -> Option<usize> {
        let index = self.dragging?;
        let new_index = self.drag_point(index, shade, lightness);
        self.dragging = Some(new_index);
        Some(new_index)
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    /// Returns false if there is no free shade left to place a point on.
    pub fn add_point(&mut self) -> bool {
        let config = &mut self.working_config;
        match add_point(&config.graph_points, config.curve_intensity) {
            Some(points) => {
                config.graph_points = points;
                self.dragging = None;
                true
            }
            None => false,
        }
    }

    /// Returns false if the curve is already at its minimum point count.
    pub fn remove_point(&mut self, index: usize) -> bool {
        match remove_point(&self.working_config.graph_points, index) {
            Some(points) => {
                self.working_config.graph_points = points;
                self.dragging = None;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tailshade_core::GraphPoint;

    #[test]
    fn not_dirty_initially() {
        let state = PaletteEditorState::default();
        assert!(!state.is_dirty());
    }

    #[test]
    fn dirty_after_change_and_clean_after_revert() {
        let mut state = PaletteEditorState::default();
        state.working_config.set_hue(20);
        assert!(state.is_dirty());
        state.revert();
        assert!(!state.is_dirty());
        assert_eq!(state.working_config.hue, 0);
    }

    #[test]
    fn commit_sets_new_baseline() {
        let mut state = PaletteEditorState::default();
        state.working_config.set_saturation(15);
        state.commit();
        assert!(!state.is_dirty());
        assert_eq!(state.source_config.saturation, 15);
    }

    #[test]
    fn failed_import_keeps_working_config() {
        let mut state = PaletteEditorState::default();
        state.working_config.set_hue(33);
        let before = state.working_config.clone();
        assert!(state.import_json("not json").is_err());
        assert_eq!(state.working_config, before);
    }

    #[test]
    fn export_then_import_restores_edits() {
        let mut state = PaletteEditorState::default();
        state.working_config.set_hue(-45);
        state.drag_point(0, 80.0, 90.0);
        let json = state.export_json(true).unwrap();

        let mut other = PaletteEditorState::default();
        other.import_json(&json).unwrap();
        assert_eq!(other.working_config, state.working_config);
        assert!(other.is_dirty());
    }

    #[test]
    fn point_editing_respects_minimum() {
        let mut state = PaletteEditorState::default();
        assert!(state.add_point());
        assert_eq!(state.working_config.graph_points.len(), 4);
        assert!(state.remove_point(0));
        assert!(state.remove_point(0));
        assert!(!state.remove_point(0));
        assert_eq!(state.working_config.graph_points.len(), 2);
    }

    #[test]
    fn drag_follows_point_past_neighbour() {
        let mut state = PaletteEditorState::default();
        state.working_config.set_connection_strength(0);
        assert!(state.begin_drag(1));
        assert_eq!(state.drag_to(1000.0, 40.0), Some(2));
        assert_eq!(state.drag_to(1050.0, 30.0), Some(2));
        state.end_drag();

        assert_eq!(
            state.working_config.graph_points,
            vec![
                GraphPoint::new(50.0, 95.0),
                GraphPoint::new(950.0, 5.0),
                GraphPoint::new(1050.0, 30.0),
            ]
        );
        assert_eq!(state.drag_to(0.0, 0.0), None);
    }

    #[test]
    fn begin_drag_rejects_missing_point() {
        let mut state = PaletteEditorState::default();
        assert!(!state.begin_drag(3));
        assert_eq!(state.dragging(), None);
    }

    #[test]
    fn css_uses_color_name() {
        let state = PaletteEditorState::default();
        let css = state.css().unwrap();
        assert!(css.contains("  --color-navy-500: #1E4BCD;"));
        assert_eq!(css.lines().count(), 19);
    }
}

//! Browser bindings. Values cross the boundary as JSON strings.

use crate::editor_state::PaletteEditorState;
use tailshade_core::{LightnessStrategy, PaletteError};
use wasm_bindgen::prelude::*;

fn to_js(err: PaletteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// One palette editing session owned by the page.
#[wasm_bindgen]
pub struct PaletteSession {
    state: PaletteEditorState,
}

impl Default for PaletteSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PaletteSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: PaletteEditorState::default(),
        }
    }

    /// Generated palette as a JSON array of `{shade, color, lightness}`.
    pub fn palette_json(&self) -> Result<String, JsValue> {
        let palette = self.state.palette().map_err(to_js)?;
        serde_json::to_string(&palette).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn css(&self) -> Result<String, JsValue> {
        self.state.css().map_err(to_js)
    }

    pub fn export_json(&self, include_config: bool) -> Result<String, JsValue> {
        self.state.export_json(include_config).map_err(to_js)
    }

    pub fn import_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.state.import_json(json).map_err(to_js)
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn set_use_curve(&mut self, use_curve: bool) {
        self.state.strategy = if use_curve {
            LightnessStrategy::Curve
        } else {
            LightnessStrategy::Linear
        };
    }

    pub fn set_name(&mut self, name: String) {
        self.state.working_config.name = name;
    }

    pub fn set_base_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.state.working_config.set_base_color(color).map_err(to_js)
    }

    pub fn set_min_range(&mut self, value: i32) {
        self.state.working_config.set_min_range(value as i64);
    }

    pub fn set_max_range(&mut self, value: i32) {
        self.state.working_config.set_max_range(value as i64);
    }

    pub fn set_custom_ranges(&mut self, value: String) {
        self.state.working_config.set_custom_ranges(value);
    }

    pub fn set_use_custom_ranges(&mut self, value: bool) {
        self.state.working_config.use_custom_ranges = value;
    }

    pub fn set_hue(&mut self, value: i32) {
        self.state.working_config.set_hue(value);
    }

    pub fn set_saturation(&mut self, value: i32) {
        self.state.working_config.set_saturation(value);
    }

    pub fn set_lightness_max(&mut self, value: i32) {
        self.state.working_config.set_lightness_max(value);
    }

    pub fn set_lightness_min(&mut self, value: i32) {
        self.state.working_config.set_lightness_min(value);
    }

    pub fn set_perceived(&mut self, value: bool) {
        self.state.working_config.is_perceived = value;
    }

    pub fn set_curve_intensity(&mut self, value: i32) {
        self.state.working_config.set_curve_intensity(value);
    }

    pub fn set_connection_strength(&mut self, value: i32) {
        self.state.working_config.set_connection_strength(value);
    }

    /// Returns the dragged point's index after re-sorting.
    pub fn drag_point(&mut self, index: usize, shade: f64, lightness: f64) -> usize {
        self.state.drag_point(index, shade, lightness)
    }

    pub fn begin_drag(&mut self, index: usize) -> bool {
        self.state.begin_drag(index)
    }

    /// Returns the dragged point's current index, or undefined with no active drag.
    pub fn drag_to(&mut self, shade: f64, lightness: f64) -> Option<usize> {
        self.state.drag_to(shade, lightness)
    }

    pub fn end_drag(&mut self) {
        self.state.end_drag();
    }

    pub fn add_point(&mut self) -> bool {
        self.state.add_point()
    }

    pub fn remove_point(&mut self, index: usize) -> bool {
        self.state.remove_point(index)
    }

    pub fn reset_controls(&mut self) {
        self.state.working_config.reset_controls();
    }

    pub fn reset_graph_points(&mut self) -> Result<(), JsValue> {
        self.state.working_config.reset_graph_points().map_err(to_js)
    }
}

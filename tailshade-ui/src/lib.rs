//! Editor session state, CSS export and browser bindings for tailshade.

pub mod css;
pub mod editor_state;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use css::css_variables;
pub use editor_state::PaletteEditorState;

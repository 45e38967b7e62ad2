//! CSS custom property export.

use tailshade_core::PaletteEntry;

/// Render a palette as CSS custom properties, one per line:
/// `  --color-<name>-<shade>: <color>;`
pub fn css_variables(name: &str, palette: &[PaletteEntry]) -> String {
    palette
        .iter()
        .map(|entry| format!("  --color-{}-{}: {};", name, entry.shade, entry.color))
        .collect::<Vec<_>>()
        .join("\n")
}

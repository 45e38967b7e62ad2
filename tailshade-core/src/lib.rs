//! Tailwind-style color palette generation from a single base color.

pub mod codec;
pub mod color_space;
pub mod config;
pub mod error;
pub mod lightness;
pub mod palette;
pub mod shades;

pub use codec::{decode, encode, to_document, ConfigSection, PaletteDocument};
pub use color_space::{hex_to_hsl, hsl_to_hex, is_valid_hex, Hsl, Rgb};
pub use config::PaletteConfig;
pub use error::PaletteError;
pub use lightness::{
    add_point, apply_point_drag, dedup_points, remove_point, CurveModel, GraphPoint,
    LightnessModel, LightnessStrategy, LinearRange,
};
pub use palette::{generate_palette, generate_palette_with, PaletteEntry};
pub use shades::{ShadeKey, ShadeSchedule, BASE_SHADE, DEFAULT_SHADES};

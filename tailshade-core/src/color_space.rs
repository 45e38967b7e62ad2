//! Hex/HSL conversions used by palette generation.
//!
//! HSL components are percentages and degrees: hue in [0, 360), saturation
//! and lightness in [0, 100]. `hex_to_hsl` rounds to whole numbers;
//! `hsl_to_hex` accepts fractional input so interpolated lightness survives
//! until the final channel rounding.

use crate::PaletteError;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (either case). Anything else is rejected.
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let invalid = || PaletteError::InvalidColorFormat(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Whole-number HSL triple as produced by [`hex_to_hsl`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

/// Returns true if `hex` is a well-formed `#RRGGBB` color.
pub fn is_valid_hex(hex: &str) -> bool {
    Rgb::from_hex(hex).is_ok()
}

/// Convert `#RRGGBB` to HSL.
///
/// Achromatic input (r == g == b) yields hue 0 and saturation 0. Hue is
/// always in [0, 360).
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, PaletteError> {
    let rgb = Rgb::from_hex(hex)?;
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Ok(Hsl {
        h: ((h * 360.0).round() as i32).rem_euclid(360),
        s: (s * 100.0).round() as i32,
        l: (l * 100.0).round() as i32,
    })
}

/// Convert HSL to lowercase `#rrggbb`.
///
/// `h` is reduced modulo 360 but not made non-negative; callers normalize
/// negative hues first. `s` and `l` are clamped to [0, 100].
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Convert HSL to RGB using the chroma / intermediate / match decomposition.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h % 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    // Negative hues match no sector and fall through to grey.
    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        h if (300.0..360.0).contains(&h) => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    let to_channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

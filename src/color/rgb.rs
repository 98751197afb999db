//! Hex conversion and channel arithmetic on 8-bit RGB values
//!
//! The crate works exclusively in 8-bit sRGB; every channel value leaving
//! these helpers is already inside `[0, 255]`, so hex serialization can
//! never emit an out-of-range component.

use palette::Srgb;

use crate::{PaletteError, Result};

/// Parse a `#RRGGBB` / `RRGGBB` string into an 8-bit RGB color
///
/// Accepts upper- or lowercase digits and an optional leading `#`.
///
/// # Errors
///
/// Returns `PaletteError::InvalidColorFormat` if the string is not six
/// hex digits after the optional `#`.
pub fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(PaletteError::invalid_color(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| PaletteError::invalid_color(hex, e.to_string()))
    };

    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Serialize an 8-bit RGB color as lowercase `#rrggbb`
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Mean brightness of a color, `(r + g + b) / 3` with integer rounding
pub fn brightness(color: Srgb<u8>) -> u8 {
    let sum = color.red as u16 + color.green as u16 + color.blue as u16;
    (sum / 3) as u8
}

/// Euclidean distance between two colors in RGB space
pub fn distance(a: Srgb<u8>, b: Srgb<u8>) -> f32 {
    let dr = a.red as f32 - b.red as f32;
    let dg = a.green as f32 - b.green as f32;
    let db = a.blue as f32 - b.blue as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Snap each channel to the nearest multiple of `bucket_width`
///
/// Channels near 255 can round to the next multiple above 255; those are
/// clamped back so the bucket stays a valid color.
pub fn quantize(color: Srgb<u8>, bucket_width: u8) -> Srgb<u8> {
    let snap = |c: u8| {
        let width = bucket_width as f32;
        let snapped = (c as f32 / width).round() * width;
        snapped.min(255.0) as u8
    };
    Srgb::new(snap(color.red), snap(color.green), snap(color.blue))
}

/// Add `offset` to each channel, saturating at 255
pub fn lighten_clamped(color: Srgb<u8>, offset: u8) -> Srgb<u8> {
    Srgb::new(
        color.red.saturating_add(offset),
        color.green.saturating_add(offset),
        color.blue.saturating_add(offset),
    )
}

//! Shade palette derivation
//!
//! Expands a single brand color into the 11-step lightness scale the
//! storefront themes against (`50` lightest .. `950` darkest, `500` the
//! brand color itself). The scale is fixed; both the primary and the
//! secondary brand color go through the same table.

use serde::{Deserialize, Serialize};

use crate::color::rgb::{parse_hex, to_hex};
use crate::constants::shades;
use crate::Result;

/// Brightness adjustment per shade level
///
/// Positive amounts lighten toward white asymptotically, negative amounts
/// scale toward black; `500` is the untouched base.
const SHADE_TABLE: [(u16, f32); 11] = [
    (50, 0.95),
    (100, 0.90),
    (200, 0.80),
    (300, 0.60),
    (400, 0.30),
    (500, 0.0),
    (600, -0.10),
    (700, -0.20),
    (800, -0.30),
    (900, -0.40),
    (950, -0.50),
];

/// One shade of a derived palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeEntry {
    /// Shade level (`50`..`950`)
    pub level: u16,
    /// Hex color for this level
    pub hex: String,
}

/// An 11-entry lightness palette derived from one base color
///
/// Entries are ordered lightest to darkest and never change after
/// construction. Level `500` always reproduces the base color verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadePalette {
    entries: Vec<ShadeEntry>,
}

impl ShadePalette {
    /// Hex color for a shade level, if the level exists
    pub fn get(&self, level: u16) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.level == level)
            .map(|entry| entry.hex.as_str())
    }

    /// The base color (level `500`)
    pub fn base(&self) -> &str {
        // The constructor always emits the full table, so 500 is present.
        self.get(shades::BASE_LEVEL).unwrap_or_default()
    }

    /// Entries in order, lightest to darkest
    pub fn iter(&self) -> impl Iterator<Item = &ShadeEntry> {
        self.entries.iter()
    }

    /// Number of shade levels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the palette has no entries (never the case for generated
    /// palettes, but `Deserialize` can produce one)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Palette generator applying the fixed shade table
pub struct PaletteGenerator;

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator {
    /// Create a palette generator
    pub fn new() -> Self {
        Self
    }

    /// Derive the 11-step shade palette for `base`
    ///
    /// Level `500` carries `base` byte-for-byte; every other level is the
    /// base with its brightness adjusted per the fixed table.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidColorFormat` for malformed hex. The
    /// extractor only emits well-formed colors, so hitting this from the
    /// normal pipeline indicates an upstream bug rather than bad user
    /// data; no default is substituted.
    pub fn generate(&self, base: &str) -> Result<ShadePalette> {
        // Validate up front so level 500 can take the string verbatim.
        parse_hex(base)?;

        let mut entries = Vec::with_capacity(SHADE_TABLE.len());
        for (level, amount) in SHADE_TABLE {
            let hex = if level == shades::BASE_LEVEL {
                base.to_string()
            } else {
                adjust_brightness(base, amount)?
            };
            entries.push(ShadeEntry { level, hex });
        }

        Ok(ShadePalette { entries })
    }
}

/// Lighten or darken a hex color by `amount`
///
/// Positive amounts move each channel toward 255 proportionally to its
/// remaining headroom (`c + (255 - c) * amount`), so lightening can
/// approach but never pass white. Non-positive amounts scale each channel
/// toward zero (`c * (1 + amount)`). Channels are clamped to `[0, 255]`
/// and rounded before re-serialization.
///
/// The output keeps the presence or absence of the input's leading `#`
/// and is otherwise normalized to lowercase.
///
/// # Errors
///
/// Returns `PaletteError::InvalidColorFormat` for malformed hex.
pub fn adjust_brightness(hex: &str, amount: f32) -> Result<String> {
    let color = parse_hex(hex)?;

    let adjust = |c: u8| {
        let c = c as f32;
        let adjusted = if amount > 0.0 {
            c + (255.0 - c) * amount
        } else {
            c * (1.0 + amount)
        };
        adjusted.clamp(0.0, 255.0).round() as u8
    };

    let out = to_hex(palette::Srgb::new(
        adjust(color.red),
        adjust(color.green),
        adjust(color.blue),
    ));

    if hex.starts_with('#') {
        Ok(out)
    } else {
        Ok(out.trim_start_matches('#').to_string())
    }
}

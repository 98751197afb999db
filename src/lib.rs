//! # Brand Palette
//!
//! A Rust crate for deriving storefront brand colors from tenant logo
//! images.
//!
//! This library provides deterministic brand theming by:
//! - Sampling decoded RGBA pixels with a fixed stride
//! - Clustering samples in a quantized color histogram
//! - Selecting a dominant primary and a contrasting secondary color
//! - Expanding each base color into an 11-step lightness palette
//!
//! Image decoding, persistence of the chosen colors, and applying the
//! theme to a UI are collaborators' concerns; this crate is pure
//! computation over already-decoded pixels.
//!
//! ## Example
//!
//! ```rust
//! use brand_palette::{derive_brand_theme, PixelBuffer};
//!
//! let pixels: Vec<u8> = [180u8, 70, 40, 255].repeat(64);
//! let buffer = PixelBuffer::new(&pixels, 8, 8)?;
//!
//! let theme = derive_brand_theme(&buffer)?;
//! assert_eq!(theme.primary, theme.primary_shades.base());
//! # Ok::<(), brand_palette::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod pixels;
pub mod shades;

pub use config::ExtractionConfig;
pub use error::{PaletteError, Result};
pub use extraction::{ColorExtractor, ExtractedColors};
pub use pixels::PixelBuffer;
pub use shades::{PaletteGenerator, ShadeEntry, ShadePalette};

/// Complete brand theme for one tenant
///
/// Both base colors plus their derived shade palettes — everything the
/// settings-save workflow persists and the theming layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTheme {
    /// Dominant logo color as `#rrggbb`
    pub primary: String,
    /// Contrasting logo color as `#rrggbb`
    pub secondary: String,
    /// 11-step palette derived from the primary
    pub primary_shades: ShadePalette,
    /// 11-step palette derived from the secondary
    pub secondary_shades: ShadePalette,
}

impl BrandTheme {
    /// CSS custom-property pairs for the theming layer
    ///
    /// Yields `(name, hex)` pairs of the form
    /// `--{prefix}-primary-500` / `--{prefix}-secondary-50`, one per
    /// shade, in palette order.
    pub fn css_variables(&self, prefix: &str) -> Vec<(String, String)> {
        let roles = [
            ("primary", &self.primary_shades),
            ("secondary", &self.secondary_shades),
        ];
        let mut vars = Vec::with_capacity(self.primary_shades.len() + self.secondary_shades.len());
        for (role, palette) in roles {
            for entry in palette.iter() {
                vars.push((
                    format!("--{prefix}-{role}-{}", entry.level),
                    entry.hex.clone(),
                ));
            }
        }
        vars
    }
}

/// Derive a full brand theme from a decoded logo image
///
/// This is the main entry point: it extracts the primary/secondary pair
/// and expands both into shade palettes.
///
/// # Arguments
///
/// * `pixels` - Decoded RGBA view of the (ideally downsampled) logo
///
/// # Returns
///
/// A `BrandTheme` with both base colors and both palettes
///
/// # Errors
///
/// Extraction itself cannot fail — degenerate images yield the fallback
/// brand colors. The `Result` exists because palette generation validates
/// its input hex; with extractor output that validation always passes.
pub fn derive_brand_theme(pixels: &PixelBuffer<'_>) -> Result<BrandTheme> {
    let colors = ColorExtractor::new().extract(pixels);
    let generator = PaletteGenerator::new();
    let primary_shades = generator.generate(&colors.primary)?;
    let secondary_shades = generator.generate(&colors.secondary)?;

    Ok(BrandTheme {
        primary: colors.primary,
        secondary: colors.secondary,
        primary_shades,
        secondary_shades,
    })
}

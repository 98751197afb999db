//! Extraction configuration
//!
//! All tunable parameters of the extraction engine in one serializable
//! struct. Defaults mirror the values in [`crate::constants`]; tenants
//! that need different behavior (e.g. a denser sampling stride for tiny
//! logos) can load overrides from JSON.
//!
//! ```no_run
//! use brand_palette::ExtractionConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ExtractionConfig::from_json_file(Path::new("extraction.json"))?;
//!
//! // Or use defaults
//! let config = ExtractionConfig::default();
//! # Ok::<(), brand_palette::PaletteError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{candidacy, fallback, quantization, sampling, secondary};
use crate::{PaletteError, Result};

/// Tunable parameters for [`ColorExtractor`](crate::ColorExtractor)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Pixels advanced between samples (1 = inspect every pixel)
    pub sample_stride: usize,

    /// Quantization bucket width per channel
    pub bucket_width: u8,

    /// Samples below this alpha are skipped entirely
    pub min_alpha: u8,

    /// Brightness above which a sample cannot become the primary
    pub max_candidate_brightness: u8,

    /// Brightness below which a sample cannot become the primary
    pub min_candidate_brightness: u8,

    /// Minimum RGB distance from the primary for secondary candidates
    pub min_secondary_distance: f32,

    /// Minimum count as a fraction of the primary's count for secondary
    /// candidates
    pub secondary_count_ratio: f64,

    /// Per-channel lightening used when no contrasting bucket exists
    pub monochrome_lighten_offset: u8,

    /// Primary color returned for degenerate buffers
    pub fallback_primary: String,

    /// Secondary color returned for degenerate buffers
    pub fallback_secondary: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_stride: sampling::PIXEL_STRIDE,
            bucket_width: quantization::BUCKET_WIDTH,
            min_alpha: candidacy::MIN_ALPHA,
            max_candidate_brightness: candidacy::MAX_BRIGHTNESS,
            min_candidate_brightness: candidacy::MIN_BRIGHTNESS,
            min_secondary_distance: secondary::MIN_DISTANCE,
            secondary_count_ratio: secondary::MIN_COUNT_RATIO,
            monochrome_lighten_offset: secondary::MONOCHROME_LIGHTEN_OFFSET,
            fallback_primary: fallback::PRIMARY_HEX.to_string(),
            fallback_secondary: fallback::SECONDARY_HEX.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Check that all parameters are usable
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidParameter` for the first value that
    /// would make extraction meaningless (zero stride or bucket width,
    /// out-of-range ratios, inverted brightness bounds) and
    /// `InvalidColorFormat` for malformed fallback colors.
    pub fn validate(&self) -> Result<()> {
        if self.sample_stride == 0 {
            return Err(invalid("sample_stride", self.sample_stride));
        }
        if self.bucket_width == 0 {
            return Err(invalid("bucket_width", self.bucket_width));
        }
        if self.min_candidate_brightness >= self.max_candidate_brightness {
            return Err(invalid(
                "min_candidate_brightness",
                self.min_candidate_brightness,
            ));
        }
        if self.min_secondary_distance < 0.0 {
            return Err(invalid(
                "min_secondary_distance",
                self.min_secondary_distance,
            ));
        }
        if !(0.0..=1.0).contains(&self.secondary_count_ratio) {
            return Err(invalid("secondary_count_ratio", self.secondary_count_ratio));
        }
        crate::color::rgb::parse_hex(&self.fallback_primary)?;
        crate::color::rgb::parse_hex(&self.fallback_secondary)?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::config(format!("failed to read {}", path.display()), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PaletteError::config(format!("failed to parse {}", path.display()), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PaletteError::config("failed to serialize config", e))?;
        std::fs::write(path, json)
            .map_err(|e| PaletteError::config(format!("failed to write {}", path.display()), e))?;
        Ok(())
    }
}

fn invalid(parameter: &str, value: impl std::fmt::Display) -> PaletteError {
    PaletteError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
    }
}

//! Dominant and secondary brand color extraction
//!
//! Extracts two brand colors from a decoded logo image:
//! - Strided pixel sampling with alpha filtering
//! - Quantized-histogram clustering for the dominant color
//! - Distance-thresholded second pass for a contrasting color
//! - Deterministic fallbacks for degenerate uploads
//!
//! Extraction is total: user-supplied images must never break the
//! theming pipeline, so every edge case degrades to a documented
//! fallback instead of an error.

use log::debug;
use palette::Srgb;

use crate::color::rgb::{brightness, distance, lighten_clamped, quantize, to_hex};
use crate::color::ColorHistogram;
use crate::{ExtractionConfig, PixelBuffer};

/// Extracted brand color pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedColors {
    /// Dominant color as `#rrggbb`
    pub primary: String,
    /// Contrasting color as `#rrggbb`
    pub secondary: String,
}

/// Color extractor implementing quantized-histogram clustering
pub struct ColorExtractor {
    config: ExtractionConfig,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorExtractor {
    /// Create an extractor with default parameters
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Create an extractor with custom parameters
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Current parameters
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract the dominant and a contrasting color from a logo image
    ///
    /// Pure function of the buffer contents: identical input bytes yield
    /// identical output, and repeated calls share no state.
    ///
    /// Degenerate input (zero-pixel buffer, or nothing opaque enough to
    /// sample) yields the configured fallback pair; an image whose every
    /// sample is near-white or near-black yields a pure black primary.
    pub fn extract(&self, pixels: &PixelBuffer<'_>) -> ExtractedColors {
        if pixels.is_degenerate() {
            debug!("degenerate {}x{} buffer, using fallback colors", pixels.width(), pixels.height());
            return self.fallback_pair();
        }

        // Step 1: strided scan, histogram build, dominant tracking.
        // Near-white/near-black samples are counted in the histogram but
        // never become the primary; the asymmetry keeps light backgrounds
        // available to the secondary pass below.
        let mut histogram = ColorHistogram::new();
        let mut max_count = 0u32;
        let mut primary: Option<Srgb<u8>> = None;

        for sample in pixels.samples(self.config.sample_stride) {
            if sample.alpha < self.config.min_alpha {
                continue;
            }

            let bucket = quantize(sample.rgb, self.config.bucket_width);
            let count = histogram.record(bucket);

            let level = brightness(sample.rgb);
            if level > self.config.max_candidate_brightness
                || level < self.config.min_candidate_brightness
            {
                continue;
            }
            // Strict improvement only: first-seen wins on ties, and the
            // row-major scan order makes that deterministic.
            if count > max_count {
                max_count = count;
                primary = Some(bucket);
            }
        }

        if histogram.is_empty() {
            debug!("no opaque samples in {}x{} buffer, using fallback colors", pixels.width(), pixels.height());
            return self.fallback_pair();
        }

        // Step 2: dominant fallback. Samples existed but all were too
        // bright or too dark to qualify.
        let primary_rgb = primary.unwrap_or(Srgb::new(0, 0, 0));

        // Step 3: secondary pass over the same histogram.
        let secondary_rgb = self.select_secondary(&histogram, primary_rgb, max_count);

        debug!(
            "extracted primary {} / secondary {} from {} buckets",
            to_hex(primary_rgb),
            to_hex(secondary_rgb),
            histogram.len()
        );

        ExtractedColors {
            primary: to_hex(primary_rgb),
            secondary: to_hex(secondary_rgb),
        }
    }

    /// Pick the most common bucket that contrasts with the primary
    ///
    /// A bucket competes if its count is at least `secondary_count_ratio`
    /// of the primary's and it sits farther than `min_secondary_distance`
    /// from the primary in RGB space. Monochrome images have no such
    /// bucket; they get a lightened primary instead.
    fn select_secondary(
        &self,
        histogram: &ColorHistogram,
        primary_rgb: Srgb<u8>,
        max_count: u32,
    ) -> Srgb<u8> {
        let count_floor = self.config.secondary_count_ratio * max_count as f64;
        let mut max_sec_count = 0u32;
        let mut secondary: Option<Srgb<u8>> = None;

        for (bucket, count) in histogram.iter() {
            if (count as f64) < count_floor {
                continue;
            }
            if distance(bucket, primary_rgb) <= self.config.min_secondary_distance {
                continue;
            }
            if count > max_sec_count {
                max_sec_count = count;
                secondary = Some(bucket);
            }
        }

        secondary.unwrap_or_else(|| {
            lighten_clamped(primary_rgb, self.config.monochrome_lighten_offset)
        })
    }

    fn fallback_pair(&self) -> ExtractedColors {
        ExtractedColors {
            primary: self.config.fallback_primary.clone(),
            secondary: self.config.fallback_secondary.clone(),
        }
    }
}

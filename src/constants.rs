//! Tuning constants for color extraction and shade derivation
//!
//! These values were settled empirically against a corpus of tenant logo
//! uploads; they are exposed here (and through [`ExtractionConfig`]) so
//! behavior changes are explicit rather than buried in the algorithm.
//!
//! [`ExtractionConfig`]: crate::ExtractionConfig

/// Pixel sampling parameters
pub mod sampling {
    /// Advance this many pixels between samples (4x this in flat RGBA bytes).
    ///
    /// Sampling every 10th pixel keeps extraction in the microsecond range
    /// for downsampled logos while still covering the whole buffer.
    pub const PIXEL_STRIDE: usize = 10;

    /// Recommended long-edge cap for buffers handed to the extractor.
    ///
    /// Performance hint for the decoding collaborator, not a requirement;
    /// the extractor accepts any dimensions.
    pub const RECOMMENDED_MAX_EDGE: u32 = 200;
}

/// Channel quantization parameters
pub mod quantization {
    /// Histogram bucket width per channel.
    ///
    /// Each channel is snapped to the nearest multiple of this value
    /// before counting, so small gradients and JPEG noise collapse into
    /// one bucket (13 buckets per channel at width 20).
    pub const BUCKET_WIDTH: u8 = 20;
}

/// Filters applied when selecting the dominant-color candidate
pub mod candidacy {
    /// Samples with alpha below this are treated as background and
    /// excluded from both the histogram and candidacy.
    pub const MIN_ALPHA: u8 = 128;

    /// Samples with mean brightness above this are near-white; they stay
    /// in the histogram but cannot become the primary color.
    pub const MAX_BRIGHTNESS: u8 = 240;

    /// Samples with mean brightness below this are near-black; they stay
    /// in the histogram but cannot become the primary color.
    pub const MIN_BRIGHTNESS: u8 = 15;
}

/// Secondary (contrast) color selection
pub mod secondary {
    /// Minimum Euclidean RGB distance from the primary for a bucket to
    /// count as a contrasting color.
    pub const MIN_DISTANCE: f32 = 60.0;

    /// A bucket must hold at least this fraction of the primary's count
    /// to be considered.
    pub const MIN_COUNT_RATIO: f64 = 0.1;

    /// Per-channel lightening applied to the primary when no contrasting
    /// bucket exists (monochrome logos).
    pub const MONOCHROME_LIGHTEN_OFFSET: u8 = 40;
}

/// Deterministic fallback brand colors
///
/// Returned when the buffer is degenerate (zero pixels or nothing opaque
/// enough to sample). Logo uploads are user-controlled, so extraction
/// degrades to these rather than failing the theming pipeline.
pub mod fallback {
    /// Warm terracotta
    pub const PRIMARY_HEX: &str = "#c96f4a";

    /// Light sand
    pub const SECONDARY_HEX: &str = "#f3e9dc";
}

/// Shade scale definition
pub mod shades {
    /// Shade levels in display order, lightest to darkest.
    pub const LEVELS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

    /// Level at which the palette reproduces the base color verbatim.
    pub const BASE_LEVEL: u16 = 500;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidacy_thresholds_ordered() {
        assert!(candidacy::MIN_BRIGHTNESS < candidacy::MAX_BRIGHTNESS);
    }

    #[test]
    fn test_secondary_thresholds_sane() {
        assert!(secondary::MIN_DISTANCE > 0.0);
        assert!(secondary::MIN_COUNT_RATIO > 0.0 && secondary::MIN_COUNT_RATIO < 1.0);
    }

    #[test]
    fn test_shade_levels_ascending() {
        assert!(shades::LEVELS.windows(2).all(|w| w[0] < w[1]));
        assert!(shades::LEVELS.contains(&shades::BASE_LEVEL));
    }

    #[test]
    fn test_fallback_colors_well_formed() {
        for hex in [fallback::PRIMARY_HEX, fallback::SECONDARY_HEX] {
            assert!(hex.starts_with('#'));
            assert_eq!(hex.len(), 7);
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}

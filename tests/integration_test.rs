//! Integration tests for the complete brand theming pipeline
//!
//! These tests validate the end-to-end workflow including:
//! - Color extraction from synthetic logo buffers
//! - Degenerate input handling (transparent, near-white, empty)
//! - Shade palette derivation and its ordering guarantees
//! - Determinism of the whole pipeline
//! - Serialization of the resulting theme

use brand_palette::shades::adjust_brightness;
use brand_palette::{
    derive_brand_theme, ColorExtractor, ExtractionConfig, PaletteError, PaletteGenerator,
    PixelBuffer,
};

/// Build a flat RGBA buffer from (pixel_count, rgba) runs
fn buffer_of_runs(runs: &[(usize, [u8; 4])]) -> Vec<u8> {
    let mut data = Vec::new();
    for &(count, rgba) in runs {
        for _ in 0..count {
            data.extend_from_slice(&rgba);
        }
    }
    data
}

fn parse_channels(hex: &str) -> (u8, u8, u8) {
    let digits = hex.strip_prefix('#').expect("hex should carry a hash");
    assert_eq!(digits.len(), 6, "hex {hex} should be 6 digits");
    (
        u8::from_str_radix(&digits[0..2], 16).unwrap(),
        u8::from_str_radix(&digits[2..4], 16).unwrap(),
        u8::from_str_radix(&digits[4..6], 16).unwrap(),
    )
}

// ============================================================================
// End-to-End Pipeline
// ============================================================================

#[test]
fn test_two_color_logo_end_to_end() {
    // 70% brick red, 30% green: both sides of the distance threshold test
    // in one image. Extraction should land on the quantized buckets and
    // both palettes should anchor their 500 level on the extracted hex.
    let data = buffer_of_runs(&[(700, [200, 50, 50, 255]), (300, [50, 200, 50, 255])]);
    let buffer = PixelBuffer::new(&data, 100, 10).unwrap();

    let theme = derive_brand_theme(&buffer).unwrap();

    assert_eq!(theme.primary, "#c83c3c");
    assert_eq!(theme.secondary, "#3cc83c");
    assert_eq!(theme.primary_shades.get(500), Some("#c83c3c"));
    assert_eq!(theme.secondary_shades.get(500), Some("#3cc83c"));
    assert_eq!(theme.primary_shades.len(), 11);
    assert_eq!(theme.secondary_shades.len(), 11);
}

#[test]
fn test_every_emitted_hex_is_well_formed() {
    // Clamping invariant: each of the 22 shades plus the two base colors
    // must parse as #rrggbb; a two-digit channel cannot leave [0, 255].
    let data = buffer_of_runs(&[
        (500, [255, 250, 10, 255]),
        (300, [5, 5, 120, 255]),
        (200, [128, 0, 255, 255]),
    ]);
    let buffer = PixelBuffer::new(&data, 100, 10).unwrap();

    let theme = derive_brand_theme(&buffer).unwrap();

    parse_channels(&theme.primary);
    parse_channels(&theme.secondary);
    for palette in [&theme.primary_shades, &theme.secondary_shades] {
        for entry in palette.iter() {
            parse_channels(&entry.hex);
        }
    }
}

#[test]
fn test_css_variables_match_shades() {
    let data = buffer_of_runs(&[(100, [120, 80, 200, 255])]);
    let buffer = PixelBuffer::new(&data, 10, 10).unwrap();
    let theme = derive_brand_theme(&buffer).unwrap();

    let vars = theme.css_variables("store");
    assert_eq!(vars.len(), 22);
    for entry in theme.primary_shades.iter() {
        let name = format!("--store-primary-{}", entry.level);
        assert!(vars.iter().any(|(n, v)| *n == name && *v == entry.hex));
    }
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_fully_transparent_logo_yields_fallback_pair() {
    let data = buffer_of_runs(&[(400, [30, 144, 255, 0])]);
    let buffer = PixelBuffer::new(&data, 20, 20).unwrap();
    let extractor = ColorExtractor::new();

    let first = extractor.extract(&buffer);
    let second = extractor.extract(&buffer);

    assert_eq!(first.primary, extractor.config().fallback_primary);
    assert_eq!(first.secondary, extractor.config().fallback_secondary);
    // Identical across repeated calls
    assert_eq!(first, second);
}

#[test]
fn test_zero_dimension_buffer_yields_fallback_pair() {
    let buffer = PixelBuffer::new(&[], 0, 0).unwrap();
    let extractor = ColorExtractor::new();
    let colors = extractor.extract(&buffer);
    assert_eq!(colors.primary, extractor.config().fallback_primary);
    assert_eq!(colors.secondary, extractor.config().fallback_secondary);
}

#[test]
fn test_near_white_logo_yields_black_primary() {
    // Brightness 249 > 240 for every pixel: nothing qualifies as a
    // dominant candidate, so the primary degrades to pure black.
    let data = buffer_of_runs(&[(400, [251, 249, 247, 255])]);
    let buffer = PixelBuffer::new(&data, 20, 20).unwrap();

    let colors = ColorExtractor::new().extract(&buffer);
    assert_eq!(colors.primary, "#000000");
}

#[test]
fn test_monochrome_logo_lightens_for_secondary() {
    // Single mid-brightness color: no contrasting bucket exists, so the
    // secondary is the primary with +40 per channel.
    let data = buffer_of_runs(&[(400, [120, 80, 200, 255])]);
    let buffer = PixelBuffer::new(&data, 20, 20).unwrap();

    let colors = ColorExtractor::new().extract(&buffer);
    assert_eq!(colors.primary, "#7850c8");
    assert_eq!(colors.secondary, "#a078f0");
}

#[test]
fn test_mismatched_buffer_is_a_caller_error() {
    let data = vec![0u8; 10];
    let err = PixelBuffer::new(&data, 2, 2).unwrap_err();
    assert!(matches!(err, PaletteError::BufferSizeMismatch { .. }));
}

// ============================================================================
// Shade Palette Properties
// ============================================================================

#[test]
fn test_shade_500_is_byte_for_byte_base() {
    let generator = PaletteGenerator::new();
    for base in ["#c83c3c", "#3CC83C", "0a0b0c", "#FFFFFF"] {
        let palette = generator.generate(base).unwrap();
        assert_eq!(palette.get(500), Some(base));
    }
}

#[test]
fn test_shades_darken_monotonically() {
    // For a base with no channel at 0 or 255, every channel is
    // non-increasing from 50 through 950.
    let palette = PaletteGenerator::new().generate("#c87f3c").unwrap();
    let mut previous: Option<(u8, u8, u8)> = None;
    for entry in palette.iter() {
        let current = parse_channels(&entry.hex);
        if let Some((r, g, b)) = previous {
            assert!(r >= current.0, "red increased at level {}", entry.level);
            assert!(g >= current.1, "green increased at level {}", entry.level);
            assert!(b >= current.2, "blue increased at level {}", entry.level);
        }
        previous = Some(current);
    }
}

#[test]
fn test_adjust_brightness_zero_is_identity() {
    assert_eq!(adjust_brightness("#c87f3c", 0.0).unwrap(), "#c87f3c");
    assert_eq!(adjust_brightness("C87F3C", 0.0).unwrap(), "c87f3c");
}

#[test]
fn test_malformed_hex_is_rejected_not_guessed() {
    let generator = PaletteGenerator::new();
    for bad in ["", "#", "#12", "#1234567", "#xyzxyz", "rgb(1,2,3)"] {
        let err = generator.generate(bad).unwrap_err();
        assert!(
            matches!(err, PaletteError::InvalidColorFormat { .. }),
            "{bad:?} should be InvalidColorFormat"
        );
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_pipeline_is_deterministic() {
    let data = buffer_of_runs(&[
        (350, [200, 50, 50, 255]),
        (250, [50, 200, 50, 255]),
        (200, [250, 250, 250, 255]),
        (200, [10, 10, 10, 90]),
    ]);
    let buffer = PixelBuffer::new(&data, 100, 10).unwrap();

    let first = derive_brand_theme(&buffer).unwrap();
    let second = derive_brand_theme(&buffer).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_json_file_roundtrip() {
    let mut config = ExtractionConfig::default();
    config.sample_stride = 5;
    config.fallback_primary = "#336699".to_string();

    let path = std::env::temp_dir().join("brand_palette_config_roundtrip.json");
    config.to_json_file(&path).unwrap();
    let loaded = ExtractionConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.sample_stride, 5);
    assert_eq!(loaded.fallback_primary, "#336699");
}

#[test]
fn test_custom_stride_changes_sampling_only() {
    // A denser stride sees the same dominant color; the algorithm shape
    // is unchanged.
    let data = buffer_of_runs(&[(700, [200, 50, 50, 255]), (300, [50, 200, 50, 255])]);
    let buffer = PixelBuffer::new(&data, 100, 10).unwrap();

    let dense = ColorExtractor::with_config(ExtractionConfig {
        sample_stride: 1,
        ..ExtractionConfig::default()
    });

    let colors = dense.extract(&buffer);
    assert_eq!(colors.primary, "#c83c3c");
    assert_eq!(colors.secondary, "#3cc83c");
}

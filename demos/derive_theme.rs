//! Derive a brand theme from a synthetic logo and print the CSS
//! variables a storefront would consume.
//!
//! Run with `RUST_LOG=debug cargo run --example derive_theme` to see the
//! extractor's decision points.

use brand_palette::{derive_brand_theme, PixelBuffer};

fn main() -> Result<(), brand_palette::PaletteError> {
    env_logger::init();

    // 64x64 two-tone "logo": a terracotta field with a teal band
    let mut data = Vec::with_capacity(64 * 64 * 4);
    for y in 0..64u32 {
        for _x in 0..64u32 {
            let pixel = if y < 44 {
                [196, 88, 48, 255]
            } else {
                [32, 140, 140, 255]
            };
            data.extend_from_slice(&pixel);
        }
    }

    let buffer = PixelBuffer::new(&data, 64, 64)?;
    let theme = derive_brand_theme(&buffer)?;

    println!("primary:   {}", theme.primary);
    println!("secondary: {}", theme.secondary);
    println!();
    for (name, value) in theme.css_variables("shop") {
        println!("{name}: {value};");
    }

    Ok(())
}

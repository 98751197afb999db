//! RGB value handling: hex conversion, channel math, and the
//! quantized histogram used for dominant-color clustering.

pub mod histogram;
pub mod rgb;

pub use histogram::ColorHistogram;

//! Color arithmetic and naming

pub mod math;
pub mod namer;

pub use math::{
    clamp_channel, complementary, hex_to_rgb, rgb_to_hex, variants, Channel, ColorVariant, Rgb,
    VariantKind, VARIANT_KINDS,
};
pub use namer::{ColorNamer, NamedColor, ToneBucket, REFERENCE_COLORS};

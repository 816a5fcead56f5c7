use crate::color::namer::ColorNamer;
use crate::error::{PaintError, Result};
use palette::{FromColor, Hsv, ShiftHue, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Single RGB channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Self { r, g, b })
    }

    /// Lowercase, zero-padded `#rrggbb`
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(51, 102, 255)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Euclidean distance in RGB space
    pub fn distance(&self, other: &Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    pub fn distance_squared(&self, other: &Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Add `delta` to every channel, clamped to [0, 255]
    pub fn offset(&self, delta: i32) -> Self {
        Self {
            r: clamp_channel(self.r as i32 + delta),
            g: clamp_channel(self.g as i32 + delta),
            b: clamp_channel(self.b as i32 + delta),
        }
    }

    /// Multiply one channel by `tenths / 10`, floored and clamped to 255.
    pub fn boost(&self, channel: Channel, tenths: u32) -> Self {
        let scaled = |v: u8| clamp_channel((v as u32 * tenths / 10) as i32);
        let mut out = *self;
        match channel {
            Channel::Red => out.r = scaled(self.r),
            Channel::Green => out.g = scaled(self.g),
            Channel::Blue => out.b = scaled(self.b),
        }
        out
    }

    /// Rotate hue in HSV space by `degrees`, keeping saturation and value.
    pub fn rotate_hue(&self, degrees: f32) -> Self {
        let rgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let hsv: Hsv = Hsv::from_color(rgb);
        let shifted: Srgb<f32> = Srgb::from_color(hsv.shift_hue(degrees));
        let out: Srgb<u8> = shifted.into_format();
        Self::new(out.red, out.green, out.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(p: image::Rgb<u8>) -> Self {
        Self::new(p.0[0], p.0[1], p.0[2])
    }
}

/// Parse `#rrggbb` into channel values
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| PaintError::invalid_color(hex))?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| PaintError::invalid_color(hex))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// The fixed derivations used for "similar colors", in response order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    Original,
    Darker,
    Lighter,
    RedBoost,
    GreenBoost,
    BlueBoost,
}

pub const VARIANT_KINDS: [VariantKind; 6] = [
    VariantKind::Original,
    VariantKind::Darker,
    VariantKind::Lighter,
    VariantKind::RedBoost,
    VariantKind::GreenBoost,
    VariantKind::BlueBoost,
];

const SHADE_STEP: i32 = 20;
const BOOST_TENTHS: u32 = 11;

impl VariantKind {
    /// Adjective prefixed to the variant's generated name
    pub fn adjective(&self) -> Option<&'static str> {
        match self {
            VariantKind::Original => None,
            VariantKind::Darker => Some("Deep"),
            VariantKind::Lighter => Some("Light"),
            VariantKind::RedBoost => Some("Vibrant"),
            VariantKind::GreenBoost => Some("Fresh"),
            VariantKind::BlueBoost => Some("Cool"),
        }
    }

    pub fn apply(&self, base: Rgb) -> Rgb {
        match self {
            VariantKind::Original => base,
            VariantKind::Darker => base.offset(-SHADE_STEP),
            VariantKind::Lighter => base.offset(SHADE_STEP),
            VariantKind::RedBoost => base.boost(Channel::Red, BOOST_TENTHS),
            VariantKind::GreenBoost => base.boost(Channel::Green, BOOST_TENTHS),
            VariantKind::BlueBoost => base.boost(Channel::Blue, BOOST_TENTHS),
        }
    }
}

/// A named derivative of a base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub name: String,
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
}

impl ColorVariant {
    fn new(name: String, color: Rgb, include_rgb: bool) -> Self {
        Self {
            name,
            hex: color.to_hex(),
            rgb: include_rgb.then(|| color.to_css()),
        }
    }
}

/// Original, darker, lighter and the three single-channel boosts of `base`.
pub fn variants(namer: &ColorNamer, base: Rgb, include_rgb: bool) -> Vec<ColorVariant> {
    VARIANT_KINDS
        .iter()
        .map(|kind| {
            let color = kind.apply(base);
            let base_name = namer.name(color);
            let name = match kind.adjective() {
                Some(adjective) => format!("{adjective} {base_name}"),
                None => base_name,
            };
            ColorVariant::new(name, color, include_rgb)
        })
        .collect()
}

/// `count` hues spaced evenly around the wheel, excluding `base` itself.
pub fn complementary(namer: &ColorNamer, base: Rgb, count: usize, include_rgb: bool) -> Vec<ColorVariant> {
    let step = 360.0 / (count as f32 + 1.0);
    (1..=count)
        .map(|i| {
            let color = base.rotate_hue(step * i as f32);
            let name = format!("Complement {}", namer.name(color));
            ColorVariant::new(name, color, include_rgb)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- hex conversion ---

    #[test]
    fn test_hex_round_trip() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(17) {
                for b in [0u8, 1, 127, 128, 254, 255] {
                    let hex = rgb_to_hex(r, g, b);
                    assert_eq!(hex_to_rgb(&hex).unwrap(), (r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(10, 0, 255).to_hex(), "#0a00ff");
        assert_eq!(Rgb::from_hex("#3366FF").unwrap().to_hex(), "#3366ff");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for bad in ["", "#", "336699", "#336", "#3366ff0", "#gg0000", "#33 6ff", "#＃3366f"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(
                matches!(err, PaintError::InvalidColorFormat { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    // --- distance / clamping ---

    #[test]
    fn test_distance() {
        let black = Rgb::new(0, 0, 0);
        assert_eq!(black.distance(&Rgb::new(3, 4, 0)), 5.0);
        assert_eq!(black.distance(&black), 0.0);
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-5), 0);
        assert_eq!(clamp_channel(300), 255);
        assert_eq!(clamp_channel(42), 42);
    }

    #[test]
    fn test_lighten_clamps() {
        let light = VariantKind::Lighter.apply(Rgb::from_hex("#f5f5f5").unwrap());
        assert_eq!(light.to_hex(), "#ffffff");
    }

    #[test]
    fn test_darken_clamps() {
        let dark = VariantKind::Darker.apply(Rgb::new(10, 30, 0));
        assert_eq!(dark, Rgb::new(0, 10, 0));
    }

    #[test]
    fn test_boost_floors_and_clamps() {
        let base = Rgb::new(240, 55, 9);
        assert_eq!(base.boost(Channel::Red, 11).r, 255);
        assert_eq!(base.boost(Channel::Green, 11).g, 60);
        assert_eq!(base.boost(Channel::Blue, 11).b, 9);
    }

    // --- variants ---

    #[test]
    fn test_variants_order_and_names() {
        let namer = ColorNamer::default();
        let out = variants(&namer, Rgb::from_hex("#3366ff").unwrap(), false);
        let hexes: Vec<&str> = out.iter().map(|v| v.hex.as_str()).collect();
        assert_eq!(
            hexes,
            ["#3366ff", "#1f52eb", "#477aff", "#3866ff", "#3370ff", "#3366ff"]
        );
        assert_eq!(out[0].name, "Cool Royal Blue");
        assert!(out[1].name.starts_with("Deep "));
        assert!(out[2].name.starts_with("Light "));
        assert!(out[3].name.starts_with("Vibrant "));
        assert!(out[4].name.starts_with("Fresh "));
        assert!(out[5].name.starts_with("Cool "));
        assert!(out.iter().all(|v| v.rgb.is_none()));
    }

    #[test]
    fn test_variants_include_rgb() {
        let namer = ColorNamer::default();
        let out = variants(&namer, Rgb::new(51, 102, 255), true);
        assert_eq!(out[0].rgb.as_deref(), Some("rgb(51, 102, 255)"));
        assert_eq!(out[2].rgb.as_deref(), Some("rgb(71, 122, 255)"));
    }

    // --- complementary ---

    #[test]
    fn test_complementary_of_red_is_cyan() {
        let namer = ColorNamer::default();
        let out = complementary(&namer, Rgb::new(255, 0, 0), 1, false);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].hex, "#00ffff");
        assert!(out[0].name.starts_with("Complement "));
    }

    #[test]
    fn test_complementary_count() {
        let namer = ColorNamer::default();
        assert_eq!(complementary(&namer, Rgb::new(12, 200, 90), 3, false).len(), 3);
        assert!(complementary(&namer, Rgb::new(12, 200, 90), 0, false).is_empty());
    }
}

use crate::color::math::Rgb;
use crate::error::Result;

/// Coarse descriptive bucket for a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneBucket {
    Light,
    Dark,
    Warm,
    Rich,
    Fresh,
    Natural,
    Cool,
    Deep,
    Soft,
    Classic,
}

impl ToneBucket {
    /// Thresholds are checked in order; the first match wins.
    pub fn classify(c: Rgb) -> Self {
        let Rgb { r, g, b } = c;
        if r > 200 && g > 200 && b > 200 {
            ToneBucket::Light
        } else if r < 60 && g < 60 && b < 60 {
            ToneBucket::Dark
        } else if r > g && r > b {
            if r > 200 {
                ToneBucket::Warm
            } else {
                ToneBucket::Rich
            }
        } else if g > r && g > b {
            if g > 200 {
                ToneBucket::Fresh
            } else {
                ToneBucket::Natural
            }
        } else if b > r && b > g {
            if b > 200 {
                ToneBucket::Cool
            } else {
                ToneBucket::Deep
            }
        } else if r > 180 {
            ToneBucket::Soft
        } else {
            ToneBucket::Classic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToneBucket::Light => "Light",
            ToneBucket::Dark => "Dark",
            ToneBucket::Warm => "Warm",
            ToneBucket::Rich => "Rich",
            ToneBucket::Fresh => "Fresh",
            ToneBucket::Natural => "Natural",
            ToneBucket::Cool => "Cool",
            ToneBucket::Deep => "Deep",
            ToneBucket::Soft => "Soft",
            ToneBucket::Classic => "Classic",
        }
    }
}

/// Reference entry for nearest-name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

pub const REFERENCE_COLORS: &[NamedColor] = &[
    NamedColor { name: "Royal Blue", rgb: Rgb::new(0x00, 0x00, 0xff) },
    NamedColor { name: "Vibrant Red", rgb: Rgb::new(0xff, 0x00, 0x00) },
    NamedColor { name: "Lime Green", rgb: Rgb::new(0x00, 0xff, 0x00) },
    NamedColor { name: "Yellow", rgb: Rgb::new(0xff, 0xff, 0x00) },
    NamedColor { name: "Purple", rgb: Rgb::new(0x80, 0x00, 0x80) },
    NamedColor { name: "Brown", rgb: Rgb::new(0xa5, 0x2a, 0x2a) },
    NamedColor { name: "White", rgb: Rgb::new(0xff, 0xff, 0xff) },
    NamedColor { name: "Black", rgb: Rgb::new(0x00, 0x00, 0x00) },
];

/// Names colors as `"{bucket} {nearest reference}"`.
#[derive(Debug, Clone, Copy)]
pub struct ColorNamer<'a> {
    reference: &'a [NamedColor],
}

impl<'a> ColorNamer<'a> {
    pub fn new(reference: &'a [NamedColor]) -> Self {
        Self { reference }
    }

    /// Nearest reference entry by RGB distance; ties keep the earlier entry.
    pub fn closest(&self, c: Rgb) -> Option<&'a NamedColor> {
        let mut best: Option<(&NamedColor, u32)> = None;
        for entry in self.reference {
            let d = c.distance_squared(&entry.rgb);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((entry, d));
            }
        }
        best.map(|(entry, _)| entry)
    }

    pub fn name(&self, c: Rgb) -> String {
        let bucket = ToneBucket::classify(c).as_str();
        match self.closest(c) {
            Some(entry) => format!("{} {}", bucket, entry.name),
            None => format!("{} Tone", bucket),
        }
    }

    pub fn name_hex(&self, hex: &str) -> Result<String> {
        Ok(self.name(Rgb::from_hex(hex)?))
    }
}

impl Default for ColorNamer<'static> {
    fn default() -> Self {
        Self::new(REFERENCE_COLORS)
    }
}

//! Curated palettes offered alongside every analysis

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    #[serde(rename = "hexCode")]
    pub hex_code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub description: &'static str,
    pub colors: &'static [PaletteColor],
}

const fn color(name: &'static str, hex_code: &'static str) -> PaletteColor {
    PaletteColor { name, hex_code }
}

static CATALOG: [Palette; 3] = [
    Palette {
        name: "Modern Neutrals",
        description: "Clean, contemporary colors that create a calm atmosphere",
        colors: &[
            color("Off White", "#f5f5f5"),
            color("Soft Gray", "#e0e0e0"),
            color("Warm Beige", "#e6d2b5"),
            color("Light Sage", "#d4e2d4"),
        ],
    },
    Palette {
        name: "Bold Statements",
        description: "Expressive colors that energize your space",
        colors: &[
            color("Vibrant Teal", "#009688"),
            color("Deep Navy", "#1a237e"),
            color("Terracotta", "#bf360c"),
            color("Emerald", "#2e7d32"),
        ],
    },
    Palette {
        name: "Pastel Dreams",
        description: "Soft, soothing tones for a relaxing environment",
        colors: &[
            color("Powder Blue", "#bbdefb"),
            color("Blush Pink", "#f8bbd0"),
            color("Mint Green", "#c8e6c9"),
            color("Lavender", "#d1c4e9"),
        ],
    },
];

/// Classic named paint colors that can trail an extracted palette
static CURATED_PAINTS: [PaletteColor; 15] = [
    color("Beige", "#f5f5dc"),
    color("Light Cyan", "#e0ffff"),
    color("Lavender Blush", "#fff0f5"),
    color("Lavender", "#e6e6fa"),
    color("Honeydew", "#f0fff0"),
    color("Alice Blue", "#f0f8ff"),
    color("Old Lace", "#fdf5e6"),
    color("Ghost White", "#f8f8ff"),
    color("Snow", "#fffafa"),
    color("Azure", "#f0ffff"),
    color("Slate Gray", "#708090"),
    color("Light Steel Blue", "#b0c4de"),
    color("Dark Salmon", "#e9967a"),
    color("Misty Rose", "#ffe4e1"),
    color("Moccasin", "#ffe4b5"),
];

/// The static palette catalog. Always the same slice.
pub fn catalog() -> &'static [Palette] {
    &CATALOG
}

pub fn curated_paints() -> &'static [PaletteColor] {
    &CURATED_PAINTS
}

pub fn find(name: &str) -> Option<&'static Palette> {
    CATALOG.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

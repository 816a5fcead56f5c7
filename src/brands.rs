//! Simulated paint brand product mappings
//!
//! Each brand derives a product code, a marketed name and its finish range
//! from the RGB value alone, so the same color always maps to the same
//! products.

use crate::color::{ColorNamer, Rgb};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "Sherwin-Williams")]
    SherwinWilliams,
    #[serde(rename = "Benjamin Moore")]
    BenjaminMoore,
    Behr,
    Valspar,
    #[serde(rename = "PPG")]
    Ppg,
}

pub const ALL_BRANDS: [Brand; 5] = [
    Brand::SherwinWilliams,
    Brand::BenjaminMoore,
    Brand::Behr,
    Brand::Valspar,
    Brand::Ppg,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finish {
    Flat,
    Matte,
    Eggshell,
    Pearl,
    Satin,
    #[serde(rename = "Semi-Gloss")]
    SemiGloss,
    #[serde(rename = "High-Gloss")]
    HighGloss,
}

impl Brand {
    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::SherwinWilliams => "Sherwin-Williams",
            Brand::BenjaminMoore => "Benjamin Moore",
            Brand::Behr => "Behr",
            Brand::Valspar => "Valspar",
            Brand::Ppg => "PPG",
        }
    }

    /// Marketing prefix put in front of the generated color name
    pub fn line_prefix(&self) -> &'static str {
        match self {
            Brand::SherwinWilliams => "SW",
            Brand::BenjaminMoore => "BM",
            Brand::Behr => "Premium Plus",
            Brand::Valspar => "Signature",
            Brand::Ppg => "Timeless",
        }
    }

    pub fn product_code(&self, c: Rgb) -> String {
        let (r, g, b) = (c.r as u32, c.g as u32, c.b as u32);
        let sum = r + g + b;
        match self {
            Brand::SherwinWilliams => format!("SW-{}", 1000 + sum % 9000),
            Brand::BenjaminMoore => format!("BM-{}", sum),
            Brand::Behr => format!("BHR{}", (r * g * b) % 900 + 100),
            Brand::Valspar => format!("VLP-{}", sum / 3),
            Brand::Ppg => format!("PPG{}", (r * b) % 999 + 1000),
        }
    }

    pub fn finishes(&self) -> &'static [Finish] {
        match self {
            Brand::SherwinWilliams => &[
                Finish::Matte,
                Finish::Eggshell,
                Finish::Satin,
                Finish::SemiGloss,
                Finish::HighGloss,
            ],
            Brand::BenjaminMoore => &[
                Finish::Flat,
                Finish::Matte,
                Finish::Eggshell,
                Finish::Pearl,
                Finish::SemiGloss,
                Finish::HighGloss,
            ],
            Brand::Behr | Brand::Valspar => &[
                Finish::Flat,
                Finish::Eggshell,
                Finish::Satin,
                Finish::SemiGloss,
            ],
            Brand::Ppg => &[
                Finish::Flat,
                Finish::Eggshell,
                Finish::Satin,
                Finish::SemiGloss,
                Finish::HighGloss,
            ],
        }
    }
}

/// One brand's product for a base color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMatch {
    pub brand: Brand,
    pub color_name: String,
    pub color_code: String,
    pub hex: String,
    pub finish_options: Vec<Finish>,
}

#[derive(Debug, Clone, Copy)]
pub struct BrandMatcher<'a> {
    namer: ColorNamer<'a>,
    brands: &'a [Brand],
}

impl<'a> BrandMatcher<'a> {
    pub fn new(namer: ColorNamer<'a>, brands: &'a [Brand]) -> Self {
        Self { namer, brands }
    }

    /// One match per configured brand, in brand order
    pub fn matches(&self, c: Rgb) -> Vec<BrandMatch> {
        let base_name = self.namer.name(c);
        self.brands
            .iter()
            .map(|brand| BrandMatch {
                brand: *brand,
                color_name: format!("{} {}", brand.line_prefix(), base_name),
                color_code: brand.product_code(c),
                hex: c.to_hex(),
                finish_options: brand.finishes().to_vec(),
            })
            .collect()
    }

    pub fn matches_hex(&self, hex: &str) -> Result<Vec<BrandMatch>> {
        Ok(self.matches(Rgb::from_hex(hex)?))
    }
}

impl Default for BrandMatcher<'static> {
    fn default() -> Self {
        Self::new(ColorNamer::default(), &ALL_BRANDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;

    // --- product codes ---

    #[test]
    fn test_product_codes() {
        let c = Rgb::new(51, 102, 255);
        assert_eq!(Brand::SherwinWilliams.product_code(c), "SW-1408");
        assert_eq!(Brand::BenjaminMoore.product_code(c), "BM-408");
        // 51 * 102 * 255 = 1326510, % 900 = 810
        assert_eq!(Brand::Behr.product_code(c), "BHR910");
        assert_eq!(Brand::Valspar.product_code(c), "VLP-136");
        // 51 * 255 = 13005, % 999 = 18
        assert_eq!(Brand::Ppg.product_code(c), "PPG1018");
    }

    #[test]
    fn test_product_codes_extremes() {
        let white = Rgb::new(255, 255, 255);
        assert_eq!(Brand::SherwinWilliams.product_code(white), "SW-1765");
        assert_eq!(Brand::Behr.product_code(Rgb::new(0, 0, 0)), "BHR100");
    }

    // --- matcher ---

    #[test]
    fn test_matches_one_per_brand() {
        let matches = BrandMatcher::default().matches_hex("#3366FF").unwrap();
        assert_eq!(matches.len(), 5);
        let brands: Vec<_> = matches.iter().map(|m| m.brand).collect();
        assert_eq!(brands, ALL_BRANDS);
        assert_eq!(matches[0].color_name, "SW Cool Royal Blue");
        assert_eq!(matches[2].color_name, "Premium Plus Cool Royal Blue");
        assert!(matches.iter().all(|m| m.hex == "#3366ff"));
        assert_eq!(matches[1].finish_options.len(), 6);
    }

    #[test]
    fn test_matches_deterministic() {
        let matcher = BrandMatcher::default();
        assert_eq!(
            matcher.matches_hex("#a0b1c2").unwrap(),
            matcher.matches_hex("#a0b1c2").unwrap()
        );
    }

    #[test]
    fn test_invalid_color() {
        let err = BrandMatcher::default().matches_hex("#12345").unwrap_err();
        assert!(matches!(err, PaintError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_serialized_shape() {
        let m = &BrandMatcher::default().matches(Rgb::new(0, 0, 0))[0];
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["brand"], "Sherwin-Williams");
        assert_eq!(json["colorCode"], "SW-1000");
        assert_eq!(json["finishOptions"][3], "Semi-Gloss");
    }

    #[test]
    fn test_finish_ranges() {
        assert_eq!(Brand::BenjaminMoore.finishes().len(), 6);
        assert_eq!(Brand::Behr.finishes(), Brand::Valspar.finishes());
        assert_eq!(Brand::SherwinWilliams.finishes()[0], Finish::Matte);
        for brand in ALL_BRANDS {
            let glossy = brand.finishes().last() == Some(&Finish::HighGloss);
            assert_eq!(glossy, !matches!(brand, Brand::Behr | Brand::Valspar));
        }
    }
}

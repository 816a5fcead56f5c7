//! Request orchestration: detect, preview and match
//!
//! Each operation is a pure function of its request and the service's
//! immutable settings, so one service can be shared across threads.

use crate::brands::{Brand, BrandMatch, BrandMatcher};
use crate::clusters::{cluster_colors, WeightedColor, MAX_CLUSTERS};
use crate::color::{complementary, variants, ColorNamer, ColorVariant, Rgb};
use crate::config::Config;
use crate::enrichment::CosmeticPicker;
use crate::error::{PaintError, Result};
use crate::image_data::WallImage;
use crate::palettes::{catalog, curated_paints, Palette, PaletteColor};
use crate::preview::{AppliedFeatures, PreviewCompositor, PreviewOptions};
use crate::sampler::{RegionSampler, DEFAULT_NUM_COLORS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLEMENTS: usize = 3;
pub const MAX_COMPLEMENTS: usize = 12;

const PREVIEW_OK: &str = "Preview generated successfully";
const PREVIEW_FAILED: &str = "Failed to generate preview";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Image as a `data:image/...;base64,` URI or bare base64
    #[serde(default)]
    pub image: Option<String>,
}

impl DetectRequest {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(flatten)]
    pub options: PreviewOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "includeRGB", alias = "includeRgb")]
    pub include_rgb: bool,
}

impl MatchRequest {
    pub fn new(color: impl Into<String>, include_rgb: bool) -> Self {
        Self {
            color: Some(color.into()),
            include_rgb,
        }
    }
}

/// A sampled color decorated with presentation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedColor {
    pub name: String,
    pub hex: String,
    pub brand: Brand,
    pub room_types: Vec<&'static str>,
    pub mood_category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub dominant_colors: Vec<SuggestedColor>,
    pub suggested_palettes: &'static [Palette],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub success: bool,
    pub preview_url: Option<String>,
    pub message: String,
    pub applied_features: AppliedFeatures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub similar_colors: Vec<ColorVariant>,
    pub brand_matches: Vec<BrandMatch>,
}

/// Absent and blank strings both count as missing
fn required<'r>(value: &'r Option<String>, field: &'static str) -> Result<&'r str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(PaintError::missing(field)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisService {
    sampler: RegionSampler,
    namer: ColorNamer<'static>,
    picker: CosmeticPicker,
    compositor: PreviewCompositor,
    matcher: BrandMatcher<'static>,
    num_colors: usize,
    cluster_count: usize,
}

impl AnalysisService {
    pub fn new(config: &Config) -> Self {
        Self {
            sampler: config.sampler(),
            namer: ColorNamer::default(),
            picker: config.picker(),
            compositor: config.compositor(),
            matcher: BrandMatcher::default(),
            num_colors: config.sampling.num_colors,
            cluster_count: config.clusters.count,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Dominant colors of the request image plus the static palette catalog.
    ///
    /// A payload that fails to decode still yields a full response of
    /// fallback colors; only a missing payload is an error.
    pub fn detect_colors(&self, request: &DetectRequest) -> Result<DetectResponse> {
        let payload = required(&request.image, "image")?;
        Ok(self.detect_image(WallImage::from_data_uri(payload)))
    }

    /// [`detect_colors`](Self::detect_colors) over raw encoded image bytes
    pub fn detect_bytes(&self, bytes: &[u8]) -> DetectResponse {
        self.detect_image(WallImage::from_bytes(bytes))
    }

    pub fn detect_image(&self, image: Result<WallImage>) -> DetectResponse {
        let dominant_colors = self
            .sampler
            .sample_or_fallback(image, self.num_colors)
            .into_iter()
            .map(|c| self.suggest(c))
            .collect();

        DetectResponse {
            dominant_colors,
            suggested_palettes: catalog(),
        }
    }

    fn suggest(&self, c: Rgb) -> SuggestedColor {
        let picks = self.picker.pick(c);
        SuggestedColor {
            name: self.namer.name(c),
            hex: c.to_hex(),
            brand: picks.brand,
            room_types: picks.room_types,
            mood_category: picks.mood,
        }
    }

    /// Recolor the request image. Rendering failures come back as
    /// `success: false`; missing fields and bad colors are errors.
    pub fn generate_preview(&self, request: &PreviewRequest) -> Result<PreviewResponse> {
        let payload = required(&request.image, "image")?;
        let color = Rgb::from_hex(required(&request.color, "color")?)?;
        let applied_features = AppliedFeatures::from(&request.options);

        let rendered = WallImage::from_data_uri(payload)
            .and_then(|img| self.compositor.render_data_uri(&img, color, &request.options));

        Ok(match rendered {
            Ok(url) => PreviewResponse {
                success: true,
                preview_url: Some(url),
                message: PREVIEW_OK.to_string(),
                applied_features,
            },
            Err(e) => {
                tracing::warn!(error = %e, color = %color, "preview generation failed");
                PreviewResponse {
                    success: false,
                    preview_url: None,
                    message: PREVIEW_FAILED.to_string(),
                    applied_features,
                }
            }
        })
    }

    /// Six named variants and one product per brand for the request color
    pub fn color_matches(&self, request: &MatchRequest) -> Result<MatchResponse> {
        let color = Rgb::from_hex(required(&request.color, "color")?)?;
        Ok(MatchResponse {
            similar_colors: variants(&self.namer, color, request.include_rgb),
            brand_matches: self.matcher.matches(color),
        })
    }

    /// `count` evenly spaced hue rotations of `hex`
    pub fn complementary_colors(&self, hex: &str, count: usize) -> Result<Vec<ColorVariant>> {
        if !(1..=MAX_COMPLEMENTS).contains(&count) {
            return Err(PaintError::invalid_parameter("count", count));
        }
        let base = Rgb::from_hex(hex)?;
        Ok(complementary(&self.namer, base, count, false))
    }

    /// k-means palette of the request image. Unlike detect, decode
    /// failures are returned.
    pub fn extract_palette(&self, request: &DetectRequest, k: usize) -> Result<Vec<WeightedColor>> {
        if !(1..=MAX_CLUSTERS).contains(&k) {
            return Err(PaintError::invalid_parameter("clusters", k));
        }
        let payload = required(&request.image, "image")?;
        let image = WallImage::from_data_uri(payload)?;
        cluster_colors(&image, k)
    }

    pub fn extract_with_curated(
        &self,
        request: &DetectRequest,
        k: usize,
    ) -> Result<ExtractedPalette> {
        Ok(ExtractedPalette {
            colors: self.extract_palette(request, k)?,
            curated: curated_paints(),
        })
    }
}

/// Clustered colors followed by the fixed curated paint list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedPalette {
    pub colors: Vec<WeightedColor>,
    pub curated: &'static [PaletteColor],
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self {
            sampler: RegionSampler::default(),
            namer: ColorNamer::default(),
            picker: CosmeticPicker::default(),
            compositor: PreviewCompositor::default(),
            matcher: BrandMatcher::default(),
            num_colors: DEFAULT_NUM_COLORS,
            cluster_count: crate::clusters::DEFAULT_CLUSTERS,
        }
    }
}

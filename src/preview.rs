//! Recolored wall previews: a translucent color layer blended over the photo

use crate::color::Rgb;
use crate::error::{PaintError, Result};
use crate::image_data::{encode_data_uri, rgb_bytes, WallImage};
use image::{imageops, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

pub const BASE_ALPHA: f32 = 180.0;
pub const JPEG_QUALITY: u8 = 80;
pub const PREVIEW_MIME: &str = "image/jpeg";

const UNSHARP_SIGMA: f32 = 0.5;
const UNSHARP_THRESHOLD: i32 = 1;
/// Sobel magnitude (after /4 normalization) at which an edge gets no paint
const EDGE_FULL_STRENGTH: f32 = 255.0;

fn default_intensity() -> f32 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_finish() -> String {
    "matte".to_string()
}

fn default_lighting() -> String {
    "natural".to_string()
}

/// Caller-tunable preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewOptions {
    /// Scales overlay opacity; 1.0 is the reference strength
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// Attenuate paint on edges and creases
    #[serde(default)]
    pub shadow_tracking: bool,
    #[serde(default, rename = "vision360")]
    pub vision_360: bool,
    /// Overlay blend when true, plain source-over when false
    #[serde(default = "default_true")]
    pub realistic_blending: bool,
    #[serde(default = "default_finish")]
    pub finish: String,
    #[serde(default = "default_lighting")]
    pub lighting: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            intensity: default_intensity(),
            shadow_tracking: false,
            vision_360: false,
            realistic_blending: true,
            finish: default_finish(),
            lighting: default_lighting(),
        }
    }
}

/// Echo of the options a preview was rendered with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFeatures {
    pub shadow_tracking: bool,
    #[serde(rename = "vision360")]
    pub vision_360: bool,
    pub realistic_blending: bool,
    pub finish: String,
    pub lighting: String,
}

impl From<&PreviewOptions> for AppliedFeatures {
    fn from(o: &PreviewOptions) -> Self {
        Self {
            shadow_tracking: o.shadow_tracking,
            vision_360: o.vision_360,
            realistic_blending: o.realistic_blending,
            finish: o.finish.clone(),
            lighting: o.lighting.clone(),
        }
    }
}

/// Overlay layer alpha: `round(base * intensity)` clamped to a byte
pub fn overlay_alpha(base: f32, intensity: f32) -> u8 {
    (base * intensity).round().clamp(0.0, 255.0) as u8
}

/// Overlay blend of one normalized channel (backdrop decides multiply vs screen)
fn overlay(cb: f32, cs: f32) -> f32 {
    if cb <= 0.5 {
        2.0 * cb * cs
    } else {
        1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
    }
}

/// Blend `color` at opacity `alpha` (0..=1) over one backdrop pixel
pub fn blend_pixel(backdrop: [u8; 3], color: Rgb, alpha: f32, use_overlay: bool) -> [u8; 3] {
    let source = [color.r, color.g, color.b];
    let mut out = [0u8; 3];
    for i in 0..3 {
        let cb = backdrop[i] as f32 / 255.0;
        let cs = source[i] as f32 / 255.0;
        let mixed = if use_overlay { overlay(cb, cs) } else { cs };
        let value = cb + (mixed - cb) * alpha;
        out[i] = (value * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Per-pixel paint retention in 0..=1: 1 on flat areas, lower across edges.
/// Sobel gradient of luminance with clamped borders.
pub fn edge_mask(img: &RgbaImage) -> Vec<f32> {
    let gray: GrayImage = imageops::grayscale(img);
    let (w, h) = gray.dimensions();
    let at = |x: i64, y: i64| {
        let cx = x.clamp(0, w as i64 - 1) as u32;
        let cy = y.clamp(0, h as i64 - 1) as u32;
        gray.get_pixel(cx, cy).0[0] as f32
    };

    let mut mask = Vec::with_capacity((w * h) as usize);
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let gx = (at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2.0 * at(x - 1, y) + at(x - 1, y + 1));
            let gy = (at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2.0 * at(x, y - 1) + at(x + 1, y - 1));
            let magnitude = (gx * gx + gy * gy).sqrt() / 4.0;
            mask.push(1.0 - (magnitude / EDGE_FULL_STRENGTH).min(1.0));
        }
    }
    mask
}

#[derive(Debug, Clone, Copy)]
pub struct PreviewCompositor {
    base_alpha: f32,
    jpeg_quality: u8,
    sharpen_sigma: f32,
    sharpen_threshold: i32,
}

impl PreviewCompositor {
    pub fn new(base_alpha: f32, jpeg_quality: u8, sharpen_sigma: f32, sharpen_threshold: i32) -> Self {
        Self {
            base_alpha,
            jpeg_quality: jpeg_quality.clamp(1, 100),
            sharpen_sigma,
            sharpen_threshold,
        }
    }

    /// Blend the color layer over every pixel. Source alpha is kept.
    pub fn composite(&self, image: &WallImage, color: Rgb, options: &PreviewOptions) -> RgbaImage {
        let src = image.pixels();
        let alpha = overlay_alpha(self.base_alpha, options.intensity) as f32 / 255.0;
        let mask = options.shadow_tracking.then(|| edge_mask(src));
        tracing::debug!(
            width = src.width(),
            height = src.height(),
            alpha,
            shadow_tracking = options.shadow_tracking,
            "compositing preview"
        );

        let mut out = RgbaImage::new(src.width(), src.height());
        for (i, (dst, px)) in out.pixels_mut().zip(src.pixels()).enumerate() {
            let a = match &mask {
                Some(m) => alpha * m[i],
                None => alpha,
            };
            let [r, g, b] = blend_pixel(
                [px.0[0], px.0[1], px.0[2]],
                color,
                a,
                options.realistic_blending,
            );
            dst.0 = [r, g, b, px.0[3]];
        }
        out
    }

    /// Composite, sharpen and encode as JPEG
    pub fn render(&self, image: &WallImage, color: Rgb, options: &PreviewOptions) -> Result<Vec<u8>> {
        if image.width() == 0 || image.height() == 0 {
            return Err(PaintError::PreviewGeneration {
                message: "Source image has no pixels".to_string(),
                source: None,
            });
        }

        let blended = self.composite(image, color, options);
        let sharpened = imageops::unsharpen(&blended, self.sharpen_sigma, self.sharpen_threshold);

        let (width, height) = (sharpened.width(), sharpened.height());
        let rgb_img = RgbImage::from_raw(width, height, rgb_bytes(&sharpened)).ok_or_else(|| {
            PaintError::PreviewGeneration {
                message: "Failed to create RGB image".to_string(),
                source: None,
            }
        })?;

        let mut bytes = Vec::new();
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality);
        encoder
            .encode_image(&rgb_img)
            .map_err(|e| PaintError::preview("Failed to encode JPEG", e))?;
        Ok(bytes)
    }

    /// [`render`](Self::render) wrapped as a `data:image/jpeg;base64,` URI
    pub fn render_data_uri(
        &self,
        image: &WallImage,
        color: Rgb,
        options: &PreviewOptions,
    ) -> Result<String> {
        let bytes = self.render(image, color, options)?;
        Ok(encode_data_uri(PREVIEW_MIME, &bytes))
    }
}

impl Default for PreviewCompositor {
    fn default() -> Self {
        Self::new(BASE_ALPHA, JPEG_QUALITY, UNSHARP_SIGMA, UNSHARP_THRESHOLD)
    }
}

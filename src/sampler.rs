//! Mean colors over a fixed grid of regions of a normalized working image

use crate::color::Rgb;
use crate::error::{PaintError, Result};
use crate::image_data::{rgb_bytes, WallImage};
use fast_image_resize::{images::Image, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;
use rayon::prelude::*;

pub const WORKING_SIZE: u32 = 150;
pub const DEFAULT_NUM_COLORS: usize = 6;
/// Substituted for every requested slot when sampling fails
pub const FALLBACK_COLOR: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

const MIN_WORKING_SIZE: u32 = 4;

/// Axis-aligned rectangle in working-image pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
    FullFrame,
}

impl RegionKind {
    pub fn label(&self) -> &'static str {
        match self {
            RegionKind::TopLeft => "top-left",
            RegionKind::TopRight => "top-right",
            RegionKind::BottomLeft => "bottom-left",
            RegionKind::BottomRight => "bottom-right",
            RegionKind::Center => "center",
            RegionKind::FullFrame => "full-frame",
        }
    }
}

/// Region layout in quarters of the working size: (x, y, width, height)
const REGION_LAYOUT: [(RegionKind, [u32; 4]); 6] = [
    (RegionKind::TopLeft, [0, 0, 2, 2]),
    (RegionKind::TopRight, [2, 0, 2, 2]),
    (RegionKind::BottomLeft, [0, 2, 2, 2]),
    (RegionKind::BottomRight, [2, 2, 2, 2]),
    (RegionKind::Center, [1, 1, 2, 2]),
    (RegionKind::FullFrame, [0, 0, 4, 4]),
];

/// The six sampling regions for a `width x height` working image, in sampling order
pub fn regions(width: u32, height: u32) -> Vec<(RegionKind, Region)> {
    REGION_LAYOUT
        .iter()
        .map(|&(kind, [qx, qy, qw, qh])| {
            let region = Region {
                x: width * qx / 4,
                y: height * qy / 4,
                width: width * qw / 4,
                height: height * qh / 4,
            };
            (kind, region)
        })
        .collect()
}

/// Mean color over `region`, each channel rounded to nearest
pub fn region_mean(img: &RgbImage, region: &Region) -> Rgb {
    let (mut r, mut g, mut b, mut count) = (0u64, 0u64, 0u64, 0u64);
    for y in region.y..(region.y + region.height).min(img.height()) {
        for x in region.x..(region.x + region.width).min(img.width()) {
            let p = img.get_pixel(x, y);
            r += p.0[0] as u64;
            g += p.0[1] as u64;
            b += p.0[2] as u64;
            count += 1;
        }
    }
    if count == 0 {
        return FALLBACK_COLOR;
    }
    let mean = |sum: u64| ((sum + count / 2) / count) as u8;
    Rgb::new(mean(r), mean(g), mean(b))
}

/// Source crop (left, top, width, height) that fills `dst` while keeping aspect ratio
pub(crate) fn cover_crop(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> (f64, f64, f64, f64) {
    let (sw, sh) = (src_w as f64, src_h as f64);
    let scale = (dst_w as f64 / sw).max(dst_h as f64 / sh);
    let crop_w = (dst_w as f64 / scale).min(sw);
    let crop_h = (dst_h as f64 / scale).min(sh);
    ((sw - crop_w) / 2.0, (sh - crop_h) / 2.0, crop_w, crop_h)
}

/// Samples dominant colors from fixed regions of a cover-fitted working image
#[derive(Debug, Clone, Copy)]
pub struct RegionSampler {
    width: u32,
    height: u32,
}

impl RegionSampler {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_WORKING_SIZE),
            height: height.max(MIN_WORKING_SIZE),
        }
    }

    pub fn working_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize and center-crop to exactly the working size
    pub fn prepare(&self, image: &WallImage) -> Result<RgbImage> {
        let src_rgba = image.pixels();
        let (src_width, src_height) = (src_rgba.width(), src_rgba.height());
        let (left, top, crop_w, crop_h) =
            cover_crop(src_width, src_height, self.width, self.height);

        let src_fir = Image::from_vec_u8(src_width, src_height, rgb_bytes(src_rgba), PixelType::U8x3)
            .map_err(|e| PaintError::image("Failed to wrap source pixels", e))?;
        let mut dst_fir = Image::new(self.width, self.height, PixelType::U8x3);

        let mut resizer = Resizer::new();
        resizer
            .resize(
                &src_fir,
                &mut dst_fir,
                &ResizeOptions::new()
                    .resize_alg(ResizeAlg::Convolution(
                        fast_image_resize::FilterType::Bilinear,
                    ))
                    .crop(left, top, crop_w, crop_h),
            )
            .map_err(|e| PaintError::image("Failed to resize image", e))?;

        RgbImage::from_raw(self.width, self.height, dst_fir.into_vec()).ok_or_else(|| {
            PaintError::ImageProcessing {
                message: "Resized buffer has unexpected length".to_string(),
                source: None,
            }
        })
    }

    /// Mean colors of the first `num_colors` regions (at most six, in fixed order)
    pub fn sample(&self, image: &WallImage, num_colors: usize) -> Result<Vec<Rgb>> {
        let take = num_colors.min(REGION_LAYOUT.len());
        if take == 0 {
            return Ok(Vec::new());
        }

        let work = self.prepare(image)?;
        let selected: Vec<_> = regions(self.width, self.height).into_iter().take(take).collect();
        tracing::debug!(
            src_width = image.width(),
            src_height = image.height(),
            regions = take,
            "sampling region means"
        );

        Ok(selected
            .par_iter()
            .map(|(_, region)| region_mean(&work, region))
            .collect())
    }

    /// Like [`sample`](Self::sample) but never fails: errors yield one
    /// [`FALLBACK_COLOR`] per requested slot.
    pub fn sample_or_fallback(&self, image: Result<WallImage>, num_colors: usize) -> Vec<Rgb> {
        let take = num_colors.min(REGION_LAYOUT.len());
        match image.and_then(|img| self.sample(&img, take)) {
            Ok(colors) => colors,
            Err(e) => {
                tracing::warn!(error = %e, "color sampling failed, using neutral fallback");
                vec![FALLBACK_COLOR; take]
            }
        }
    }
}

impl Default for RegionSampler {
    fn default() -> Self {
        Self::new(WORKING_SIZE, WORKING_SIZE)
    }
}

//! k-means palette extraction in CIE Lab

use crate::color::Rgb;
use crate::error::{PaintError, Result};
use crate::image_data::WallImage;
use image::imageops::FilterType;
use image::DynamicImage;
use kmeans_colors::get_kmeans_hamerly;
use palette::{FromColor, IntoColor, Lab, Srgb};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_CLUSTERS: usize = 5;
pub const MAX_CLUSTERS: usize = 16;

const CONVERGENCE_THRESHOLD: f32 = 5.0;
const MAX_ITERATIONS: usize = 30;
const THUMBNAIL_SIZE: u32 = 128;
const SEED: u64 = 0;

/// A cluster centroid and the share of pixels assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedColor {
    pub hex: String,
    pub weight: f32,
}

/// Up to `k` representative colors, most dominant first
pub fn cluster_colors(image: &WallImage, k: usize) -> Result<Vec<WeightedColor>> {
    if !(1..=MAX_CLUSTERS).contains(&k) {
        return Err(PaintError::invalid_parameter("clusters", k));
    }

    let thumb = DynamicImage::ImageRgba8(image.pixels().clone()).resize(
        THUMBNAIL_SIZE,
        THUMBNAIL_SIZE,
        FilterType::Triangle,
    );
    let pixels: Vec<_> = thumb.to_rgb8().pixels().cloned().collect();
    if pixels.is_empty() {
        return Ok(Vec::new());
    }

    let total_pixels = pixels.len() as f32;
    let mut distinct: HashMap<[u8; 3], usize> = HashMap::new();
    for p in &pixels {
        *distinct.entry(p.0).or_insert(0) += 1;
        if distinct.len() > k {
            break;
        }
    }
    if distinct.len() <= k {
        // Few enough colors to report exactly
        let mut weighted: Vec<WeightedColor> = distinct
            .into_iter()
            .map(|([r, g, b], count)| WeightedColor {
                hex: Rgb::new(r, g, b).to_hex(),
                weight: count as f32 / total_pixels,
            })
            .collect();
        sort_by_weight(&mut weighted);
        return Ok(weighted);
    }

    let lab: Vec<Lab> = pixels
        .par_iter()
        .map(|p| {
            let rgb: Srgb<f32> = Srgb::new(p.0[0], p.0[1], p.0[2]).into_format();
            rgb.into_color()
        })
        .collect();

    let result = get_kmeans_hamerly(k, MAX_ITERATIONS, CONVERGENCE_THRESHOLD, false, &lab, SEED);

    let mut counts = vec![0usize; result.centroids.len()];
    for &idx in &result.indices {
        counts[idx as usize] += 1;
    }

    let mut weighted: Vec<WeightedColor> = result
        .centroids
        .iter()
        .zip(counts.iter())
        .filter(|(_, &count)| count > 0)
        .map(|(c, &count)| {
            let rgb: Srgb<f32> = Srgb::from_color(*c);
            let rgb: Srgb<u8> = rgb.into_format();
            WeightedColor {
                hex: Rgb::new(rgb.red, rgb.green, rgb.blue).to_hex(),
                weight: count as f32 / total_pixels,
            }
        })
        .collect();

    sort_by_weight(&mut weighted);
    tracing::debug!(k, found = weighted.len(), "clustered palette");
    Ok(weighted)
}

/// Most dominant first, hex breaks ties
fn sort_by_weight(colors: &mut [WeightedColor]) {
    colors.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.hex.cmp(&b.hex))
    });
}

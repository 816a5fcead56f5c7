//! Decoded image buffers and `data:` URI payloads

use crate::error::{PaintError, Result};
use base64::{engine::general_purpose, Engine as _};
use image::RgbaImage;

const BASE64_MARKER: &str = ";base64,";

/// An owned, decoded RGBA pixel buffer. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct WallImage {
    pixels: RgbaImage,
}

impl WallImage {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Decode any format the `image` crate recognizes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| PaintError::image("Failed to decode image", e))?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(PaintError::ImageProcessing {
                message: "Image has no pixels".to_string(),
                source: None,
            });
        }
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    /// Decode a `data:image/<type>;base64,<data>` payload (bare base64 is accepted too)
    pub fn from_data_uri(payload: &str) -> Result<Self> {
        Self::from_bytes(&decode_payload(payload)?)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Strip a leading `data:<mime>;base64,` header if present
pub fn strip_data_uri(payload: &str) -> &str {
    let payload = payload.trim();
    if payload.starts_with("data:") {
        if let Some(idx) = payload.find(BASE64_MARKER) {
            return &payload[idx + BASE64_MARKER.len()..];
        }
    }
    payload
}

/// Base64-decode a payload with or without its data URI header
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(strip_data_uri(payload))
        .map_err(|e| PaintError::image("Invalid base64 image payload", e))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{}{}{}",
        mime,
        BASE64_MARKER,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Pack the RGB channels of an RGBA buffer, dropping alpha
pub(crate) fn rgb_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut rgb_data = Vec::with_capacity((img.width() * img.height() * 3) as usize);
    for pixel in img.pixels() {
        rgb_data.push(pixel[0]);
        rgb_data.push(pixel[1]);
        rgb_data.push(pixel[2]);
    }
    rgb_data
}

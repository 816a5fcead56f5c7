use frostpaint::color::{hex_to_rgb, rgb_to_hex, ColorNamer};
use frostpaint::image_data::encode_data_uri;
use frostpaint::palettes::catalog;
use frostpaint::{
    AnalysisService, Config, DetectRequest, MatchRequest, PaintError, PreviewOptions,
    PreviewRequest,
};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

fn png_uri(img: &RgbaImage) -> String {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    encode_data_uri("image/png", &bytes)
}

fn solid_uri(width: u32, height: u32, rgba: [u8; 4]) -> String {
    png_uri(&RgbaImage::from_pixel(width, height, Rgba(rgba)))
}

// --- color math ---

#[test]
fn test_hex_round_trip_law() {
    for v in 0..=255u8 {
        let (r, g, b) = (v, 255 - v, v.wrapping_mul(7));
        assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)).unwrap(), (r, g, b));
    }
}

#[test]
fn test_namer_is_pure() {
    let namer = ColorNamer::default();
    let first = namer.name_hex("#7a3b9c").unwrap();
    for _ in 0..10 {
        assert_eq!(namer.name_hex("#7a3b9c").unwrap(), first);
    }
}

// --- detect ---

#[test]
fn test_detect_missing_image() {
    let service = AnalysisService::default();
    let request: DetectRequest = serde_json::from_str("{}").unwrap();
    let err = service.detect_colors(&request).unwrap_err();
    assert!(matches!(err, PaintError::MissingInput { .. }));
    assert!(err.is_caller_error());
}

#[test]
fn test_detect_one_pixel_red() {
    let service = AnalysisService::default();
    let response = service
        .detect_colors(&DetectRequest::new(solid_uri(1, 1, [255, 0, 0, 255])))
        .unwrap();

    assert_eq!(response.dominant_colors.len(), 6);
    assert!(response.dominant_colors.iter().all(|c| c.hex == "#ff0000"));
    assert_eq!(response.suggested_palettes, catalog());
}

#[test]
fn test_detect_quadrant_order() {
    // Distinct color per quadrant, already at working size
    let img = RgbaImage::from_fn(150, 150, |x, y| match (x < 75, y < 75) {
        (true, true) => Rgba([255, 0, 0, 255]),
        (false, true) => Rgba([0, 255, 0, 255]),
        (true, false) => Rgba([0, 0, 255, 255]),
        (false, false) => Rgba([255, 255, 255, 255]),
    });
    let service = AnalysisService::default();
    let response = service.detect_colors(&DetectRequest::new(png_uri(&img))).unwrap();
    let hexes: Vec<&str> = response
        .dominant_colors
        .iter()
        .map(|c| c.hex.as_str())
        .collect();

    assert_eq!(&hexes[..4], &["#ff0000", "#00ff00", "#0000ff", "#ffffff"]);
    assert_eq!(hexes.len(), 6);
}

#[test]
fn test_detect_enrichment_is_deterministic() {
    let service = AnalysisService::default();
    let request = DetectRequest::new(solid_uri(5, 5, [200, 180, 40, 255]));
    let a = serde_json::to_string(&service.detect_colors(&request).unwrap()).unwrap();
    let b = serde_json::to_string(&service.detect_colors(&request).unwrap()).unwrap();
    assert_eq!(a, b);
}

// --- preview ---

#[test]
fn test_preview_missing_color() {
    let service = AnalysisService::default();
    let request: PreviewRequest =
        serde_json::from_value(serde_json::json!({ "image": solid_uri(10, 10, [1, 2, 3, 255]) }))
            .unwrap();
    assert!(matches!(
        service.generate_preview(&request).unwrap_err(),
        PaintError::MissingInput { .. }
    ));
}

#[test]
fn test_preview_ten_by_ten() {
    let service = AnalysisService::default();
    let request = PreviewRequest {
        image: Some(solid_uri(10, 10, [90, 90, 90, 255])),
        color: Some("#00ff00".to_string()),
        options: PreviewOptions::default(),
    };
    let response = service.generate_preview(&request).unwrap();
    assert!(response.success);
    assert!(response
        .preview_url
        .as_deref()
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["appliedFeatures"]["vision360"], false);
    assert_eq!(json["appliedFeatures"]["realisticBlending"], true);
    assert_eq!(json["appliedFeatures"]["lighting"], "natural");
}

#[test]
fn test_preview_uses_configured_quality() {
    let mut low = Config::default();
    low.preview.jpeg_quality = 10;
    let img = RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 77, 255]));
    let request = PreviewRequest {
        image: Some(png_uri(&img)),
        color: Some("#aa3300".to_string()),
        options: PreviewOptions::default(),
    };

    let small = AnalysisService::new(&low).generate_preview(&request).unwrap();
    let large = AnalysisService::default().generate_preview(&request).unwrap();
    assert!(small.preview_url.unwrap().len() < large.preview_url.unwrap().len());
}

// --- matches ---

#[test]
fn test_matches_shape_and_idempotence() {
    let service = AnalysisService::default();
    let request = MatchRequest::new("#3366ff", false);
    let first = service.color_matches(&request).unwrap();
    assert_eq!(first.similar_colors.len(), 6);
    assert_eq!(first.brand_matches.len(), 5);

    let a = serde_json::to_vec(&first).unwrap();
    let b = serde_json::to_vec(&service.color_matches(&request).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_matches_missing_color() {
    let service = AnalysisService::default();
    let request: MatchRequest = serde_json::from_str(r#"{"includeRGB":true}"#).unwrap();
    assert!(matches!(
        service.color_matches(&request).unwrap_err(),
        PaintError::MissingInput { .. }
    ));
}

// --- service sharing ---

#[test]
fn test_service_shared_across_threads() {
    let service = AnalysisService::default();
    let uri = solid_uri(20, 20, [12, 200, 99, 255]);
    let expected = service.detect_colors(&DetectRequest::new(uri.clone())).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let uri = uri.clone();
            std::thread::spawn(move || service.detect_colors(&DetectRequest::new(uri)).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

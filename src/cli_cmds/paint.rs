use anyhow::{bail, Context, Result};
use frostpaint::image_data::decode_payload;
use frostpaint::{AnalysisService, MatchRequest, PreviewOptions, PreviewRequest};
use std::fs;
use std::path::Path;

use super::analyze::read_data_uri;
use super::print_json;

pub fn cmd_preview(
    service: &AnalysisService,
    path: &Path,
    color: &str,
    options: PreviewOptions,
    output: Option<&Path>,
) -> Result<()> {
    let request = PreviewRequest {
        image: Some(read_data_uri(path)?),
        color: Some(color.to_string()),
        options,
    };
    let mut response = service.generate_preview(&request)?;

    if !response.success {
        print_json(&response)?;
        bail!("{}", response.message);
    }

    if let Some(output) = output {
        if let Some(url) = response.preview_url.take() {
            let jpeg = decode_payload(&url)?;
            fs::write(output, jpeg)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            eprintln!("Preview written to {}", output.display());
        }
    }

    print_json(&response)
}

pub fn cmd_matches(service: &AnalysisService, color: &str, include_rgb: bool) -> Result<()> {
    let response = service.color_matches(&MatchRequest::new(color, include_rgb))?;
    print_json(&response)
}

pub fn cmd_complement(service: &AnalysisService, color: &str, count: usize) -> Result<()> {
    let colors = service.complementary_colors(color, count)?;
    print_json(&colors)
}

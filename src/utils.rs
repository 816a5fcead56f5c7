use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported image file extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Check if a path is a supported image file
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|&supported| supported == ext)
        })
        .unwrap_or(false)
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Files are taken as given; directories are walked for image files.
/// Output is sorted and deduplicated.
pub fn collect_images(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = inputs
        .iter()
        .map(|p| expand_tilde(p))
        .flat_map(|p| {
            if p.is_dir() {
                WalkDir::new(&p)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .map(|e| e.path().to_path_buf())
                    .filter(|p| p.is_file() && is_image_file(p))
                    .collect()
            } else {
                vec![p]
            }
        })
        .collect();
    found.sort();
    found.dedup();
    found
}

/// MIME type for a data URI built from `path`, by extension
pub fn mime_for_path(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream")
}

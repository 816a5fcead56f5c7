//! Wall color analysis and recolor previews
//!
//! Samples dominant colors from fixed regions of a photo, names them, maps
//! them to paint products and renders a recolored preview. All operations are
//! stateless and synchronous; [`AnalysisService`] ties them together.

pub mod analysis;
pub mod brands;
pub mod clusters;
pub mod color;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod image_data;
pub mod palettes;
pub mod preview;
pub mod sampler;

pub use analysis::{
    AnalysisService, DetectRequest, DetectResponse, ExtractedPalette, MatchRequest, MatchResponse, PreviewRequest,
    PreviewResponse, SuggestedColor,
};
pub use color::Rgb;
pub use config::Config;
pub use error::{PaintError, Result};
pub use preview::PreviewOptions;

use clap::{Parser, Subcommand};
use frostpaint::analysis::DEFAULT_COMPLEMENTS;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "frostpaint")]
#[command(author = "MrMattias")]
#[command(version)]
#[command(about = "Wall color detection, paint matching and recolor previews")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Detect dominant colors in images (files or directories)
    Detect {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Render a recolored preview of a photo
    Preview {
        /// Path to the room photo
        path: PathBuf,
        /// Paint color as #rrggbb
        color: String,
        /// Overlay strength (1.0 = reference)
        #[arg(short, long, default_value = "1.0")]
        intensity: f32,
        /// Paint less over edges and creases
        #[arg(long)]
        shadow_tracking: bool,
        #[arg(long = "vision360")]
        vision_360: bool,
        /// Plain source-over blend instead of overlay
        #[arg(long)]
        flat_blend: bool,
        #[arg(long, default_value = "matte")]
        finish: String,
        #[arg(long, default_value = "natural")]
        lighting: String,
        /// Write the JPEG here instead of printing a data URI
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Similar colors and brand products for a color
    Matches {
        /// Color as #rrggbb
        color: String,
        /// Include rgb() strings in the output
        #[arg(long)]
        rgb: bool,
    },
    /// Evenly spaced complementary hues
    Complement {
        color: String,
        #[arg(short = 'n', long, default_value_t = DEFAULT_COMPLEMENTS)]
        count: usize,
    },
    /// Cluster an image into a weighted palette
    Extract {
        path: PathBuf,
        /// Number of clusters (defaults to config)
        #[arg(short)]
        k: Option<usize>,
        /// Append the classic curated paint colors
        #[arg(long)]
        curated: bool,
    },
    /// List the curated palettes
    Palettes,
    /// Show config path and effective values
    Config,
}

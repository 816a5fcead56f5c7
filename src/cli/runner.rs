use anyhow::Result;
use clap::Parser;
use frostpaint::{AnalysisService, Config, PreviewOptions};

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::utils::expand_tilde;

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_path) = match &cli.config {
        Some(path) => {
            let path = expand_tilde(path);
            (Config::load_from(&path)?, path)
        }
        None => {
            let config = Config::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not load config, using defaults");
                Config::default()
            });
            (config, Config::config_path())
        }
    };
    let service = AnalysisService::new(&config);

    match cli.command {
        Commands::Detect { paths } => {
            cmd_detect(service, &paths).await?;
        }
        Commands::Preview {
            path,
            color,
            intensity,
            shadow_tracking,
            vision_360,
            flat_blend,
            finish,
            lighting,
            output,
        } => {
            let options = PreviewOptions {
                intensity,
                shadow_tracking,
                vision_360,
                realistic_blending: !flat_blend,
                finish,
                lighting,
            };
            cmd_preview(&service, &path, &color, options, output.as_deref())?;
        }
        Commands::Matches { color, rgb } => {
            cmd_matches(&service, &color, rgb)?;
        }
        Commands::Complement { color, count } => {
            cmd_complement(&service, &color, count)?;
        }
        Commands::Extract { path, k, curated } => {
            cmd_extract(&service, &path, k.unwrap_or(service.cluster_count()), curated)?;
        }
        Commands::Palettes => {
            cmd_palettes();
        }
        Commands::Config => {
            cmd_config(&config, &config_path)?;
        }
    }

    Ok(())
}

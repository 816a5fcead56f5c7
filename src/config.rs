use crate::clusters::DEFAULT_CLUSTERS;
use crate::enrichment::CosmeticPicker;
use crate::preview::{PreviewCompositor, BASE_ALPHA, JPEG_QUALITY};
use crate::sampler::{RegionSampler, DEFAULT_NUM_COLORS, WORKING_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    #[serde(default)]
    pub clusters: ClusterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Working resolution the image is cover-fitted to before sampling
    #[serde(default = "default_working_size")]
    pub working_width: u32,
    #[serde(default = "default_working_size")]
    pub working_height: u32,
    /// Dominant colors returned by detect (at most 6)
    #[serde(default = "default_num_colors")]
    pub num_colors: usize,
}

fn default_working_size() -> u32 {
    WORKING_SIZE
}

fn default_num_colors() -> usize {
    DEFAULT_NUM_COLORS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    #[serde(default = "default_sharpen_sigma")]
    pub sharpen_sigma: f32,
    #[serde(default = "default_sharpen_threshold")]
    pub sharpen_threshold: i32,
    /// Overlay alpha at intensity 1.0 (0-255)
    #[serde(default = "default_base_alpha")]
    pub base_alpha: f32,
}

fn default_jpeg_quality() -> u8 {
    JPEG_QUALITY
}

fn default_sharpen_sigma() -> f32 {
    0.5
}

fn default_sharpen_threshold() -> i32 {
    1
}

fn default_base_alpha() -> f32 {
    BASE_ALPHA
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnrichmentConfig {
    /// Mixed into the per-color seed; change it to reshuffle room/mood picks
    #[serde(default)]
    pub salt: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default = "default_cluster_count")]
    pub count: usize,
}

fn default_cluster_count() -> usize {
    DEFAULT_CLUSTERS
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            working_width: WORKING_SIZE,
            working_height: WORKING_SIZE,
            num_colors: DEFAULT_NUM_COLORS,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: JPEG_QUALITY,
            sharpen_sigma: default_sharpen_sigma(),
            sharpen_threshold: default_sharpen_threshold(),
            base_alpha: BASE_ALPHA,
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_CLUSTERS,
        }
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mrmattias", "frostpaint")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config from the default location, creating it if missing.
    /// A malformed file is left untouched and defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::config_path())
    }

    fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match toml::from_str::<Config>(&data) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Ok(Config::default())
            }
        }
    }

    /// Load config from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&data).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)?;

        Ok(())
    }

    pub fn sampler(&self) -> RegionSampler {
        RegionSampler::new(self.sampling.working_width, self.sampling.working_height)
    }

    pub fn compositor(&self) -> PreviewCompositor {
        PreviewCompositor::new(
            self.preview.base_alpha,
            self.preview.jpeg_quality,
            self.preview.sharpen_sigma,
            self.preview.sharpen_threshold,
        )
    }

    pub fn picker(&self) -> CosmeticPicker {
        CosmeticPicker::new(self.enrichment.salt)
    }
}

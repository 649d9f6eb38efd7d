// TOML config adapter - Configuration loaded from an optional TOML file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::rules::{ThumbnailPolicy, TrimEstimator, DEFAULT_TRIM_FRACTION};
use crate::error::{PrepError, PrepResult};

/// Soft size budget for encoded videos
pub const DEFAULT_SIZE_BUDGET_BYTES: u64 = 1024 * 1024;

/// Complete tool configuration. Every field has a default so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PrepConfig {
    pub paths: PathsConfig,
    pub tools: ToolsConfig,
    pub encode: EncodeConfig,
    pub thumbnail: ThumbnailConfig,
    pub trim: TrimConfig,
}

/// Directory layout relative to the project root, plus public URL prefixes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub thumbnails_dir: PathBuf,
    pub manifest: PathBuf,
    pub processed_url: String,
    pub thumbnails_url: String,
    /// Accepted input extensions, matched case-insensitively
    pub extensions: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("public/signs/raw"),
            processed_dir: PathBuf::from("public/signs/processed"),
            thumbnails_dir: PathBuf::from("public/signs/thumbnails"),
            manifest: PathBuf::from("public/signs/manifest.json"),
            processed_url: "/signs/processed".to_string(),
            thumbnails_url: "/signs/thumbnails".to_string(),
            extensions: vec!["mov".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

/// Settings shared by both video encodes plus the per-format codec settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeConfig {
    pub height: u32,
    pub fps: u32,
    pub size_budget_bytes: u64,
    pub mp4: Mp4Config,
    pub webm: WebmConfig,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            height: 720,
            fps: 24,
            size_budget_bytes: DEFAULT_SIZE_BUDGET_BYTES,
            mp4: Mp4Config::default(),
            webm: WebmConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Mp4Config {
    pub codec: String,
    pub preset: String,
    pub crf: u8,
}

impl Default for Mp4Config {
    fn default() -> Self {
        Self {
            codec: "libx264".to_string(),
            preset: "veryfast".to_string(),
            crf: 23,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebmConfig {
    pub codec: String,
    pub crf: u8,
}

impl Default for WebmConfig {
    fn default() -> Self {
        Self {
            codec: "libvpx-vp9".to_string(),
            crf: 33,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailConfig {
    pub height: u32,
    pub default_timestamp: f64,
    pub offset: f64,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        let policy = ThumbnailPolicy::default();
        Self {
            height: 360,
            default_timestamp: policy.default_timestamp,
            offset: policy.offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrimConfig {
    pub fraction: f64,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_TRIM_FRACTION,
        }
    }
}

impl PrepConfig {
    /// Load a config file, falling back to defaults for absent keys
    pub fn load(path: &Path) -> PrepResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| PrepError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| PrepError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check values that would produce nonsensical tool arguments
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.encode.height == 0 || self.thumbnail.height == 0 {
            return Err(DomainError::InvalidSetting(
                "output heights must be positive".to_string(),
            ));
        }
        if self.encode.fps == 0 {
            return Err(DomainError::InvalidSetting(
                "frame rate must be positive".to_string(),
            ));
        }
        if self.encode.mp4.crf > 51 {
            return Err(DomainError::InvalidSetting(
                "mp4 crf cannot exceed 51".to_string(),
            ));
        }
        if self.encode.webm.crf > 63 {
            return Err(DomainError::InvalidSetting(
                "webm crf cannot exceed 63".to_string(),
            ));
        }
        if self.paths.extensions.is_empty() {
            return Err(DomainError::InvalidSetting(
                "at least one input extension is required".to_string(),
            ));
        }
        self.trim_estimator()?;
        self.thumbnail_policy()?;
        Ok(())
    }

    pub fn trim_estimator(&self) -> Result<TrimEstimator, DomainError> {
        TrimEstimator::new(self.trim.fraction)
    }

    pub fn thumbnail_policy(&self) -> Result<ThumbnailPolicy, DomainError> {
        ThumbnailPolicy::new(self.thumbnail.offset, self.thumbnail.default_timestamp)
    }
}

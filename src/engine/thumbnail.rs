//! Still-frame extraction

use std::path::Path;

use crate::adapters::toml_config::PrepConfig;
use crate::ports::ToolInvocation;
use crate::utils::Utils;

/// Builds the ffmpeg invocation that grabs one scaled PNG frame
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailExtractor {
    ffmpeg: String,
    height: u32,
}

impl ThumbnailExtractor {
    pub fn new(ffmpeg: impl Into<String>, height: u32) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            height,
        }
    }

    pub fn from_config(config: &PrepConfig) -> Self {
        Self::new(&config.tools.ffmpeg, config.thumbnail.height)
    }

    /// Seek happens before `-i` so ffmpeg jumps straight to the timestamp
    pub fn invocation(&self, input: &Path, output: &Path, timestamp: f64) -> ToolInvocation {
        ToolInvocation::new(&self.ffmpeg)
            .arg("-y")
            .arg("-ss")
            .arg(Utils::format_seconds(timestamp))
            .arg("-i")
            .path_arg(input)
            .arg("-vf")
            .arg(format!("scale=-2:{}", self.height))
            .args(["-vframes", "1"])
            .path_arg(output)
    }
}

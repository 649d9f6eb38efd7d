// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use crate::domain::errors::DomainError;

/// A raw input clip found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceClip {
    pub path: PathBuf,
    /// Lowercased file stem, used for output names and manifest keys
    pub identifier: String,
}

impl SourceClip {
    /// Create a clip from its path, deriving the identifier from the file stem
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_lowercase())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| DomainError::InvalidClipPath(path.display().to_string()))?;

        Ok(Self {
            path,
            identifier: stem,
        })
    }

    /// File name for display purposes
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Start/end offsets in seconds applied before encoding.
///
/// `(0.0, 0.0)` means no trim. Each bound is only applied when it is
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrimWindow {
    pub start: f64,
    pub end: f64,
}

impl TrimWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Window that leaves the clip untouched
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_trimmed(&self) -> bool {
        self.start > 0.0 || self.end > 0.0
    }

    pub fn start_bound(&self) -> Option<f64> {
        (self.start > 0.0).then_some(self.start)
    }

    pub fn end_bound(&self) -> Option<f64> {
        (self.end > 0.0).then_some(self.end)
    }
}

impl fmt::Display for TrimWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s to {:.2}s", self.start, self.end)
    }
}

/// The three derivatives produced per clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// H.264 in an MP4 container
    PrimaryVideo,
    /// VP9 in a WebM container
    SecondaryVideo,
    /// Single PNG frame
    Thumbnail,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::PrimaryVideo,
        ArtifactKind::SecondaryVideo,
        ArtifactKind::Thumbnail,
    ];

    /// Output file extension
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::PrimaryVideo => "mp4",
            ArtifactKind::SecondaryVideo => "webm",
            ArtifactKind::Thumbnail => "png",
        }
    }

    /// Human-readable label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::PrimaryVideo => "MP4",
            ArtifactKind::SecondaryVideo => "WebM",
            ArtifactKind::Thumbnail => "Thumbnail",
        }
    }

    pub fn is_video(&self) -> bool {
        !matches!(self, ArtifactKind::Thumbnail)
    }

    /// Output file name for a clip identifier
    pub fn file_name(&self, identifier: &str) -> String {
        format!("{}.{}", identifier, self.extension())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of producing one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactResult {
    pub path: PathBuf,
    pub success: bool,
    /// Size in bytes, zero unless `success`
    pub size: u64,
}

impl ArtifactResult {
    pub fn succeeded(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            success: true,
            size,
        }
    }

    pub fn failed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            success: false,
            size: 0,
        }
    }
}

/// Everything produced for one clip
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    pub identifier: String,
    pub input: PathBuf,
    pub primary: ArtifactResult,
    pub secondary: ArtifactResult,
    pub thumbnail: ArtifactResult,
}

impl ProcessingResult {
    pub fn new(
        clip: &SourceClip,
        primary: ArtifactResult,
        secondary: ArtifactResult,
        thumbnail: ArtifactResult,
    ) -> Self {
        Self {
            identifier: clip.identifier.clone(),
            input: clip.path.clone(),
            primary,
            secondary,
            thumbnail,
        }
    }

    pub fn artifact(&self, kind: ArtifactKind) -> &ArtifactResult {
        match kind {
            ArtifactKind::PrimaryVideo => &self.primary,
            ArtifactKind::SecondaryVideo => &self.secondary,
            ArtifactKind::Thumbnail => &self.thumbnail,
        }
    }

    /// At least one of the two video encodes succeeded
    pub fn has_video(&self) -> bool {
        self.primary.success || self.secondary.success
    }
}
